// rest/routes/tasks.rs — Task operation routes.
//
// Each handler is one instance of the gateway contract: build a client from
// the request's credential, make exactly one Todoist call, pass the result
// through. `?` routes construction failures and call failures alike into
// the uniform collapse in rest::error.

use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};
use std::sync::Arc;

use crate::rest::error::GatewayError;
use crate::rest::schema::{
    Credential, TaskCreateRequest, TaskIdRequest, TaskUpdateRequest, ValidJson,
};
use crate::todoist::types::{NewTask, TaskUpdate};
use crate::AppContext;

/// `POST /get_tasks/` — list every active task for the credential's account.
pub async fn get_tasks(
    State(ctx): State<Arc<AppContext>>,
    ValidJson(req): ValidJson<Credential>,
) -> Result<Json<Value>, GatewayError> {
    let api = ctx.connector.connect(&req.api_key)?;
    let tasks = api.get_tasks().await?;
    Ok(Json(tasks))
}

/// `POST /add_task/` — create one task; echoes Todoist's created object.
pub async fn add_task(
    State(ctx): State<Arc<AppContext>>,
    ValidJson(req): ValidJson<TaskCreateRequest>,
) -> Result<Json<Value>, GatewayError> {
    let api = ctx.connector.connect(&req.api_key)?;
    let task = api
        .add_task(&NewTask {
            content: req.content,
            due_string: req.due_string,
            due_lang: req.due_lang,
            priority: req.priority,
            description: req.description,
        })
        .await?;
    Ok(Json(task))
}

/// `POST /update_task/` — rewrite content/description/priority of a task.
pub async fn update_task(
    State(ctx): State<Arc<AppContext>>,
    ValidJson(req): ValidJson<TaskUpdateRequest>,
) -> Result<Json<Value>, GatewayError> {
    let api = ctx.connector.connect(&req.api_key)?;
    let success = api
        .update_task(
            &req.task_id,
            &TaskUpdate {
                content: req.content,
                description: req.description,
                priority: req.priority,
            },
        )
        .await?;
    Ok(Json(json!({ "success": success })))
}

/// `POST /close_task/` — mark a task complete. The gateway tracks nothing;
/// repeating the call is between the caller and Todoist.
pub async fn close_task(
    State(ctx): State<Arc<AppContext>>,
    ValidJson(req): ValidJson<TaskIdRequest>,
) -> Result<Json<Value>, GatewayError> {
    let api = ctx.connector.connect(&req.api_key)?;
    let success = api.close_task(&req.task_id).await?;
    Ok(Json(json!({ "success": success })))
}

/// `POST /reopen_task/` — restore a previously closed task.
pub async fn reopen_task(
    State(ctx): State<Arc<AppContext>>,
    ValidJson(req): ValidJson<TaskIdRequest>,
) -> Result<Json<Value>, GatewayError> {
    let api = ctx.connector.connect(&req.api_key)?;
    let success = api.reopen_task(&req.task_id).await?;
    Ok(Json(json!({ "success": success })))
}
