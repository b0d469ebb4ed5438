// rest/routes/projects.rs — Project and section routes.

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use std::sync::Arc;

use crate::rest::error::GatewayError;
use crate::rest::schema::{Credential, ProjectCreateRequest, ProjectLookupRequest, ValidJson};
use crate::AppContext;

/// `POST /get_projects/` — list every project for the credential's account.
pub async fn get_projects(
    State(ctx): State<Arc<AppContext>>,
    ValidJson(req): ValidJson<Credential>,
) -> Result<Json<Value>, GatewayError> {
    let api = ctx.connector.connect(&req.api_key)?;
    let projects = api.get_projects().await?;
    Ok(Json(projects))
}

/// `POST /add_project/` — create one project; echoes Todoist's created object.
pub async fn add_project(
    State(ctx): State<Arc<AppContext>>,
    ValidJson(req): ValidJson<ProjectCreateRequest>,
) -> Result<Json<Value>, GatewayError> {
    let api = ctx.connector.connect(&req.api_key)?;
    let project = api.add_project(&req.name).await?;
    Ok(Json(project))
}

/// `POST /get_project/` — fetch one project by id. Whether the id exists or
/// belongs to the caller is Todoist's call; its rejection surfaces as-is.
pub async fn get_project(
    State(ctx): State<Arc<AppContext>>,
    ValidJson(req): ValidJson<ProjectLookupRequest>,
) -> Result<Json<Value>, GatewayError> {
    let api = ctx.connector.connect(&req.api_key)?;
    let project = api.get_project(&req.project_id).await?;
    Ok(Json(project))
}

/// `POST /get_sections/` — list the sections of a project.
pub async fn get_sections(
    State(ctx): State<Arc<AppContext>>,
    ValidJson(req): ValidJson<ProjectLookupRequest>,
) -> Result<Json<Value>, GatewayError> {
    let api = ctx.connector.connect(&req.api_key)?;
    let sections = api.get_sections(&req.project_id).await?;
    Ok(Json(sections))
}
