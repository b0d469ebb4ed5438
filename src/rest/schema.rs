// rest/schema.rs — Request shapes accepted by the gateway.
//
// Structural validation only: field presence and primitive types, enforced
// by serde through the ValidJson extractor below. Nothing here judges
// meaning — priority is not range-checked, due_string is not parsed, and
// ids are taken at face value. Todoist is the sole judge of semantics and
// its rejections come back through the dispatch layer's error path.

use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;
use serde::Deserialize;

use super::error::GatewayError;

fn default_due_lang() -> String {
    "en".to_string()
}

fn default_priority() -> i64 {
    4
}

/// Bare credential — the whole body of `/get_tasks/` and `/get_projects/`.
/// Opaque to the gateway: never validated, stored, or logged.
#[derive(Deserialize)]
pub struct Credential {
    pub api_key: String,
}

/// Body of `/add_task/`.
// Debug only in test builds: the struct carries the credential, which must
// stay unformattable in the shipped binary.
#[cfg_attr(test, derive(Debug))]
#[derive(Deserialize)]
pub struct TaskCreateRequest {
    pub api_key: String,
    pub content: String,
    pub due_string: String,
    #[serde(default = "default_due_lang")]
    pub due_lang: String,
    #[serde(default = "default_priority")]
    pub priority: i64,
    pub description: String,
}

/// Body of `/update_task/`.
// Debug only in test builds, as for TaskCreateRequest.
#[cfg_attr(test, derive(Debug))]
#[derive(Deserialize)]
pub struct TaskUpdateRequest {
    pub api_key: String,
    pub task_id: String,
    pub content: String,
    pub description: String,
    #[serde(default = "default_priority")]
    pub priority: i64,
}

/// Body of `/close_task/` and `/reopen_task/` — these operations only ever
/// name a task, so their shape carries nothing else.
#[derive(Deserialize)]
pub struct TaskIdRequest {
    pub api_key: String,
    pub task_id: String,
}

/// Body of `/add_project/`.
#[derive(Deserialize)]
pub struct ProjectCreateRequest {
    pub api_key: String,
    pub name: String,
}

/// Body of `/get_project/` and `/get_sections/`.
#[derive(Deserialize)]
pub struct ProjectLookupRequest {
    pub api_key: String,
    pub project_id: String,
}

// ─── Extractor ────────────────────────────────────────────────────────────────

/// `axum::Json` with the gateway's error shape: a rejected body keeps the
/// framework's validation status (422 for shape violations) but renders as
/// `{"detail": ...}` like every other error this service emits.
pub struct ValidJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = GatewayError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn task_create_applies_defaults() {
        let req: TaskCreateRequest = serde_json::from_value(json!({
            "api_key": "k",
            "content": "Buy milk",
            "due_string": "tomorrow",
            "description": "2%",
        }))
        .unwrap();

        assert_eq!(req.due_lang, "en");
        assert_eq!(req.priority, 4);
    }

    #[test]
    fn task_create_missing_content_names_the_field() {
        let err = serde_json::from_value::<TaskCreateRequest>(json!({
            "api_key": "k",
            "due_string": "tomorrow",
            "description": "2%",
        }))
        .unwrap_err();

        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn task_create_rejects_wrong_primitive_type() {
        let err = serde_json::from_value::<TaskCreateRequest>(json!({
            "api_key": "k",
            "content": 5,
            "due_string": "tomorrow",
            "description": "2%",
        }))
        .unwrap_err();

        assert!(err.to_string().contains("string"));
    }

    #[test]
    fn priority_is_not_range_checked() {
        let req: TaskCreateRequest = serde_json::from_value(json!({
            "api_key": "k",
            "content": "c",
            "due_string": "today",
            "description": "",
            "priority": 99,
        }))
        .unwrap();

        assert_eq!(req.priority, 99);
    }

    #[test]
    fn update_defaults_priority_but_requires_text_fields() {
        let req: TaskUpdateRequest = serde_json::from_value(json!({
            "api_key": "k",
            "task_id": "t1",
            "content": "c",
            "description": "d",
        }))
        .unwrap();
        assert_eq!(req.priority, 4);

        let err = serde_json::from_value::<TaskUpdateRequest>(json!({
            "api_key": "k",
            "task_id": "t1",
            "description": "d",
        }))
        .unwrap_err();
        assert!(err.to_string().contains("content"));
    }

    #[test]
    fn close_shape_needs_only_credential_and_task_id() {
        let req: TaskIdRequest = serde_json::from_value(json!({
            "api_key": "k",
            "task_id": "t1",
        }))
        .unwrap();

        assert_eq!(req.api_key, "k");
        assert_eq!(req.task_id, "t1");
    }
}
