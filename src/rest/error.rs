// rest/error.rs — Uniform error surface of the gateway.
//
// Two classes only. Structural validation failures carry the framework's
// status (422 for shape violations) and name the offending field. Everything
// past validation — client construction, transport, any Todoist rejection —
// collapses into one RemoteOperationFailed kind rendered as HTTP 500. The
// collapse is part of the contract; the wrapped description keeps enough
// information for a finer mapping to be added later without changing shape.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::warn;

/// Everything a handler can answer with besides a success payload.
/// Rendered as `{"detail": "<description>"}` plus the matching status.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Request body failed structural validation (malformed JSON, missing
    /// field, wrong primitive type). Raised before any remote call.
    #[error("{detail}")]
    InvalidRequest { status: StatusCode, detail: String },
    /// Client construction or the remote call failed, for any reason.
    /// Transient and permanent failures are indistinguishable here and
    /// nothing is retried.
    #[error("{0}")]
    RemoteOperationFailed(String),
}

impl From<JsonRejection> for GatewayError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidRequest {
            status: rejection.status(),
            detail: rejection.body_text(),
        }
    }
}

/// The collapse point: any error propagated out of a dispatch handler with
/// `?` becomes a remote-operation failure carrying the rendered cause chain.
impl From<anyhow::Error> for GatewayError {
    fn from(err: anyhow::Error) -> Self {
        Self::RemoteOperationFailed(format!("{err:#}"))
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidRequest { status, .. } => *status,
            Self::RemoteOperationFailed(detail) => {
                warn!(%detail, "remote operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
