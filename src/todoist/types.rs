// SPDX-License-Identifier: MIT
//! Outbound wire bodies for the Todoist REST API.
//!
//! These mirror what Todoist accepts, nothing more. The caller's credential
//! never appears here — it travels only in the Authorization header of the
//! per-request client handle.

use serde::Serialize;

/// Body of `POST /tasks` — the five creation arguments the gateway forwards.
#[derive(Debug, Clone, Serialize)]
pub struct NewTask {
    pub content: String,
    pub due_string: String,
    pub due_lang: String,
    /// Todoist priority, 1 (normal) to 4 (urgent). Forwarded unvalidated;
    /// Todoist rejects out-of-range values itself.
    pub priority: i64,
    pub description: String,
}

/// Body of `POST /tasks/{id}` — the three fields an update rewrites.
#[derive(Debug, Clone, Serialize)]
pub struct TaskUpdate {
    pub content: String,
    pub description: String,
    pub priority: i64,
}
