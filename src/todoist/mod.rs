// SPDX-License-Identifier: MIT
//! Todoist remote capability.
//!
//! The gateway never interprets Todoist payloads — tasks, projects, and
//! sections flow through as raw JSON. `TodoistApi` is the seam between the
//! dispatch layer and the wire: every handler makes exactly one call per
//! request, and tests substitute a stub backend behind the same trait.
//!
//! A client handle is scoped to a single request's credential.
//! `TodoistConnector` builds one handle per request and nothing retains it
//! afterwards; there is no pool or cache keyed by credential.

pub mod client;
pub mod types;

pub use client::{RestConnector, TodoistError};

use anyhow::Result;
use async_trait::async_trait;
use serde_json::Value;

use types::{NewTask, TaskUpdate};

/// Common interface to the Todoist operations the gateway fronts.
///
/// Object and list operations return the upstream JSON verbatim; the
/// mutating task operations report a bare success flag.
#[async_trait]
pub trait TodoistApi: Send + Sync {
    /// Fetch every active task visible to the credential.
    async fn get_tasks(&self) -> Result<Value>;

    /// Create a task and return it as Todoist describes it.
    async fn add_task(&self, task: &NewTask) -> Result<Value>;

    /// Rewrite the content, description, and priority of an existing task.
    async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> Result<bool>;

    /// Mark a task complete.
    async fn close_task(&self, task_id: &str) -> Result<bool>;

    /// Restore a previously closed task.
    async fn reopen_task(&self, task_id: &str) -> Result<bool>;

    /// Fetch every project visible to the credential.
    async fn get_projects(&self) -> Result<Value>;

    /// Create a project by name and return it.
    async fn add_project(&self, name: &str) -> Result<Value>;

    /// Fetch a single project by id.
    async fn get_project(&self, project_id: &str) -> Result<Value>;

    /// Fetch the sections of a project.
    async fn get_sections(&self, project_id: &str) -> Result<Value>;
}

/// Builds a per-request client handle from a caller-supplied credential.
///
/// Construction can fail (a token may not be representable as an HTTP
/// header); from the caller's point of view that is a remote failure, not a
/// validation failure, and the dispatch layer treats it as one.
pub trait TodoistConnector: Send + Sync {
    fn connect(&self, token: &str) -> Result<Box<dyn TodoistApi>>;
}
