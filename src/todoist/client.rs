// SPDX-License-Identifier: MIT
//! reqwest-backed Todoist REST v2 client.
//!
//! One `RestClient` is built per inbound request, bound to that request's
//! credential, used for exactly one call, then dropped. `RestConnector`
//! carries only process configuration (base URL, timeout) and is the piece
//! that lives in `AppContext`.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde_json::{json, Value};
use tracing::debug;

use crate::config::GatewayConfig;

use super::types::{NewTask, TaskUpdate};
use super::{TodoistApi, TodoistConnector};

/// Errors produced by the REST client. They all collapse into the same
/// gateway response at the dispatch boundary; the split exists for the
/// message each case renders and for logs.
#[derive(Debug, thiserror::Error)]
pub enum TodoistError {
    /// The supplied token cannot be carried in an Authorization header.
    #[error("invalid API token: {0}")]
    Token(#[from] reqwest::header::InvalidHeaderValue),
    /// Connect, TLS, timeout, or body-decoding failure.
    #[error("todoist request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// Todoist answered with a non-success status.
    #[error("todoist replied {status}: {message}")]
    Api { status: StatusCode, message: String },
}

// ─── Connector ────────────────────────────────────────────────────────────────

/// Factory for per-request client handles. Holds no credential and no
/// connection state — each `connect` builds a fresh client.
#[derive(Debug, Clone)]
pub struct RestConnector {
    base_url: String,
    timeout: std::time::Duration,
}

impl RestConnector {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            timeout: std::time::Duration::from_secs(config.request_timeout_secs),
        }
    }
}

impl TodoistConnector for RestConnector {
    fn connect(&self, token: &str) -> Result<Box<dyn TodoistApi>> {
        let client = RestClient::new(&self.base_url, self.timeout, token)?;
        Ok(Box::new(client))
    }
}

// ─── Client ───────────────────────────────────────────────────────────────────

/// One credential-scoped handle to the Todoist REST API.
pub struct RestClient {
    http: reqwest::Client,
    base_url: String,
}

impl RestClient {
    fn new(
        base_url: &str,
        timeout: std::time::Duration,
        token: &str,
    ) -> Result<Self, TodoistError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {token}"))?;
        // Keep the credential out of anything that formats the headers.
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let http = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.to_string(),
        })
    }

    /// Issue one request and hand the response back if Todoist accepted it.
    /// Non-success statuses become `TodoistError::Api` carrying the response
    /// body, which is where Todoist puts its human-readable reason.
    async fn call(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<reqwest::Response, TodoistError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%method, %url, "todoist call");

        let mut req = self.http.request(method, &url);
        if !query.is_empty() {
            req = req.query(query);
        }
        if let Some(body) = body {
            req = req.json(&body);
        }

        let resp = req.send().await?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }

        let body = resp.text().await.unwrap_or_default();
        let message = if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("request rejected")
                .to_string()
        } else {
            body
        };
        Err(TodoistError::Api { status, message })
    }

    async fn call_json(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, &str)],
        body: Option<Value>,
    ) -> Result<Value, TodoistError> {
        let resp = self.call(method, path, query, body).await?;
        Ok(resp.json().await?)
    }

    /// For the flag operations Todoist signals success purely via status.
    async fn call_flag(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<bool, TodoistError> {
        self.call(method, path, &[], body).await?;
        Ok(true)
    }
}

#[async_trait]
impl TodoistApi for RestClient {
    async fn get_tasks(&self) -> Result<Value> {
        Ok(self.call_json(Method::GET, "tasks", &[], None).await?)
    }

    async fn add_task(&self, task: &NewTask) -> Result<Value> {
        let body = serde_json::to_value(task)?;
        Ok(self
            .call_json(Method::POST, "tasks", &[], Some(body))
            .await?)
    }

    async fn update_task(&self, task_id: &str, update: &TaskUpdate) -> Result<bool> {
        let body = serde_json::to_value(update)?;
        Ok(self
            .call_flag(Method::POST, &format!("tasks/{task_id}"), Some(body))
            .await?)
    }

    async fn close_task(&self, task_id: &str) -> Result<bool> {
        Ok(self
            .call_flag(Method::POST, &format!("tasks/{task_id}/close"), None)
            .await?)
    }

    async fn reopen_task(&self, task_id: &str) -> Result<bool> {
        Ok(self
            .call_flag(Method::POST, &format!("tasks/{task_id}/reopen"), None)
            .await?)
    }

    async fn get_projects(&self) -> Result<Value> {
        Ok(self.call_json(Method::GET, "projects", &[], None).await?)
    }

    async fn add_project(&self, name: &str) -> Result<Value> {
        Ok(self
            .call_json(Method::POST, "projects", &[], Some(json!({ "name": name })))
            .await?)
    }

    async fn get_project(&self, project_id: &str) -> Result<Value> {
        Ok(self
            .call_json(Method::GET, &format!("projects/{project_id}"), &[], None)
            .await?)
    }

    async fn get_sections(&self, project_id: &str) -> Result<Value> {
        Ok(self
            .call_json(Method::GET, "sections", &[("project_id", project_id)], None)
            .await?)
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────
