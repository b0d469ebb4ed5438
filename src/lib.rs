pub mod config;
pub mod rest;
pub mod todoist;

use std::sync::Arc;

use config::GatewayConfig;
use todoist::TodoistConnector;

/// Shared application state handed to every request handler.
///
/// Holds no per-request data and nothing mutable: the gateway
/// re-authenticates every request from the credential in its body, so there
/// is no session state, no client cache, and nothing for concurrent requests
/// to contend on.
#[derive(Clone)]
pub struct AppContext {
    pub config: Arc<GatewayConfig>,
    /// Builds the per-request Todoist client from the caller's credential.
    pub connector: Arc<dyn TodoistConnector>,
    pub started_at: std::time::Instant,
}
