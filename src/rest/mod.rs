// rest/mod.rs — The gateway's HTTP surface.
//
// Axum server exposing the nine Todoist operations as POST endpoints with
// JSON bodies, plus a health probe. Paths mirror the service contract:
//
//   POST /get_tasks/      POST /get_projects/
//   POST /add_task/       POST /add_project/
//   POST /update_task/    POST /get_project/
//   POST /close_task/     POST /get_sections/
//   POST /reopen_task/
//   GET  /health

pub mod error;
pub mod routes;
pub mod schema;

use anyhow::Result;
use axum::routing::{get, post};
use axum::Router;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::AppContext;

pub async fn start_rest_server(ctx: Arc<AppContext>) -> Result<()> {
    let bind = format!("{}:{}", ctx.config.bind_address, ctx.config.port);
    let addr: SocketAddr = bind.parse()?;

    let router = build_router(ctx);

    info!("task gateway listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

pub fn build_router(ctx: Arc<AppContext>) -> Router {
    Router::new()
        // Health (no body)
        .route("/health", get(routes::health::health))
        // Tasks
        .route("/get_tasks/", post(routes::tasks::get_tasks))
        .route("/add_task/", post(routes::tasks::add_task))
        .route("/update_task/", post(routes::tasks::update_task))
        .route("/close_task/", post(routes::tasks::close_task))
        .route("/reopen_task/", post(routes::tasks::reopen_task))
        // Projects
        .route("/get_projects/", post(routes::projects::get_projects))
        .route("/add_project/", post(routes::projects::add_project))
        .route("/get_project/", post(routes::projects::get_project))
        .route("/get_sections/", post(routes::projects::get_sections))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(ctx)
}

/// Resolves when a shutdown signal is received.
///
/// On Unix we listen for SIGTERM *and* Ctrl-C.
/// On other platforms we listen for Ctrl-C only.
async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};
        let mut sigterm = signal(SignalKind::terminate()).expect("failed to register SIGTERM");
        tokio::select! {
            _ = tokio::signal::ctrl_c() => {}
            _ = sigterm.recv() => {}
        }
    }
    #[cfg(not(unix))]
    {
        tokio::signal::ctrl_c().await.ok();
    }
}
