// src/server.rs

//! HTTP control surface: five plain-text endpoints, one per action.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::Router;
use axum::extract::State;
use axum::routing::get;
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::exec::{Action, Dispatcher};

/// Shared state for the HTTP handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub dispatcher: Arc<Dispatcher>,
}

/// Build the control-surface router.
///
/// Every endpoint accepts both GET and POST with the same handler; the
/// response is always 200 with the action's status text as a plain-text
/// body. That body is the entire contract — no JSON, no auth.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/build", get(build).post(build))
        .route("/test", get(test).post(test))
        .route("/run", get(run).post(run))
        .route("/start", get(start).post(start))
        .route("/serve", get(serve).post(serve))
        .with_state(state)
}

/// Bind the control surface and serve it until Ctrl-C.
pub async fn serve_control(state: Arc<AppState>, port: u16) -> Result<()> {
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding control surface to {addr}"))?;

    info!("control surface listening on http://{addr}");

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving control surface")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        eprintln!("watchnpm: failed to listen for Ctrl+C: {err}");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}

async fn trigger(state: &AppState, action: Action) -> String {
    let result = state.dispatcher.trigger(action).await;
    if result.is_failure() {
        warn!(action = %action, status = %result.status_text(), "HTTP trigger failed");
    }
    result.status_text()
}

async fn build(State(state): State<Arc<AppState>>) -> String {
    trigger(&state, Action::Build).await
}

async fn test(State(state): State<Arc<AppState>>) -> String {
    trigger(&state, Action::Test).await
}

async fn run(State(state): State<Arc<AppState>>) -> String {
    trigger(&state, Action::Run).await
}

async fn start(State(state): State<Arc<AppState>>) -> String {
    trigger(&state, Action::Start).await
}

async fn serve(State(state): State<Arc<AppState>>) -> String {
    trigger(&state, Action::Serve).await
}
