//! Task Manager API server.
//!
//! Exposes an in-memory task list over a small REST surface. The store is
//! injected through [`create_state`], so the router can be driven directly in
//! tests without binding a socket.

pub mod api;
pub mod config;
pub mod error;
pub mod state;

use std::sync::Arc;

use axum::Router;
use task_store::TaskStore;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::Config;
use crate::state::{AppState, SharedState};

/// Creates the application router with all routes configured.
pub fn create_app<S: TaskStore + 'static>(state: SharedState<S>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    api::create_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Creates the application state with the given configuration and store.
pub fn create_state<S: TaskStore>(config: Config, store: S) -> SharedState<S> {
    Arc::new(AppState::new(config, store))
}

/// Initializes tracing with the given log level.
///
/// `RUST_LOG` takes precedence when set.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
