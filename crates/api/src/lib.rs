//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes over the change-making engine
//! - Error-to-response mapping
//!
//! Handlers only read the request, call into `changemaker_core` and
//! serialize the result.

pub mod routes;

use axum::Router;
use changemaker_core::CurrencyConfigLoader;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Resolver for currency configuration documents.
    pub loader: Arc<CurrencyConfigLoader>,
}

impl AppState {
    /// Creates state reading currency documents through `loader`.
    pub fn new(loader: CurrencyConfigLoader) -> Self {
        Self {
            loader: Arc::new(loader),
        }
    }
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
