mod health;
mod swagger;
mod users;

use health::health_checker_handler;
use tower_http::trace::TraceLayer;

use crate::AppState;

use axum::{routing::get, Router};
use std::sync::Arc;

/// Builds the application router over the given shared state.
pub fn make_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_checker_handler))
        .nest("/users", users::user_routes())
        .merge(swagger::build_documentation())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
