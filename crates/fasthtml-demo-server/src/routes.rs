// ABOUTME: Route table for the fasthtml-demo HTTP server.
// ABOUTME: Assembles page and fragment handlers into a single Axum Router.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::app_state::SharedState;
use crate::web;

/// Build the complete Axum router with all routes and shared state.
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/", get(web::index))
        .route("/increment", post(web::increment))
        .route("/add-todo", post(web::add_todo))
        .route("/system-info", get(web::system_info))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
