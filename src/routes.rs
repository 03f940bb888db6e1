// Route path constants - single source of truth for all API paths

use axum::{routing::get, routing::post, Router};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub const INDEX: &str = "/";
pub const HEALTH: &str = "/health";
pub const ENTRY_COLLECTION: &str = "/entry";
pub const ENTRY_ITEM: &str = "/entry/{key}";
pub const OPENAPI_JSON: &str = "/api-docs/openapi.json";

/// Build the full application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route(INDEX, get(handlers::index_handler))
        .route(HEALTH, get(handlers::health_handler))
        .route(ENTRY_COLLECTION, post(handlers::create_handler))
        .route(
            ENTRY_ITEM,
            get(handlers::get_handler).delete(handlers::delete_handler),
        )
        .route(OPENAPI_JSON, get(handlers::openapi_handler))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
