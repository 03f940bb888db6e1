use utoipa::OpenApi;

use crate::error::{ErrorResponse, HealthResponse, UnhealthyResponse};
use crate::handlers;
use crate::models::{CreateEntryRequest, EntryResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "entry-kv API",
        version = "1.0.0",
        description = "A persistent string key-value store backed by SQLite"
    ),
    paths(
        handlers::index::index_handler,
        handlers::health::health_handler,
        handlers::create::create_handler,
        handlers::get::get_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            CreateEntryRequest,
            EntryResponse,
            ErrorResponse,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "meta", description = "Landing page"),
        (name = "health", description = "Health check operations"),
        (name = "entry", description = "Entry create, read and delete")
    )
)]
pub struct ApiDoc;
