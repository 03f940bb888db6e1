use crate::error::{ApiError, ErrorResponse};
use crate::models::EntryResponse;
use crate::routes;
use crate::state::AppState;
use crate::store::StoreError;
use axum::{extract::Path, extract::State, http::StatusCode, Json};

/// GET /entry/{key} handler - Retrieve an entry
#[utoipa::path(
    get,
    path = routes::ENTRY_ITEM,
    params(
        ("key" = String, Path, description = "URL-encoded entry key")
    ),
    responses(
        (status = 200, description = "Entry found", body = EntryResponse),
        (status = 404, description = "Key not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "entry"
)]
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<(StatusCode, Json<EntryResponse>), ApiError> {
    match state.store.get(key).await {
        Ok(entry) => {
            tracing::info!("Successfully retrieved entry with key: {}", entry.key);
            Ok((StatusCode::OK, Json(entry.into())))
        }
        Err(StoreError::NotFound(key)) => {
            tracing::info!("Entry not found with key: {}", key);
            Err(ApiError::KeyNotFound(key))
        }
        Err(err) => Err(err.into()),
    }
}
