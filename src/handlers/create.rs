use crate::error::{ApiError, ErrorResponse};
use crate::models::{CreateEntryRequest, EntryResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::StoreError;
use axum::{body::Bytes, extract::State, http::StatusCode, Json};

/// POST /entry handler - Create a new entry
///
/// The body is parsed here rather than by the `Json` extractor so that every
/// malformed body, whatever its content type, becomes a 400 `malformed_request`.
#[utoipa::path(
    post,
    path = routes::ENTRY_COLLECTION,
    request_body = CreateEntryRequest,
    responses(
        (status = 201, description = "Entry created", body = EntryResponse),
        (status = 400, description = "Malformed body, empty key or duplicate key", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "entry"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<EntryResponse>), ApiError> {
    let request: CreateEntryRequest = serde_json::from_slice(&body)?;

    if request.key.is_empty() {
        return Err(ApiError::InvalidKey);
    }

    match state.store.create(request.key, request.value).await {
        Ok(entry) => {
            tracing::info!("Created entry with key: {}", entry.key);
            Ok((StatusCode::CREATED, Json(entry.into())))
        }
        Err(StoreError::DuplicateKey(key)) => {
            tracing::warn!("Rejected create for existing key: {}", key);
            Err(ApiError::DuplicateKey(key))
        }
        Err(err) => Err(err.into()),
    }
}
