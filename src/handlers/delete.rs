use crate::error::{ApiError, ErrorResponse};
use crate::routes;
use crate::state::AppState;
use crate::store::StoreError;
use axum::{extract::Path, extract::State, http::StatusCode};

/// DELETE /entry/{key} handler - Remove an entry
#[utoipa::path(
    delete,
    path = routes::ENTRY_ITEM,
    params(
        ("key" = String, Path, description = "URL-encoded entry key")
    ),
    responses(
        (status = 204, description = "Entry deleted"),
        (status = 404, description = "Key not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    ),
    tag = "entry"
)]
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<StatusCode, ApiError> {
    match state.store.delete(key).await {
        Ok(()) => Ok(StatusCode::NO_CONTENT),
        Err(StoreError::NotFound(key)) => {
            tracing::info!("Delete of missing key: {}", key);
            Err(ApiError::KeyNotFound(key))
        }
        Err(err) => Err(err.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::EntryResponse;
    use crate::test_support::{body_json, delete_entry, get_entry, post_entry, setup_test_app};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_delete_existing_entry() {
        let (_dir, app) = setup_test_app().await;

        let created = app.clone().oneshot(post_entry("1", "2")).await.unwrap();
        assert_eq!(created.status(), StatusCode::CREATED);

        let response = app.clone().oneshot(delete_entry("1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(body.is_empty());

        let response = app.oneshot(get_entry("1")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_missing_entry() {
        let (_dir, app) = setup_test_app().await;

        let response = app.oneshot(delete_entry("never-created")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let error_response: ErrorResponse = body_json(response).await;
        assert_eq!(error_response.code, "not_found");
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (_dir, app) = setup_test_app().await;

        app.clone().oneshot(post_entry("twice", "v")).await.unwrap();

        let first = app.clone().oneshot(delete_entry("twice")).await.unwrap();
        assert_eq!(first.status(), StatusCode::NO_CONTENT);

        let second = app.oneshot(delete_entry("twice")).await.unwrap();
        assert_eq!(second.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_unicode_key_leaves_others() {
        let (_dir, app) = setup_test_app().await;

        app.clone().oneshot(post_entry("😀", "a")).await.unwrap();
        app.clone().oneshot(post_entry("other", "b")).await.unwrap();

        let response = app.clone().oneshot(delete_entry("😀")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = app.oneshot(get_entry("other")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let entry: EntryResponse = body_json(response).await;
        assert_eq!(entry.value, "b");
    }
}
