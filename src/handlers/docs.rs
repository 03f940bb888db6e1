use crate::api_doc::ApiDoc;
use axum::Json;
use utoipa::OpenApi;

/// GET /api-docs/openapi.json handler - Machine-readable API description
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use crate::test_support::{body_json, setup_test_app};
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_openapi_lists_entry_routes() {
        let (_dir, app) = setup_test_app().await;

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/api-docs/openapi.json")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let doc: serde_json::Value = body_json(response).await;
        let paths = doc["paths"].as_object().unwrap();
        assert!(paths.contains_key("/entry"));
        assert!(paths["/entry/{key}"].get("get").is_some());
        assert!(paths["/entry/{key}"].get("delete").is_some());
        assert!(paths.contains_key("/health"));
    }
}
