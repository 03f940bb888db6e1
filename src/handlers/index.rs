use crate::routes;
use axum::response::Html;

const INDEX_HTML: &str = include_str!("../../static/index.html");

/// GET / handler - Static landing page
#[utoipa::path(
    get,
    path = routes::INDEX,
    responses(
        (status = 200, description = "Landing page", content_type = "text/html", body = String)
    ),
    tag = "meta"
)]
pub async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[cfg(test)]
mod tests {
    use crate::test_support::setup_test_app;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_index_page() {
        let (_dir, app) = setup_test_app().await;

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers()["content-type"].to_str().unwrap().to_string();
        assert!(content_type.starts_with("text/html"));

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("/entry/{key}"));
    }
}
