//! Shared fixtures for handler tests.

use axum::{body::Body, http::Request, response::Response, Router};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::routes;
use crate::state::AppState;
use crate::store::Store;

/// Router backed by a fresh database in a temporary directory.
///
/// The directory is removed when the returned guard drops, so keep it alive
/// for the length of the test.
pub async fn setup_test_app() -> (tempfile::TempDir, Router) {
    let dir = tempfile::tempdir().unwrap();
    let store = Store::open(dir.path().join("entries.db"), Duration::from_secs(5))
        .await
        .expect("Failed to open test store");

    (dir, routes::router(AppState::new(store)))
}

pub fn post_entry(key: &str, value: &str) -> Request<Body> {
    let body = serde_json::json!({ "key": key, "value": value });
    post_raw(&body.to_string())
}

pub fn post_raw(body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(routes::ENTRY_COLLECTION)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub fn get_entry(key: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(format!("/entry/{}", urlencoding::encode(key)))
        .body(Body::empty())
        .unwrap()
}

pub fn delete_entry(key: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(format!("/entry/{}", urlencoding::encode(key)))
        .body(Body::empty())
        .unwrap()
}

pub async fn body_json<T: DeserializeOwned>(response: Response) -> T {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap()
}
