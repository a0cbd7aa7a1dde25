#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::Value;
use shelter_core::store::{DocumentStore, DynDocumentStore};
use shelter_memory::InMemoryStore;
use tower::ServiceExt;

use shelter_api::router::build_app_router;
use shelter_api::state::AppState;

/// A store handle plus the router serving it.
///
/// `store` shares its data with the router's copy, so tests can inspect what a
/// request wrote.
pub struct TestApp {
    pub router: Router,
    pub store: DynDocumentStore,
}

/// Build the full router over a fresh in-memory store.
pub fn build_test_app() -> TestApp {
    let backend = InMemoryStore::new();

    TestApp {
        router: build_app_router(AppState::new(Some(
            DocumentStore::new(backend.clone()).into_dyn(),
        ))),
        store: DocumentStore::new(backend).into_dyn(),
    }
}

/// Build the full router over an arbitrary store.
pub fn build_app_with_store(store: DynDocumentStore) -> Router {
    build_app_router(AppState::new(Some(store)))
}

/// Build the full router with no store configured.
pub fn build_storeless_app() -> Router {
    build_app_router(AppState::without_store())
}

pub async fn get(app: &Router, uri: &str) -> Response {
    app.clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> Response {
    post_raw(app, uri, serde_json::to_vec(body).unwrap()).await
}

pub async fn post_raw(app: &Router, uri: &str, body: impl Into<Body>) -> Response {
    app.clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header("Content-Type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap()
}

pub async fn body_json(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Asserts a 422 and returns the `field` of every reported violation.
pub async fn violated_fields(response: Response) -> Vec<String> {
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");

    json["detail"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["field"].as_str().unwrap().to_string())
        .collect()
}

/// Names of the animals in a listing, sorted for order-free comparison.
pub fn names(listing: &Value) -> Vec<String> {
    let mut names: Vec<String> = listing
        .as_array()
        .unwrap()
        .iter()
        .map(|a| a["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    names
}
