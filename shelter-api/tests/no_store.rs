//! Behaviour when the service runs without a configured store.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{body_json, build_storeless_app, get, post_json, violated_fields};

#[tokio::test]
async fn reads_return_empty_lists() {
    let app = build_storeless_app();

    for uri in ["/animals", "/animals/featured", "/stories", "/animals?species=dog&limit=3"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        assert_eq!(body_json(response).await, json!([]), "{uri}");
    }
}

#[tokio::test]
async fn writes_fail_with_store_error() {
    let app = build_storeless_app();

    for (uri, body) in [
        ("/applications", json!({ "animal_id": "a1", "full_name": "Ada", "email": "ada@example.org" })),
        ("/volunteers", json!({ "full_name": "Grace", "email": "grace@example.org" })),
        ("/donations", json!({ "full_name": "Alan", "amount": 10 })),
    ] {
        let response = post_json(&app, uri, &body).await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR, "{uri}");

        let json = body_json(response).await;
        assert_eq!(json["code"], "STORE_ERROR");
        assert_eq!(json["detail"], "store is not configured");
    }
}

#[tokio::test]
async fn validation_still_runs_first() {
    let app = build_storeless_app();

    let response = post_json(&app, "/donations", &json!({ "full_name": "Alan", "amount": -1 })).await;
    assert_eq!(violated_fields(response).await, ["amount"]);

    let response = get(&app, "/animals?limit=500").await;
    assert_eq!(violated_fields(response).await, ["limit"]);
}
