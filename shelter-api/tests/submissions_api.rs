//! Integration tests for applications, volunteers and donations.

mod common;

use axum::http::StatusCode;
use serde_json::json;
use shelter_core::query::Query;

use common::{body_json, build_test_app, post_json, post_raw, violated_fields};

fn assert_object_id(id: &str) {
    assert_eq!(id.len(), 24, "{id}");
    assert!(id.chars().all(|c| c.is_ascii_hexdigit()), "{id}");
}

// ---------------------------------------------------------------------------
// Applications
// ---------------------------------------------------------------------------

#[tokio::test]
async fn application_is_received() {
    let app = build_test_app();

    let response = post_json(
        &app.router,
        "/applications",
        &json!({
            "animal_id": "665f1c2e9b1e8a0012345678",
            "full_name": "Ada Lovelace",
            "email": "ada@example.org",
            "message": "We have a big garden.",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "received");
    assert_object_id(json["id"].as_str().unwrap());

    let stored = app.store.collection("application").find(Query::new()).await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].get_object_id("_id").unwrap().to_hex(), json["id"]);
    assert_eq!(stored[0].get_str("message").unwrap(), "We have a big garden.");
    assert!(!stored[0].contains_key("phone"));
}

#[tokio::test]
async fn application_for_unknown_animal_is_accepted() {
    let app = build_test_app();

    let response = post_json(
        &app.router,
        "/applications",
        &json!({ "animal_id": "no-such-animal", "full_name": "Ada Lovelace", "email": "ada@example.org" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn application_with_bad_email_writes_nothing() {
    let app = build_test_app();

    let response = post_json(
        &app.router,
        "/applications",
        &json!({ "animal_id": "a1", "full_name": "Ada Lovelace", "email": "not-an-email" }),
    )
    .await;

    assert_eq!(violated_fields(response).await, ["email"]);
    assert_eq!(app.store.collection("application").count().await.unwrap(), 0);
}

#[tokio::test]
async fn empty_application_lists_every_missing_field() {
    let app = build_test_app();

    let response = post_json(&app.router, "/applications", &json!({})).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let json = body_json(response).await;
    let detail = json["detail"].as_array().unwrap();

    assert_eq!(detail.len(), 3);
    assert!(detail.iter().all(|v| v["code"] == "missing"));
    assert_eq!(detail[0]["field"], "animal_id");
    assert!(detail[0]["message"].is_string());
}

#[tokio::test]
async fn malformed_json_is_a_body_violation() {
    let app = build_test_app();

    let response = post_raw(&app.router, "/applications", "{\"full_name\": ").await;
    assert_eq!(violated_fields(response).await, ["body"]);

    let response = post_json(&app.router, "/applications", &json!(["ada@example.org"])).await;
    assert_eq!(violated_fields(response).await, ["body"]);
}

// ---------------------------------------------------------------------------
// Volunteers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn volunteer_is_received_with_unique_interests() {
    let app = build_test_app();

    let response = post_json(
        &app.router,
        "/volunteers",
        &json!({
            "full_name": "Grace Hopper",
            "email": "grace@example.org",
            "interests": ["dog walking", "events", "dog walking"],
            "availability": "weekends",
        }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["status"], "received");

    let stored = app.store.collection("volunteer").find(Query::new()).await.unwrap();
    let interests: Vec<&str> = stored[0]
        .get_array("interests")
        .unwrap()
        .iter()
        .filter_map(|b| b.as_str())
        .collect();
    assert_eq!(interests, ["dog walking", "events"]);
}

#[tokio::test]
async fn volunteer_interests_must_be_strings() {
    let app = build_test_app();

    let response = post_json(
        &app.router,
        "/volunteers",
        &json!({ "full_name": "Grace Hopper", "email": "grace@example.org", "interests": ["events", 3] }),
    )
    .await;

    assert_eq!(violated_fields(response).await, ["interests[1]"]);
}

// ---------------------------------------------------------------------------
// Donations
// ---------------------------------------------------------------------------

#[tokio::test]
async fn donation_is_pledged() {
    let app = build_test_app();

    let response = post_json(
        &app.router,
        "/donations",
        &json!({ "full_name": "Alan Turing", "amount": 25.5 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "pledged");
    assert_object_id(json["id"].as_str().unwrap());

    let stored = app.store.collection("donation").find(Query::new()).await.unwrap();
    assert_eq!(stored[0].get_f64("amount").unwrap(), 25.5);
}

#[tokio::test]
async fn non_positive_donations_are_rejected() {
    let app = build_test_app();

    for amount in [json!(0), json!(-5)] {
        let response = post_json(
            &app.router,
            "/donations",
            &json!({ "full_name": "Alan Turing", "amount": amount }),
        )
        .await;

        assert_eq!(violated_fields(response).await, ["amount"]);
    }

    assert_eq!(app.store.collection("donation").count().await.unwrap(), 0);
}

#[tokio::test]
async fn each_submission_gets_its_own_id() {
    let app = build_test_app();
    let pledge = json!({ "full_name": "Alan Turing", "amount": 5 });

    let first = body_json(post_json(&app.router, "/donations", &pledge).await).await;
    let second = body_json(post_json(&app.router, "/donations", &pledge).await).await;

    assert_ne!(first["id"], second["id"]);
    assert_eq!(app.store.collection("donation").count().await.unwrap(), 2);
}
