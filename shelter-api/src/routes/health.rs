use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
pub struct StatusResponse {
    pub message: &'static str,
}

/// GET / -- liveness message. Does not touch the store.
async fn status() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "Animal Home API running",
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(status))
}
