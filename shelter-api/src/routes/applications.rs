use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde_json::Value;

use crate::error::ApiResult;
use crate::routes::{insert_record, Receipt};
use crate::schema::Application;
use crate::state::AppState;

/// POST /applications -- record an adoption request.
///
/// The referenced animal is not looked up.
async fn submit_application(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Receipt>> {
    let Json(input) = payload?;
    let application = Application::validate(&input)?;

    Ok(Json(insert_record(&state, &application, "received").await?))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/applications", post(submit_application))
}
