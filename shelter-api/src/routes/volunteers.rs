use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde_json::Value;

use crate::error::ApiResult;
use crate::routes::{insert_record, Receipt};
use crate::schema::Volunteer;
use crate::state::AppState;

/// POST /volunteers
async fn register_volunteer(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Receipt>> {
    let Json(input) = payload?;
    let volunteer = Volunteer::validate(&input)?;

    Ok(Json(insert_record(&state, &volunteer, "received").await?))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/volunteers", post(register_volunteer))
}
