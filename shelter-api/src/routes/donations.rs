use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::{routing::post, Json, Router};
use serde_json::Value;

use crate::error::ApiResult;
use crate::routes::{insert_record, Receipt};
use crate::schema::Donation;
use crate::state::AppState;

/// POST /donations -- record a pledge. No payment is taken.
async fn pledge_donation(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<Receipt>> {
    let Json(input) = payload?;
    let donation = Donation::validate(&input)?;

    Ok(Json(insert_record(&state, &donation, "pledged").await?))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/donations", post(pledge_donation))
}
