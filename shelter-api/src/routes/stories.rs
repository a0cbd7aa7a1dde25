use std::collections::HashMap;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use bson::Document;
use shelter_core::document::Record;

use crate::error::ApiResult;
use crate::routes::find_public;
use crate::schema::Story;
use crate::search::story_query;
use crate::state::AppState;

/// GET /stories -- latest success stories, six unless `limit` says otherwise.
async fn list_stories(
    State(state): State<AppState>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<Vec<Document>>> {
    let Query(params) = params?;
    let query = story_query(&params)?;

    Ok(Json(find_public(&state, Story::collection_name(), query).await))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/stories", get(list_stories))
}
