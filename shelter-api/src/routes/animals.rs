use std::collections::HashMap;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use bson::Document;
use shelter_core::document::Record;

use crate::error::ApiResult;
use crate::routes::find_public;
use crate::schema::Animal;
use crate::search::{featured_query, AnimalSearch};
use crate::state::AppState;

/// GET /animals -- filtered listing.
async fn list_animals(
    State(state): State<AppState>,
    params: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> ApiResult<Json<Vec<Document>>> {
    let Query(params) = params?;
    let search = AnimalSearch::from_params(&params)?;
    let query = search.to_query();
    tracing::debug!(filter = ?query.filter, limit = search.limit, "Searching animals");

    Ok(Json(find_public(&state, Animal::collection_name(), query).await))
}

/// GET /animals/featured -- up to eight featured animals.
async fn featured_animals(State(state): State<AppState>) -> Json<Vec<Document>> {
    Json(find_public(&state, Animal::collection_name(), featured_query()).await)
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/animals", get(list_animals))
        .route("/animals/featured", get(featured_animals))
}
