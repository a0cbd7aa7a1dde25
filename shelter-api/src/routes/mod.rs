//! HTTP route handlers, one module per resource.

use axum::Router;
use bson::Document;
use serde::Serialize;
use shelter_core::document::Record;
use shelter_core::project::to_public_all;
use shelter_core::query::Query;

use crate::error::ApiResult;
use crate::state::AppState;

pub mod animals;
pub mod applications;
pub mod donations;
pub mod health;
pub mod stories;
pub mod volunteers;

/// All API routes.
///
/// ```text
/// GET    /                  -> health::status
/// GET    /animals           -> animals::list_animals (?q, species, size, featured, age_min, age_max, limit)
/// GET    /animals/featured  -> animals::featured_animals
/// POST   /applications      -> applications::submit_application
/// POST   /volunteers        -> volunteers::register_volunteer
/// POST   /donations         -> donations::pledge_donation
/// GET    /stories           -> stories::list_stories (?limit)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(animals::router())
        .merge(applications::router())
        .merge(volunteers::router())
        .merge(donations::router())
        .merge(stories::router())
}

/// Response body for accepted submissions.
#[derive(Debug, Serialize)]
pub struct Receipt {
    pub id: String,
    pub status: &'static str,
}

/// Runs a read and projects the results.
///
/// A missing store and a failing store both read as an empty result set.
pub(crate) async fn find_public(state: &AppState, collection: &str, query: Query) -> Vec<Document> {
    let Some(store) = state.store.as_deref() else {
        return Vec::new();
    };

    match store.collection(collection).find(query).await {
        Ok(documents) => to_public_all(documents),
        Err(e) => {
            tracing::warn!(collection, error = %e, "Read failed, returning no results");
            Vec::new()
        }
    }
}

/// Stores a validated record and returns its public id.
pub(crate) async fn insert_record<R: Record>(state: &AppState, record: &R, status: &'static str) -> ApiResult<Receipt> {
    let id = state
        .require_store()?
        .typed_collection::<R>()
        .insert(record)
        .await?
        .to_hex();

    tracing::info!(collection = R::collection_name(), %id, "Record stored");

    Ok(Receipt { id, status })
}
