use std::sync::Arc;

use shelter_core::store::{DocumentStore, DynDocumentStore};
use shelter_memory::InMemoryStore;

use crate::config::StoreConfig;
use crate::error::{ApiError, ApiResult};

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store handle is built once at startup and only
/// borrowed afterwards.
#[derive(Clone, Default)]
pub struct AppState {
    /// `None` when no store is configured or it could not be built.
    pub store: Option<Arc<DynDocumentStore>>,
}

impl AppState {
    pub fn new(store: Option<DynDocumentStore>) -> Self {
        Self {
            store: store.map(Arc::new),
        }
    }

    /// State without a store.
    pub fn without_store() -> Self {
        Self::default()
    }

    /// The configured store, or the error a write reports without one.
    pub fn require_store(&self) -> ApiResult<&DynDocumentStore> {
        self.store.as_deref().ok_or(ApiError::StoreUnavailable)
    }
}

/// Builds the store selected by `config`.
///
/// Any failure is logged and yields `None`, so the service still starts and
/// serves empty reads.
pub async fn connect_store(config: &StoreConfig) -> Option<DynDocumentStore> {
    match config {
        StoreConfig::Disabled => {
            tracing::warn!("DATABASE_URL is not set, running without a store");
            None
        }
        StoreConfig::Memory => {
            tracing::info!("Using in-memory store");
            Some(DocumentStore::new(InMemoryStore::new()).into_dyn())
        }
        StoreConfig::MongoDb { url, database } => connect_mongodb(url, database).await,
    }
}

#[cfg(feature = "mongodb")]
async fn connect_mongodb(url: &str, database: &str) -> Option<DynDocumentStore> {
    use shelter_core::backend::StoreBackendBuilder;
    use shelter_mongodb::MongoDbStore;

    match MongoDbStore::builder(url, database).build().await {
        Ok(backend) => {
            tracing::info!(database, "Using MongoDB store");
            Some(DocumentStore::new(backend).into_dyn())
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to create MongoDB client, running without a store");
            None
        }
    }
}

#[cfg(not(feature = "mongodb"))]
async fn connect_mongodb(_url: &str, database: &str) -> Option<DynDocumentStore> {
    tracing::error!(
        database,
        "DATABASE_URL points at MongoDB but the `mongodb` feature is disabled, running without a store"
    );
    None
}
