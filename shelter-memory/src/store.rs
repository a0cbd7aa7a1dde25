//! In-memory storage implementation for document stores.
//!
//! Collections are insertion-ordered vectors of BSON documents behind an
//! async-aware read-write lock.

use std::{collections::HashMap, sync::Arc};
use async_trait::async_trait;
use mea::rwlock::RwLock;
use bson::{Document, oid::ObjectId};

use shelter_core::{
    query::Query,
    document::{DocumentId, ID_FIELD},
    error::DocumentStoreResult,
    backend::{StoreBackend, StoreBackendBuilder},
};

use crate::evaluator::DocumentEvaluator;

type CollectionList = Vec<Document>;
type StoreMap = HashMap<String, CollectionList>;


/// Thread-safe in-memory document storage backend.
///
/// `InMemoryStore` is cloneable and uses an `Arc`-wrapped internal state, so
/// clones share the same underlying data.
///
/// Identities are freshly generated [`ObjectId`]s, matching what a MongoDB
/// deployment would hand out. Queries scan the whole collection (no indexing)
/// and return documents in insertion order.
///
/// # Example
///
/// ```ignore
/// use shelter_memory::InMemoryStore;
/// use shelter_core::backend::StoreBackend;
/// use bson::doc;
///
/// let store = InMemoryStore::new();
/// let ids = store.insert_documents(vec![doc! { "name": "Luna" }], "animal").await?;
/// assert_eq!(store.count_documents("animal").await?, 1);
/// ```
#[derive(Default, Clone, Debug)]
pub struct InMemoryStore {
    /// collection_name -> documents, in insertion order
    store: Arc<RwLock<StoreMap>>,
}

impl InMemoryStore {
    /// Creates a new empty in-memory document store.
    pub fn new() -> Self {
        Self {
            store: Arc::new(RwLock::new(StoreMap::new())),
        }
    }

    /// Creates a builder for constructing an `InMemoryStore`.
    pub fn builder() -> InMemoryStoreBuilder {
        InMemoryStoreBuilder
    }
}


#[async_trait]
impl StoreBackend for InMemoryStore {
    async fn insert_documents(&self, documents: Vec<Document>, collection: &str) -> DocumentStoreResult<Vec<DocumentId>> {
        let mut store = self.store.write().await;
        let collection_list = store
            .entry(collection.to_string())
            .or_default();

        let mut ids = Vec::with_capacity(documents.len());

        for document in documents {
            // A caller-provided ObjectId is kept, as the MongoDB driver would.
            let id = document
                .get_object_id(ID_FIELD)
                .unwrap_or_else(|_| ObjectId::new());

            let mut stored = Document::new();
            stored.insert(ID_FIELD, id);
            stored.extend(
                document
                    .into_iter()
                    .filter(|(key, _)| key != ID_FIELD)
            );

            collection_list.push(stored);
            ids.push(id);
        }

        Ok(ids)
    }

    async fn query_documents(&self, query: Query, collection: &str) -> DocumentStoreResult<Vec<Document>> {
        let store = self.store.read().await;
        let collection_list = match store.get(collection) {
            Some(col) => col,
            None => return Ok(vec![]),
        };

        let limit = query.limit.unwrap_or(usize::MAX);

        // Apply filter expressions if present
        let matched = match &query.filter {
            Some(filter) => DocumentEvaluator::filter_documents(collection_list, filter)?,
            None => collection_list.iter().collect::<Vec<_>>(),
        };

        Ok(
            matched
                .into_iter()
                .take(limit)
                .cloned()
                .collect()
        )
    }

    async fn count_documents(&self, collection: &str) -> DocumentStoreResult<u64> {
        Ok(
            self.store
                .read()
                .await
                .get(collection)
                .map_or(0, |col| col.len() as u64)
        )
    }
}


/// Builder for constructing [`InMemoryStore`] instances.
#[derive(Default)]
pub struct InMemoryStoreBuilder;

#[async_trait]
impl StoreBackendBuilder for InMemoryStoreBuilder {
    type Backend = InMemoryStore;

    /// Builds and returns a new [`InMemoryStore`] instance.
    ///
    /// This always succeeds and returns a freshly initialized store.
    async fn build(self) -> DocumentStoreResult<Self::Backend> {
        Ok(InMemoryStore::new())
    }
}
