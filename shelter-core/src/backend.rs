//! Storage backend abstraction for the document store.
//!
//! # Traits
//!
//! - [`StoreBackend`]: The core trait for storage backends
//! - [`DynStoreBackend`]: A trait for dynamic dispatch over backend implementations
//! - [`StoreBackendBuilder`]: Factory trait for creating backend instances
//!
//! # Examples
//!
//! ```ignore
//! use shelter_core::backend::StoreBackend;
//! use bson::doc;
//!
//! let backend = MyBackendImpl::new();
//!
//! let ids = backend
//!     .insert_documents(vec![doc! { "name": "Luna", "age": 3 }], "animal")
//!     .await?;
//! assert_eq!(ids.len(), 1);
//! ```

use async_trait::async_trait;
use bson::Document;
use std::fmt::Debug;

use crate::{
    document::DocumentId,
    error::DocumentStoreResult,
    query::Query,
};

/// Abstract interface for document storage backends.
///
/// Backends own identity assignment: documents are handed over without an
/// identity and come back from queries with the assigned identity under
/// [`ID_FIELD`](crate::document::ID_FIELD).
///
/// # Thread Safety
///
/// All implementations must be thread-safe and support concurrent access from
/// multiple async tasks.
#[async_trait]
pub trait StoreBackend: Send + Sync + Debug {
    /// Inserts new documents into a collection and returns their assigned identities,
    /// in input order.
    ///
    /// The collection is created automatically if it doesn't exist. The insert is
    /// all-or-nothing for a single document.
    async fn insert_documents(
        &self,
        documents: Vec<Document>,
        collection: &str,
    ) -> DocumentStoreResult<Vec<DocumentId>>;

    /// Queries documents in a collection using a structured query.
    ///
    /// Results are returned in store-native order; no ordering is guaranteed.
    async fn query_documents(
        &self,
        query: Query,
        collection: &str,
    ) -> DocumentStoreResult<Vec<Document>>;

    /// Counts all documents in a collection. A missing collection counts as empty.
    async fn count_documents(&self, collection: &str) -> DocumentStoreResult<u64>;

    /// Cleanly shuts down the backend, releasing all resources.
    ///
    /// The default implementation is a no-op.
    async fn shutdown(self) -> DocumentStoreResult<()>
    where
        Self: Sized,
    {
        Ok(())
    }
}

#[async_trait]
impl<B> StoreBackend for &B
where
    B: StoreBackend,
{
    async fn insert_documents(
        &self,
        documents: Vec<Document>,
        collection: &str,
    ) -> DocumentStoreResult<Vec<DocumentId>> {
        StoreBackend::insert_documents(*self, documents, collection).await
    }

    async fn query_documents(
        &self,
        query: Query,
        collection: &str,
    ) -> DocumentStoreResult<Vec<Document>> {
        StoreBackend::query_documents(*self, query, collection).await
    }

    async fn count_documents(&self, collection: &str) -> DocumentStoreResult<u64> {
        StoreBackend::count_documents(*self, collection).await
    }
}

/// Object-safe counterpart of [`StoreBackend`], implemented for every backend.
#[async_trait]
pub trait DynStoreBackend: Send + Sync + Debug {
    async fn insert_documents(
        &self,
        documents: Vec<Document>,
        collection: &str,
    ) -> DocumentStoreResult<Vec<DocumentId>>;
    async fn query_documents(
        &self,
        query: Query,
        collection: &str,
    ) -> DocumentStoreResult<Vec<Document>>;
    async fn count_documents(&self, collection: &str) -> DocumentStoreResult<u64>;
    async fn shutdown_boxed(self: Box<Self>) -> DocumentStoreResult<()>;
}

#[async_trait]
impl<B: StoreBackend + 'static> DynStoreBackend for B {
    async fn insert_documents(
        &self,
        documents: Vec<Document>,
        collection: &str,
    ) -> DocumentStoreResult<Vec<DocumentId>> {
        StoreBackend::insert_documents(self, documents, collection).await
    }

    async fn query_documents(
        &self,
        query: Query,
        collection: &str,
    ) -> DocumentStoreResult<Vec<Document>> {
        StoreBackend::query_documents(self, query, collection).await
    }

    async fn count_documents(&self, collection: &str) -> DocumentStoreResult<u64> {
        StoreBackend::count_documents(self, collection).await
    }

    async fn shutdown_boxed(self: Box<Self>) -> DocumentStoreResult<()> {
        StoreBackend::shutdown(*self).await
    }
}

/// Factory trait for constructing storage backends.
///
/// Backend crates expose a builder implementing this trait so callers can connect
/// lazily, for example from configuration at startup.
#[async_trait]
pub trait StoreBackendBuilder: Send {
    /// The backend type produced by this builder.
    type Backend: StoreBackend;

    /// Builds the backend, establishing any required client state.
    async fn build(self) -> DocumentStoreResult<Self::Backend>;
}
