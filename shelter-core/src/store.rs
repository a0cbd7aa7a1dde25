//! Document store handles.
//!
//! - [`DocumentStore`] - Store bound to a concrete backend type
//! - [`DynDocumentStore`] - Store over a boxed backend, for runtime backend selection
//!
//! # Example
//!
//! ```ignore
//! let store = DocumentStore::new(InMemoryStore::new()).into_dyn();
//! let animals = store.collection("animal");
//! ```

use crate::{
    backend::{DynStoreBackend, StoreBackend},
    collection::{Collection, TypedCollection},
    document::Record,
    error::DocumentStoreResult,
};

/// A document store bound to a specific backend implementation.
#[derive(Debug)]
pub struct DocumentStore<B: StoreBackend> {
    backend: B,
}

impl<B: StoreBackend + 'static> DocumentStore<B> {
    /// Creates a new document store with the given backend.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Gets a typed collection for the specified record type.
    pub fn typed_collection<R: Record>(&self) -> TypedCollection<'_, R> {
        TypedCollection::new(&self.backend)
    }

    /// Gets an untyped collection with the given name.
    pub fn collection(&self, name: &str) -> Collection<'_> {
        Collection::new(name.to_string(), &self.backend)
    }

    /// Erases the backend type so the store can be selected at runtime.
    pub fn into_dyn(self) -> DynDocumentStore {
        DynDocumentStore::new(Box::new(self.backend))
    }

    /// Shuts down the underlying backend.
    pub async fn shutdown(self) -> DocumentStoreResult<()> {
        self.backend.shutdown().await
    }
}

/// A document store over a boxed, dynamically dispatched backend.
///
/// This is the handle the HTTP layer shares across requests: it is created once
/// at startup and only ever borrowed afterwards.
#[derive(Debug)]
pub struct DynDocumentStore {
    backend: Box<dyn DynStoreBackend>,
}

impl DynDocumentStore {
    /// Creates a new dynamic document store with the given backend trait object.
    pub fn new(backend: Box<dyn DynStoreBackend>) -> Self {
        Self { backend }
    }

    /// Gets a typed collection for the specified record type.
    pub fn typed_collection<R: Record>(&self) -> TypedCollection<'_, R> {
        TypedCollection::new(&*self.backend)
    }

    /// Gets an untyped collection with the given name.
    pub fn collection(&self, name: &str) -> Collection<'_> {
        Collection::new(name.to_string(), &*self.backend)
    }

    /// Shuts down the underlying backend.
    pub async fn shutdown(self) -> DocumentStoreResult<()> {
        self.backend.shutdown_boxed().await
    }
}
