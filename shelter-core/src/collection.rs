//! Collection handles for document store operations.
//!
//! - [`Collection`] - Untyped collection working with raw BSON documents
//! - [`TypedCollection`] - Collection bound to a [`Record`] type, which serializes
//!   records on insert
//!
//! Both borrow the backend of the store they came from and are cheap to create
//! per request.
//!
//! # Example
//!
//! ```ignore
//! let stories = store.typed_collection::<Story>();
//! let id = stories.insert(&story).await?;
//! let latest = stories.find(Query::builder().limit(6).build()).await?;
//! ```

use bson::Document;
use std::marker::PhantomData;

use crate::{
    backend::DynStoreBackend,
    document::{DocumentId, Record, RecordExt},
    error::{DocumentStoreError, DocumentStoreResult},
    query::Query,
};

/// An untyped collection with a reference to a storage backend.
#[derive(Debug)]
pub struct Collection<'a> {
    name: String,
    backend: &'a dyn DynStoreBackend,
}

impl<'a> Collection<'a> {
    pub(crate) fn new(name: String, backend: &'a dyn DynStoreBackend) -> Self {
        Self { name, backend }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inserts a single document and returns its store-assigned identity.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentStoreError`] if the backend rejects the insert or does
    /// not report an identity for it.
    pub async fn insert_one(&self, document: Document) -> DocumentStoreResult<DocumentId> {
        self.insert_many(vec![document])
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| {
                DocumentStoreError::InvalidDocument(format!(
                    "no identity assigned for insert into {}",
                    self.name
                ))
            })
    }

    /// Inserts documents and returns their identities in input order.
    pub async fn insert_many(&self, documents: Vec<Document>) -> DocumentStoreResult<Vec<DocumentId>> {
        self.backend
            .insert_documents(documents, self.name())
            .await
    }

    /// Queries documents in the collection.
    ///
    /// Returned documents still carry their internal identity field; project them
    /// with [`crate::project`] before exposing them.
    pub async fn find(&self, query: Query) -> DocumentStoreResult<Vec<Document>> {
        self.backend
            .query_documents(query, self.name())
            .await
    }

    /// Counts all documents in the collection.
    pub async fn count(&self) -> DocumentStoreResult<u64> {
        self.backend.count_documents(self.name()).await
    }
}

/// A collection bound to the record type `R`.
#[derive(Debug)]
pub struct TypedCollection<'a, R: Record> {
    inner: Collection<'a>,
    _marker: PhantomData<R>,
}

impl<'a, R: Record> TypedCollection<'a, R> {
    pub(crate) fn new(backend: &'a dyn DynStoreBackend) -> Self {
        Self {
            inner: Collection::new(R::collection_name().to_string(), backend),
            _marker: PhantomData,
        }
    }

    /// Returns the name of this collection.
    pub fn name(&self) -> &str {
        self.inner.name()
    }

    /// Serializes and inserts a record, returning its store-assigned identity.
    ///
    /// # Errors
    ///
    /// Returns a [`DocumentStoreError`] if serialization or insertion fails.
    pub async fn insert(&self, record: &R) -> DocumentStoreResult<DocumentId> {
        self.inner
            .insert_one(record.to_document()?)
            .await
    }

    /// Serializes and inserts several records, returning identities in input order.
    pub async fn insert_many(&self, records: &[R]) -> DocumentStoreResult<Vec<DocumentId>> {
        self.inner
            .insert_many(
                records
                    .iter()
                    .map(RecordExt::to_document)
                    .collect::<DocumentStoreResult<Vec<_>>>()?,
            )
            .await
    }

    /// Queries stored documents of this record type.
    pub async fn find(&self, query: Query) -> DocumentStoreResult<Vec<Document>> {
        self.inner.find(query).await
    }

    /// Counts all documents in the collection.
    pub async fn count(&self) -> DocumentStoreResult<u64> {
        self.inner.count().await
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use bson::doc;
    use serde::Serialize;

    use super::*;
    use crate::{backend::StoreBackend, store::DocumentStore};

    /// Backend that accepts every insert but never reports identities.
    #[derive(Debug)]
    struct SilentBackend;

    #[async_trait]
    impl StoreBackend for SilentBackend {
        async fn insert_documents(
            &self,
            _documents: Vec<Document>,
            _collection: &str,
        ) -> DocumentStoreResult<Vec<DocumentId>> {
            Ok(vec![])
        }

        async fn query_documents(
            &self,
            query: Query,
            collection: &str,
        ) -> DocumentStoreResult<Vec<Document>> {
            Ok(vec![doc! { "collection": collection, "limit": query.limit.map(|l| l as i64) }])
        }

        async fn count_documents(&self, _collection: &str) -> DocumentStoreResult<u64> {
            Ok(7)
        }
    }

    #[derive(Debug, Clone, Serialize)]
    struct Note {
        text: String,
    }

    impl Record for Note {
        fn collection_name() -> &'static str {
            "note"
        }
    }

    #[tokio::test]
    async fn insert_one_requires_an_identity() {
        let store = DocumentStore::new(SilentBackend);

        let err = store
            .collection("note")
            .insert_one(doc! { "text": "hi" })
            .await
            .unwrap_err();

        assert!(matches!(err, DocumentStoreError::InvalidDocument(_)));
    }

    #[tokio::test]
    async fn typed_collection_uses_record_collection_name() {
        let store = DocumentStore::new(SilentBackend).into_dyn();
        let notes = store.typed_collection::<Note>();

        assert_eq!(notes.name(), "note");
        assert_eq!(notes.count().await.unwrap(), 7);

        let found = notes
            .find(Query::builder().limit(3).build())
            .await
            .unwrap();
        assert_eq!(found, vec![doc! { "collection": "note", "limit": 3_i64 }]);

        let err = notes
            .insert(&Note { text: "hi".to_string() })
            .await
            .unwrap_err();
        assert!(matches!(err, DocumentStoreError::InvalidDocument(_)));
    }
}
