//! Core traits and types for records stored as documents.
//!
//! A [`Record`] is a validated, identity-less value. The store assigns its identity
//! on insert and keeps it under [`ID_FIELD`] in the stored document.

use bson::{Bson, Document, ser::serialize_to_bson};
use serde::Serialize;

use crate::error::{DocumentStoreError, DocumentStoreResult};

/// Name of the store-assigned identity field inside stored documents.
pub const ID_FIELD: &str = "_id";

/// Identity type assigned by every backend.
pub type DocumentId = bson::oid::ObjectId;

/// Core trait that all records written to a document store must implement.
///
/// # Example
///
/// ```ignore
/// use serde::Serialize;
/// use shelter_core::document::Record;
///
/// #[derive(Debug, Clone, Serialize)]
/// pub struct Story {
///     pub title: String,
///     pub content: String,
/// }
///
/// impl Record for Story {
///     fn collection_name() -> &'static str {
///         "story"
///     }
/// }
/// ```
pub trait Record: Serialize + Send + Sync + Clone + 'static {
    /// Returns the name of the collection this record belongs to.
    fn collection_name() -> &'static str;
}

/// Extension trait converting records into BSON documents.
///
/// Automatically implemented for every [`Record`].
pub trait RecordExt: Record {
    /// Converts this record into a BSON document for storage.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the record does not serialize
    /// to a document (for example a bare string or number).
    fn to_document(&self) -> DocumentStoreResult<Document>;
}

impl<R: Record> RecordExt for R {
    fn to_document(&self) -> DocumentStoreResult<Document> {
        match serialize_to_bson(self)? {
            Bson::Document(document) => Ok(document),
            other => Err(DocumentStoreError::InvalidDocument(format!(
                "{} record serialized to {:?}, expected a document",
                Self::collection_name(),
                other.element_type(),
            ))),
        }
    }
}
