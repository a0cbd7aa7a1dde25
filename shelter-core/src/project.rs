//! Projection of stored documents into their public shape.
//!
//! Stored documents carry the store-assigned identity under [`ID_FIELD`]. The
//! public shape exposes it as a string under [`PUBLIC_ID_FIELD`] instead, placed
//! first, with every other field passed through untouched.

use bson::{Bson, Document};

use crate::document::ID_FIELD;

/// Name of the identity field in public documents.
pub const PUBLIC_ID_FIELD: &str = "id";

/// Projects a single stored document. `None` stays `None`.
///
/// A document without an internal identity is returned unchanged.
pub fn to_public(document: Option<Document>) -> Option<Document> {
    let mut document = document?;

    let Some(id) = document.remove(ID_FIELD) else {
        return Some(document);
    };

    let mut public = Document::new();
    public.insert(PUBLIC_ID_FIELD, public_id(&id));
    public.extend(document);

    Some(public)
}

/// Projects every document of a result set, preserving order.
pub fn to_public_all(documents: impl IntoIterator<Item = Document>) -> Vec<Document> {
    documents
        .into_iter()
        .filter_map(|document| to_public(Some(document)))
        .collect()
}

/// Renders an identity as its stable external string form.
fn public_id(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}
