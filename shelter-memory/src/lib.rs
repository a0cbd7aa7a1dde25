//! In-memory document storage backend.
//!
//! This crate provides a thread-safe, in-memory implementation of the `StoreBackend`
//! trait. It backs local development (`DATABASE_URL=memory`) and the test suites.
//!
//! # Features
//!
//! - **Thread-safe access** - Concurrent reads and writes using an async-aware RwLock
//! - **Store-assigned identities** - ObjectIds, like a MongoDB deployment
//! - **Full query support** - Evaluates the same filter expressions as MongoDB
//!
//! # Quick Start
//!
//! ```ignore
//! use shelter_core::store::DocumentStore;
//! use shelter_memory::InMemoryStore;
//!
//! let store = DocumentStore::new(InMemoryStore::new()).into_dyn();
//! let id = store.collection("story").insert_one(doc! { "title": "Home" }).await?;
//! ```

#[allow(unused_extern_crates)]
extern crate self as shelter_memory;

pub mod store;
pub mod evaluator;

pub use store::{InMemoryStore, InMemoryStoreBuilder};
