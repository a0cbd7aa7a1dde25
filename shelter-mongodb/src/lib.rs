//! MongoDB backend for the shelter document store.
//!
//! Persists documents in a MongoDB database and lets MongoDB's query engine
//! evaluate filter expressions, which are translated from the backend-neutral
//! [`Expr`](shelter_core::query::Expr) tree.
//!
//! # Example
//!
//! ```ignore
//! use shelter_core::backend::StoreBackendBuilder;
//! use shelter_mongodb::MongoDbStore;
//!
//! let store = MongoDbStore::builder("mongodb://localhost:27017", "animal_home")
//!     .build()
//!     .await?;
//! ```

#[allow(unused_extern_crates)]
extern crate self as shelter_mongodb;

pub mod store;
pub mod query;

pub use store::{MongoDbStore, MongoDbStoreBuilder};
