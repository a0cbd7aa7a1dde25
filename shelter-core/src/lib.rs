//! Document store abstraction behind the animal shelter API.
//!
//! This crate provides:
//!
//! - **Records** ([`document`]) - The trait validated records implement to be stored
//! - **Store backend abstraction** ([`backend`]) - Traits for implementing storage backends
//! - **Query and filtering API** ([`query`]) - Backend-neutral filter expressions
//! - **Collections interface** ([`collection`]) - Per-collection insert, find and count
//! - **Document store** ([`store`]) - The store handle shared by request handlers
//! - **Projection** ([`project`]) - Stored document to public document translation
//! - **Error handling** ([`error`]) - Store error and result types

#[allow(unused_extern_crates)]
extern crate self as shelter_core;

pub mod backend;
pub mod collection;
pub mod document;
pub mod error;
pub mod project;
pub mod query;
pub mod store;
