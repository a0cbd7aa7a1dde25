//! HTTP service for the Animal Home shelter site.
//!
//! Lists adoptable animals and success stories, and accepts adoption
//! applications, volunteer sign-ups and donation pledges. Everything is a thin
//! layer over a [`shelter_core`] document store selected at startup.

pub mod config;
pub mod error;
pub mod router;
pub mod routes;
pub mod schema;
pub mod search;
pub mod seed;
pub mod state;
