//! # vsx_core
//!
//! Data access for the extension registry: personal access token lookups
//! over a pluggable relational store.

pub mod auth;
pub mod config;
pub mod models;
pub mod store;

pub use auth::tokens::TokenLookup;
pub use store::{Store, StoreError};

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
