//! Shared module - Common types
//!
//! Types shared across all features. No tree-sitter or serde here.

pub mod models;

pub use models::*;
