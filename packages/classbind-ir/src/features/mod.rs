//! Feature modules - one vertical slice per stage
//!
//! - java_extraction/  - Java source → class records (tree-sitter front-end)
//! - document_loading/ - JSON class records → class model
//! - type_mapping/     - Java type strings → jnim type strings
//! - binding_emit/     - class model → jnim declaration text

pub mod binding_emit;
pub mod document_loading;
pub mod java_extraction;
pub mod type_mapping;
