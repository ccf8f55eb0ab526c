//! Java extraction front-end: `.java` source → class-record documents
//!
//! Producer side of the document schema; the binding core never calls it.

pub mod extractor;

pub use extractor::{extract_classes, extract_file, to_document_json};
