//! Pipeline orchestration
//!
//! Drives the core: resolve inputs, translate documents, persist output.

pub mod batch;
pub mod extraction;
pub mod processor;
pub mod result;

pub use batch::{default_workers, discover_documents, run_batch};
pub use extraction::{extract_directory, extract_to_json, ExtractReport, ExtractedDocument};
pub use processor::{output_path_for, process_document, translate_document, write_output};
pub use result::{BatchReport, DocumentOutcome, FailedDocument, TranslatedDocument};
