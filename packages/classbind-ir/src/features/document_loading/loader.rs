//! Document loader
//!
//! The one place external data enters: a JSON array of class records is
//! deserialized and converted into class model trees. Any schema violation
//! rejects the whole document.

use std::path::Path;

use tracing::debug;

use super::records::ClassRecord;
use crate::errors::{ClassbindError, Result, INLINE_DOCUMENT};
use crate::shared::models::ClassDef;

/// Load a document held in memory
pub fn load_document(json: &str) -> Result<Vec<ClassDef>> {
    load_labeled(json, INLINE_DOCUMENT)
}

/// Load a document, naming it `label` in errors
pub fn load_labeled(json: &str, label: &str) -> Result<Vec<ClassDef>> {
    let records: Vec<ClassRecord> =
        serde_json::from_str(json).map_err(|e| ClassbindError::malformed(label, e))?;

    let classes: Vec<ClassDef> = records
        .into_iter()
        .map(|record| record.into_class_def(0))
        .collect();

    debug!(document = label, classes = classes.len(), "loaded document");
    Ok(classes)
}

/// Read and load a document file
pub fn load_file(path: &Path) -> Result<Vec<ClassDef>> {
    let content = std::fs::read_to_string(path).map_err(|e| ClassbindError::io(path, e))?;
    load_labeled(&content, &path.display().to_string())
}
