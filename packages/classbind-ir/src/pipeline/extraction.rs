//! Java front-end driver: `.java` files → class-record documents

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::batch::discover_documents;
use super::processor::write_output;
use super::result::FailedDocument;
use crate::errors::{ClassbindError, Result};
use crate::features::java_extraction::{extract_file, to_document_json};

pub const JAVA_EXTENSION: &str = "java";
pub const DOCUMENT_EXTENSION: &str = "json";

/// A `.java` file whose classes were written to a sibling document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedDocument {
    pub source: PathBuf,
    pub document: PathBuf,
    pub class_count: usize,
}

/// Summary of a directory extraction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractReport {
    pub written: Vec<ExtractedDocument>,
    /// Sources without public classes (nothing written)
    pub empty: Vec<PathBuf>,
    pub failed: Vec<FailedDocument>,
}

/// Extract one file into pretty-printed document JSON
pub fn extract_to_json(path: &Path) -> Result<(String, usize)> {
    if !path.exists() {
        return Err(ClassbindError::InputNotFound(path.to_path_buf()));
    }
    let records = extract_file(path)?;
    Ok((to_document_json(&records)?, records.len()))
}

/// Extract every `.java` file under `root` into a sibling `.json` document
pub fn extract_directory(root: &Path) -> Result<ExtractReport> {
    if !root.exists() {
        return Err(ClassbindError::InputNotFound(root.to_path_buf()));
    }

    let mut report = ExtractReport::default();
    for source in discover_documents(root, JAVA_EXTENSION) {
        let result = extract_to_json(&source).and_then(|(json, class_count)| {
            if class_count == 0 {
                return Ok(None);
            }
            let document = source.with_extension(DOCUMENT_EXTENSION);
            write_output(&document, &json)?;
            Ok(Some((document, class_count)))
        });

        match result {
            Ok(Some((document, class_count))) => {
                info!("Processed {} -> {}", source.display(), document.display());
                report.written.push(ExtractedDocument {
                    source,
                    document,
                    class_count,
                });
            }
            Ok(None) => {
                info!("No classes found in {}", source.display());
                report.empty.push(source);
            }
            Err(e) => {
                warn!("Error processing file {}: {}", source.display(), e);
                report.failed.push(FailedDocument {
                    input: source,
                    kind: e.kind(),
                    message: e.to_string(),
                });
            }
        }
    }

    Ok(report)
}
