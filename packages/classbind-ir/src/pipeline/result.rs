//! Pipeline result types

use std::path::PathBuf;

/// Outcome of translating one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentOutcome {
    pub input: PathBuf,
    /// Classes translated, nested ones included
    pub class_count: usize,
    pub text: String,
}

impl DocumentOutcome {
    /// Structurally valid document without class records
    pub fn is_empty(&self) -> bool {
        self.class_count == 0
    }
}

/// A document written by a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedDocument {
    pub input: PathBuf,
    pub output: PathBuf,
    pub class_count: usize,
}

/// A document rejected by a batch run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FailedDocument {
    pub input: PathBuf,
    pub kind: &'static str,
    pub message: String,
}

/// Summary of a directory run; one bad document never aborts the rest
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub translated: Vec<TranslatedDocument>,
    /// Valid documents with no class records (nothing written)
    pub empty: Vec<PathBuf>,
    pub failed: Vec<FailedDocument>,
}

impl BatchReport {
    pub fn total_classes(&self) -> usize {
        self.translated.iter().map(|d| d.class_count).sum()
    }

    pub fn documents_seen(&self) -> usize {
        self.translated.len() + self.empty.len() + self.failed.len()
    }

    /// At least one class was translated
    pub fn is_success(&self) -> bool {
        self.total_classes() > 0
    }
}
