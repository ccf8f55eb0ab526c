//! Directory mode: every class-record document under a root
//!
//! Documents are independent, so they may be translated on the rayon pool.
//! Failures are recorded per document and never abort the batch.

use std::path::{Path, PathBuf};

use tracing::{info, warn};
use walkdir::WalkDir;

use super::processor::{output_path_for, process_document, write_output};
use super::result::{BatchReport, FailedDocument, TranslatedDocument};
use crate::config::ClassbindConfig;
use crate::errors::{ClassbindError, Result};

/// Per-document result inside a batch
enum DocumentStatus {
    Translated(TranslatedDocument),
    Empty(PathBuf),
    Failed(FailedDocument),
}

/// Default pool size: 75% of cores, at least one
pub fn default_workers() -> usize {
    (num_cpus::get() * 3 / 4).max(1)
}

/// Recursively find files with `extension`, sorted for stable output
pub fn discover_documents(root: &Path, extension: &str) -> Vec<PathBuf> {
    let mut documents: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| path.extension().map_or(false, |ext| ext == extension))
        .collect();

    documents.sort();
    documents
}

/// Translate every document under `root`, writing outputs beside inputs
pub fn run_batch(root: &Path, config: &ClassbindConfig) -> Result<BatchReport> {
    if !root.exists() {
        return Err(ClassbindError::InputNotFound(root.to_path_buf()));
    }

    let documents = discover_documents(root, &config.input_extension);
    info!("Discovered {} documents under {}", documents.len(), root.display());

    let statuses = process_all(&documents, config);

    let mut report = BatchReport::default();
    for status in statuses {
        match status {
            DocumentStatus::Translated(doc) => report.translated.push(doc),
            DocumentStatus::Empty(path) => report.empty.push(path),
            DocumentStatus::Failed(failure) => report.failed.push(failure),
        }
    }

    info!(
        "Batch complete: {} translated ({} classes), {} empty, {} failed",
        report.translated.len(),
        report.total_classes(),
        report.empty.len(),
        report.failed.len()
    );
    Ok(report)
}

#[cfg(feature = "parallel")]
fn process_all(documents: &[PathBuf], config: &ClassbindConfig) -> Vec<DocumentStatus> {
    use rayon::prelude::*;

    if !config.parallel {
        return documents.iter().map(|d| process_one(d, config)).collect();
    }

    let workers = config.workers.unwrap_or_else(default_workers);
    match rayon::ThreadPoolBuilder::new().num_threads(workers).build() {
        Ok(pool) => pool.install(|| {
            documents
                .par_iter()
                .map(|d| process_one(d, config))
                .collect()
        }),
        Err(e) => {
            warn!("Failed to build thread pool ({}), using the global pool", e);
            documents
                .par_iter()
                .map(|d| process_one(d, config))
                .collect()
        }
    }
}

#[cfg(not(feature = "parallel"))]
fn process_all(documents: &[PathBuf], config: &ClassbindConfig) -> Vec<DocumentStatus> {
    documents.iter().map(|d| process_one(d, config)).collect()
}

fn process_one(input: &Path, config: &ClassbindConfig) -> DocumentStatus {
    let translated = process_document(input, config).and_then(|outcome| {
        if outcome.is_empty() {
            return Ok(None);
        }
        let output = output_path_for(input, config);
        write_output(&output, &outcome.text)?;
        Ok(Some(TranslatedDocument {
            input: input.to_path_buf(),
            output,
            class_count: outcome.class_count,
        }))
    });

    match translated {
        Ok(Some(doc)) => {
            info!("Processed {} -> {}", doc.input.display(), doc.output.display());
            DocumentStatus::Translated(doc)
        }
        Ok(None) => {
            info!("No classes found in {}", input.display());
            DocumentStatus::Empty(input.to_path_buf())
        }
        Err(e) => {
            warn!("Error processing file {}: {}", input.display(), e);
            DocumentStatus::Failed(FailedDocument {
                input: input.to_path_buf(),
                kind: e.kind(),
                message: e.to_string(),
            })
        }
    }
}
