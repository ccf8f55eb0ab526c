//! Single-document processing: load → emit → persist

use std::path::{Path, PathBuf};

use tracing::debug;

use super::result::DocumentOutcome;
use crate::config::ClassbindConfig;
use crate::errors::{ClassbindError, Result, INLINE_DOCUMENT};
use crate::features::binding_emit::BindingEmitter;
use crate::features::document_loading::{load_file, load_labeled};
use crate::shared::models::ClassDef;

/// Translate a document held in memory
pub fn translate_document(json: &str, config: &ClassbindConfig) -> Result<DocumentOutcome> {
    let classes = load_labeled(json, INLINE_DOCUMENT)?;
    Ok(outcome(PathBuf::from(INLINE_DOCUMENT), &classes, config))
}

/// Load and translate one document file (nothing is written)
pub fn process_document(path: &Path, config: &ClassbindConfig) -> Result<DocumentOutcome> {
    let classes = load_file(path)?;
    Ok(outcome(path.to_path_buf(), &classes, config))
}

fn outcome(input: PathBuf, classes: &[ClassDef], config: &ClassbindConfig) -> DocumentOutcome {
    let text = BindingEmitter::new(config.emit_options()).emit_document(classes);
    let class_count = classes.iter().map(ClassDef::class_count).sum();
    debug!(document = %input.display(), class_count, "translated document");

    DocumentOutcome {
        input,
        class_count,
        text,
    }
}

/// `classes/Foo.json` → `classes/Foo.nim`
pub fn output_path_for(input: &Path, config: &ClassbindConfig) -> PathBuf {
    input.with_extension(&config.output_extension)
}

/// Persist emitted text, creating parent directories as needed
pub fn write_output(path: &Path, text: &str) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| ClassbindError::io(parent, e))?;
    }
    std::fs::write(path, text).map_err(|e| ClassbindError::io(path, e))
}
