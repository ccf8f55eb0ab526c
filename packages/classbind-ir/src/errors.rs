//! Error types for classbind-ir
//!
//! Provides unified error handling across the crate.

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::config::ConfigError;

/// Label used for documents that did not come from a file
pub const INLINE_DOCUMENT: &str = "<inline>";

/// Main error type for classbind-ir operations
#[derive(Debug, Error)]
pub enum ClassbindError {
    /// Required field missing or of the wrong shape; the whole document is rejected
    #[error("Malformed document {document}: {source}")]
    MalformedDocument {
        document: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO error
    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Input path does not exist
    #[error("Input path does not exist: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Java front-end failure
    #[error("Extraction error in {path}: {message}")]
    Extraction { path: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serializing extracted records
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClassbindError {
    /// Create a malformed-document error
    pub fn malformed(document: impl Into<String>, source: serde_json::Error) -> Self {
        ClassbindError::MalformedDocument {
            document: document.into(),
            source,
        }
    }

    /// Create an IO error bound to a path
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        ClassbindError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Create an extraction error
    pub fn extraction(path: impl Into<String>, message: impl Into<String>) -> Self {
        ClassbindError::Extraction {
            path: path.into(),
            message: message.into(),
        }
    }

    /// Short category name for logs
    pub fn kind(&self) -> &'static str {
        match self {
            ClassbindError::MalformedDocument { .. } => "malformed_document",
            ClassbindError::Io { .. } => "io",
            ClassbindError::InputNotFound(_) => "input_not_found",
            ClassbindError::Extraction { .. } => "extraction",
            ClassbindError::Config(_) => "config",
            ClassbindError::Serialization(_) => "serialization",
        }
    }
}

/// Result type alias for classbind operations
pub type Result<T> = std::result::Result<T, ClassbindError>;
