/*
 * Classbind IR - Java class model → jnim binding generator
 *
 * Feature-First Architecture:
 * - shared/      : Class model (ClassDef, MethodDef, FieldDef)
 * - features/    : Vertical slices (java_extraction → document_loading → type_mapping → binding_emit)
 * - config/      : Versioned YAML configuration
 * - pipeline/    : Orchestration (single document, directory batch, extraction)
 *
 * Performance:
 * - Documents are independent; batches run on a Rayon pool
 */

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Shared class model
pub mod shared;

/// Feature modules (vertical slices)
pub mod features;

/// Configuration
pub mod config;

/// Pipeline orchestration
pub mod pipeline;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{ClassbindConfig, ConfigError, ValidatedConfig};
pub use errors::{ClassbindError, Result};
pub use features::binding_emit::{emit_class, emit_document, BindingEmitter, EmitOptions};
pub use features::document_loading::{load_document, load_file};
pub use features::type_mapping::map_type;
pub use pipeline::{process_document, run_batch, translate_document, BatchReport};
pub use shared::models::{ClassDef, FieldDef, MethodDef, ParamDef};
