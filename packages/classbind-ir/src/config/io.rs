//! Configuration I/O (YAML loading)
//!
//! Defines the YAML schema type. Merging onto defaults lives in
//! classbind_config.rs.

use serde::{Deserialize, Serialize};

/// YAML Schema v1
///
/// Every setting is optional; omitted settings keep their defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigExportV1 {
    /// Schema version (always 1 for v1)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub import_modules: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_object_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_extension: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input_extension: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parallel: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workers: Option<usize>,
}
