//! Generator configuration
//!
//! Defaults reproduce plain `jnim` output; a v1 YAML file may override
//! any setting.

use std::path::Path;

use tracing::warn;

use super::error::{ConfigError, ConfigResult};
use super::io::ConfigExportV1;
use super::validation::Validatable;
use crate::features::binding_emit::EmitOptions;
use crate::features::type_mapping::BASE_OBJECT_TYPE;

pub const CONFIG_VERSION: u32 = 1;
pub const MAX_WORKERS: usize = 512;

/// Generator configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassbindConfig {
    /// Modules named in the per-document import header (empty disables it)
    pub import_modules: Vec<String>,

    /// Superclass for classes without a meaningful one
    pub base_object_type: String,

    /// Extension of emitted binding files
    pub output_extension: String,

    /// Extension of class-record documents picked up in directory mode
    pub input_extension: String,

    /// Process batch documents on the rayon pool
    pub parallel: bool,

    /// Worker threads (1..=512); `None` uses the default pool size
    pub workers: Option<usize>,
}

impl Default for ClassbindConfig {
    fn default() -> Self {
        Self {
            import_modules: vec!["jnim".to_string()],
            base_object_type: BASE_OBJECT_TYPE.to_string(),
            output_extension: "nim".to_string(),
            input_extension: "json".to_string(),
            parallel: true,
            workers: None,
        }
    }
}

impl ClassbindConfig {
    /// Build and validate
    pub fn build(self) -> ConfigResult<ValidatedConfig> {
        self.validate().map_err(|e| {
            warn!("{} rejected: {}", self.config_name(), e);
            e
        })?;
        Ok(ValidatedConfig(self))
    }

    /// Load from YAML file (v1 schema)
    pub fn from_yaml(path: &Path) -> ConfigResult<ValidatedConfig> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load from YAML text (v1 schema)
    pub fn from_yaml_str(content: &str) -> ConfigResult<ValidatedConfig> {
        let export: ConfigExportV1 = serde_yaml::from_str(content)?;

        match export.version {
            None => return Err(ConfigError::MissingVersion),
            Some(CONFIG_VERSION) => {}
            Some(found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: vec![CONFIG_VERSION],
                })
            }
        }

        let mut config = Self::default();
        if let Some(modules) = export.import_modules {
            config.import_modules = modules;
        }
        if let Some(base) = export.base_object_type {
            config.base_object_type = base;
        }
        if let Some(ext) = export.output_extension {
            config.output_extension = ext;
        }
        if let Some(ext) = export.input_extension {
            config.input_extension = ext;
        }
        if let Some(parallel) = export.parallel {
            config.parallel = parallel;
        }
        if export.workers.is_some() {
            config.workers = export.workers;
        }

        config.build()
    }

    /// Export as YAML (v1 schema)
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let export = ConfigExportV1 {
            version: Some(CONFIG_VERSION),
            import_modules: Some(self.import_modules.clone()),
            base_object_type: Some(self.base_object_type.clone()),
            output_extension: Some(self.output_extension.clone()),
            input_extension: Some(self.input_extension.clone()),
            parallel: Some(self.parallel),
            workers: self.workers,
        };

        serde_yaml::to_string(&export).map_err(ConfigError::Yaml)
    }

    /// Emitter settings derived from this configuration
    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            import_modules: self.import_modules.clone(),
            base_object_type: self.base_object_type.clone(),
        }
    }
}

fn validate_extension(field: &str, ext: &str) -> ConfigResult<()> {
    if ext.is_empty() {
        return Err(ConfigError::validation(format!("{} must not be empty", field)));
    }
    if ext.starts_with('.') {
        return Err(ConfigError::validation(format!(
            "{} must not start with '.' (got '{}')",
            field, ext
        )));
    }
    Ok(())
}

impl Validatable for ClassbindConfig {
    fn validate(&self) -> ConfigResult<()> {
        validate_extension("output_extension", &self.output_extension)?;
        validate_extension("input_extension", &self.input_extension)?;

        if self.base_object_type.trim().is_empty() {
            return Err(ConfigError::validation("base_object_type must not be empty"));
        }

        if let Some(module) = self
            .import_modules
            .iter()
            .find(|m| m.trim().is_empty() || m.chars().any(char::is_whitespace))
        {
            return Err(ConfigError::validation(format!(
                "import module '{}' must be a non-empty name without whitespace",
                module
            )));
        }

        if let Some(workers) = self.workers {
            if workers == 0 || workers > MAX_WORKERS {
                return Err(ConfigError::range_with_hint(
                    "workers",
                    workers,
                    1,
                    MAX_WORKERS,
                    "Omit 'workers' to use the default pool size",
                ));
            }
        }

        Ok(())
    }

    fn config_name(&self) -> &'static str {
        "ClassbindConfig"
    }
}

/// Validated configuration (immutable, safe to use)
#[derive(Debug, Clone)]
pub struct ValidatedConfig(ClassbindConfig);

impl ValidatedConfig {
    /// Unwrap the validated config
    pub fn into_inner(self) -> ClassbindConfig {
        self.0
    }

    /// Get a reference to the inner config
    pub fn as_inner(&self) -> &ClassbindConfig {
        &self.0
    }
}
