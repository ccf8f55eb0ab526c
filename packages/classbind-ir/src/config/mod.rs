//! Configuration system
//!
//! Defaults cover the common case; a versioned YAML file (v1) overrides
//! individual settings.
//!
//! ```rust,ignore
//! use classbind_ir::config::ClassbindConfig;
//!
//! let config = ClassbindConfig::default().build()?;
//! let config = ClassbindConfig::from_yaml(Path::new("classbind.yaml"))?;
//! ```

pub mod classbind_config;
pub mod error;
pub mod io;
pub mod validation;

// Re-exports
pub use classbind_config::{ClassbindConfig, ValidatedConfig, CONFIG_VERSION, MAX_WORKERS};
pub use error::{ConfigError, ConfigResult};
pub use io::ConfigExportV1;
pub use validation::Validatable;
