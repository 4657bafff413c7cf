//! Deployment configuration.
//!
//! # Responsibility
//! - Load registry and logging settings from a JSON document.
//! - Validate configured categories through the same path as code-built ones.
//!
//! # Invariants
//! - Every field has a default; an empty document `{}` is a valid config.
//! - Unknown fields are rejected so typos surface at load time.

use crate::category::defaults::DEFAULT_CATEGORIES_PRIORITY;
use crate::logging::default_log_level;
use crate::model::category::Category;
use serde::Deserialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Default priority for categories declared in configuration.
pub const DEFAULT_CONFIGURED_PRIORITY: i32 = 500;

/// Registry-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    /// Serve the baseline standalone/nested/uncategorized set.
    pub include_default_categories: bool,
    pub default_provider_priority: i32,
    pub configured_provider_priority: i32,
    /// Extra categories served by a configuration-backed provider.
    pub categories: Vec<Category>,
    pub logging: Option<LoggingConfig>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            include_default_categories: true,
            default_provider_priority: DEFAULT_CATEGORIES_PRIORITY,
            configured_provider_priority: DEFAULT_CONFIGURED_PRIORITY,
            categories: Vec::new(),
            logging: None,
        }
    }
}

impl CatalogConfig {
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(raw).map_err(ConfigError::Parse)
    }
}

/// File logging settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    #[serde(default = "default_level_string")]
    pub level: String,
    /// Absolute log directory.
    pub dir: String,
}

fn default_level_string() -> String {
    default_log_level().to_string()
}

/// Reads and parses one JSON config file.
pub fn load_config(path: &Path) -> Result<CatalogConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    CatalogConfig::from_json_str(&raw)
}

/// Configuration loading errors.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
        }
    }
}
