//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::compare::CompareOptions;
use crate::error::{BtDiffError, Result};
use regex::Regex;
use std::path::Path;

/// File looked up in the current directory when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = ".btdiff.yaml";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(BtDiffError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            BtDiffError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Resolve the effective config.
    ///
    /// An explicit path must exist. Without one, `.btdiff.yaml` in the current
    /// directory is used when present, else the defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let local = Path::new(CONFIG_FILE_NAME);
        if local.is_file() {
            return Self::load(local);
        }

        tracing::debug!("no config file found, using defaults");
        Ok(Self::default())
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // Treat an empty file as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| BtDiffError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            BtDiffError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `default_tree` must be non-empty
    /// - every `ignore_attributes` entry must be a valid regex
    pub fn validate(&self) -> Result<()> {
        if self.default_tree.trim().is_empty() {
            return Err(BtDiffError::UserError(
                "config validation failed: default_tree must be non-empty".to_string(),
            ));
        }

        for pattern in &self.ignore_attributes {
            if let Err(e) = Regex::new(pattern) {
                return Err(BtDiffError::UserError(format!(
                    "config validation failed: invalid ignore_attributes pattern '{}': {}",
                    pattern, e
                )));
            }
        }

        Ok(())
    }

    /// Comparison options derived from `ignore_attributes`.
    pub fn compare_options(&self) -> Result<CompareOptions> {
        CompareOptions::ignoring(&self.ignore_attributes).map_err(|e| {
            BtDiffError::UserError(format!("invalid ignore_attributes pattern: {}", e))
        })
    }
}
