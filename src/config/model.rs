//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for btdiff.
///
/// This struct represents the contents of `.btdiff.yaml`.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Selection settings
    // =========================================================================
    /// Tree preferred when no tree is requested and hint scores tie.
    #[serde(default = "default_tree")]
    pub default_tree: String,

    /// Node identifiers always used as selection hints.
    #[serde(default)]
    pub hints: Vec<String>,

    // =========================================================================
    // Comparison settings
    // =========================================================================
    /// Regexes of attribute names excluded from content comparison.
    #[serde(default)]
    pub ignore_attributes: Vec<String>,

    // =========================================================================
    // Output settings
    // =========================================================================
    /// Report format used when `--format` is not given.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Whether reports list unchanged nodes.
    #[serde(default)]
    pub show_unchanged: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tree: default_tree(),
            hints: Vec::new(),
            ignore_attributes: Vec::new(),
            output_format: OutputFormat::default(),
            show_unchanged: false,
        }
    }
}
