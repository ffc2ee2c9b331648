//! CLI configuration
//!
//! Layered as defaults, then an optional YAML file, then command-line flags.

use crate::error::{CliError, CliResult};
use keycalc::config::EditorConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    /// Settings handed to every editor the CLI creates
    pub editor: EditorConfig,
    /// Print the display after every key in `press`
    pub echo_steps: bool,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses configuration from YAML text
    pub fn from_yaml(yaml: &str) -> CliResult<Self> {
        // an empty document deserializes as unit, not as a map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Loads configuration from a YAML file
    pub fn load(path: &Path) -> CliResult<Self> {
        let yaml = std::fs::read_to_string(path).map_err(|e| {
            CliError::config(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_yaml(&yaml)
    }

    /// Renders the configuration as YAML
    pub fn to_yaml(&self) -> CliResult<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Set result precision
    #[must_use]
    pub fn with_precision(mut self, precision: Option<usize>) -> Self {
        self.editor = self.editor.with_precision(precision);
        self
    }

    /// Set step echo
    #[must_use]
    pub const fn with_echo_steps(mut self, echo_steps: bool) -> Self {
        self.echo_steps = echo_steps;
        self
    }

    /// Applies command-line overrides; absent flags keep the loaded values
    #[must_use]
    pub fn with_overrides(self, precision: Option<usize>, steps: bool) -> Self {
        let config = match precision {
            Some(p) => self.with_precision(Some(p)),
            None => self,
        };
        if steps {
            config.with_echo_steps(true)
        } else {
            config
        }
    }
}
