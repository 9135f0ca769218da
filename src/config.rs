//! TOML output configuration for the `segsieve` binary.
//!
//! Controls how prime sequences are laid out: how long a sequence may get
//! before it is summarized instead of printed, how many columns per row, and
//! how wide each column is. Every field has a default, so an empty file (or no
//! file) reproduces the stock layout.
//!
//! ```toml
//! [output]
//! print_limit = 1000
//! columns = 6
//! column_width = 12
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level configuration parsed from a TOML file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SieveConfig {
    #[serde(default)]
    pub output: OutputConfig,
}

/// The `[output]` section: column layout for printed sequences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Sequences longer than this are reported by length only.
    pub print_limit: usize,
    /// Values per row.
    pub columns: usize,
    /// Right-aligned width of each value.
    pub column_width: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            print_limit: 1_000,
            columns: 6,
            column_width: 12,
        }
    }
}

impl SieveConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SieveConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Load `path` if given, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.output.columns == 0 {
            anyhow::bail!("output.columns must be at least 1");
        }
        Ok(())
    }
}
