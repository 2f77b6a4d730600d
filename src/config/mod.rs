//! Configuration management for `sigil.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── grid       # [grid]
//! │   ├── dots       # [dots]
//! │   └── output     # [output]
//! ├── error          # ConfigError
//! ├── util           # find_config_file
//! └── mod.rs         # SigilConfig (this file)
//! ```
//!
//! Every section is optional. A missing file means all defaults; command-line
//! flags are applied on top by the caller.

mod error;
pub mod section;
mod util;

pub use error::ConfigError;
pub use section::{DotsSection, GridSection, OutputSection};
pub use util::{find_config_file, find_config_file_from};

use crate::batch::BatchOptions;
use crate::dots::KeyEncoding;
use crate::kind::IconKind;
use crate::log;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Default config file name.
pub const CONFIG_FILE: &str = "sigil.toml";

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sigil.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SigilConfig {
    /// Path the configuration was read from (internal use only)
    #[serde(skip)]
    pub config_path: Option<PathBuf>,

    /// Grid identicon settings
    #[serde(default)]
    pub grid: GridSection,

    /// Circular identicon settings
    #[serde(default)]
    pub dots: DotsSection,

    /// Batch output settings
    #[serde(default)]
    pub output: OutputSection,
}

impl SigilConfig {
    /// Locate `config_name` upward from cwd and load it.
    ///
    /// Falls back to defaults when no file is found.
    pub fn load(config_name: &Path) -> Result<Self> {
        let config = match find_config_file(config_name) {
            Some(path) => {
                crate::debug!("config"; "loading {}", path.display());
                Self::from_path(&path)?
            }
            None => {
                crate::debug!("config"; "{} not found, using defaults", config_name.display());
                Self::default()
            }
        };
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(content: &str) -> Result<Self> {
        let (config, _) = Self::parse_with_ignored(content)?;
        Ok(config)
    }

    /// Read and parse a config file, warning about unknown fields.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let (mut config, ignored) = Self::parse_with_ignored(&content)?;
        if !ignored.is_empty() {
            Self::print_unknown_fields_warning(&ignored, path);
        }

        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    fn parse_with_ignored(content: &str) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let deserializer = toml::Deserializer::new(content);
        let config = serde_ignored::deserialize(deserializer, |path: serde_ignored::Path| {
            ignored.push(path.to_string());
        })?;
        Ok((config, ignored))
    }

    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        log!("warning"; "unknown fields in {}, ignored:", path.display());
        for field in fields {
            eprintln!("- {field}");
        }
    }

    /// Check every numeric range, reporting all problems at once.
    ///
    /// An unparseable background is only a warning.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(warning) = self.grid.background_warning() {
            log!("warning"; "{}", warning);
        }

        let mut problems = Vec::new();
        self.grid.validate(&mut problems);
        self.dots.validate(&mut problems);

        if problems.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(problems.join("; ")))
        }
    }

    /// Batch options for `kind`, taken from the `[grid]` and `[dots]` sections.
    pub fn batch_options(&self, kind: IconKind, encoding: KeyEncoding) -> BatchOptions {
        BatchOptions {
            kind,
            grid_size: self.grid.size,
            grid_style: self.grid.style(),
            dots_size: self.dots.size,
            dots_format: self.dots.format,
            encoding,
        }
    }
}

/// Parse `content`, asserting that every field is known.
#[cfg(test)]
pub fn test_parse_config(content: &str) -> SigilConfig {
    let (parsed, ignored) = SigilConfig::parse_with_ignored(content).unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================
