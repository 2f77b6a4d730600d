//! `[output]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [output]
//! dir = "icons"       # Batch output directory
//! manifest = true     # Write manifest.json next to the icons
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Batch output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    pub dir: PathBuf,
    pub manifest: bool,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("icons"),
            manifest: true,
        }
    }
}
