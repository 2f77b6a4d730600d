//! Icon variants and their output formats.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which identicon pipeline to run.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum IconKind {
    /// 4x4 shape grid, rendered as SVG
    #[default]
    Grid,
    /// 19 coloured dots, rendered as PNG or SVG
    Dots,
}

impl IconKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Dots => "dots",
        }
    }
}

impl fmt::Display for IconKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Output format of the circular identicon.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DotsFormat {
    #[default]
    Png,
    Svg,
}

impl DotsFormat {
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Svg => "svg",
        }
    }
}
