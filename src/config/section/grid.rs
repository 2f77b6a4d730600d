//! `[grid]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [grid]
//! size = 64                        # Pixels
//! padding = 0.08                   # Fraction of size, [0, 0.5)
//! saturation = 0.5                 # [0, 1]
//! color_lightness = [0.4, 0.8]     # [min, max] in [0, 1]
//! grayscale_lightness = [0.3, 0.9]
//! background = "#ffffffff"         # Optional, #RRGGBB or #RRGGBBAA
//! ```

use crate::error::MAX_SIZE;
use crate::grid::{Background, GridStyle, LightnessRange};
use serde::{Deserialize, Serialize};

/// Grid identicon settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSection {
    pub size: u32,
    pub padding: f32,
    pub saturation: f32,
    pub color_lightness: LightnessRange,
    pub grayscale_lightness: LightnessRange,
    pub background: Option<String>,
}

impl Default for GridSection {
    fn default() -> Self {
        let style = GridStyle::default();
        Self {
            size: 64,
            padding: style.padding,
            saturation: style.saturation,
            color_lightness: style.color_lightness,
            grayscale_lightness: style.grayscale_lightness,
            background: style.background,
        }
    }
}

impl GridSection {
    pub fn style(&self) -> GridStyle {
        GridStyle {
            padding: self.padding,
            saturation: self.saturation,
            color_lightness: self.color_lightness,
            grayscale_lightness: self.grayscale_lightness,
            background: self.background.clone(),
        }
    }

    /// Push one message per out-of-range field.
    pub fn validate(&self, problems: &mut Vec<String>) {
        if !(1..=MAX_SIZE).contains(&self.size) {
            problems.push(format!("grid.size must be in [1, {MAX_SIZE}], got {}", self.size));
        }
        if !self.padding.is_finite() || !(0.0..0.5).contains(&self.padding) {
            problems.push(format!("grid.padding must be in [0, 0.5), got {}", self.padding));
        }
        if !(0.0..=1.0).contains(&self.saturation) {
            problems.push(format!("grid.saturation must be in [0, 1], got {}", self.saturation));
        }
        for (name, range) in [
            ("color_lightness", self.color_lightness),
            ("grayscale_lightness", self.grayscale_lightness),
        ] {
            if !range.is_valid() {
                problems.push(format!(
                    "grid.{name} values must be in [0, 1], got [{}, {}]",
                    range.min, range.max
                ));
            }
        }
    }

    /// Backgrounds outside `#RRGGBB[AA]` still render, as opaque black.
    pub fn background_warning(&self) -> Option<String> {
        let value = self.background.as_deref()?;
        (!Background::is_valid(value))
            .then(|| format!("grid.background `{value}` is not #RRGGBB or #RRGGBBAA, using #000000"))
    }
}
