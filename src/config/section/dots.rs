//! `[dots]` section configuration.
//!
//! # Example
//!
//! ```toml
//! [dots]
//! size = 64           # Pixels
//! format = "png"      # png | svg
//! ```

use crate::error::MAX_SIZE;
use crate::kind::DotsFormat;
use serde::{Deserialize, Serialize};

/// Circular identicon settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DotsSection {
    pub size: u32,
    pub format: DotsFormat,
}

impl Default for DotsSection {
    fn default() -> Self {
        Self {
            size: 64,
            format: DotsFormat::Png,
        }
    }
}

impl DotsSection {
    pub fn validate(&self, problems: &mut Vec<String>) {
        if !(1..=MAX_SIZE).contains(&self.size) {
            problems.push(format!("dots.size must be in [1, {MAX_SIZE}], got {}", self.size));
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::config::test_parse_config;
    use crate::kind::DotsFormat;

    #[test]
    fn test_dots_section() {
        let config = test_parse_config("[dots]\nsize = 256\nformat = \"svg\"");
        assert_eq!(config.dots.size, 256);
        assert_eq!(config.dots.format, DotsFormat::Svg);
    }

    #[test]
    fn test_dots_section_defaults() {
        let config = test_parse_config("");
        assert_eq!(config.dots.size, 64);
        assert_eq!(config.dots.format, DotsFormat::Png);
    }

    #[test]
    fn test_dots_size_bounds() {
        for (size, ok) in [(0u32, false), (1, true), (4096, true), (4097, false), (u32::MAX, false)] {
            let config = test_parse_config(&format!("[dots]\nsize = {size}"));
            let mut problems = Vec::new();
            config.dots.validate(&mut problems);
            assert_eq!(problems.is_empty(), ok, "size {size}");
        }
    }

    #[test]
    fn test_dots_unknown_format_rejected() {
        let result = crate::config::SigilConfig::from_str("[dots]\nformat = \"gif\"");
        assert!(result.is_err());
    }
}
