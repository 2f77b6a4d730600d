//! HSL colour math and palette construction for the grid identicon.
//!
//! All arithmetic is done in `f32`; changing the float width changes the
//! last digit of some channels and breaks cross-platform equality.

use serde::{Deserialize, Serialize};

/// Lightness correction per hue sextant (red, yellow, green, cyan, blue, magenta, red).
const CORRECTORS: [f32; 7] = [0.55, 0.5, 0.5, 0.46, 0.6, 0.55, 0.55];

/// Number of entries in a [`Palette`].
pub const PALETTE_SIZE: usize = 5;

/// Format a channel value as two lowercase hex digits (truncating).
#[inline]
fn channel_hex(value: f32) -> String {
    let v = value.floor().clamp(0.0, 255.0) as u8;
    format!("{v:02x}")
}

/// HSL hue-to-channel helper. `h` is expressed in sextants (`[0, 6)`).
pub fn hue_to_rgb(m1: f32, m2: f32, h: f32) -> String {
    let h = if h < 0.0 {
        h + 6.0
    } else if h > 6.0 {
        h - 6.0
    } else {
        h
    };
    let value = if h < 1.0 {
        m1 + (m2 - m1) * h
    } else if h < 3.0 {
        m2
    } else if h < 4.0 {
        m1 + (m2 - m1) * (4.0 - h)
    } else {
        m1
    };
    channel_hex(255.0 * value)
}

/// Convert HSL (all in `[0, 1]`) to `#rrggbb`.
pub fn hsl(h: f32, s: f32, l: f32) -> String {
    if s == 0.0 {
        let gray = channel_hex(l * 255.0);
        return format!("#{gray}{gray}{gray}");
    }

    let m2 = if l <= 0.5 { l * (s + 1.0) } else { l + s - l * s };
    let m1 = l * 2.0 - m2;
    format!(
        "#{}{}{}",
        hue_to_rgb(m1, m2, h * 6.0 + 2.0),
        hue_to_rgb(m1, m2, h * 6.0),
        hue_to_rgb(m1, m2, h * 6.0 - 2.0)
    )
}

/// HSL with a hue-dependent lightness correction, so that yellow and
/// blue hues appear equally bright.
pub fn corrected_hsl(h: f32, s: f32, l: f32) -> String {
    let index = (h * 6.0 + 0.5).floor() as usize % CORRECTORS.len();
    let corrector = CORRECTORS[index];
    let l = if l < 0.5 {
        l * corrector * 2.0
    } else {
        corrector + (l - 0.5) * (1.0 - corrector) * 2.0
    };
    hsl(h, s, l)
}

/// Linear lightness mapping from `[0, 1]` into `[min, max]`, clamped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f32; 2]", into = "[f32; 2]")]
pub struct LightnessRange {
    pub min: f32,
    pub max: f32,
}

impl LightnessRange {
    pub const COLOR: Self = Self::new(0.4, 0.8);
    pub const GRAYSCALE: Self = Self::new(0.3, 0.9);

    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Map `value` into the range.
    #[inline]
    pub fn at(&self, value: f32) -> f32 {
        let l = self.min + value * (self.max - self.min);
        l.clamp(0.0, 1.0)
    }

    pub fn is_valid(&self) -> bool {
        (0.0..=1.0).contains(&self.min) && (0.0..=1.0).contains(&self.max)
    }
}

impl From<[f32; 2]> for LightnessRange {
    fn from([min, max]: [f32; 2]) -> Self {
        Self { min, max }
    }
}

impl From<LightnessRange> for [f32; 2] {
    fn from(range: LightnessRange) -> Self {
        [range.min, range.max]
    }
}

/// The five candidate colours of one icon.
///
/// Order: dark gray, mid colour, light gray, light colour, dark colour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette([String; PALETTE_SIZE]);

impl Palette {
    pub const DARK_GRAY: usize = 0;
    pub const MID_COLOR: usize = 1;
    pub const LIGHT_GRAY: usize = 2;
    pub const LIGHT_COLOR: usize = 3;
    pub const DARK_COLOR: usize = 4;

    /// Build the palette for `hue`.
    pub fn build(
        hue: f32,
        saturation: f32,
        color_lightness: &LightnessRange,
        grayscale_lightness: &LightnessRange,
    ) -> Self {
        Self([
            hsl(0.0, 0.0, grayscale_lightness.at(0.0)),
            corrected_hsl(hue, saturation, color_lightness.at(0.5)),
            hsl(0.0, 0.0, grayscale_lightness.at(1.0)),
            corrected_hsl(hue, saturation, color_lightness.at(1.0)),
            corrected_hsl(hue, saturation, color_lightness.at(0.0)),
        ])
    }

    #[inline]
    pub fn get(&self, index: usize) -> &str {
        &self.0[index]
    }

    #[inline]
    pub const fn len(&self) -> usize {
        PALETTE_SIZE
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
