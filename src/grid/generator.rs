//! Grid identicon generator.
//!
//! # Layout
//!
//! The icon is a 4x4 grid of square cells centered on the canvas:
//!
//! ```text
//! +----+----+----+----+
//! | C  | S  | S  | C  |     C = corner pass  (outer shape, palette slot 1)
//! +----+----+----+----+     S = side pass    (outer shape, palette slot 0)
//! | S  | M  | M  | S  |     M = center pass  (center shape, palette slot 2)
//! +----+----+----+----+
//! | S  | M  | M  | S  |
//! +----+----+----+----+
//! | C  | S  | S  | C  |
//! +----+----+----+----+
//! ```
//!
//! # Hash nibbles
//!
//! | Nibble  | Meaning                         |
//! |---------|---------------------------------|
//! | 1       | center shape                    |
//! | 2, 3    | side shape, side rotation       |
//! | 4, 5    | corner shape, corner rotation   |
//! | 8..=10  | palette slot per pass           |
//! | last 7  | hue                             |

use super::color::{LightnessRange, PALETTE_SIZE, Palette};
use super::graphics::{Graphics, Renderer, Transform};
use super::shapes::{CenterShape, OuterShape, Shape};
use super::svg::SvgRenderer;
use crate::error::{IconError, Result, check_size};
use crate::hash::{HashString, normalize};
use serde::{Deserialize, Serialize};

const SIDE_CELLS: [(u8, u8); 8] = [
    (1, 0),
    (2, 0),
    (2, 3),
    (1, 3),
    (0, 1),
    (3, 1),
    (3, 2),
    (0, 2),
];
const CORNER_CELLS: [(u8, u8); 4] = [(0, 0), (3, 0), (3, 3), (0, 3)];
const CENTER_CELLS: [(u8, u8); 4] = [(1, 1), (2, 1), (2, 2), (1, 2)];

/// Nibble index of the first palette slot selector.
const COLOR_NIBBLE: usize = 8;

// ============================================================================
// Style
// ============================================================================

/// Visual parameters of a grid identicon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridStyle {
    /// Fraction of the size left empty on each side, in `[0, 0.5)`.
    pub padding: f32,
    pub saturation: f32,
    pub color_lightness: LightnessRange,
    pub grayscale_lightness: LightnessRange,
    /// `#RRGGBB` or `#RRGGBBAA`; no background when `None`.
    pub background: Option<String>,
}

impl Default for GridStyle {
    fn default() -> Self {
        Self {
            padding: 0.0,
            saturation: 0.5,
            color_lightness: LightnessRange::COLOR,
            grayscale_lightness: LightnessRange::GRAYSCALE,
            background: None,
        }
    }
}

impl GridStyle {
    pub fn with_padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = Some(background.into());
        self
    }

    /// Reject paddings that leave no room for the grid.
    pub fn validate(&self) -> Result<()> {
        if !self.padding.is_finite() || !(0.0..0.5).contains(&self.padding) {
            return Err(IconError::InvalidPadding(self.padding));
        }
        Ok(())
    }

    /// Stable textual key, used for cache lookups.
    pub fn fingerprint(&self) -> String {
        format!(
            "{}:{}:{}-{}:{}-{}:{}",
            self.padding,
            self.saturation,
            self.color_lightness.min,
            self.color_lightness.max,
            self.grayscale_lightness.min,
            self.grayscale_lightness.max,
            self.background.as_deref().unwrap_or("")
        )
    }
}

// ============================================================================
// Geometry
// ============================================================================

/// Pixel geometry of the 4x4 grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub cell: f32,
    pub x: f32,
    pub y: f32,
}

impl GridGeometry {
    pub fn new(size: u32, padding: f32) -> Self {
        let pad = (size as f32 * padding).floor();
        let inner = size as f32 - 2.0 * pad;
        let cell = (inner / 4.0).floor();
        let offset = (pad + inner / 2.0 - cell * 2.0).floor();
        Self {
            cell,
            x: offset,
            y: offset,
        }
    }

    fn transform(&self, (col, row): (u8, u8), rotation: u8) -> Transform {
        Transform::new(
            self.x + f32::from(col) * self.cell,
            self.y + f32::from(row) * self.cell,
            self.cell,
            rotation,
        )
    }
}

// ============================================================================
// Colour selection
// ============================================================================

/// Palette slots that must not appear together.
const CONFLICTS: [[usize; 2]; 2] = [
    [Palette::DARK_GRAY, Palette::DARK_COLOR],
    [Palette::LIGHT_GRAY, Palette::LIGHT_COLOR],
];

/// Pick a palette slot for each of the three passes.
///
/// A candidate conflicting with an earlier pick is replaced by the mid colour.
pub fn select_colors(hash: &HashString) -> [usize; 3] {
    let mut selected: Vec<usize> = Vec::with_capacity(3);
    for i in 0..3 {
        let mut index = hash.nibble(COLOR_NIBBLE + i) as usize % PALETTE_SIZE;
        let conflicts = CONFLICTS
            .iter()
            .any(|group| group.contains(&index) && group.iter().any(|g| selected.contains(g)));
        if conflicts {
            index = Palette::MID_COLOR;
        }
        selected.push(index);
    }
    [selected[0], selected[1], selected[2]]
}

// ============================================================================
// Generator
// ============================================================================

/// One render pass over a group of cells.
struct Pass {
    color_slot: usize,
    shape: Shape,
    rotation_nibble: Option<usize>,
    cells: &'static [(u8, u8)],
}

/// Renders a normalized hash into any [`Renderer`].
#[derive(Debug, Clone)]
pub struct IconGenerator {
    hash: HashString,
    palette: Palette,
    colors: [usize; 3],
    geometry: GridGeometry,
    background: Option<String>,
}

impl IconGenerator {
    pub fn new(hash: HashString, size: u32, style: &GridStyle) -> Self {
        let palette = Palette::build(
            hash.hue(),
            style.saturation,
            &style.color_lightness,
            &style.grayscale_lightness,
        );
        Self {
            colors: select_colors(&hash),
            geometry: GridGeometry::new(size, style.padding),
            background: style.background.clone(),
            hash,
            palette,
        }
    }

    pub fn hash(&self) -> &HashString {
        &self.hash
    }

    /// Fill colour of each pass (sides, corners, center).
    pub fn pass_colors(&self) -> [&str; 3] {
        self.colors.map(|slot| self.palette.get(slot))
    }

    fn passes(&self) -> [Pass; 3] {
        let hash = &self.hash;
        [
            Pass {
                color_slot: self.colors[0],
                shape: Shape::Outer(OuterShape::from_nibble(hash.nibble(2))),
                rotation_nibble: Some(3),
                cells: &SIDE_CELLS,
            },
            Pass {
                color_slot: self.colors[1],
                shape: Shape::Outer(OuterShape::from_nibble(hash.nibble(4))),
                rotation_nibble: Some(5),
                cells: &CORNER_CELLS,
            },
            Pass {
                color_slot: self.colors[2],
                shape: Shape::Center(CenterShape::from_nibble(hash.nibble(1))),
                rotation_nibble: None,
                cells: &CENTER_CELLS,
            },
        ]
    }

    pub fn render<R: Renderer>(&self, renderer: &mut R) {
        if let Some(background) = &self.background {
            renderer.set_background(background);
        }

        let mut g = Graphics::new(renderer);
        for pass in self.passes() {
            let mut rotation = pass.rotation_nibble.map_or(0, |i| self.hash.nibble(i));
            g.renderer().begin_shape(self.palette.get(pass.color_slot));
            for (index, &cell) in pass.cells.iter().enumerate() {
                g.set_transform(self.geometry.transform(cell, rotation));
                rotation = rotation.wrapping_add(1);
                pass.shape.draw(&mut g, self.geometry.cell, Some(index));
            }
            g.renderer().end_shape();
        }
    }
}

/// Render `hash_or_seed` as an SVG document.
pub fn to_svg_with_style(hash_or_seed: &str, size: u32, style: &GridStyle) -> Result<String> {
    check_size(size)?;
    style.validate()?;

    let generator = IconGenerator::new(normalize(hash_or_seed), size, style);
    let mut renderer = SvgRenderer::new(size);
    generator.render(&mut renderer);
    Ok(renderer.into_svg())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn svg(seed: &str, size: u32) -> String {
        to_svg_with_style(seed, size, &GridStyle::default()).unwrap()
    }

    #[test]
    fn test_geometry() {
        let g = GridGeometry::new(100, 0.0);
        assert_eq!((g.cell, g.x, g.y), (25.0, 0.0, 0.0));

        let g = GridGeometry::new(48, 0.08);
        // pad 3, inner 42, cell 10, offset floor(3 + 21 - 20)
        assert_eq!((g.cell, g.x), (10.0, 4.0));
    }

    #[test]
    fn test_select_colors_avoids_conflicts() {
        // nibbles 8..=10 = 0, 4, 1
        let hash = normalize("00000000041000");
        assert_eq!(select_colors(&hash), [0, 1, 1]);

        // nibbles 8..=10 = 2, 3, 2
        let hash = normalize("00000000232000");
        assert_eq!(select_colors(&hash), [2, 1, 1]);

        // the first pick is never replaced
        let hash = normalize("00000000442000");
        assert_eq!(select_colors(&hash), [4, 1, 2]);
    }

    #[test]
    fn test_select_colors_wraps_modulo_palette() {
        // nibbles 8..=10 = 10, 6, 12
        let hash = normalize("00000000a6c000");
        assert_eq!(select_colors(&hash), [0, 1, 2]);
    }

    #[test]
    fn test_deterministic() {
        for seed in ["Alice", "seed-21", "0123456789ab"] {
            assert_eq!(svg(seed, 64), svg(seed, 64));
        }
    }

    #[test]
    fn test_paths_are_sorted() {
        for seed in ["Alice", "Bob", "deadbeef", "key-72"] {
            let out = svg(seed, 100);
            let fills: Vec<&str> = out
                .split(r#"<path fill=""#)
                .skip(1)
                .map(|s| &s[..7])
                .collect();
            let mut sorted = fills.clone();
            sorted.sort_unstable();
            sorted.dedup();
            assert_eq!(fills, sorted, "unsorted fills for {seed}");
        }
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert!(matches!(
            to_svg_with_style("Alice", 0, &GridStyle::default()),
            Err(IconError::InvalidSize(0))
        ));
        for padding in [-0.1, 0.5, f32::NAN, f32::INFINITY] {
            let style = GridStyle::default().with_padding(padding);
            assert!(matches!(
                to_svg_with_style("Alice", 64, &style),
                Err(IconError::InvalidPadding(_))
            ));
        }
    }

    #[test]
    fn test_background_rect() {
        let style = GridStyle::default().with_background("#ffffff");
        let out = to_svg_with_style("Alice", 100, &style).unwrap();
        assert!(out.contains(r##"<rect width="100%" height="100%" fill="#ffffff" opacity="1.00"/>"##));

        let style = GridStyle::default().with_background("white");
        let out = to_svg_with_style("Alice", 100, &style).unwrap();
        assert!(out.contains(r##"fill="#000000" opacity="1.00""##));
    }

    #[test]
    fn test_pass_colors_come_from_palette() {
        let generator = IconGenerator::new(normalize("Alice"), 100, &GridStyle::default());
        let colors = generator.pass_colors();
        assert!(colors.iter().all(|c| c.starts_with('#') && c.len() == 7));
        assert!(svg("Alice", 100).contains(colors[0]));
    }

    // Reference renderings at size 100 with no padding.
    const ALICE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100" preserveAspectRatio="xMidYMid meet"><path fill="#32995e" d="M0 0L25 0L25 25ZM100 0L100 25L75 25ZM100 100L75 100L75 75ZM0 100L0 75L25 75Z"/><path fill="#66cc91" d="M25 25L50 25L50 50L25 50ZM41 47L47 35L35 35ZM75 25L75 50L50 50L50 25ZM52 41L65 47L65 35ZM75 75L50 75L50 50L75 50ZM58 52L52 65L65 65ZM25 75L25 50L50 50L50 75ZM47 58L35 52L35 65Z"/><path fill="#e5e5e5" d="M29 12a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M54 12a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M54 87a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M29 87a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M4 37a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M79 37a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M79 62a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M4 62a8,8 0 1,0 16,0a8,8 0 1,0 -16,0"/></svg>"##;
    const BOB: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100" preserveAspectRatio="xMidYMid meet"><path fill="#a85b38" d="M37 25L25 12L37 0L50 12ZM50 12L62 0L75 12L62 25ZM62 75L75 87L62 100L50 87ZM50 87L37 100L25 87L37 75ZM12 50L0 37L12 25L25 37ZM75 37L87 25L100 37L87 50ZM87 50L100 62L87 75L75 62ZM25 62L12 75L0 62L12 50Z"/><path fill="#d19275" d="M25 25L50 25L50 50L25 50ZM34 40a6,6 0 1,0 13,0a6,6 0 1,0 -13,0M75 25L75 50L50 50L50 25ZM53 40a6,6 0 1,0 13,0a6,6 0 1,0 -13,0M75 75L50 75L50 50L75 50ZM53 59a6,6 0 1,0 13,0a6,6 0 1,0 -13,0M25 75L25 50L50 50L50 75ZM34 59a6,6 0 1,0 13,0a6,6 0 1,0 -13,0"/><path fill="#e5e5e5" d="M0 25L0 0L25 0ZM75 0L100 0L100 25ZM100 75L100 100L75 100ZM25 100L0 100L0 75Z"/></svg>"##;
    const DEADBEEF: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100" preserveAspectRatio="xMidYMid meet"><path fill="#729932" d="M4 12a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M79 12a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M79 87a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M4 87a8,8 0 1,0 16,0a8,8 0 1,0 -16,0"/><path fill="#a5cc66" d="M50 25L25 25L25 12ZM50 25L50 0L62 0ZM50 75L75 75L75 87ZM50 75L50 100L37 100ZM25 50L0 50L0 37ZM75 50L75 25L87 25ZM75 50L100 50L100 62ZM25 50L25 75L12 75Z"/><path fill="#d2e5b2" d="M35 41a6,6 0 1,0 12,0a6,6 0 1,0 -12,0M53 41a6,6 0 1,0 12,0a6,6 0 1,0 -12,0M53 59a6,6 0 1,0 12,0a6,6 0 1,0 -12,0M35 59a6,6 0 1,0 12,0a6,6 0 1,0 -12,0"/></svg>"##;
    const DEADBEEF123: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100" preserveAspectRatio="xMidYMid meet"><path fill="#ab84d6" d="M50 12L37 25L25 12L37 0ZM62 25L50 12L62 0L75 12ZM50 87L62 75L75 87L62 100ZM37 75L50 87L37 100L25 87ZM25 37L12 50L0 37L12 25ZM87 50L75 37L87 25L100 37ZM75 62L87 50L100 62L87 75ZM12 50L25 62L12 75L0 62ZM25 25L50 25L50 29L39 50L25 50ZM75 25L75 50L71 50L50 39L50 25ZM75 75L50 75L50 71L60 50L75 50ZM25 75L25 50L29 50L50 60L50 75Z"/><path fill="#e5e5e5" d="M4 12a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M79 12a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M79 87a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M4 87a8,8 0 1,0 16,0a8,8 0 1,0 -16,0"/></svg>"##;
    const UPPERCASE_HEX: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100" preserveAspectRatio="xMidYMid meet"><path fill="#3d6ab7" d="M0 25L0 0L25 0ZM75 0L100 0L100 25ZM100 75L100 100L75 100ZM25 100L0 100L0 75Z"/><path fill="#84a3d6" d="M50 25L50 45L38 25ZM75 50L55 50L75 38ZM50 75L50 55L62 75ZM25 50L45 50L25 62Z"/><path fill="#c1d1ea" d="M25 12L37 0L50 12L37 25ZM62 0L75 12L62 25L50 12ZM75 87L62 100L50 87L62 75ZM37 100L25 87L37 75L50 87ZM0 37L12 25L25 37L12 50ZM87 25L100 37L87 50L75 37ZM100 62L87 75L75 62L87 50ZM12 75L0 62L12 50L25 62Z"/></svg>"##;
    const SHA1_OF_DEADBEEF: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100" preserveAspectRatio="xMidYMid meet"><path fill="#729932" d="M4 12a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M79 12a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M79 87a8,8 0 1,0 16,0a8,8 0 1,0 -16,0M4 87a8,8 0 1,0 16,0a8,8 0 1,0 -16,0"/><path fill="#a5cc66" d="M50 25L25 25L25 12ZM50 25L50 0L62 0ZM50 75L75 75L75 87ZM50 75L50 100L37 100ZM25 50L0 50L0 37ZM75 50L75 25L87 25ZM75 50L100 50L100 62ZM25 50L25 75L12 75Z"/><path fill="#d2e5b2" d="M35 41a6,6 0 1,0 12,0a6,6 0 1,0 -12,0M53 41a6,6 0 1,0 12,0a6,6 0 1,0 -12,0M53 59a6,6 0 1,0 12,0a6,6 0 1,0 -12,0M35 59a6,6 0 1,0 12,0a6,6 0 1,0 -12,0"/></svg>"##;

    #[test]
    fn test_reference_renderings() {
        let cases = [
            ("Alice", ALICE),
            ("Bob", BOB),
            ("deadbeef", DEADBEEF),
            ("deadbeef123", DEADBEEF123),
            ("0123456789ABCDEF", UPPERCASE_HEX),
            ("f49cf6381e322b147053b74e4500af8533ac1e4c", SHA1_OF_DEADBEEF),
        ];
        for (seed, expected) in cases {
            assert_eq!(svg(seed, 100), expected, "mismatch for {seed}");
        }
    }

    #[test]
    fn test_seed_and_its_hash_render_identically() {
        assert_eq!(svg("deadbeef", 100), svg("f49cf6381e322b147053b74e4500af8533ac1e4c", 100));
    }

    #[test]
    fn test_padded_renderings() {
        let style = GridStyle::default().with_padding(0.08);
        assert_eq!(
            to_svg_with_style("X", 48, &style).unwrap(),
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="48" height="48" viewBox="0 0 48 48" preserveAspectRatio="xMidYMid meet"><path fill="#4c4c4c" d="M15 9a3,3 0 1,0 6,0a3,3 0 1,0 -6,0M25 9a3,3 0 1,0 6,0a3,3 0 1,0 -6,0M25 39a3,3 0 1,0 6,0a3,3 0 1,0 -6,0M15 39a3,3 0 1,0 6,0a3,3 0 1,0 -6,0M5 19a3,3 0 1,0 6,0a3,3 0 1,0 -6,0M35 19a3,3 0 1,0 6,0a3,3 0 1,0 -6,0M35 29a3,3 0 1,0 6,0a3,3 0 1,0 -6,0M5 29a3,3 0 1,0 6,0a3,3 0 1,0 -6,0"/><path fill="#8a84d6" d="M14 9L9 14L4 9L9 4ZM39 14L34 9L39 4L44 9ZM34 39L39 34L44 39L39 44ZM9 34L14 39L9 44L4 39ZM14 14L24 14L24 15L19 24L14 24ZM34 14L34 24L32 24L24 19L24 14ZM34 34L24 34L24 32L28 24L34 24ZM14 34L14 24L15 24L24 28L24 34Z"/></svg>"##
        );

        let style = GridStyle::default().with_padding(0.1);
        assert_eq!(
            to_svg_with_style("seed-21", 64, &style).unwrap(),
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="64" height="64" viewBox="0 0 64 64" preserveAspectRatio="xMidYMid meet"><path fill="#8a9932" d="M21 12a4,4 0 1,0 8,0a4,4 0 1,0 -8,0M34 12a4,4 0 1,0 8,0a4,4 0 1,0 -8,0M34 51a4,4 0 1,0 8,0a4,4 0 1,0 -8,0M21 51a4,4 0 1,0 8,0a4,4 0 1,0 -8,0M8 25a4,4 0 1,0 8,0a4,4 0 1,0 -8,0M47 25a4,4 0 1,0 8,0a4,4 0 1,0 -8,0M47 38a4,4 0 1,0 8,0a4,4 0 1,0 -8,0M8 38a4,4 0 1,0 8,0a4,4 0 1,0 -8,0"/><path fill="#bdcc66" d="M24 32a7,7 0 1,0 15,0a7,7 0 1,0 -15,0"/><path fill="#dee5b2" d="M8 12a4,4 0 1,0 8,0a4,4 0 1,0 -8,0M47 12a4,4 0 1,0 8,0a4,4 0 1,0 -8,0M47 51a4,4 0 1,0 8,0a4,4 0 1,0 -8,0M8 51a4,4 0 1,0 8,0a4,4 0 1,0 -8,0"/></svg>"##
        );
    }
}
