//! SVG output for the grid identicon.
//!
//! Path data is accumulated per fill colour and written in ascending colour
//! order, so the document layout does not depend on render pass order.
//!
//! ```text
//! <svg ...>[<rect .../>]<path fill="#aaaaaa" d="..."/><path fill="#bbbbbb" .../></svg>
//! ```

use super::graphics::{Point, Renderer};
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt::Write;
use std::sync::LazyLock;

static RE_BACKGROUND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}([0-9a-fA-F]{2})?$").unwrap());

// ============================================================================
// Background
// ============================================================================

/// Background fill split into an RGB colour and an opacity.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub color: String,
    pub opacity: f32,
}

impl Background {
    /// Parse `#RRGGBB` or `#RRGGBBAA`; anything else becomes opaque black.
    pub fn parse(value: &str) -> Self {
        if !RE_BACKGROUND.is_match(value) {
            return Self::opaque("#000000");
        }
        let color = &value[..7];
        match value.get(7..9).map(|aa| u8::from_str_radix(aa, 16)) {
            Some(Ok(alpha)) => Self {
                color: color.to_string(),
                opacity: f32::from(alpha) / 255.0,
            },
            _ => Self::opaque(color),
        }
    }

    /// Whether `value` is a background [`Background::parse`] accepts as written.
    pub fn is_valid(value: &str) -> bool {
        RE_BACKGROUND.is_match(value)
    }

    fn opaque(color: &str) -> Self {
        Self {
            color: color.to_string(),
            opacity: 1.0,
        }
    }
}

// ============================================================================
// Path data
// ============================================================================

/// Path data for one fill colour.
#[derive(Debug, Default, Clone)]
pub struct SvgPath {
    data: String,
}

impl SvgPath {
    /// Append a closed polygon with floored coordinates.
    pub fn add_polygon(&mut self, points: &[Point]) {
        for (i, p) in points.iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            let _ = write!(self.data, "{cmd}{} {}", p.x.floor() as i64, p.y.floor() as i64);
        }
        self.data.push('Z');
    }

    /// Append a circle drawn as two half arcs starting at its left edge.
    ///
    /// The sweep flag is `0` whenever a direction is given and `1` otherwise.
    pub fn add_circle(&mut self, point: Point, diameter: f32, counter_clockwise: Option<bool>) {
        let sweep = if counter_clockwise.is_some() { 0 } else { 1 };
        let r = (diameter / 2.0).floor() as i64;
        let d = diameter.floor() as i64;
        let arc = format!("a{r},{r} 0 1,{sweep} ");
        let _ = write!(
            self.data,
            "M{} {}{arc}{d},0{arc}{},0",
            point.x.floor() as i64,
            (point.y + diameter / 2.0).floor() as i64,
            -d
        );
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.data
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

// ============================================================================
// Document writer
// ============================================================================

/// Serializes the final SVG document.
pub struct SvgWriter {
    buf: String,
}

impl SvgWriter {
    pub fn new(size: u32) -> Self {
        let mut buf = String::with_capacity(1024);
        let _ = write!(
            buf,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}" preserveAspectRatio="xMidYMid meet">"#
        );
        Self { buf }
    }

    /// Full-canvas rectangle; skipped when fully transparent.
    pub fn write_background(&mut self, background: &Background) {
        if background.opacity > 0.0 {
            let _ = write!(
                self.buf,
                r#"<rect width="100%" height="100%" fill="{}" opacity="{:.2}"/>"#,
                background.color, background.opacity
            );
        }
    }

    pub fn write_path(&mut self, color: &str, data: &str) {
        let _ = write!(self.buf, r#"<path fill="{color}" d="{data}"/>"#);
    }

    pub fn finish(mut self) -> String {
        self.buf.push_str("</svg>");
        self.buf
    }
}

// ============================================================================
// Renderer
// ============================================================================

/// [`Renderer`] collecting path data keyed by colour.
#[derive(Debug)]
pub struct SvgRenderer {
    size: u32,
    background: Option<Background>,
    paths: BTreeMap<String, SvgPath>,
    current: Option<String>,
}

impl SvgRenderer {
    pub fn new(size: u32) -> Self {
        Self {
            size,
            background: None,
            paths: BTreeMap::new(),
            current: None,
        }
    }

    fn current_path(&mut self) -> &mut SvgPath {
        let key = self.current.clone().unwrap_or_default();
        self.paths.entry(key).or_default()
    }

    /// Produce the SVG document.
    pub fn into_svg(self) -> String {
        let mut writer = SvgWriter::new(self.size);
        if let Some(background) = &self.background {
            writer.write_background(background);
        }
        for (color, path) in &self.paths {
            if !path.is_empty() {
                writer.write_path(color, path.as_str());
            }
        }
        writer.finish()
    }
}

impl Renderer for SvgRenderer {
    fn set_background(&mut self, color: &str) {
        self.background = Some(Background::parse(color));
    }

    fn begin_shape(&mut self, color: &str) {
        self.current = Some(color.to_string());
    }

    fn end_shape(&mut self) {
        self.current = None;
    }

    fn add_polygon(&mut self, points: &[Point]) {
        self.current_path().add_polygon(points);
    }

    fn add_circle(&mut self, point: Point, diameter: f32, counter_clockwise: Option<bool>) {
        self.current_path().add_circle(point, diameter, counter_clockwise);
    }
}
