//! Raster and vector output of the circular identicon.
//!
//! | Element     | Radius           | Fill            |
//! |-------------|------------------|-----------------|
//! | big circle  | `R = size / 2`   | [`FOREGROUND`]  |
//! | dot         | `R * 5 / 32`     | derived colour  |
//!
//! Dot centers are laid out with a center-to-center distance of `R * 3 / 8`.

use super::colors::{DOT_COUNT, FOREGROUND, dot_colors};
use super::key::PublicKey;
use super::layout::{Circle, generate_circles};
use crate::error::{Result, check_size};
use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::fmt::Write;
use std::io::Cursor;

const DOT_RADIUS_RATIO: f64 = 0.15625;
const DISTANCE_RATIO: f64 = 0.375;
const TRANSPARENT: Rgba<u8> = Rgba([255, 255, 255, 0]);

/// Resolved geometry and colours of one icon.
#[derive(Debug, Clone)]
pub struct DotIcon {
    pub radius: f64,
    pub dot_radius: f64,
    pub dots: [Circle; DOT_COUNT],
}

impl DotIcon {
    pub fn new(key: &PublicKey, size: u32) -> Self {
        let radius = f64::from(size) / 2.0;
        let dot_radius = radius * DOT_RADIUS_RATIO;
        Self {
            radius,
            dot_radius,
            dots: generate_circles(radius * DISTANCE_RATIO, dot_radius, &dot_colors(key)),
        }
    }

    /// Colour at an offset from the icon center.
    fn color_at(&self, x: f64, y: f64) -> Rgba<u8> {
        match self.dots.iter().find(|dot| dot.contains(x, y)) {
            Some(dot) => dot.color,
            None if x * x + y * y < self.radius * self.radius => FOREGROUND,
            None => TRANSPARENT,
        }
    }
}

/// Rasterize the icon for `key` at `size x size` pixels.
pub fn render_rgba(key: &PublicKey, size: u32) -> Result<RgbaImage> {
    check_size(size)?;
    let icon = DotIcon::new(key, size);
    Ok(RgbaImage::from_fn(size, size, |x, y| {
        icon.color_at(f64::from(x) - icon.radius, f64::from(y) - icon.radius)
    }))
}

/// PNG bytes of the icon for `key`.
pub fn to_png(key: &PublicKey, size: u32) -> Result<Vec<u8>> {
    let image = render_rgba(key, size)?;
    let mut buf = Vec::new();
    DynamicImage::ImageRgba8(image).write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)?;
    Ok(buf)
}

/// SVG document of the icon for `key`.
pub fn to_svg(key: &PublicKey, size: u32) -> Result<String> {
    check_size(size)?;
    let icon = DotIcon::new(key, size);
    let r = icon.radius;

    let mut svg = String::with_capacity(2048);
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#
    );
    write_circle(&mut svg, r, r, r, FOREGROUND);
    for dot in &icon.dots {
        write_circle(&mut svg, r + dot.x, r + dot.y, dot.radius, dot.color);
    }
    svg.push_str("</svg>");
    Ok(svg)
}

fn write_circle(svg: &mut String, cx: f64, cy: f64, r: f64, color: Rgba<u8>) {
    let [red, green, blue, alpha] = color.0;
    let _ = write!(
        svg,
        r##"<circle cx="{}" cy="{}" r="{}" fill="#{red:02x}{green:02x}{blue:02x}""##,
        format_number(cx),
        format_number(cy),
        format_number(r)
    );
    if alpha < 255 {
        let _ = write!(svg, r#" fill-opacity="{}""#, format_number(f64::from(alpha) / 255.0));
    }
    svg.push_str("/>");
}

/// At most two decimals, trailing zeros trimmed.
fn format_number(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    match s {
        "-0" | "" => "0".to_string(),
        s => s.to_string(),
    }
}
