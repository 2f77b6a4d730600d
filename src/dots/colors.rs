//! Colour derivation for the circular identicon.
//!
//! ```text
//! H = blake2b-512(key)        Z = blake2b-512([0; 32])
//! id[i] = H[i] - Z[i]  (wrapping)
//!
//! id[28]      rotation (0, 3, 6, 9, 12 or 15 steps)
//! id[29]      saturation
//! id[30..32]  scheme selection
//! id[i]       palette entry i
//! ```

use super::key::PublicKey;
use image::Rgba;

/// Number of dots in the icon, including the center one.
pub const DOT_COUNT: usize = 19;

/// Number of dots on the rotating rings.
const RING_DOTS: usize = 18;

/// Fill of the big circle and of palette entries equal to 255.
pub const FOREGROUND: Rgba<u8> = Rgba([238, 238, 238, 255]);

/// Palette entries equal to 0.
const NEAR_BLACK: Rgba<u8> = Rgba([4, 4, 4, 255]);

/// Lightness tiers in percent, indexed by `byte / 64`.
const LIGHTNESS: [u8; 4] = [53, 15, 35, 75];

/// Mapping from dot position to palette index, with selection weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scheme {
    pub name: &'static str,
    pub colors: [u8; DOT_COUNT],
    pub frequency: u32,
}

pub const SCHEMES: [Scheme; 7] = [
    Scheme {
        name: "target",
        colors: [0, 28, 0, 0, 28, 0, 0, 28, 0, 0, 28, 0, 0, 28, 0, 0, 28, 0, 1],
        frequency: 1,
    },
    Scheme {
        name: "cube",
        colors: [0, 1, 3, 2, 4, 3, 0, 1, 3, 2, 4, 3, 0, 1, 3, 2, 4, 3, 5],
        frequency: 20,
    },
    Scheme {
        name: "quazar",
        colors: [1, 2, 3, 1, 2, 4, 5, 5, 4, 1, 2, 3, 1, 2, 4, 5, 5, 4, 0],
        frequency: 16,
    },
    Scheme {
        name: "flower",
        colors: [0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 0, 1, 2, 3],
        frequency: 32,
    },
    Scheme {
        name: "cyclic",
        colors: [
            0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18,
        ],
        frequency: 32,
    },
    Scheme {
        name: "vmirror",
        colors: [0, 1, 2, 3, 4, 5, 3, 4, 2, 0, 1, 6, 7, 8, 9, 7, 8, 6, 10],
        frequency: 128,
    },
    Scheme {
        name: "hmirror",
        colors: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 8, 6, 7, 5, 3, 4, 2, 11],
        frequency: 128,
    },
];

/// Sum of all scheme frequencies.
pub const TOTAL_FREQUENCY: u32 = {
    let mut total = 0;
    let mut i = 0;
    while i < SCHEMES.len() {
        total += SCHEMES[i].frequency;
        i += 1;
    }
    total
};

/// The 64-byte entropy buffer derived from a key.
pub struct DerivedId([u8; 64]);

impl DerivedId {
    pub fn new(key: &PublicKey) -> Self {
        let hash = blake2b_simd::blake2b(key.as_bytes());
        let zero = blake2b_simd::blake2b(&[0u8; 32]);
        let mut id = [0u8; 64];
        for (out, (h, z)) in id.iter_mut().zip(hash.as_bytes().iter().zip(zero.as_bytes())) {
            *out = h.wrapping_sub(*z);
        }
        Self(id)
    }

    #[inline]
    pub fn bytes(&self) -> &[u8; 64] {
        &self.0
    }

    /// Saturation in `[0.30, 1.09]` before clamping by the HSL conversion.
    pub fn saturation(&self) -> f64 {
        let raw = ((u32::from(self.0[29]) * 70 / 256 + 26) % 80) + 30;
        f64::from(raw) / 100.0
    }

    pub fn scheme(&self) -> &'static Scheme {
        let selector = (u32::from(self.0[30]) + u32::from(self.0[31]) * 256) % TOTAL_FREQUENCY;
        let mut cumulative = 0;
        for scheme in &SCHEMES {
            cumulative += scheme.frequency;
            if selector < cumulative {
                return scheme;
            }
        }
        &SCHEMES[SCHEMES.len() - 1]
    }

    /// Ring offset, always a multiple of 3.
    pub fn rotation(&self) -> usize {
        usize::from(self.0[28] % 6) * 3
    }

    pub fn palette(&self) -> [Rgba<u8>; 64] {
        let saturation = self.saturation();
        let mut palette = [NEAR_BLACK; 64];
        for (i, (slot, byte)) in palette.iter_mut().zip(self.0).enumerate() {
            let shift = ((i % 28) * 58) as u8;
            *slot = palette_color(byte.wrapping_add(shift), saturation);
        }
        palette
    }
}

/// Colour of one palette byte.
pub fn palette_color(byte: u8, saturation: f64) -> Rgba<u8> {
    match byte {
        0 => NEAR_BLACK,
        255 => FOREGROUND,
        _ => {
            let hue = u32::from(byte % 64) * 360 / 64;
            let lightness = LIGHTNESS[usize::from(byte / 64)];
            hsl_to_rgba(f64::from(hue), saturation, f64::from(lightness) / 100.0)
        }
    }
}

/// HSL to RGB with `h` in degrees, `s` and `l` in `[0, 1]`.
pub fn hsl_to_rgba(h: f64, s: f64, l: f64) -> Rgba<u8> {
    let channel = |v: f64| ((v * 255.0) + 0.5).floor().clamp(0.0, 255.0) as u8;
    if s == 0.0 {
        let v = channel(l);
        return Rgba([v, v, v, 255]);
    }

    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = h / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r, g, b) = match hp {
        hp if hp < 1.0 => (c, x, 0.0),
        hp if hp < 2.0 => (x, c, 0.0),
        hp if hp < 3.0 => (0.0, c, x),
        hp if hp < 4.0 => (0.0, x, c),
        hp if hp < 5.0 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = l - c / 2.0;
    Rgba([channel(r + m), channel(g + m), channel(b + m), 255])
}

/// The 19 dot colours of `key`, in layout order.
pub fn dot_colors(key: &PublicKey) -> [Rgba<u8>; DOT_COUNT] {
    let id = DerivedId::new(key);
    let palette = id.palette();
    let scheme = id.scheme();
    let rotation = id.rotation();

    std::array::from_fn(|i| {
        let slot = if i < RING_DOTS {
            (i + rotation) % RING_DOTS
        } else {
            i
        };
        palette[usize::from(scheme.colors[slot])]
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALICE: &str = "d43593c715fdd31c61141abd04a99fd6822c8558854ccde39a5684e7a56da27d";
    const BOB: &str = "8eaf04151687736326c9fea17e25fc5287613693c912909cb226aa4794f26a48";

    fn rgb(colors: &[Rgba<u8>]) -> Vec<(u8, u8, u8)> {
        colors.iter().map(|c| (c[0], c[1], c[2])).collect()
    }

    #[test]
    fn test_total_frequency() {
        assert_eq!(TOTAL_FREQUENCY, 357);
    }

    #[test]
    fn test_palette_color_extremes() {
        assert_eq!(palette_color(0, 0.5), NEAR_BLACK);
        assert_eq!(palette_color(255, 0.5), FOREGROUND);
        assert_eq!(palette_color(212, 0.56), Rgba([165, 227, 156, 255]));
    }

    #[test]
    fn test_hsl_to_rgba() {
        assert_eq!(hsl_to_rgba(0.0, 1.0, 0.5), Rgba([255, 0, 0, 255]));
        assert_eq!(hsl_to_rgba(120.0, 1.0, 0.5), Rgba([0, 255, 0, 255]));
        assert_eq!(hsl_to_rgba(240.0, 1.0, 0.5), Rgba([0, 0, 255, 255]));
        assert_eq!(hsl_to_rgba(300.0, 0.0, 0.5), Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn test_alice_colors() {
        let key = PublicKey::from_hex(ALICE).unwrap();
        let colors = dot_colors(&key);
        assert!(colors.iter().all(|c| c[3] == 255));
        assert_eq!(
            rgb(&colors),
            [
                (165, 227, 156),
                (60, 40, 17),
                (184, 68, 202),
                (139, 39, 88),
                (135, 68, 202),
                (225, 156, 227),
                (139, 39, 88),
                (135, 68, 202),
                (184, 68, 202),
                (165, 227, 156),
                (60, 40, 17),
                (162, 202, 68),
                (39, 139, 139),
                (187, 202, 68),
                (38, 60, 17),
                (39, 139, 139),
                (187, 202, 68),
                (162, 202, 68),
                (61, 39, 139),
            ]
        );
    }

    #[test]
    fn test_bob_colors() {
        let key = PublicKey::from_hex(BOB).unwrap();
        let colors = dot_colors(&key);
        assert!(colors.iter().all(|c| c[3] == 255));
        assert_eq!(
            rgb(&colors),
            [
                (58, 120, 61),
                (200, 214, 169),
                (214, 169, 182),
                (36, 52, 25),
                (127, 93, 177),
                (214, 169, 182),
                (58, 120, 61),
                (200, 214, 169),
                (52, 25, 30),
                (113, 177, 93),
                (58, 120, 114),
                (58, 120, 108),
                (118, 93, 177),
                (25, 52, 39),
                (58, 120, 108),
                (113, 177, 93),
                (58, 120, 114),
                (52, 25, 30),
                (33, 25, 52),
            ]
        );
    }

    #[test]
    fn test_derived_id_ranges() {
        for seed in [&[1u8][..], &[7u8; 32][..], &b"some other key bytes"[..]] {
            let id = DerivedId::new(&PublicKey::from_bytes(seed).unwrap());
            assert!(id.rotation() % 3 == 0 && id.rotation() <= 15);
            assert!((0.3..=1.09).contains(&id.saturation()));
            assert!(SCHEMES.iter().any(|s| s.name == id.scheme().name));
        }
    }

    #[test]
    fn test_zero_key_derives_zero_id() {
        let id = DerivedId::new(&PublicKey::from_bytes([0u8; 32]).unwrap());
        assert!(id.bytes().iter().all(|&b| b == 0));
        assert_eq!(id.rotation(), 0);
        assert_eq!(id.scheme().name, "target");
    }
}
