//! Colour value types and the RGBA hub conversions.
//!
//! `Rgba` is the canonical representation: every other model converts to
//! and from it. This module holds the value types, hex parsing/formatting
//! and the HSB conversion pair. CIE conversions live in [`crate::cie`] and
//! CMYK in [`crate::cmyk`].
//!
//! Clamping policy: anything converted *into* `Rgba` is clamped to [0, 1]
//! (NaN becomes 0). Conversions *out of* `Rgba` apply their formulas as
//! given, so out-of-range input propagates instead of being rejected.

use crate::cie::{rgba_to_lab, rgba_to_xyz, Lab, Xyz};
use crate::cmyk::{rgba_to_cmyk, Cmyk};
use crate::error::ColourError;
use serde::{Deserialize, Serialize};

/// RGBA colour with all components in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

/// Hue/saturation/brightness with alpha.
///
/// Hue is normalized to [0, 1] (degrees / 360).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hsba {
    pub h: f64,
    pub s: f64,
    pub b: f64,
    pub a: f64,
}

/// Selects which component tuple [`Rgba::components`] returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorFormulation {
    Rgba,
    Hsba,
    Lab,
    Cmyk,
}

impl Rgba {
    /// Opaque black.
    pub const BLACK: Rgba = Rgba::opaque(0.0, 0.0, 0.0);
    /// Opaque white.
    pub const WHITE: Rgba = Rgba::opaque(1.0, 1.0, 1.0);

    /// Colour from unit-range channels and alpha.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque colour.
    pub const fn opaque(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parses a hex colour like "#ff00aa", "0xff00aa" or "ff00aa" (case
    /// insensitive).
    ///
    /// The digits are read as one integer and split into channels by bit
    /// position (red = bits 16..24, green = 8..16, blue = 0..8), so short
    /// input such as "ff" is blue `0x0000ff`. Alpha is always 1.0.
    ///
    /// Returns `ColourError::InvalidHex` for empty input, non-hex
    /// characters or more than 6 digits.
    pub fn from_hex(hex: &str) -> Result<Rgba, ColourError> {
        let digits = hex
            .strip_prefix('#')
            .or_else(|| hex.strip_prefix("0x"))
            .or_else(|| hex.strip_prefix("0X"))
            .unwrap_or(hex);
        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(ColourError::InvalidHex(format!(
                "unexpected character {bad:?} in {hex:?}"
            )));
        }
        if digits.is_empty() || digits.len() > 6 {
            return Err(ColourError::InvalidHex(format!(
                "expected 1 to 6 hex digits, got {}",
                digits.len()
            )));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|e| ColourError::InvalidHex(format!("{hex:?}: {e}")))?;
        Ok(Rgba::opaque(
            ((value >> 16) & 0xff) as f64 / 255.0,
            ((value >> 8) & 0xff) as f64 / 255.0,
            (value & 0xff) as f64 / 255.0,
        ))
    }

    /// Total variant of [`Rgba::from_hex`]: malformed input yields opaque black.
    pub fn from_hex_or_black(hex: &str) -> Rgba {
        Self::from_hex(hex).unwrap_or_else(|e| {
            tracing::debug!(%e, "falling back to black");
            Rgba::BLACK
        })
    }

    /// Formats the colour as `"#rrggbb"`.
    ///
    /// Channels are clamped to [0, 1] and rounded to the nearest 8-bit
    /// value. Alpha is dropped.
    pub fn to_hex(self) -> String {
        let r = to_byte(self.r);
        let g = to_byte(self.g);
        let b = to_byte(self.b);
        format!("#{r:02x}{g:02x}{b:02x}")
    }

    /// Hue, saturation, brightness form.
    pub fn hsba(self) -> Hsba {
        rgba_to_hsba(self)
    }

    /// CIE XYZ form (D65, Y = 100 for white).
    pub fn xyz(self) -> Xyz {
        rgba_to_xyz(self)
    }

    /// CIE L*a*b* form.
    pub fn lab(self) -> Lab {
        rgba_to_lab(self)
    }

    /// Unclamped CMYK ink coverage.
    pub fn cmyk(self) -> Cmyk {
        rgba_to_cmyk(self)
    }

    /// Red channel in [0, 1].
    pub fn red(self) -> f64 {
        self.r
    }

    /// Green channel in [0, 1].
    pub fn green(self) -> f64 {
        self.g
    }

    /// Blue channel in [0, 1].
    pub fn blue(self) -> f64 {
        self.b
    }

    /// Opacity in [0, 1].
    pub fn alpha(self) -> f64 {
        self.a
    }

    /// Hue as a fraction of a full turn.
    pub fn hue(self) -> f64 {
        self.hsba().h
    }

    /// HSB saturation.
    pub fn saturation(self) -> f64 {
        self.hsba().s
    }

    /// HSB brightness (the largest channel).
    pub fn brightness(self) -> f64 {
        self.hsba().b
    }

    /// CIE L* lightness, 0 to 100.
    pub fn cie_lightness(self) -> f64 {
        self.lab().l
    }

    /// CIE a* (green to red axis).
    pub fn cie_a(self) -> f64 {
        self.lab().a
    }

    /// CIE b* (blue to yellow axis).
    pub fn cie_b(self) -> f64 {
        self.lab().b
    }

    /// Cyan ink coverage.
    pub fn cyan(self) -> f64 {
        self.cmyk().c
    }

    /// Magenta ink coverage.
    pub fn magenta(self) -> f64 {
        self.cmyk().m
    }

    /// Yellow ink coverage.
    pub fn yellow(self) -> f64 {
        self.cmyk().y
    }

    /// Key (black) ink coverage.
    pub fn key_black(self) -> f64 {
        self.cmyk().k
    }

    /// Returns the four components of this colour in the given model.
    pub fn components(self, formulation: ColorFormulation) -> [f64; 4] {
        match formulation {
            ColorFormulation::Rgba => [self.r, self.g, self.b, self.a],
            ColorFormulation::Hsba => {
                let c = self.hsba();
                [c.h, c.s, c.b, c.a]
            }
            ColorFormulation::Lab => {
                let c = self.lab();
                [c.l, c.a, c.b, c.alpha]
            }
            ColorFormulation::Cmyk => {
                let c = self.cmyk();
                [c.c, c.m, c.y, c.k]
            }
        }
    }
}

impl ColorFormulation {
    /// Looks up a model by its lowercase name (`rgba`, `hsba`, `lab`, `cmyk`).
    pub fn from_name(name: &str) -> Result<Self, ColourError> {
        match name {
            "rgba" => Ok(ColorFormulation::Rgba),
            "hsba" => Ok(ColorFormulation::Hsba),
            "lab" => Ok(ColorFormulation::Lab),
            "cmyk" => Ok(ColorFormulation::Cmyk),
            _ => Err(ColourError::UnknownFormulation(name.to_string())),
        }
    }
}

impl Hsba {
    /// Colour from hue (fraction of a turn), saturation, brightness and alpha.
    pub const fn new(h: f64, s: f64, b: f64, a: f64) -> Self {
        Self { h, s, b, a }
    }
}

impl From<Hsba> for Rgba {
    fn from(c: Hsba) -> Self {
        hsba_to_rgba(c)
    }
}

impl From<Rgba> for Hsba {
    fn from(c: Rgba) -> Self {
        rgba_to_hsba(c)
    }
}

/// Clamps a component into [0, 1], mapping NaN to 0.
pub(crate) fn unit(c: f64) -> f64 {
    if c.is_nan() {
        0.0
    } else {
        c.clamp(0.0, 1.0)
    }
}

fn to_byte(c: f64) -> u8 {
    (unit(c) * 255.0).round() as u8
}

/// Converts RGBA to HSBA.
///
/// Achromatic colours (max == min) get hue 0, and black gets saturation 0,
/// so neither case divides by zero.
pub fn rgba_to_hsba(c: Rgba) -> Hsba {
    let max = c.r.max(c.g).max(c.b);
    let min = c.r.min(c.g).min(c.b);
    let delta = max - min;

    let s = if max <= 0.0 { 0.0 } else { delta / max };

    let h = if delta <= 0.0 {
        0.0
    } else if max == c.r {
        ((c.g - c.b) / delta).rem_euclid(6.0) / 6.0
    } else if max == c.g {
        ((c.b - c.r) / delta + 2.0) / 6.0
    } else {
        ((c.r - c.g) / delta + 4.0) / 6.0
    };

    Hsba {
        // rem_euclid(6.0) can round up to 6.0 when g is a hair below b
        h: if h >= 1.0 { 0.0 } else { h },
        s,
        b: max,
        a: c.a,
    }
}

/// Converts HSBA to RGBA.
///
/// Hue wraps into [0, 1); saturation, brightness and alpha are clamped to
/// [0, 1] first, so lightening past full brightness saturates at white.
pub fn hsba_to_rgba(c: Hsba) -> Rgba {
    let h = if c.h.is_finite() {
        c.h.rem_euclid(1.0)
    } else {
        0.0
    };
    let s = unit(c.s);
    let v = unit(c.b);

    let chroma = v * s;
    let h6 = h * 6.0;
    let x = chroma * (1.0 - (h6 % 2.0 - 1.0).abs());
    let m = v - chroma;

    let (r1, g1, b1) = match h6 as u32 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        5 => (chroma, 0.0, x),
        // rem_euclid can round up to exactly 1.0 for tiny negative hues
        _ => (chroma, x, 0.0),
    };

    Rgba {
        r: unit(r1 + m),
        g: unit(g1 + m),
        b: unit(b1 + m),
        a: unit(c.a),
    }
}
