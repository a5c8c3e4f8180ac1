//! Four-colour harmonic schemes derived from a seed colour's HSBA.
//!
//! Every scheme returns exactly four colours. Hue offsets are applied in
//! degrees through [`HueWrap`]; saturation and brightness offsets are applied
//! raw, so a scheme may carry values outside [0, 1] until it is rebuilt as
//! RGBA (where they are clamped).

use crate::color::{hsba_to_rgba, Hsba, Rgba};
use crate::error::ColourError;
use serde::{Deserialize, Serialize};

const SCHEME_NAMES: &[&str] = &["analogous", "monochromatic", "triad", "complementary"];

/// Which four-colour derivation to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Neighbouring hues at +30, +15, -15 and -30 degrees.
    Analogous,
    /// Same hue with a fixed saturation/brightness weighting table.
    Monochromatic,
    /// Two colours at each of the +120 and +240 degree vertices.
    Triad,
    /// Two colours at the seed hue and two at its opposite.
    Complementary,
}

impl ColorScheme {
    /// Every scheme, in selector order.
    pub const ALL: [ColorScheme; 4] = [
        ColorScheme::Analogous,
        ColorScheme::Monochromatic,
        ColorScheme::Triad,
        ColorScheme::Complementary,
    ];

    /// Maps a numeric selector (0..=3, in declaration order) to a scheme.
    ///
    /// Any other value selects `Complementary`.
    pub fn from_index(index: i64) -> Self {
        match index {
            0 => ColorScheme::Analogous,
            1 => ColorScheme::Monochromatic,
            2 => ColorScheme::Triad,
            _ => ColorScheme::Complementary,
        }
    }

    /// Looks a scheme up by its lowercase name.
    pub fn from_name(name: &str) -> Result<Self, ColourError> {
        match name {
            "analogous" => Ok(ColorScheme::Analogous),
            "monochromatic" => Ok(ColorScheme::Monochromatic),
            "triad" => Ok(ColorScheme::Triad),
            "complementary" => Ok(ColorScheme::Complementary),
            _ => Err(ColourError::UnknownScheme(name.to_string())),
        }
    }

    /// Lowercase name, as accepted by [`ColorScheme::from_name`].
    pub fn name(self) -> &'static str {
        match self {
            ColorScheme::Analogous => "analogous",
            ColorScheme::Monochromatic => "monochromatic",
            ColorScheme::Triad => "triad",
            ColorScheme::Complementary => "complementary",
        }
    }

    /// Names of every scheme in declaration order.
    pub fn list_names() -> &'static [&'static str] {
        SCHEME_NAMES
    }
}

/// How a hue sum that leaves [0, 360] is brought back into range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HueWrap {
    /// Subtract 360 above 360, negate below 0. See [`add_degree`].
    #[default]
    Reflect,
    /// Wrap through 360 with `rem_euclid`, so -20 becomes 340.
    Modulo,
}

impl HueWrap {
    /// Looks a wrap mode up by its lowercase name (`reflect`, `modulo`).
    pub fn from_name(name: &str) -> Result<Self, ColourError> {
        match name {
            "reflect" => Ok(HueWrap::Reflect),
            "modulo" => Ok(HueWrap::Modulo),
            _ => Err(ColourError::UnknownHueWrap(name.to_string())),
        }
    }

    /// Adds `delta` degrees to `base` degrees.
    pub fn add(self, delta: f64, base: f64) -> f64 {
        match self {
            HueWrap::Reflect => add_degree(delta, base),
            HueWrap::Modulo => {
                let h = (base + delta).rem_euclid(360.0);
                // tiny negative sums round up to a full turn
                if h >= 360.0 {
                    0.0
                } else {
                    h
                }
            }
        }
    }
}

/// Adds `delta` degrees to `base` degrees.
///
/// Sums above 360 drop by one turn; negative sums are negated rather than
/// wrapped, so `add_degree(-30.0, 10.0)` is 20, not 340. [`HueWrap::Modulo`]
/// wraps instead.
pub fn add_degree(delta: f64, base: f64) -> f64 {
    let sum = base + delta;
    if sum > 360.0 {
        sum - 360.0
    } else if sum < 0.0 {
        -sum
    } else {
        sum
    }
}

/// Rotates a normalized hue by `degrees`, returning a normalized hue.
pub(crate) fn rotate_hue(hue: f64, degrees: f64, wrap: HueWrap) -> f64 {
    wrap.add(degrees, hue * 360.0) / 360.0
}

/// Derives the four colours of `scheme` from `seed`, with reflecting hue wrap.
pub fn color_scheme(scheme: ColorScheme, seed: Hsba) -> [Hsba; 4] {
    color_scheme_with(scheme, seed, HueWrap::Reflect)
}

/// Derives the four colours of `scheme` from `seed` using the given hue wrap.
pub fn color_scheme_with(scheme: ColorScheme, seed: Hsba, wrap: HueWrap) -> [Hsba; 4] {
    match scheme {
        ColorScheme::Analogous => analogous(seed, wrap),
        ColorScheme::Monochromatic => monochromatic(seed),
        ColorScheme::Triad => triad(seed, wrap),
        ColorScheme::Complementary => complementary_set(seed, wrap),
    }
}

fn analogous(seed: Hsba, wrap: HueWrap) -> [Hsba; 4] {
    let s = seed.s - 0.05;
    let shade = |degrees: f64, darken: f64| Hsba {
        h: rotate_hue(seed.h, degrees, wrap),
        s,
        b: seed.b - darken,
        a: seed.a,
    };
    [
        shade(30.0, 0.1),
        shade(15.0, 0.05),
        shade(-15.0, 0.05),
        shade(-30.0, 0.1),
    ]
}

fn monochromatic(seed: Hsba) -> [Hsba; 4] {
    let tint = |s: f64, b: f64| Hsba {
        h: seed.h,
        s,
        b,
        a: seed.a,
    };
    [
        tint(seed.s / 2.0, seed.b / 3.0),
        tint(seed.s, seed.b / 2.0),
        tint(seed.s / 3.0, 2.0 * seed.b / 3.0),
        tint(seed.s, 4.0 * seed.b / 5.0),
    ]
}

fn triad(seed: Hsba, wrap: HueWrap) -> [Hsba; 4] {
    let first = rotate_hue(seed.h, 120.0, wrap);
    let second = rotate_hue(seed.h, 240.0, wrap);
    let reduced = |h: f64| Hsba {
        h,
        s: 2.0 * seed.s / 3.0,
        b: seed.b - 0.05,
        a: seed.a,
    };
    let full = |h: f64| Hsba { h, ..seed };
    [reduced(first), full(first), full(second), reduced(second)]
}

fn complementary_set(seed: Hsba, wrap: HueWrap) -> [Hsba; 4] {
    let opposite = rotate_hue(seed.h, 180.0, wrap);
    [
        Hsba {
            b: 4.0 * seed.b / 5.0,
            ..seed
        },
        Hsba {
            s: 5.0 * seed.s / 7.0,
            ..seed
        },
        Hsba {
            h: opposite,
            ..seed
        },
        Hsba {
            h: opposite,
            s: 5.0 * seed.s / 7.0,
            ..seed
        },
    ]
}

impl Rgba {
    /// Derives the four colours of `scheme` from this colour.
    pub fn color_scheme(self, scheme: ColorScheme) -> [Rgba; 4] {
        self.color_scheme_with(scheme, HueWrap::Reflect)
    }

    /// Like [`Rgba::color_scheme`] with an explicit hue wrap.
    pub fn color_scheme_with(self, scheme: ColorScheme, wrap: HueWrap) -> [Rgba; 4] {
        color_scheme_with(scheme, self.hsba(), wrap).map(hsba_to_rgba)
    }
}
