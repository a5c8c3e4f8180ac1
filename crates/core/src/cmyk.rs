//! Subtractive CMYK conversions.

use crate::color::{unit, Rgba};
use serde::{Deserialize, Serialize};

/// Cyan/magenta/yellow/key, each in [0, 1]. Carries no alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub c: f64,
    pub m: f64,
    pub y: f64,
    pub k: f64,
}

impl Cmyk {
    /// Pure black: no ink except key.
    pub const BLACK: Cmyk = Cmyk {
        c: 0.0,
        m: 0.0,
        y: 0.0,
        k: 1.0,
    };
}

/// Converts RGBA to CMYK. Alpha is discarded.
///
/// When K reaches 1 the colour is pure black and the result is exactly
/// [`Cmyk::BLACK`], which also avoids dividing by `1 - K`.
pub fn rgba_to_cmyk(c: Rgba) -> Cmyk {
    let cyan = 1.0 - c.r;
    let magenta = 1.0 - c.g;
    let yellow = 1.0 - c.b;

    let k = cyan.min(magenta).min(yellow).min(1.0);
    if k >= 1.0 {
        return Cmyk::BLACK;
    }

    Cmyk {
        c: (cyan - k) / (1.0 - k),
        m: (magenta - k) / (1.0 - k),
        y: (yellow - k) / (1.0 - k),
        k,
    }
}

/// Converts CMYK to opaque RGBA, clamped to [0, 1].
pub fn cmyk_to_rgba(c: Cmyk) -> Rgba {
    let ink = |x: f64| x * (1.0 - c.k) + c.k;
    Rgba::opaque(
        unit(1.0 - ink(c.c)),
        unit(1.0 - ink(c.m)),
        unit(1.0 - ink(c.y)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn pure_black_is_exactly_key_only() {
        assert_eq!(rgba_to_cmyk(Rgba::BLACK), Cmyk::BLACK);
        // alpha plays no part
        assert_eq!(rgba_to_cmyk(Rgba::new(0.0, 0.0, 0.0, 0.3)), Cmyk::BLACK);
    }

    #[test]
    fn white_has_no_ink() {
        let cmyk = rgba_to_cmyk(Rgba::WHITE);
        assert_eq!((cmyk.c, cmyk.m, cmyk.y, cmyk.k), (0.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn pure_red_is_magenta_plus_yellow() {
        let cmyk = rgba_to_cmyk(Rgba::opaque(1.0, 0.0, 0.0));
        assert_eq!((cmyk.c, cmyk.m, cmyk.y, cmyk.k), (0.0, 1.0, 1.0, 0.0));
    }

    #[test]
    fn mid_gray_is_key_only() {
        let cmyk = rgba_to_cmyk(Rgba::opaque(0.5, 0.5, 0.5));
        assert!(approx_eq(cmyk.c, 0.0));
        assert!(approx_eq(cmyk.m, 0.0));
        assert!(approx_eq(cmyk.y, 0.0));
        assert!(approx_eq(cmyk.k, 0.5));
    }

    #[test]
    fn out_of_range_black_still_hits_guard() {
        assert_eq!(rgba_to_cmyk(Rgba::opaque(-0.2, -0.1, -0.5)), Cmyk::BLACK);
    }

    #[test]
    fn cmyk_to_rgba_full_key_is_black() {
        let rgba = cmyk_to_rgba(Cmyk {
            c: 0.4,
            m: 0.7,
            y: 0.1,
            k: 1.0,
        });
        assert_eq!(rgba, Rgba::BLACK);
    }

    #[test]
    fn cmyk_to_rgba_matches_product_form() {
        let cmyk = Cmyk {
            c: 0.2,
            m: 0.4,
            y: 0.6,
            k: 0.3,
        };
        let rgba = cmyk_to_rgba(cmyk);
        assert!(approx_eq(rgba.r, (1.0 - 0.2) * (1.0 - 0.3)));
        assert!(approx_eq(rgba.g, (1.0 - 0.4) * (1.0 - 0.3)));
        assert!(approx_eq(rgba.b, (1.0 - 0.6) * (1.0 - 0.3)));
        assert_eq!(rgba.a, 1.0);
    }

    #[test]
    fn cmyk_to_rgba_clamps_excess_ink() {
        let rgba = cmyk_to_rgba(Cmyk {
            c: 1.5,
            m: -0.5,
            y: 0.0,
            k: 0.0,
        });
        assert_eq!(rgba.r, 0.0);
        assert_eq!(rgba.g, 1.0);
        assert_eq!(rgba.b, 1.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        fn component() -> impl Strategy<Value = f64> {
            0.0_f64..=1.0
        }

        proptest! {
            #[test]
            fn cmyk_round_trip_within_tolerance(
                r in component(),
                g in component(),
                b in component(),
            ) {
                let original = Rgba::opaque(r, g, b);
                let back = cmyk_to_rgba(rgba_to_cmyk(original));
                prop_assert!((back.r - r).abs() < 1e-3, "r: {} vs {}", back.r, r);
                prop_assert!((back.g - g).abs() < 1e-3, "g: {} vs {}", back.g, g);
                prop_assert!((back.b - b).abs() < 1e-3, "b: {} vs {}", back.b, b);
            }

            #[test]
            fn cmyk_components_stay_in_unit_range(
                r in component(),
                g in component(),
                b in component(),
            ) {
                let cmyk = rgba_to_cmyk(Rgba::opaque(r, g, b));
                for (name, v) in [("c", cmyk.c), ("m", cmyk.m), ("y", cmyk.y), ("k", cmyk.k)] {
                    prop_assert!(
                        (-1e-12..=1.0 + 1e-12).contains(&v),
                        "{name} out of range: {v}"
                    );
                }
            }
        }
    }
}
