//! Boundary between host colour types and [`Rgba`].
//!
//! A host (GUI toolkit, image library, terminal) implements
//! [`ColorAdapter`] for its own colour type; the rest of the crate only
//! ever sees `Rgba`.

use crate::color::{unit, Rgba};

/// Decomposes a host colour into RGBA and rebuilds it from RGBA.
pub trait ColorAdapter: Sized {
    /// Decomposes this colour into unit-range RGBA.
    fn to_rgba(&self) -> Rgba;

    /// Rebuilds a host colour from RGBA.
    fn from_rgba(rgba: Rgba) -> Self;

    /// Runs `f` on the RGBA form and converts the result back.
    fn map_rgba(&self, f: impl FnOnce(Rgba) -> Rgba) -> Self {
        Self::from_rgba(f(self.to_rgba()))
    }
}

/// Unit-scale `[r, g, b, a]`.
impl ColorAdapter for [f64; 4] {
    fn to_rgba(&self) -> Rgba {
        let [r, g, b, a] = *self;
        Rgba { r, g, b, a }
    }

    fn from_rgba(rgba: Rgba) -> Self {
        [rgba.r, rgba.g, rgba.b, rgba.a]
    }
}

/// 8-bit `[r, g, b, a]`, rounded and clamped on the way out.
impl ColorAdapter for [u8; 4] {
    fn to_rgba(&self) -> Rgba {
        let [r, g, b, a] = self.map(|c| c as f64 / 255.0);
        Rgba { r, g, b, a }
    }

    fn from_rgba(rgba: Rgba) -> Self {
        [rgba.r, rgba.g, rgba.b, rgba.a].map(|c| (unit(c) * 255.0).round() as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheme::ColorScheme;

    #[test]
    fn f64_array_is_a_plain_view() {
        let rgba = [0.1_f64, 0.2, 0.3, 0.4].to_rgba();
        assert_eq!(rgba, Rgba::new(0.1, 0.2, 0.3, 0.4));
        assert_eq!(<[f64; 4]>::from_rgba(rgba), [0.1, 0.2, 0.3, 0.4]);
    }

    #[test]
    fn u8_array_scales_by_255() {
        let rgba = [255u8, 0, 51, 255].to_rgba();
        assert_eq!(rgba.r, 1.0);
        assert_eq!(rgba.g, 0.0);
        assert!((rgba.b - 0.2).abs() < 1e-12);
        assert_eq!(rgba.a, 1.0);
    }

    #[test]
    fn u8_array_rounds_and_clamps() {
        let bytes = <[u8; 4]>::from_rgba(Rgba::new(0.5, -0.3, 1.7, f64::NAN));
        assert_eq!(bytes, [128, 0, 255, 0]);
    }

    #[test]
    fn u8_round_trip_is_exact() {
        for v in 0..=255u8 {
            let bytes = [v, 255 - v, v / 2, 255];
            assert_eq!(<[u8; 4]>::from_rgba(bytes.to_rgba()), bytes);
        }
    }

    #[test]
    fn map_rgba_applies_a_derivation() {
        let white = [255u8, 255, 255, 255];
        assert_eq!(
            white.map_rgba(Rgba::contrasting_black_or_white),
            [0, 0, 0, 255]
        );
    }

    #[test]
    fn host_colors_feed_schemes() {
        let seed = [200u8, 40, 90, 255].to_rgba();
        let scheme = seed.color_scheme(ColorScheme::Triad).map(<[u8; 4]>::from_rgba);
        assert_eq!(scheme.len(), 4);
        assert!(scheme.iter().all(|c| c[3] == 255));
    }
}
