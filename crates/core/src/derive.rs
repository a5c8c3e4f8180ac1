//! Single-colour derivations: lighten, darken, complement and contrast.
//!
//! All of these work on the HSBA form and rebuild an RGBA colour, so the
//! rebuild clamps brightness that would otherwise leave [0, 1].

use crate::color::{hsba_to_rgba, Hsba, Rgba};
use crate::scheme::{rotate_hue, HueWrap};

impl Rgba {
    /// Scales brightness by `1 + pct`.
    pub fn lightened(self, pct: f64) -> Rgba {
        self.with_brightness_scaled(1.0 + pct)
    }

    /// Scales brightness by `1 - pct`.
    pub fn darkened(self, pct: f64) -> Rgba {
        self.with_brightness_scaled(1.0 - pct)
    }

    fn with_brightness_scaled(self, factor: f64) -> Rgba {
        let hsba = self.hsba();
        hsba_to_rgba(Hsba {
            b: hsba.b * factor,
            ..hsba
        })
    }

    /// Rotates hue by 180 degrees, keeping saturation, brightness and alpha.
    pub fn complementary(self) -> Rgba {
        let hsba = self.hsba();
        hsba_to_rgba(Hsba {
            h: rotate_hue(hsba.h, 180.0, HueWrap::Reflect),
            ..hsba
        })
    }

    /// Picks black or white, whichever reads better on top of this colour.
    ///
    /// With `v = 1 - (0.299 R + 0.587 G + 0.114 B)`, a value below 0.5
    /// (a light colour) gives black and anything at or above 0.5 gives
    /// white. Alpha is ignored.
    pub fn contrasting_black_or_white(self) -> Rgba {
        let value = 1.0 - (0.299 * self.r + 0.587 * self.g + 0.114 * self.b);
        if value < 0.5 {
            Rgba::BLACK
        } else {
            Rgba::WHITE
        }
    }
}
