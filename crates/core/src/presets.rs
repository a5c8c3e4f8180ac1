//! Named preset colours.
//!
//! A flat lookup table on the 0-255 scale, converted to opaque [`Rgba`] on
//! access. Names are kebab-case, e.g. `"robin-egg"`.

use crate::color::Rgba;
use crate::error::ColourError;

const PRESETS: &[(&str, f64, f64, f64)] = &[
    // System
    ("info-blue", 47.0, 112.0, 225.0),
    ("success", 83.0, 215.0, 106.0),
    ("warning", 221.0, 170.0, 59.0),
    ("danger", 229.0, 0.0, 15.0),

    // Whites
    ("antique-white", 250.0, 235.0, 215.0),
    ("old-lace", 253.0, 245.0, 230.0),
    ("ivory", 255.0, 255.0, 240.0),
    ("seashell", 255.0, 245.0, 238.0),
    ("ghost-white", 248.0, 248.0, 255.0),
    ("snow", 255.0, 250.0, 250.0),
    ("linen", 250.0, 240.0, 230.0),

    // Grays
    ("black-25-percent", 63.75, 63.75, 63.75),
    ("black-50-percent", 127.5, 127.5, 127.5),
    ("black-75-percent", 191.25, 191.25, 191.25),
    ("warm-gray", 133.0, 117.0, 112.0),
    ("cool-gray", 118.0, 122.0, 133.0),
    ("charcoal", 34.0, 34.0, 34.0),

    // Blues
    ("teal", 28.0, 160.0, 170.0),
    ("steel-blue", 103.0, 153.0, 170.0),
    ("robin-egg", 141.0, 218.0, 247.0),
    ("pastel-blue", 99.0, 161.0, 247.0),
    ("turquoise", 112.0, 219.0, 219.0),
    ("sky-blue", 0.0, 178.0, 238.0),
    ("indigo", 13.0, 79.0, 139.0),
    ("denim", 67.0, 114.0, 170.0),
    ("blueberry", 89.0, 113.0, 173.0),
    ("cornflower", 100.0, 149.0, 237.0),
    ("baby-blue", 190.0, 220.0, 230.0),
    ("midnight-blue", 13.0, 26.0, 35.0),
    ("faded-blue", 23.0, 137.0, 155.0),
    ("iceberg", 200.0, 213.0, 219.0),
    ("wave", 102.0, 169.0, 251.0),

    // Greens
    ("emerald", 1.0, 152.0, 117.0),
    ("grass", 99.0, 214.0, 74.0),
    ("pastel-green", 126.0, 242.0, 124.0),
    ("seafoam", 77.0, 226.0, 140.0),
    ("pale-green", 176.0, 226.0, 172.0),
    ("cactus-green", 99.0, 111.0, 87.0),
    ("chartreuse", 69.0, 139.0, 0.0),
    ("holly-green", 32.0, 87.0, 14.0),
    ("olive", 91.0, 114.0, 34.0),
    ("olive-drab", 107.0, 142.0, 35.0),
    ("money-green", 134.0, 198.0, 124.0),
    ("honeydew", 216.0, 255.0, 231.0),
    ("lime", 56.0, 237.0, 56.0),
    ("card-table", 87.0, 121.0, 107.0),

    // Reds
    ("salmon", 233.0, 87.0, 95.0),
    ("brick-red", 151.0, 27.0, 16.0),
    ("easter-pink", 241.0, 167.0, 162.0),
    ("grapefruit", 228.0, 31.0, 54.0),
    ("pink", 255.0, 95.0, 154.0),
    ("indian-red", 205.0, 92.0, 92.0),
    ("strawberry", 190.0, 38.0, 37.0),
    ("coral", 240.0, 128.0, 128.0),
    ("maroon", 80.0, 4.0, 28.0),
    ("watermelon", 242.0, 71.0, 63.0),
    ("tomato", 255.0, 99.0, 71.0),
    ("pink-lipstick", 255.0, 105.0, 180.0),
    ("pale-rose", 255.0, 228.0, 225.0),
    ("crimson", 187.0, 18.0, 36.0),

    // Purples
    ("eggplant", 105.0, 5.0, 98.0),
    ("pastel-purple", 207.0, 100.0, 235.0),
    ("pale-purple", 229.0, 180.0, 235.0),
    ("cool-purple", 140.0, 93.0, 228.0),
    ("violet", 191.0, 95.0, 255.0),
    ("plum", 139.0, 102.0, 139.0),
    ("lavender", 204.0, 153.0, 204.0),
    ("raspberry", 135.0, 38.0, 87.0),
    ("fuschia", 255.0, 20.0, 147.0),
    ("grape", 54.0, 11.0, 88.0),
    ("periwinkle", 135.0, 159.0, 237.0),
    ("orchid", 218.0, 112.0, 214.0),

    // Yellows
    ("goldenrod", 215.0, 170.0, 51.0),
    ("yellow-green", 192.0, 242.0, 39.0),
    ("banana", 229.0, 227.0, 58.0),
    ("mustard", 205.0, 171.0, 45.0),
    ("buttermilk", 254.0, 241.0, 181.0),
    ("gold", 139.0, 117.0, 18.0),
    ("cream", 240.0, 226.0, 187.0),
    ("light-cream", 240.0, 238.0, 215.0),
    ("wheat", 240.0, 238.0, 215.0),
    ("beige", 245.0, 245.0, 220.0),

    // Oranges
    ("peach", 242.0, 187.0, 97.0),
    ("burnt-orange", 184.0, 102.0, 37.0),
    ("pastel-orange", 248.0, 197.0, 143.0),
    ("cantaloupe", 250.0, 154.0, 79.0),
    ("carrot", 237.0, 145.0, 33.0),
    ("mandarin", 247.0, 145.0, 55.0),

    // Browns
    ("chili-powder", 199.0, 63.0, 23.0),
    ("burnt-sienna", 138.0, 54.0, 15.0),
    ("chocolate", 94.0, 38.0, 5.0),
    ("coffee", 141.0, 60.0, 15.0),
    ("cinnamon", 123.0, 63.0, 9.0),
    ("almond", 196.0, 142.0, 72.0),
    ("eggshell", 252.0, 230.0, 201.0),
    ("sand", 222.0, 182.0, 151.0),
    ("mud", 70.0, 45.0, 29.0),
    ("sienna", 160.0, 82.0, 45.0),
    ("dust", 236.0, 214.0, 197.0),
];

/// Looks up a preset colour by name.
pub fn preset(name: &str) -> Result<Rgba, ColourError> {
    PRESETS
        .iter()
        .find(|(n, ..)| *n == name)
        .map(|&(_, r, g, b)| Rgba::opaque(r / 255.0, g / 255.0, b / 255.0))
        .ok_or_else(|| ColourError::UnknownPreset(name.to_string()))
}

/// Returns every preset name in table order.
pub fn preset_names() -> Vec<&'static str> {
    PRESETS.iter().map(|(n, ..)| *n).collect()
}

impl Rgba {
    /// Parses either a hex colour or a preset name.
    ///
    /// Input starting with `#` is always treated as hex. Otherwise preset
    /// names win, so bare hex digits are only tried when no preset matches.
    pub fn parse(input: &str) -> Result<Rgba, ColourError> {
        let input = input.trim();
        if input.starts_with('#') {
            return Rgba::from_hex(input);
        }
        preset(input).or_else(|_| {
            Rgba::from_hex(input).map_err(|_| ColourError::UnknownPreset(input.to_string()))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn preset_scales_to_unit_range() {
        let teal = preset("teal").unwrap();
        assert_eq!(teal.to_hex(), "#1ca0aa");
        assert_eq!(teal.a, 1.0);
    }

    #[test]
    fn gray_presets_are_fractional_whites() {
        let gray = preset("black-50-percent").unwrap();
        assert!((gray.r - 0.5).abs() < 1e-12);
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
    }

    #[test]
    fn unknown_preset_is_an_error() {
        let err = preset("chartreuze").unwrap_err();
        assert!(err.to_string().contains("chartreuze"));
    }

    #[test]
    fn preset_names_are_unique_and_kebab_case() {
        let names = preset_names();
        assert_eq!(names.len(), PRESETS.len());
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(unique.len(), names.len(), "duplicate preset name");
        for name in &names {
            assert!(
                name.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'),
                "{name} is not kebab-case"
            );
        }
    }

    #[test]
    fn every_preset_is_in_unit_range() {
        for name in preset_names() {
            let c = preset(name).unwrap();
            for v in [c.r, c.g, c.b] {
                assert!((0.0..=1.0).contains(&v), "{name}: {v} out of range");
            }
        }
    }

    #[test]
    fn parse_accepts_hex_and_names() {
        assert_eq!(Rgba::parse("#ff0000").unwrap(), Rgba::opaque(1.0, 0.0, 0.0));
        assert_eq!(Rgba::parse("00ff00").unwrap(), Rgba::opaque(0.0, 1.0, 0.0));
        assert_eq!(Rgba::parse(" coral ").unwrap(), preset("coral").unwrap());
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            Rgba::parse("no-such-colour"),
            Err(ColourError::UnknownPreset(_))
        ));
        assert!(matches!(
            Rgba::parse("#zz0000"),
            Err(ColourError::InvalidHex(_))
        ));
    }
}
