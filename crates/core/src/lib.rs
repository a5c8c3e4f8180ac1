#![deny(unsafe_code)]
//! Colour model conversions and harmonic colour schemes.
//!
//! `Rgba` is the hub: HSBA, CIE XYZ, CIE LAB, CMYK and hex strings all
//! convert to and from it through pure functions. Derived colours
//! (lighten, darken, complementary, black/white contrast) and four-colour
//! schemes (analogous, monochromatic, triad, complementary) are computed on
//! the HSBA form. Named presets and a `ColorAdapter` seam for host colour
//! types sit at the edges.

pub mod adapter;
pub mod cie;
pub mod cmyk;
pub mod color;
pub mod derive;
pub mod error;
pub mod presets;
pub mod scheme;

pub use adapter::ColorAdapter;
pub use cie::{
    lab_to_rgba, lab_to_xyz, rgba_to_lab, rgba_to_xyz, xyz_to_lab, xyz_to_rgba, Lab, Xyz,
};
pub use cmyk::{cmyk_to_rgba, rgba_to_cmyk, Cmyk};
pub use color::{hsba_to_rgba, rgba_to_hsba, ColorFormulation, Hsba, Rgba};
pub use error::ColourError;
pub use presets::{preset, preset_names};
pub use scheme::{add_degree, color_scheme, color_scheme_with, ColorScheme, HueWrap};
