//! CIE 1931 XYZ and CIE L*a*b* conversions.
//!
//! XYZ uses the x100 scale (white is roughly `(95.05, 100, 108.9)`), with
//! the sRGB D65 matrix. LAB is computed relative to the D65 reference
//! white. The inverse path goes LAB -> XYZ -> linear RGB -> sRGB and
//! clamps its result into [0, 1].

use crate::color::{unit, Rgba};
use serde::{Deserialize, Serialize};

/// CIE XYZ tristimulus values on the x100 scale, with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub alpha: f64,
}

/// CIE L*a*b* with alpha. `l` is in [0, 100]; `a` and `b` are unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Lab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
    pub alpha: f64,
}

/// D65 reference white on the x100 scale.
const WHITE_X: f64 = 95.047;
const WHITE_Y: f64 = 100.0;
const WHITE_Z: f64 = 108.883;

/// (6/29)^3, where the LAB transfer function switches to its linear segment.
const LAB_EPSILON: f64 = (6.0 / 29.0) * (6.0 / 29.0) * (6.0 / 29.0);

/// Applies inverse sRGB gamma to a single component.
fn srgb_component_to_linear(c: f64) -> f64 {
    if c > 0.04045 {
        ((c + 0.055) / 1.055).powf(2.4)
    } else {
        c / 12.92
    }
}

/// Applies sRGB gamma to a single linear component.
fn linear_component_to_srgb(k: f64) -> f64 {
    if k > 0.0031308 {
        1.055 * k.powf(1.0 / 2.4) - 0.055
    } else {
        12.92 * k
    }
}

fn lab_forward(t: f64) -> f64 {
    if t > LAB_EPSILON {
        t.cbrt()
    } else {
        (1.0 / 3.0) * (29.0 / 6.0) * (29.0 / 6.0) * t + 4.0 / 29.0
    }
}

fn lab_inverse(k: f64) -> f64 {
    let cubed = k * k * k;
    if cubed > 0.008856 {
        cubed
    } else {
        (k - 4.0 / 29.0) / 7.787
    }
}

/// Converts RGBA to XYZ.
pub fn rgba_to_xyz(c: Rgba) -> Xyz {
    let r = srgb_component_to_linear(c.r);
    let g = srgb_component_to_linear(c.g);
    let b = srgb_component_to_linear(c.b);
    Xyz {
        x: 41.24 * r + 35.76 * g + 18.05 * b,
        y: 21.26 * r + 71.52 * g + 7.22 * b,
        z: 1.93 * r + 11.92 * g + 95.05 * b,
        alpha: c.a,
    }
}

/// Converts XYZ to RGBA, clamping the result to [0, 1].
pub fn xyz_to_rgba(c: Xyz) -> Rgba {
    let x = c.x / 100.0;
    let y = c.y / 100.0;
    let z = c.z / 100.0;

    let r = 3.2406 * x - 1.5372 * y - 0.4986 * z;
    let g = -0.9689 * x + 1.8758 * y + 0.0415 * z;
    let b = 0.0557 * x - 0.2040 * y + 1.0570 * z;

    Rgba {
        r: unit(linear_component_to_srgb(r)),
        g: unit(linear_component_to_srgb(g)),
        b: unit(linear_component_to_srgb(b)),
        a: unit(c.alpha),
    }
}

/// Converts XYZ to LAB relative to the D65 white.
pub fn xyz_to_lab(c: Xyz) -> Lab {
    let fx = lab_forward(c.x / WHITE_X);
    let fy = lab_forward(c.y / WHITE_Y);
    let fz = lab_forward(c.z / WHITE_Z);
    Lab {
        l: 116.0 * fy - 16.0,
        a: 500.0 * (fx - fy),
        b: 200.0 * (fy - fz),
        alpha: c.alpha,
    }
}

/// Converts LAB back to XYZ on the x100 scale.
pub fn lab_to_xyz(c: Lab) -> Xyz {
    let fy = (c.l + 16.0) / 116.0;
    let fx = c.a / 500.0 + fy;
    let fz = fy - c.b / 200.0;
    Xyz {
        x: lab_inverse(fx) * WHITE_X,
        y: lab_inverse(fy) * WHITE_Y,
        z: lab_inverse(fz) * WHITE_Z,
        alpha: c.alpha,
    }
}

/// Convenience: RGBA -> XYZ -> LAB.
pub fn rgba_to_lab(c: Rgba) -> Lab {
    xyz_to_lab(rgba_to_xyz(c))
}

/// Convenience: LAB -> XYZ -> RGBA, clamped to [0, 1].
pub fn lab_to_rgba(c: Lab) -> Rgba {
    xyz_to_rgba(lab_to_xyz(c))
}
