// Copyright 2026 the Limner Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Canonical script color expressions.

use core::fmt::Write as _;

use peniko::Color;
use peniko::color::Rgba8;

/// Returns the canonical script expression for `color`.
///
/// Fully opaque colors serialize in the three-channel `rgb(r,g,b)` form.
/// Any other alpha uses the four-channel `rgba(r,g,b,a)` form, where `a`
/// is the alpha fraction `alpha / 255` printed to six decimal places.
pub fn color_expression(color: Color) -> String {
    let mut out = String::new();
    write_color(&mut out, color.to_rgba8());
    out
}

/// Appends the expression for an 8-bit color to `out`.
pub(crate) fn write_color(out: &mut String, color: Rgba8) {
    if color.a == u8::MAX {
        let _ = write!(out, "rgb({},{},{})", color.r, color.g, color.b);
    } else {
        let _ = write!(
            out,
            "rgba({},{},{},{:.6})",
            color.r,
            color.g,
            color.b,
            f64::from(color.a) / 255.0
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opaque_omits_alpha() {
        let c = Color::from_rgba8(255, 0, 10, 255);
        assert_eq!(color_expression(c), "rgb(255,0,10)");
    }

    #[test]
    fn translucent_carries_alpha_fraction() {
        let c = Color::from_rgba8(255, 0, 10, 128);
        assert_eq!(color_expression(c), "rgba(255,0,10,0.501961)");
    }

    #[test]
    fn fully_transparent_still_serializes() {
        let c = Color::from_rgba8(1, 2, 3, 0);
        assert_eq!(color_expression(c), "rgba(1,2,3,0.000000)");
    }
}
