//! HSLA colour type used throughout the creature tree.
//!
//! Colours are generated and mutated in HSL space (hue spins, saturation
//! and lightness nudges), so the canonical representation stays HSL and
//! only converts to sRGB at output time.

use std::fmt;

use serde::Serialize;

/// An HSLA colour value.
///
/// Hue is in degrees and kept within `[0, 360)`; saturation, lightness and
/// alpha are fractions in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    /// Create a new colour, wrapping hue into `[0, 360)` and clamping the
    /// other channels to `[0, 1]`.
    pub fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: saturation.clamp(0.0, 1.0),
            lightness: lightness.clamp(0.0, 1.0),
            alpha: alpha.clamp(0.0, 1.0),
        }
    }

    /// Rotate the hue by `degrees`, wrapping around the colour wheel.
    pub fn spin(self, degrees: f64) -> Self {
        Self::new(self.hue + degrees, self.saturation, self.lightness, self.alpha)
    }

    /// Adjust saturation by a percentage of the full channel range.
    /// Negative values desaturate.
    pub fn saturate(self, percent: f64) -> Self {
        Self::new(
            self.hue,
            self.saturation + percent / 100.0,
            self.lightness,
            self.alpha,
        )
    }

    /// Adjust lightness by a percentage of the full channel range.
    /// Negative values darken.
    pub fn lighten(self, percent: f64) -> Self {
        Self::new(
            self.hue,
            self.saturation,
            self.lightness + percent / 100.0,
            self.alpha,
        )
    }

    /// Cap lightness at `max`. Used when deriving readable theme colours
    /// from a creature's body colour.
    pub fn clamp_lightness(self, max: f64) -> Self {
        Self {
            lightness: self.lightness.min(max),
            ..self
        }
    }

    /// CSS `hsla(...)` string, usable directly as an SVG fill or stroke.
    pub fn to_css(self) -> String {
        format!(
            "hsla({:.2}, {:.2}%, {:.2}%, {:.3})",
            self.hue,
            self.saturation * 100.0,
            self.lightness * 100.0,
            self.alpha
        )
    }

    /// Hex `#RRGGBBAA` string via an HSL -> sRGB conversion.
    pub fn to_hex(self) -> String {
        use palette::{Hsl, IntoColor, Srgb};

        let hsl = Hsl::new(
            self.hue as f32,
            self.saturation as f32,
            self.lightness as f32,
        );
        let rgb: Srgb<f32> = hsl.into_color();

        format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            (rgb.red * 255.0).round() as u8,
            (rgb.green * 255.0).round() as u8,
            (rgb.blue * 255.0).round() as u8,
            (self.alpha * 255.0).round() as u8,
        )
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_css())
    }
}

fn wrap_hue(hue: f64) -> f64 {
    let wrapped = hue % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_wraps_around() {
        let c = Hsla::new(350.0, 0.5, 0.5, 1.0);
        assert_eq!(c.spin(20.0).hue, 10.0);
        assert_eq!(c.spin(-360.0).hue, 350.0);

        let c = Hsla::new(10.0, 0.5, 0.5, 1.0);
        assert_eq!(c.spin(-30.0).hue, 340.0);
    }

    #[test]
    fn test_saturate_clamps() {
        let c = Hsla::new(0.0, 0.95, 0.5, 1.0);
        assert_eq!(c.saturate(10.0).saturation, 1.0);
        assert!((c.saturate(-10.0).saturation - 0.85).abs() < 1e-12);
    }

    #[test]
    fn test_lighten_clamps() {
        let c = Hsla::new(0.0, 0.5, 0.05, 1.0);
        assert_eq!(c.lighten(-10.0).lightness, 0.0);
        assert!((c.lighten(10.0).lightness - 0.15).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_lightness() {
        let c = Hsla::new(120.0, 0.5, 0.97, 0.95);
        assert_eq!(c.clamp_lightness(0.9).lightness, 0.9);
        assert_eq!(c.clamp_lightness(0.99).lightness, 0.97);
    }

    #[test]
    fn test_to_css() {
        let c = Hsla::new(212.5, 0.6, 0.4, 0.95);
        assert_eq!(c.to_css(), "hsla(212.50, 60.00%, 40.00%, 0.950)");
    }

    #[test]
    fn test_to_hex_primary() {
        let c = Hsla::new(0.0, 1.0, 0.5, 1.0);
        assert_eq!(c.to_hex(), "#FF0000FF");

        let c = Hsla::new(120.0, 1.0, 0.5, 0.95);
        assert_eq!(c.to_hex(), "#00FF00F2");
    }
}
