//! Colour selection for a creature.
//!
//! One random base colour is drawn per creature; every body part along a
//! kinematic chain gets a fresh perturbation of that same base. The
//! perturbations never accumulate, so the palette stays coherent no
//! matter how long the chain grows.

use crate::types::Hsla;

use super::rng::CreatureRng;

/// Alpha applied to every generated colour.
const BODY_ALPHA: f64 = 0.95;

/// Draw a fully random colour: any hue and saturation, mid-range
/// lightness so parts stay visible on both light and dark backgrounds.
pub fn random_colour(rng: &mut CreatureRng) -> Hsla {
    Hsla::new(
        rng.real(0.0, 1.0) * 360.0,
        rng.real(0.0, 1.0),
        rng.real(0.2, 0.8),
        BODY_ALPHA,
    )
}

/// Produces related-but-distinct colours around one fixed base.
#[derive(Debug, Clone)]
pub struct ColourMutator {
    base: Hsla,
}

impl ColourMutator {
    /// Seed the mutator with a random base colour.
    pub fn new(rng: &mut CreatureRng) -> Self {
        Self {
            base: random_colour(rng),
        }
    }

    /// A fresh variant of the base colour: hue spun up to 30 degrees
    /// either way, saturation and lightness nudged up to 10 points.
    pub fn next(&self, rng: &mut CreatureRng) -> Hsla {
        self.base
            .spin(rng.real(-30.0, 30.0))
            .saturate(rng.real(-10.0, 10.0))
            .lighten(rng.real(-10.0, 10.0))
    }
}
