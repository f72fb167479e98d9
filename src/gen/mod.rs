//! Deterministic creature generation.
//!
//! `generate(seed)` is a pure function: the same seed always yields a
//! structurally and numerically identical tree, so seeds can be shared as
//! compact creature identifiers. Each call builds its own random source
//! and colour mutator; nothing is shared between calls.

mod body;
mod mutator;
mod rng;

pub use body::{generate_head, generate_limb, generate_neck, generate_spine, Anchor};
pub use mutator::{random_colour, ColourMutator};
pub use rng::CreatureRng;

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use rand::Rng;

use crate::error::CritterError;
use crate::types::Node;

/// A creature seed.
///
/// Seeds parse from decimal strings (the form they are shared in) and
/// reject anything else up front, so a bad seed fails fast instead of
/// silently generating from an unrelated bit pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Seed(u64);

impl Seed {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    /// Seed offset by `n`, used for batch generation.
    pub const fn offset(self, n: u64) -> Self {
        Self(self.0.wrapping_add(n))
    }

    /// A fresh random seed in `[0, 2^31)`, the range shared links use.
    pub fn random() -> Self {
        Self(rand::thread_rng().gen_range(0..1u64 << 31))
    }
}

impl FromStr for Seed {
    type Err = CritterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| CritterError::InvalidSeed {
                input: s.to_string(),
                help: Some("Seeds are non-negative integers, e.g. 42".to_string()),
            })
    }
}

impl fmt::Display for Seed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Seed {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Generate the creature for a seed.
///
/// Builds a fresh [`CreatureRng`] and [`ColourMutator`], runs the spine
/// generator and returns the root (always a `Core`). Pure and re-entrant:
/// concurrent calls with different seeds never interfere.
pub fn generate(seed: Seed) -> Arc<Node> {
    let mut rng = CreatureRng::new(seed.value());
    let mutator = ColourMutator::new(&mut rng);
    generate_spine(&mut rng, &mutator)
}
