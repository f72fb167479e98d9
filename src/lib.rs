//! critter - deterministic procedural creature generator
//!
//! A library for generating random creatures as trees of typed body-part
//! nodes from integer seeds, and rendering those trees as nested,
//! transformed SVG shapes. The same seed always produces the same
//! creature, so seeds double as compact shareable identifiers.

pub mod cli;
pub mod error;
pub mod gen;
pub mod output;
pub mod render;
pub mod types;
pub mod validation;

pub use error::{CritterError, Result};
pub use gen::{generate, ColourMutator, CreatureRng, Seed};
pub use render::{group_transform, RenderOptions, SvgRenderer};
pub use types::{
    chain, Hsla, Mood, Node, NodeBuilder, NodeKind, Size, MAX_MOUTH_CURVE, MIN_MOUTH_CURVE,
};
pub use validation::{validate_tree, Diagnostic, Severity, ValidationResult};
