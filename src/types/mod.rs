//! Core domain types for critter.
//!
//! This module contains the fundamental types used throughout the crate:
//! - `Hsla` - HSLA colour values
//! - `Node` / `NodeKind` / `Size` - body-part tree nodes
//! - `NodeBuilder` / `chain` - immutable tree assembly
//! - `Mood` - expression classification from a mouth curve

mod colour;
mod node;

pub use colour::Hsla;
pub use node::{chain, Mood, Node, NodeBuilder, NodeKind, Size, MAX_MOUTH_CURVE, MIN_MOUTH_CURVE};
