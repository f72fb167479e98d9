//! Rendering module for critter.
//!
//! Consumes a generated creature tree and emits an SVG document. The
//! generator knows nothing about this layer; it only promises the tree
//! shape described in `types`.

mod svg;
mod transform;

pub use svg::{RenderOptions, SvgRenderer};
pub use transform::group_transform;
