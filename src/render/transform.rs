//! Per-node transform rule.
//!
//! A node's placement is a function of its parent's size and its own
//! position, rotation and scale. The position is polar-ish: `position.y`
//! is a distance from the parent origin and `position.x` picks the
//! direction by rotating that offset by `position.x * 180` degrees, then
//! both axes are stretched by the parent's size. Mirrored instances
//! flip horizontally around the parent origin.

use crate::types::Node;

/// Format a coordinate for SVG output. Values are rounded to three
/// decimals and negative zero is normalised so output stays stable.
pub(crate) fn num(value: f64) -> String {
    let rounded = (value * 1000.0).round() / 1000.0;
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{:.3}", rounded)
}

/// Compute the SVG `transform` attribute for a node.
pub fn group_transform(parent_size: [f64; 2], node: &Node, mirrored: bool) -> String {
    let mirror_sign = if mirrored { -1 } else { 1 };
    let [px, py] = node.position_or_default();
    let rotation = node.rotation_or_default();
    let scale = node.scale_or_default();

    let theta = (px * 180.0).to_radians();
    let tx = -py * theta.sin() * parent_size[0];
    let ty = py * theta.cos() * parent_size[1];

    format!(
        "scale({mirror_sign} 1) translate({} {}) rotate({}) scale({})",
        num(tx),
        num(ty),
        num(rotation),
        num(scale),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{NodeBuilder, NodeKind};

    #[test]
    fn test_defaults_are_identity() {
        let node = NodeBuilder::new(NodeKind::Core).build();
        assert_eq!(
            group_transform([1.0, 1.0], &node, false),
            "scale(1 1) translate(0.000 0.000) rotate(0.000) scale(1.000)"
        );
    }

    #[test]
    fn test_mirrored_flips_horizontally() {
        let node = NodeBuilder::new(NodeKind::Core).build();
        let transform = group_transform([1.0, 1.0], &node, true);
        assert!(transform.starts_with("scale(-1 1)"));
    }

    #[test]
    fn test_position_x_rotates_offset() {
        // position.x = 0.5 swings the offset 90 degrees: all of the
        // distance lands on the (negated) x axis, scaled by parent width.
        let node = NodeBuilder::new(NodeKind::Segment).position(0.5, 1.0).build();
        let transform = group_transform([10.0, 20.0], &node, false);
        assert!(transform.contains("translate(-10.000 0.000)"), "{transform}");
    }

    #[test]
    fn test_straight_down_offset() {
        let node = NodeBuilder::new(NodeKind::Segment).position(0.0, 2.0).build();
        let transform = group_transform([10.0, 20.0], &node, false);
        assert!(transform.contains("translate(0.000 40.000)"), "{transform}");
    }

    #[test]
    fn test_rotation_and_scale_pass_through() {
        let node = NodeBuilder::new(NodeKind::Eye)
            .rotation(45.0)
            .scale(12.5)
            .build();
        let transform = group_transform([1.0, 1.0], &node, false);
        assert!(transform.contains("rotate(45.000)"));
        assert!(transform.ends_with("scale(12.500)"));
    }
}
