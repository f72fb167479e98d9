//! Individual validation checks for generated creature trees.
//!
//! Each check walks the tree independently and reports everything it
//! finds; the caller merges the results. The intervals asserted here are
//! the generator's documented bounds.

use std::sync::Arc;

use crate::types::{Node, NodeKind, Size, MAX_MOUTH_CURVE, MIN_MOUTH_CURVE};

use super::warning::ValidationResult;

/// Alpha every generated colour carries.
const BODY_ALPHA: f64 = 0.95;

fn in_range(value: f64, min: f64, max: f64) -> bool {
    min <= value && value <= max
}

/// Vertebrae reachable from the root by following direct `Core` children.
/// The head's core hangs below a segment, so it never joins this chain.
fn spine_chain(root: &Node) -> Vec<&Node> {
    let mut chain = vec![root];
    let mut node = root;
    while let Some(next) = node
        .children
        .iter()
        .find(|c| c.kind == NodeKind::Core)
        .map(|c| &**c)
    {
        chain.push(next);
        node = next;
    }
    chain
}

pub(super) fn check_root(root: &Node) -> ValidationResult {
    let mut result = ValidationResult::new();
    if root.kind != NodeKind::Core {
        result.error(
            "critter::validate::root-kind",
            format!("root node is {}, expected Core", root.kind),
        );
    }
    result
}

pub(super) fn check_spine(root: &Node) -> ValidationResult {
    let mut result = ValidationResult::new();
    let chain = spine_chain(root);

    if !(1..=5).contains(&chain.len()) {
        result.error(
            "critter::validate::spine-length",
            format!("spine has {} vertebrae, expected 1 to 5", chain.len()),
        );
    }

    for (index, vertebra) in chain.iter().enumerate() {
        let expected = if index == 0 { [0.0, 0.0] } else { [0.0, -1.0] };
        if vertebra.position != Some(expected) {
            result.error(
                "critter::validate::spine-position",
                format!(
                    "vertebra {index} at {:?}, expected {expected:?}",
                    vertebra.position
                ),
            );
        }
        if vertebra.mirror {
            result.error(
                "critter::validate::spine-mirror",
                format!("vertebra {index} is mirrored"),
            );
        }
        match vertebra.size.map(Size::as_box) {
            Some([w, h]) if in_range(w, 15.0, 50.0) && in_range(h, 15.0, 40.0) => {}
            other => result.error(
                "critter::validate::spine-size",
                format!("vertebra {index} has size {other:?}, expected [15-50, 15-40]"),
            ),
        }

        let has_neck = vertebra.children.iter().any(|c| c.kind == NodeKind::Neck);
        let is_last = index == chain.len() - 1;
        if is_last && !has_neck {
            result.error(
                "critter::validate::spine-neck",
                "last vertebra has no neck",
            );
        }
        if !is_last && has_neck {
            result.error(
                "critter::validate::spine-neck",
                format!("vertebra {index} carries a neck but is not last"),
            );
        }
    }

    result
}

pub(super) fn check_limbs(root: &Node) -> ValidationResult {
    let mut result = ValidationResult::new();

    for vertebra in spine_chain(root) {
        for limb in vertebra
            .children
            .iter()
            .filter(|c| c.kind == NodeKind::BallJoint)
        {
            if !limb.mirror {
                result.error(
                    "critter::validate::limb-mirror",
                    "first limb joint is not mirrored",
                );
            }

            let mut pairs = 0;
            let mut joint: &Node = limb;
            loop {
                let segment = match joint.children.first() {
                    Some(s) if s.kind == NodeKind::Segment && joint.children.len() == 1 => s,
                    _ => {
                        result.error(
                            "critter::validate::limb-chain",
                            format!(
                                "limb joint has children {:?}, expected one Segment",
                                joint.children.iter().map(|c| c.kind).collect::<Vec<_>>()
                            ),
                        );
                        break;
                    }
                };
                pairs += 1;

                match segment.children.first() {
                    None => break,
                    Some(next) if next.kind == NodeKind::BallJoint && segment.children.len() == 1 => {
                        joint = next;
                    }
                    Some(next) => {
                        result.error(
                            "critter::validate::limb-chain",
                            format!("limb segment leads to {}, expected BallJoint", next.kind),
                        );
                        break;
                    }
                }
            }

            if !(1..=4).contains(&pairs) {
                result.error(
                    "critter::validate::limb-length",
                    format!("limb has {pairs} joint/segment pairs, expected 1 to 4"),
                );
            }
        }
    }

    result
}

pub(super) fn check_heads(root: &Node) -> ValidationResult {
    let mut result = ValidationResult::new();

    let mut necks: Vec<&Node> = Vec::new();
    root.visit(&mut |n| {
        if n.kind == NodeKind::Neck {
            necks.push(n);
        }
    });

    for neck in necks {
        let segment = match neck.children.as_slice() {
            [only] if only.kind == NodeKind::Segment => only,
            _ => {
                result.error(
                    "critter::validate::neck-shape",
                    "neck does not carry exactly one segment",
                );
                continue;
            }
        };
        let head = match segment.children.as_slice() {
            [only] if only.kind == NodeKind::Core => only,
            _ => {
                result.error(
                    "critter::validate::neck-shape",
                    "neck segment does not carry exactly one head core",
                );
                continue;
            }
        };

        match head.size.map(Size::as_box) {
            Some([w, h]) if in_range(w, 20.0, 60.0) && in_range(h, 20.0, 60.0) => {}
            other => result.error(
                "critter::validate::head-size",
                format!("head has size {other:?}, expected [20-60, 20-60]"),
            ),
        }

        let mouths = head
            .children
            .iter()
            .filter(|c| c.kind == NodeKind::Mouth)
            .count();
        let eyes: Vec<&Arc<Node>> = head
            .children
            .iter()
            .filter(|c| c.kind == NodeKind::Eye)
            .collect();

        if mouths != 1 {
            result.error(
                "critter::validate::head-shape",
                format!("head has {mouths} mouths, expected exactly 1"),
            );
        }
        if !(1..=3).contains(&eyes.len()) {
            result.error(
                "critter::validate::head-shape",
                format!("head has {} eyes, expected 1 to 3", eyes.len()),
            );
        }
        if head.children.len() != mouths + eyes.len() {
            result.error(
                "critter::validate::head-shape",
                "head has children besides its mouth and eyes",
            );
        }

        // Every eye of a head shares one iris allocation.
        let mut irises = eyes.iter().filter_map(|eye| match eye.children.as_slice() {
            [only] if only.kind == NodeKind::Iris => Some(only),
            _ => None,
        });
        if let Some(first) = irises.next() {
            if !irises.all(|iris| Arc::ptr_eq(iris, first)) {
                result.error(
                    "critter::validate::shared-iris",
                    "eyes of one head hold different iris instances",
                );
            }
        }
        for eye in &eyes {
            match eye.children.as_slice() {
                [only] if only.kind == NodeKind::Iris => {}
                _ => result.error(
                    "critter::validate::shared-iris",
                    "eye does not carry exactly one iris",
                ),
            }
        }
    }

    result
}

pub(super) fn check_ranges(root: &Node) -> ValidationResult {
    let mut result = ValidationResult::new();
    let code = "critter::validate::range";

    root.visit(&mut |node| {
        if let Some(colour) = node.colour {
            if (colour.alpha - BODY_ALPHA).abs() > 1e-9 {
                result.error(
                    code,
                    format!("{} colour alpha is {}, expected 0.95", node.kind, colour.alpha),
                );
            }
        }

        match node.kind {
            NodeKind::BallJoint => {
                match node.size.map(Size::as_box) {
                    Some([w, h]) if w == h && in_range(w, 10.0, 40.0) => {}
                    other => result.error(
                        code,
                        format!("ball joint size {other:?}, expected square in [10, 40]"),
                    ),
                }
                match node.max_angle {
                    Some(a) if in_range(a, 5.0, 90.0) => {}
                    other => result.error(
                        code,
                        format!("ball joint max angle {other:?}, expected [5, 90]"),
                    ),
                }
            }
            NodeKind::Neck => {
                if node.max_angle != Some(10.0) {
                    result.error(
                        code,
                        format!("neck max angle {:?}, expected exactly 10", node.max_angle),
                    );
                }
                match node.size.map(Size::as_box) {
                    Some([w, h]) if w == h && in_range(w, 10.0, 30.0) => {}
                    other => result.error(
                        code,
                        format!("neck size {other:?}, expected square in [10, 30]"),
                    ),
                }
            }
            NodeKind::Segment => match node.size.map(Size::as_box) {
                Some([w, h]) if in_range(w, 10.0, 20.0) && in_range(h, 10.0, 50.0) => {}
                other => result.error(
                    code,
                    format!("segment size {other:?}, expected [10-20, 10-50]"),
                ),
            },
            NodeKind::Eye => {
                match node.scale {
                    Some(s) if in_range(s, 3.0, 20.0) => {}
                    other => {
                        result.error(code, format!("eye scale {other:?}, expected [3, 20]"))
                    }
                }
                match node.position {
                    Some([x, y]) if in_range(y, 0.3, 1.0) => {
                        let centred = x == 0.0 && !node.mirror;
                        let paired = node.mirror && in_range(x, 0.2, 0.5);
                        if !centred && !paired {
                            result.error(
                                code,
                                format!("eye at x = {x} (mirror = {}) is misplaced", node.mirror),
                            );
                        }
                    }
                    other => result.error(
                        code,
                        format!("eye position {other:?}, expected y in [0.3, 1]"),
                    ),
                }
            }
            NodeKind::Iris => {
                match node.size {
                    Some(Size::Radius(r)) if in_range(r, 0.1, 0.7) => {}
                    other => result.error(
                        code,
                        format!("iris size {other:?}, expected radius in [0.1, 0.7]"),
                    ),
                }
                match node.pupil_size {
                    Some(p) if in_range(p, 0.1, 0.5) => {}
                    other => {
                        result.error(code, format!("pupil size {other:?}, expected [0.1, 0.5]"))
                    }
                }
            }
            NodeKind::Mouth => {
                match node.size.map(Size::as_box) {
                    Some([w, h]) if in_range(w, 10.0, 40.0) && in_range(h, 1.0, 30.0) => {}
                    other => result.error(
                        code,
                        format!("mouth size {other:?}, expected [10-40, 1-30]"),
                    ),
                }
                match node.curve {
                    Some(c) if in_range(c, MIN_MOUTH_CURVE, MAX_MOUTH_CURVE) => {}
                    other => result.error(
                        code,
                        format!("mouth curve {other:?}, expected [-20, 10]"),
                    ),
                }
                match node.lip_thickness {
                    Some(t) if in_range(t, 1.0, 10.0) => {}
                    other => {
                        result.error(code, format!("lip thickness {other:?}, expected [1, 10]"))
                    }
                }
            }
            NodeKind::Core | NodeKind::LeverJoint | NodeKind::Hand | NodeKind::FaceBlob => {}
        }
    });

    result
}

pub(super) fn check_mirrors(root: &Node) -> ValidationResult {
    let mut result = ValidationResult::new();
    root.visit(&mut |node| {
        if node.mirror && node.position.is_none() {
            result.error(
                "critter::validate::mirror-position",
                format!("mirrored {} has no position", node.kind),
            );
        }
    });
    result
}

pub(super) fn check_reserved(root: &Node) -> ValidationResult {
    let mut result = ValidationResult::new();
    root.visit(&mut |node| {
        if node.kind.is_reserved() {
            result.error(
                "critter::validate::reserved-kind",
                format!("generated tree contains reserved kind {}", node.kind),
            );
        }
    });
    result
}
