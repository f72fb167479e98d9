//! Body-part sub-generators.
//!
//! Each function is pure in `(rng, mutator, anchor)` and returns one
//! subtree. The order of random draws inside each function is part of the
//! seed contract (see `rng`): reordering draws changes every creature.

use std::sync::Arc;

use crate::types::{chain, Node, NodeBuilder, NodeKind, MAX_MOUTH_CURVE, MIN_MOUTH_CURVE};

use super::mutator::{random_colour, ColourMutator};
use super::rng::CreatureRng;

/// Where a limb attaches to its parent vertebra.
#[derive(Debug, Clone, Copy)]
pub struct Anchor {
    pub position: [f64; 2],
    pub rotation: f64,
}

fn ball_joint(
    position: [f64; 2],
    rotation: f64,
    mirror: bool,
    rng: &mut CreatureRng,
    mutator: &ColourMutator,
) -> NodeBuilder {
    let size = rng.real(10.0, 40.0);
    NodeBuilder::new(NodeKind::BallJoint)
        .position(position[0], position[1])
        .rotation(rotation)
        .max_angle(rng.real(5.0, 90.0))
        .size(size, size)
        .colour(mutator.next(rng))
        .mirror(mirror)
}

/// A limb: 1-4 (ball joint, segment) pairs chained into one kinematic
/// run. The first joint sits at the caller's anchor and is always
/// mirrored (limbs come in symmetric pairs); later joints hang below the
/// previous segment with their own rotation.
///
/// Returns `None` only if the chain resolves to zero pairs; unreachable
/// with the current count bounds, but the guard keeps future parameter
/// ranges honest.
pub fn generate_limb(
    anchor: Anchor,
    rng: &mut CreatureRng,
    mutator: &ColourMutator,
) -> Option<Arc<Node>> {
    let count = rng.integer(1, 4);
    let mut parts = Vec::with_capacity(count as usize * 2);

    for i in 0..count {
        let joint = if i == 0 {
            ball_joint(anchor.position, anchor.rotation, true, rng, mutator)
        } else {
            let rotation = rng.real(-20.0, 70.0);
            let mirror = rng.chance(0.2);
            ball_joint([0.0, 2.0], rotation, mirror, rng, mutator)
        };
        let segment = NodeBuilder::new(NodeKind::Segment)
            .size(rng.real(10.0, 20.0), rng.real(10.0, 50.0))
            .colour(mutator.next(rng));

        parts.push(joint);
        parts.push(segment);
    }

    chain(parts)
}

/// A head: a core with one mouth and 1-3 eyes.
///
/// The iris is built once and shared by every eye of the head; the
/// children all hold the same allocation, not copies. A single (cyclops)
/// eye sits on the centreline unmirrored; paired eyes are offset and
/// mirrored by the renderer.
pub fn generate_head(rng: &mut CreatureRng, mutator: &ColourMutator) -> Arc<Node> {
    let iris = NodeBuilder::new(NodeKind::Iris)
        .radius(rng.real(0.1, 0.7))
        .colour(random_colour(rng))
        .pupil_size(rng.real(0.1, 0.5))
        .build();

    let mut head = NodeBuilder::new(NodeKind::Core)
        .position(0.0, 2.0)
        .size(rng.real(20.0, 60.0), rng.real(20.0, 60.0))
        .colour(mutator.next(rng));

    // Curve bounds are passed max-first for historical reasons; the draw
    // covers the full [-20, 10] interval either way.
    head = head.child(
        NodeBuilder::new(NodeKind::Mouth)
            .colour(random_colour(rng))
            .size(rng.real(10.0, 40.0), rng.real(1.0, 30.0))
            .lip_thickness(rng.real(1.0, 10.0))
            .curve(rng.real(MAX_MOUTH_CURVE, MIN_MOUTH_CURVE))
            .position(0.0, -rng.real(0.1, 0.9))
            .build(),
    );

    let eye_count = rng.integer(1, 3);
    for _ in 0..eye_count {
        let single = rng.chance(0.5);
        let scale = rng.real(3.0, 20.0);
        let x = if single { 0.0 } else { rng.real(0.2, 0.5) };
        let y = rng.real(0.3, 1.0);

        head = head.child(
            NodeBuilder::new(NodeKind::Eye)
                .scale(scale)
                .mirror(!single)
                .position(x, y)
                .child(Arc::clone(&iris))
                .build(),
        );
    }

    head.build()
}

/// A neck joint carrying a segment that carries the head. The neck sways
/// within a fixed 10 degree bound; the segment points straight up.
pub fn generate_neck(rng: &mut CreatureRng, mutator: &ColourMutator) -> Arc<Node> {
    let size = rng.real(10.0, 30.0);
    let neck = NodeBuilder::new(NodeKind::Neck)
        .max_angle(10.0)
        .position(0.0, rng.real(-0.8, -1.0))
        .rotation(0.0)
        .size(size, size)
        .colour(mutator.next(rng))
        .mirror(false);

    let segment = NodeBuilder::new(NodeKind::Segment)
        .position(0.0, 0.0)
        .rotation(180.0)
        .size(rng.real(10.0, 20.0), rng.real(20.0, 30.0))
        .colour(mutator.next(rng));

    let head = generate_head(rng, mutator);
    neck.child(segment.child(head).build()).build()
}

/// The whole creature: 1-5 core vertebrae chained into a spine, each with
/// 0-2 limbs of its own, and the neck (with head) hung off the last
/// vertebra. The first vertebra is the creature root.
pub fn generate_spine(rng: &mut CreatureRng, mutator: &ColourMutator) -> Arc<Node> {
    let count = rng.integer(1, 5);
    let mut vertebrae = Vec::with_capacity(count as usize);

    for index in 0..count {
        let mut vertebra = NodeBuilder::new(NodeKind::Core)
            .size(rng.real(15.0, 50.0), rng.real(15.0, 40.0))
            .position(0.0, if index == 0 { 0.0 } else { -1.0 })
            .mirror(false)
            .colour(mutator.next(rng));

        let limb_count = rng.integer(0, 2);
        for _ in 0..limb_count {
            let anchor = Anchor {
                rotation: rng.real(0.0, 180.0),
                position: [rng.real(0.1, 0.4), rng.real(0.6, 1.0)],
            };
            if let Some(limb) = generate_limb(anchor, rng, mutator) {
                vertebra = vertebra.child(limb);
            }
        }

        vertebrae.push(vertebra);
    }

    let neck = generate_neck(rng, mutator);
    if let Some(last) = vertebrae.pop() {
        // The neck lands after any limbs the last vertebra already has.
        vertebrae.push(last.child(neck));
    }

    chain(vertebrae).expect("spine count is at least 1")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Size;

    fn setup(seed: u64) -> (CreatureRng, ColourMutator) {
        let mut rng = CreatureRng::new(seed);
        let mutator = ColourMutator::new(&mut rng);
        (rng, mutator)
    }

    #[test]
    fn test_limb_alternates_joints_and_segments() {
        for seed in 0..50 {
            let (mut rng, mutator) = setup(seed);
            let anchor = Anchor {
                position: [0.2, 0.8],
                rotation: 45.0,
            };
            let limb = generate_limb(anchor, &mut rng, &mutator).unwrap();

            let mut pairs = 0;
            let mut node = limb;
            loop {
                assert_eq!(node.kind, NodeKind::BallJoint);
                assert_eq!(node.children.len(), 1);
                let segment = Arc::clone(&node.children[0]);
                assert_eq!(segment.kind, NodeKind::Segment);
                pairs += 1;

                match segment.children.first() {
                    Some(next) => node = Arc::clone(next),
                    None => break,
                }
            }
            assert!((1..=4).contains(&pairs));
        }
    }

    #[test]
    fn test_limb_first_joint_uses_anchor() {
        let (mut rng, mutator) = setup(17);
        let anchor = Anchor {
            position: [0.3, 0.7],
            rotation: 120.0,
        };
        let limb = generate_limb(anchor, &mut rng, &mutator).unwrap();

        assert_eq!(limb.position, Some([0.3, 0.7]));
        assert_eq!(limb.rotation, Some(120.0));
        assert!(limb.mirror);
    }

    #[test]
    fn test_joint_geometry_bounds() {
        let (mut rng, mutator) = setup(23);
        let anchor = Anchor {
            position: [0.1, 0.6],
            rotation: 0.0,
        };
        let limb = generate_limb(anchor, &mut rng, &mutator).unwrap();

        limb.visit(&mut |node| match node.kind {
            NodeKind::BallJoint => {
                let [w, h] = node.size.unwrap().as_box();
                assert_eq!(w, h, "ball joints are square");
                assert!((10.0..40.0).contains(&w));
                let angle = node.max_angle.unwrap();
                assert!((5.0..90.0).contains(&angle));
            }
            NodeKind::Segment => {
                let [w, h] = node.size.unwrap().as_box();
                assert!((10.0..20.0).contains(&w));
                assert!((10.0..50.0).contains(&h));
            }
            other => panic!("unexpected kind in limb: {other}"),
        });
    }

    #[test]
    fn test_head_has_mouth_and_eyes() {
        for seed in 0..50 {
            let (mut rng, mutator) = setup(seed);
            let head = generate_head(&mut rng, &mutator);

            assert_eq!(head.kind, NodeKind::Core);
            let mouths: Vec<_> = head
                .children
                .iter()
                .filter(|c| c.kind == NodeKind::Mouth)
                .collect();
            let eyes: Vec<_> = head
                .children
                .iter()
                .filter(|c| c.kind == NodeKind::Eye)
                .collect();

            assert_eq!(mouths.len(), 1);
            assert!((1..=3).contains(&eyes.len()));
            assert_eq!(head.children.len(), 1 + eyes.len());

            let curve = mouths[0].curve.unwrap();
            assert!((MIN_MOUTH_CURVE..MAX_MOUTH_CURVE).contains(&curve));
        }
    }

    #[test]
    fn test_eyes_share_one_iris() {
        for seed in 0..50 {
            let (mut rng, mutator) = setup(seed);
            let head = generate_head(&mut rng, &mutator);

            let irises: Vec<&Arc<Node>> = head
                .children
                .iter()
                .filter(|c| c.kind == NodeKind::Eye)
                .map(|eye| &eye.children[0])
                .collect();

            assert!(!irises.is_empty());
            for iris in &irises {
                assert_eq!(iris.kind, NodeKind::Iris);
                assert!(Arc::ptr_eq(iris, irises[0]));
                assert!(matches!(iris.size, Some(Size::Radius(_))));
            }
        }
    }

    #[test]
    fn test_eye_placement() {
        for seed in 0..50 {
            let (mut rng, mutator) = setup(seed);
            let head = generate_head(&mut rng, &mutator);

            for eye in head.children.iter().filter(|c| c.kind == NodeKind::Eye) {
                let [x, y] = eye.position.unwrap();
                assert!((0.3..1.0).contains(&y));
                if eye.mirror {
                    assert!((0.2..0.5).contains(&x));
                } else {
                    assert_eq!(x, 0.0, "a single eye sits on the centreline");
                }
            }
        }
    }

    #[test]
    fn test_neck_structure() {
        let (mut rng, mutator) = setup(31);
        let neck = generate_neck(&mut rng, &mutator);

        assert_eq!(neck.kind, NodeKind::Neck);
        assert_eq!(neck.max_angle, Some(10.0));
        assert_eq!(neck.rotation, Some(0.0));
        let [x, y] = neck.position.unwrap();
        assert_eq!(x, 0.0);
        assert!((-1.0..-0.8).contains(&y));

        let segment = &neck.children[0];
        assert_eq!(segment.kind, NodeKind::Segment);
        assert_eq!(segment.rotation, Some(180.0));

        let head = &segment.children[0];
        assert_eq!(head.kind, NodeKind::Core);
    }

    #[test]
    fn test_spine_shape() {
        for seed in 0..100 {
            let (mut rng, mutator) = setup(seed);
            let root = generate_spine(&mut rng, &mutator);

            assert_eq!(root.kind, NodeKind::Core);
            assert_eq!(root.position, Some([0.0, 0.0]));

            // Follow the vertebra chain; the neck hangs off the last one.
            let mut length = 1;
            let mut vertebra = root;
            loop {
                for child in &vertebra.children {
                    assert!(matches!(
                        child.kind,
                        NodeKind::Core | NodeKind::BallJoint | NodeKind::Neck
                    ));
                }
                let next = vertebra
                    .children
                    .iter()
                    .find(|c| c.kind == NodeKind::Core)
                    .cloned();
                match next {
                    Some(next) => {
                        assert_eq!(next.position, Some([0.0, -1.0]));
                        length += 1;
                        vertebra = next;
                    }
                    None => {
                        assert!(
                            vertebra.children.iter().any(|c| c.kind == NodeKind::Neck),
                            "last vertebra carries the neck"
                        );
                        break;
                    }
                }
            }
            assert!((1..=5).contains(&length));
        }
    }
}
