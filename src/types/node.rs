//! Creature tree node types.
//!
//! A creature is a tree of typed body-part nodes. Nodes are assembled with
//! [`NodeBuilder`] and finalised into `Arc<Node>`; once built, a node is
//! immutable. Children are owned top-down in painter's order (later
//! children draw on top). The single sanctioned exception to strict tree
//! shape is the iris: every eye of a head holds a handle to the *same*
//! iris node, so the structure is technically a DAG at that one point.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

use super::Hsla;

/// Most positive mouth curve the generator draws. Positive curves bow the
/// mouth downward, which reads as a frown.
pub const MAX_MOUTH_CURVE: f64 = 10.0;

/// Most negative mouth curve the generator draws (a wide smile).
pub const MIN_MOUTH_CURVE: f64 = -20.0;

/// Body-part kind. Closed set; renderers match on this exhaustively.
///
/// `LeverJoint`, `Hand` and `FaceBlob` are reserved: they exist in the
/// enumeration but the generator never produces them, and the renderer
/// skips them with a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeKind {
    Core,
    LeverJoint,
    BallJoint,
    Segment,
    Neck,
    Hand,
    Eye,
    Iris,
    Mouth,
    FaceBlob,
}

impl NodeKind {
    /// Kinds that are part of the enumeration but never generated.
    pub fn is_reserved(self) -> bool {
        matches!(self, Self::LeverJoint | Self::Hand | Self::FaceBlob)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Core => "Core",
            Self::LeverJoint => "LeverJoint",
            Self::BallJoint => "BallJoint",
            Self::Segment => "Segment",
            Self::Neck => "Neck",
            Self::Hand => "Hand",
            Self::Eye => "Eye",
            Self::Iris => "Iris",
            Self::Mouth => "Mouth",
            Self::FaceBlob => "FaceBlob",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Node extent in local units.
///
/// Most parts have an independent width and height; circular parts (the
/// iris) carry a single radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Size {
    Box([f64; 2]),
    Radius(f64),
}

impl Size {
    /// Width/height pair, expanding a radius to a square.
    pub fn as_box(self) -> [f64; 2] {
        match self {
            Self::Box(wh) => wh,
            Self::Radius(r) => [r, r],
        }
    }
}

/// One body-part element: geometry, colour and children.
///
/// All fields except `kind`, `mirror` and `children` are optional; which
/// ones are present depends on the kind. `mirror = true` instructs the
/// renderer to additionally draw a horizontally flipped copy immediately
/// after this node in paint order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub kind: NodeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<[f64; 2]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_angle: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<Size>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colour: Option<Hsla>,
    pub mirror: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lip_thickness: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub curve: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pupil_size: Option<f64>,
    pub children: Vec<Arc<Node>>,
}

impl Node {
    /// Position, defaulting to the parent origin.
    pub fn position_or_default(&self) -> [f64; 2] {
        self.position.unwrap_or([0.0, 0.0])
    }

    /// Static rotation in degrees, defaulting to 0.
    pub fn rotation_or_default(&self) -> f64 {
        self.rotation.unwrap_or(0.0)
    }

    /// Uniform scale, defaulting to 1.
    pub fn scale_or_default(&self) -> f64 {
        self.scale.unwrap_or(1.0)
    }

    /// Size as a width/height pair; absent sizes act as the unit box
    /// when used as a translation anchor for children.
    pub fn size_or_unit(&self) -> [f64; 2] {
        self.size.map_or([1.0, 1.0], Size::as_box)
    }

    /// Depth-first search for the first node of the given kind,
    /// including this node itself.
    pub fn find(&self, kind: NodeKind) -> Option<&Node> {
        if self.kind == kind {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(kind))
    }

    /// Visit every node in the tree depth-first, parents before children.
    pub fn visit<'a>(&'a self, f: &mut impl FnMut(&'a Node)) {
        f(self);
        for child in &self.children {
            child.visit(f);
        }
    }

    /// Total node count (the shared iris counts once per referencing eye).
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.visit(&mut |_| count += 1);
        count
    }
}

/// Builds a [`Node`] and finalises it into an immutable `Arc<Node>`.
///
/// Children are attached bottom-up before `build()`; there is no way to
/// mutate a node once built.
#[derive(Debug, Clone)]
pub struct NodeBuilder {
    node: Node,
}

impl NodeBuilder {
    pub fn new(kind: NodeKind) -> Self {
        Self {
            node: Node {
                kind,
                position: None,
                rotation: None,
                max_angle: None,
                scale: None,
                size: None,
                colour: None,
                mirror: false,
                lip_thickness: None,
                curve: None,
                pupil_size: None,
                children: Vec::new(),
            },
        }
    }

    pub fn position(mut self, x: f64, y: f64) -> Self {
        self.node.position = Some([x, y]);
        self
    }

    pub fn rotation(mut self, degrees: f64) -> Self {
        self.node.rotation = Some(degrees);
        self
    }

    pub fn max_angle(mut self, degrees: f64) -> Self {
        self.node.max_angle = Some(degrees);
        self
    }

    pub fn scale(mut self, scale: f64) -> Self {
        self.node.scale = Some(scale);
        self
    }

    /// Width/height extent.
    pub fn size(mut self, width: f64, height: f64) -> Self {
        self.node.size = Some(Size::Box([width, height]));
        self
    }

    /// Circular extent (iris).
    pub fn radius(mut self, radius: f64) -> Self {
        self.node.size = Some(Size::Radius(radius));
        self
    }

    pub fn colour(mut self, colour: Hsla) -> Self {
        self.node.colour = Some(colour);
        self
    }

    pub fn mirror(mut self, mirror: bool) -> Self {
        self.node.mirror = mirror;
        self
    }

    pub fn lip_thickness(mut self, thickness: f64) -> Self {
        self.node.lip_thickness = Some(thickness);
        self
    }

    pub fn curve(mut self, curve: f64) -> Self {
        self.node.curve = Some(curve);
        self
    }

    pub fn pupil_size(mut self, size: f64) -> Self {
        self.node.pupil_size = Some(size);
        self
    }

    /// Append a child. Children render in insertion order.
    pub fn child(mut self, child: Arc<Node>) -> Self {
        self.node.children.push(child);
        self
    }

    /// Finalise into an immutable shared node.
    pub fn build(self) -> Arc<Node> {
        Arc::new(self.node)
    }
}

/// Link an ordered list of builders into one linear parent->child chain
/// and build it, returning the head.
///
/// Each element becomes the last child of the one before it, on top of
/// any children it already has. An empty list yields `None`; this is a
/// valid input, not an error.
pub fn chain(builders: Vec<NodeBuilder>) -> Option<Arc<Node>> {
    let mut tail: Option<Arc<Node>> = None;
    for builder in builders.into_iter().rev() {
        tail = Some(match tail {
            Some(next) => builder.child(next).build(),
            None => builder.build(),
        });
    }
    tail
}

/// Facial expression implied by a mouth curve.
///
/// Positive curves bow the mouth down (sad), negative curves bow it up
/// (happy). Thresholds are fractions of the generator's curve bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Beaming,
    Smiling,
    Neutral,
    Frowning,
    Scowling,
}

impl Mood {
    /// Classify a mouth curve in `[MIN_MOUTH_CURVE, MAX_MOUTH_CURVE]`.
    pub fn from_curve(curve: f64) -> Self {
        if curve > 0.6 * MAX_MOUTH_CURVE {
            Self::Scowling
        } else if curve > 0.2 * MAX_MOUTH_CURVE {
            Self::Frowning
        } else if curve > 0.05 * MIN_MOUTH_CURVE {
            Self::Neutral
        } else if curve > 0.6 * MIN_MOUTH_CURVE {
            Self::Smiling
        } else {
            Self::Beaming
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            Self::Beaming => "\u{1F60A}",
            Self::Smiling => "\u{1F642}",
            Self::Neutral => "\u{1F610}",
            Self::Frowning => "\u{1F641}",
            Self::Scowling => "\u{2639}\u{FE0F}",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beaming => "beaming",
            Self::Smiling => "smiling",
            Self::Neutral => "neutral",
            Self::Frowning => "frowning",
            Self::Scowling => "scowling",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
