//! SVG document emission.
//!
//! A mechanical tree walk: each node becomes a `<g>` carrying the
//! transform from [`group_transform`], wrapping a kind-specific shape and
//! the node's children. Children render in order (painter's order), and a
//! `mirror = true` child is expanded into two instances, the flipped copy
//! immediately after the original.
//!
//! With animation enabled, joints sway within their `max_angle` and eyes
//! blink periodically via SMIL. Timings derive from a walk counter, so
//! the document is as deterministic as the tree itself.

use std::fmt::Write;

use crate::types::{Node, NodeKind, Size};

use super::transform::{group_transform, num};

/// Rendering options.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit SMIL idle animations (joint sway, eye blink).
    pub animate: bool,
    /// Document view box as `[min_x, min_y, width, height]`.
    pub view_box: [f64; 4],
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            animate: false,
            view_box: [-300.0, -300.0, 600.0, 500.0],
        }
    }
}

/// Renders a creature tree to an SVG document.
pub struct SvgRenderer {
    options: RenderOptions,
    warnings: Vec<String>,
    walk_index: usize,
}

impl SvgRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            warnings: Vec::new(),
            walk_index: 0,
        }
    }

    /// Render a complete `<svg>` document.
    ///
    /// The root is anchored to an implicit default parent of size
    /// `[1, 1]` and rotation 0.
    pub fn render(&mut self, root: &Node) -> String {
        self.warnings.clear();
        self.walk_index = 0;

        let [min_x, min_y, width, height] = self.options.view_box;
        let mut out = String::new();
        let _ = write!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"{} {} {} {}\">",
            num(min_x),
            num(min_y),
            num(width),
            num(height),
        );
        self.render_node(&mut out, root, [1.0, 1.0], false);
        out.push_str("</svg>");
        out
    }

    /// Nodes that were skipped or otherwise degraded during the last
    /// render. A bad node never aborts the walk.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    fn render_node(&mut self, out: &mut String, node: &Node, parent_size: [f64; 2], mirrored: bool) {
        if node.kind.is_reserved() {
            self.warnings
                .push(format!("skipping unsupported node kind: {}", node.kind));
            return;
        }

        self.walk_index += 1;

        let _ = write!(
            out,
            "<g class=\"{}\" transform=\"{}\">",
            node.kind,
            group_transform(parent_size, node, mirrored),
        );

        match node.kind {
            NodeKind::Core => self.render_core(out, node),
            NodeKind::BallJoint | NodeKind::Neck => self.render_joint(out, node),
            NodeKind::Segment => self.render_segment(out, node),
            NodeKind::Eye => self.render_eye(out, node),
            NodeKind::Iris => self.render_iris(out, node),
            NodeKind::Mouth => self.render_mouth(out, node),
            NodeKind::LeverJoint | NodeKind::Hand | NodeKind::FaceBlob => unreachable!(),
        }

        out.push_str("</g>");
    }

    fn render_children(&mut self, out: &mut String, node: &Node) {
        let anchor = node.size_or_unit();
        for child in &node.children {
            self.render_node(out, child, anchor, false);
            if child.mirror {
                self.render_node(out, child, anchor, true);
            }
        }
    }

    fn render_core(&mut self, out: &mut String, node: &Node) {
        let [w, h] = node.size_or_unit();
        let _ = write!(
            out,
            "<ellipse cx=\"0\" cy=\"0\" rx=\"{}\" ry=\"{}\" fill=\"{}\"/>",
            num(w),
            num(h),
            fill(node),
        );
        self.render_children(out, node);
    }

    /// Ball joints and necks share a shape; the sway group rotates the
    /// joint ellipse together with everything attached to it.
    fn render_joint(&mut self, out: &mut String, node: &Node) {
        let sway = self.options.animate && node.max_angle.is_some();
        if sway {
            out.push_str("<g>");
            if let Some(max_angle) = node.max_angle {
                let half = max_angle / 2.0;
                // Stagger periods across joints so the creature does not
                // move in lockstep.
                let dur = 0.6 + 0.1 * (self.walk_index % 5) as f64;
                let _ = write!(
                    out,
                    "<animateTransform attributeName=\"transform\" type=\"rotate\" \
                     values=\"{};{};{}\" dur=\"{}s\" repeatCount=\"indefinite\"/>",
                    num(-half),
                    num(half),
                    num(-half),
                    num(dur),
                );
            }
        }

        let [w, h] = node.size_or_unit();
        let _ = write!(
            out,
            "<ellipse cx=\"0\" cy=\"0\" rx=\"{}\" ry=\"{}\" fill=\"{}\"/>",
            num(w),
            num(h),
            fill(node),
        );
        self.render_children(out, node);

        if sway {
            out.push_str("</g>");
        }
    }

    fn render_segment(&mut self, out: &mut String, node: &Node) {
        let [w, h] = node.size_or_unit();
        let _ = write!(
            out,
            "<ellipse cx=\"0\" cy=\"{}\" rx=\"{}\" ry=\"{}\" fill=\"{}\"/>",
            num(h),
            num(w),
            num(h),
            fill(node),
        );
        self.render_children(out, node);
    }

    /// The eyeball is a unit circle; the node's uniform scale blows it up
    /// to face size, so the iris inside works in unit coordinates too.
    fn render_eye(&mut self, out: &mut String, node: &Node) {
        let blink = self.options.animate;
        if blink {
            out.push_str("<g>");
            let dur = 2.0 + (self.walk_index % 7) as f64;
            let _ = write!(
                out,
                "<animateTransform attributeName=\"transform\" type=\"scale\" \
                 values=\"1 1;1 1;1 0;1 1\" keyTimes=\"0;0.92;0.96;1\" \
                 dur=\"{}s\" repeatCount=\"indefinite\"/>",
                num(dur),
            );
        }

        out.push_str(
            "<ellipse cx=\"0\" cy=\"0\" rx=\"1\" ry=\"1\" fill=\"white\" \
             stroke=\"rgb(100, 100, 100)\" stroke-width=\"0.3\"/>",
        );
        self.render_children(out, node);

        if blink {
            out.push_str("</g>");
        }
    }

    fn render_iris(&mut self, out: &mut String, node: &Node) {
        let radius = match node.size {
            Some(Size::Radius(r)) => r,
            Some(Size::Box([w, _])) => w,
            None => 0.0,
        };
        let pupil = node.pupil_size.unwrap_or(0.0);

        let _ = write!(
            out,
            "<ellipse cx=\"0\" cy=\"0\" rx=\"{r}\" ry=\"{r}\" fill=\"{}\"/>",
            fill(node),
            r = num(radius),
        );
        let _ = write!(
            out,
            "<ellipse cx=\"0\" cy=\"0\" rx=\"{p}\" ry=\"{p}\" fill=\"black\"/>",
            p = num(pupil),
        );
        // Specular highlight, offset into the upper-left of the pupil.
        let _ = write!(
            out,
            "<ellipse cx=\"-0.1\" cy=\"0.1\" rx=\"{h}\" ry=\"{h}\" fill=\"white\"/>",
            h = num(pupil * 0.2),
        );
        self.render_children(out, node);
    }

    fn render_mouth(&mut self, out: &mut String, node: &Node) {
        let [w, _] = node.size_or_unit();
        let half_width = w / 2.0;
        let curve = node.curve.unwrap_or(0.0);
        let lip = node.lip_thickness.unwrap_or(1.0);

        let _ = write!(
            out,
            "<path d=\"M {} 0 Q 0 {}, {} 0\" fill=\"none\" stroke=\"{}\" \
             stroke-width=\"{}\" stroke-linecap=\"round\"/>",
            num(-half_width),
            num(curve),
            num(half_width),
            fill(node),
            num(lip * 2.0),
        );
        self.render_children(out, node);
    }
}

fn fill(node: &Node) -> String {
    node.colour
        .map(|c| c.to_css())
        .unwrap_or_else(|| "black".to_string())
}
