//! Inspect command implementation.
//!
//! Prints a summary of a creature: body plan, mood read off the mouth
//! curve, and theme colours derived from the root body colour.

use std::collections::BTreeMap;

use clap::Args;

use crate::error::Result;
use crate::gen::{generate, Seed};
use crate::output::plural;
use crate::types::{Mood, Node, NodeKind};

/// Summarise a creature without rendering it
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Seed to inspect (random when omitted)
    pub seed: Option<Seed>,
}

pub fn run(args: InspectArgs) -> Result<()> {
    let seed = args.seed.unwrap_or_else(Seed::random);
    let tree = generate(seed);

    let mut counts: BTreeMap<&'static str, usize> = BTreeMap::new();
    tree.visit(&mut |node| {
        *counts.entry(node.kind.as_str()).or_default() += 1;
    });

    line("seed", seed);
    line("nodes", tree.node_count());
    line("spine", plural(spine_length(&tree), "vertebra", "vertebrae"));
    line("eyes", counts.get("Eye").copied().unwrap_or(0));

    if let Some(mouth) = tree.find(NodeKind::Mouth) {
        let curve = mouth.curve.unwrap_or(0.0);
        let mood = Mood::from_curve(curve);
        line(
            "mood",
            format!("{mood} {} (curve {curve:.2})", mood.emoji()),
        );
    }

    if let Some(colour) = tree.colour {
        let theme = colour.clamp_lightness(0.9);
        let hover = theme.lighten(-30.0);
        line("colour", format!("{} {}", colour.to_css(), colour.to_hex()));
        line("theme", theme.to_hex());
        line("hover", hover.to_hex());
    }

    let kinds = counts
        .iter()
        .map(|(kind, n)| format!("{kind} x{n}"))
        .collect::<Vec<_>>()
        .join(", ");
    line("kinds", kinds);

    Ok(())
}

fn line(label: &str, value: impl std::fmt::Display) {
    println!("{label:>8} {value}");
}

/// Length of the vertebra chain from the root, excluding the head core.
fn spine_length(root: &Node) -> usize {
    let mut length = 1;
    let mut node = root;
    while let Some(next) = node
        .children
        .iter()
        .find(|c| c.kind == NodeKind::Core)
        .map(|c| &**c)
    {
        length += 1;
        node = next;
    }
    length
}
