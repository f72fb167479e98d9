//! Validate command implementation.
//!
//! Regenerates each seed, checks the tree against the generator's
//! invariants, and verifies determinism by generating twice. With several
//! seeds it also flags accidental duplicates.

use std::collections::HashMap;

use clap::Args;

use crate::error::{CritterError, Result};
use crate::gen::{generate, Seed};
use crate::output::{plural, Printer};
use crate::validation::{print_diagnostics, validate_tree};

/// Check generated trees against the generator's invariants
#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Seeds to validate
    pub seeds: Vec<Seed>,

    /// Additionally validate this many random seeds
    #[arg(long, default_value = "0")]
    pub sample: u64,
}

pub fn run(args: ValidateArgs) -> Result<()> {
    let printer = Printer::new();

    let mut seeds = args.seeds;
    let sample = if seeds.is_empty() && args.sample == 0 {
        20
    } else {
        args.sample
    };
    seeds.extend((0..sample).map(|_| Seed::random()));

    let mut failed = 0;
    let mut fingerprints: HashMap<String, Seed> = HashMap::new();

    for &seed in &seeds {
        let tree = generate(seed);

        let mut result = validate_tree(&tree);
        if generate(seed) != tree {
            result.error(
                "critter::validate::determinism",
                "regenerating the same seed produced a different tree",
            );
        }

        let json = serde_json::to_string(&tree).map_err(|e| CritterError::Serialize {
            message: e.to_string(),
        })?;
        if let Some(&previous) = fingerprints.get(&json) {
            if previous != seed {
                printer.warning(
                    "Duplicate",
                    &format!("seed {seed} generates the same creature as seed {previous}"),
                );
            }
        } else {
            fingerprints.insert(json, seed);
        }

        if result.has_errors() {
            failed += 1;
            printer.error("Invalid", &format!("seed {seed}"));
            print_diagnostics(&result);
        } else {
            printer.status(
                "Validated",
                &format!("seed {seed} ({})", plural(tree.node_count(), "node", "nodes")),
            );
        }
    }

    if failed > 0 {
        return Err(CritterError::Validation {
            message: format!("{failed} of {} seeds failed validation", seeds.len()),
            help: None,
        });
    }

    printer.status("Finished", &plural(seeds.len(), "seed", "seeds"));
    Ok(())
}
