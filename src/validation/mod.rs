//! Validation system for generated creature trees.
//!
//! Runs a suite of structural and numeric checks against a tree and
//! reports errors and warnings. Used by `critter validate` and by the
//! generator's own test suite.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::types::Node;

/// Run all validation checks against a creature tree.
pub fn validate_tree(root: &Node) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_root(root));
    result.merge(checks::check_spine(root));
    result.merge(checks::check_limbs(root));
    result.merge(checks::check_heads(root));
    result.merge(checks::check_ranges(root));
    result.merge(checks::check_mirrors(root));
    result.merge(checks::check_reserved(root));

    result
}

/// Print diagnostics to stderr.
pub fn print_diagnostics(result: &ValidationResult) {
    for d in result.iter() {
        eprintln!("  {}[{}]: {}", d.severity, d.code, d.message);
        if let Some(help) = &d.help {
            eprintln!("    help: {}", help);
        }
    }
}
