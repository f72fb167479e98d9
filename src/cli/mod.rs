pub mod completions;
pub mod generate;
pub mod inspect;
pub mod validate;

use clap::{Parser, Subcommand};

/// critter - deterministic procedural creature generator
#[derive(Parser, Debug)]
#[command(name = "critter")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate creatures and write SVG or JSON documents
    Generate(generate::GenerateArgs),

    /// Summarise a creature (mood, palette, body plan) without rendering it
    Inspect(inspect::InspectArgs),

    /// Check generated trees against the generator's invariants
    Validate(validate::ValidateArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
