use clap::Parser;
use critter::cli::{Cli, Commands};
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate(args) => critter::cli::generate::run(args)?,
        Commands::Inspect(args) => critter::cli::inspect::run(args)?,
        Commands::Validate(args) => critter::cli::validate::run(args)?,
        Commands::Completions(args) => critter::cli::completions::run(args)?,
    }

    Ok(())
}
