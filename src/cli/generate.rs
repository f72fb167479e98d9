//! Generate command implementation.
//!
//! Generates one or more creatures and writes SVG (or the raw tree as
//! JSON) to stdout, a file, or a directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};

use crate::error::{CritterError, Result};
use crate::gen::{generate, Seed};
use crate::output::{plural, Printer};
use crate::render::{RenderOptions, SvgRenderer};

/// Generate creatures and write SVG or JSON documents
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Seed to generate (random when omitted)
    pub seed: Option<Seed>,

    /// Number of creatures to generate (seed, seed+1, ...)
    #[arg(long, short = 'n', default_value = "1")]
    pub count: u64,

    /// Output file, or directory when generating more than one; stdout
    /// when omitted
    #[arg(long, short)]
    pub out: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value = "svg")]
    pub format: OutputFormat,

    /// Emit idle animations (joint sway, eye blink)
    #[arg(long)]
    pub animate: bool,

    /// Document size in user units; the view box keeps the creature
    /// anchored at the origin
    #[arg(long, num_args = 2, value_names = ["W", "H"])]
    pub size: Option<Vec<f64>>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Svg,
    Json,
}

impl OutputFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Json => "json",
        }
    }
}

pub fn run(args: GenerateArgs) -> Result<()> {
    let printer = Printer::new();
    let base = args.seed.unwrap_or_else(Seed::random);
    let count = args.count.max(1);
    let view_box = match args.size.as_deref() {
        // Same proportions as the default box: the origin sits at the
        // horizontal centre, 60% of the way down.
        Some(&[w, h]) => [-w / 2.0, -h * 0.6, w, h],
        _ => RenderOptions::default().view_box,
    };

    if count > 1 {
        if let Some(dir) = &args.out {
            fs::create_dir_all(dir).map_err(|e| CritterError::Io {
                path: dir.clone(),
                message: format!("Failed to create output directory: {}", e),
            })?;
        }
    }

    for i in 0..count {
        let seed = base.offset(i);
        let tree = generate(seed);
        let document = match args.format {
            OutputFormat::Svg => {
                let mut renderer = SvgRenderer::new(RenderOptions {
                    animate: args.animate,
                    view_box,
                });
                let svg = renderer.render(&tree);
                for warning in renderer.warnings() {
                    printer.warning("Skipping", warning);
                }
                svg
            }
            OutputFormat::Json => serde_json::to_string_pretty(&tree)
                .map_err(|e| CritterError::Serialize {
                    message: e.to_string(),
                })?,
        };

        match &args.out {
            None => println!("{document}"),
            Some(out) => {
                let path = target_path(out, seed, args.format, count > 1);
                fs::write(&path, &document).map_err(|e| CritterError::Io {
                    path: path.clone(),
                    message: format!("Failed to write creature: {}", e),
                })?;
                printer.status("Generating", &format!("creature {seed} -> {}", path.display()));
            }
        }
    }

    printer.status(
        "Finished",
        &plural(count as usize, "creature", "creatures"),
    );
    Ok(())
}

fn target_path(out: &Path, seed: Seed, format: OutputFormat, batch: bool) -> PathBuf {
    if batch || out.is_dir() {
        out.join(format!("critter-{seed}.{}", format.extension()))
    } else {
        out.to_path_buf()
    }
}
