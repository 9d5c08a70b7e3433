//! CLI Adapter.

use std::path::PathBuf;

use clap::Parser;

use crate::domain::AppError;
use crate::{GenerateOutcome, GenerateRequest};

#[derive(Parser)]
#[command(name = "syncgen")]
#[command(version)]
#[command(
    about = "Generate Buteo sync plugin scaffolding from a TOML plugin description",
    long_about = None
)]
struct Cli {
    /// Plugin description file (TOML with a [config] table)
    #[arg(short = 'c', long, value_name = "PATH")]
    config: PathBuf,
    /// Target output directory
    #[arg(short = 'd', long, value_name = "PATH")]
    outdir: PathBuf,
    /// Reuse an existing output directory, overwriting generated files
    #[arg(short = 'f', long)]
    force: bool,
    /// Render everything and list the planned files without writing
    #[arg(long)]
    dry_run: bool,
    /// Read templates from this directory instead of the built-in set
    #[arg(short = 't', long, value_name = "DIR")]
    templates: Option<PathBuf>,
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let request = GenerateRequest {
        config_path: cli.config,
        outdir: cli.outdir,
        force: cli.force,
        dry_run: cli.dry_run,
        template_dir: cli.templates,
    };

    match crate::generate(&request) {
        Ok(outcome) => report(&outcome),
        Err(e) => exit_with(e),
    }
}

fn report(outcome: &GenerateOutcome) {
    let root = outcome.layout.root().display();
    if outcome.written {
        println!("✅ Generated {} plugin '{}' in {}/", outcome.kind, outcome.class_name, root);
    } else {
        println!(
            "📋 Dry run: would generate {} plugin '{}' in {}/",
            outcome.kind, outcome.class_name, root
        );
        for dir in &outcome.plan.directories {
            println!("  {}/", dir);
        }
    }
    for file in &outcome.plan.files {
        println!("  {}", file.path);
    }
}

fn exit_with(error: AppError) -> ! {
    eprintln!("Error: {}", error);
    std::process::exit(error.exit_code());
}
