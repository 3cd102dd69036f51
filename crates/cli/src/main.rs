//! PMP layout inspector.
//!
//! Loads a JSON layout, decodes its PMP entries, resolves the configured access
//! check, and prints the facts a renderer would draw:
//! 1. **Text:** One info line per entry followed by the access annotation.
//! 2. **JSON:** The full report, for feeding a separate renderer.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use pmpviz_core::config::VisualizerConfig;
use pmpviz_core::report::Report;
use pmpviz_core::PmpError;

#[derive(Parser, Debug)]
#[command(
    name = "pmpviz",
    author,
    version,
    about = "Decode RISC-V PMP entries and resolve an access against them",
    long_about = "Decode RISC-V PMP entries and resolve an access against them.\n\nThe layout is a JSON file with `pmp_entries` (hex `addr`/`cfg` pairs), an optional\n`access_check` address with `access_size` and `access_type`, and an optional\n`cacheable_region` display window.\n\nExamples:\n  pmpviz layouts/boot.json\n  pmpviz layouts/boot.json --json"
)]
struct Cli {
    /// Layout file to load.
    layout: PathBuf,

    /// Print the report as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        error!(layout = %cli.layout.display(), "{e}");
        eprintln!("pmpviz: {e}");
        process::exit(1);
    }
}

/// Loads the layout, builds its report, and prints it in the requested format.
fn run(cli: &Cli) -> Result<(), PmpError> {
    let config = VisualizerConfig::from_path(&cli.layout)?;
    let report = Report::build(&config)?;
    debug!(entries = report.entries.len(), "built report");

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }
    Ok(())
}
