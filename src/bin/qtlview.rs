//! qtlview - trait annotation viewer CLI
//!
//! Highlights the traits the NER service found in a PubMed title and
//! abstract, and prints the frequency tables behind the viewer's charts.
//!
//! # Usage
//!
//! ```bash
//! # Highlight terms from a saved record
//! qtlview view --file 34902587.json
//!
//! # Look a record up by PMID and emit chart datasets
//! qtlview stats --pmid 34902587 --dir records/ --format chart
//!
//! # Check a record before publishing it
//! qtlview validate --file 34902587.json
//! ```

use std::io;
use std::process::ExitCode;

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use qtlview::cli::commands::{stats, validate, view};
use qtlview::cli::output::color;
use qtlview::cli::parser::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result: Result<(), String> = match cli.command {
        Commands::View(args) => view::run(args),
        Commands::Stats(args) => stats::run(args),
        Commands::Validate(args) => validate::run(args),
        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "qtlview", &mut io::stdout());
            Ok(())
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
