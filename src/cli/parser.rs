//! CLI argument parsing and structure definitions

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use super::commands::{StatsArgs, ValidateArgs, ViewArgs};

/// QTL annotation viewer - trait highlighting and frequency tables
#[derive(Parser)]
#[command(name = "qtlview")]
#[command(
    author,
    version,
    about = "QTL annotation viewer - trait highlighting and frequency tables",
    long_about = r#"
qtlview - trait annotations for PubMed titles and abstracts

Reads the record produced by the NER service:
  { "Title", "Abstract", "Title_Traits": [{"Word", "Trait_Type"}], "Abstract_Traits": [...] }

COMMANDS:
  • view      - highlight annotated terms in the title and abstract
  • stats     - category frequencies and the title vs abstract split
  • validate  - report annotations rejected at ingestion

EXAMPLES:
  qtlview view --file 34902587.json
  qtlview stats --pmid 34902587 --dir records/ --format chart
  cat record.json | qtlview view --format inline
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Highlight annotated terms in title and abstract
    #[command(visible_alias = "v")]
    View(ViewArgs),

    /// Frequency and title vs abstract tables
    #[command(visible_alias = "s")]
    Stats(StatsArgs),

    /// Check a record for invalid annotations
    Validate(ValidateArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Where to read the record from. With neither `--file` nor `--pmid`,
/// JSON is read from stdin.
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// Read the record JSON from file
    #[arg(short, long, value_name = "PATH", conflicts_with = "pmid")]
    pub file: Option<String>,

    /// Look the record up by PubMed id in the records directory
    #[arg(short, long, value_name = "PMID")]
    pub pmid: Option<u64>,

    /// Records directory (overrides `records_dir` from the config)
    #[arg(short, long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// TOML config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Unified output format selection for all commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable colored output (default)
    #[default]
    Human,
    /// JSON
    Json,
    /// Inline `[word (label)]` markers in text
    Inline,
    /// HTML fragment with badge spans
    Html,
    /// Tab-separated values
    Tsv,
    /// Chart datasets as JSON
    Chart,
}
