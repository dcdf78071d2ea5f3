//! Validate command - report annotations rejected at ingestion

use clap::Parser;

use super::super::output::{color, log_info, write_output};
use super::super::parser::InputArgs;
use super::super::utils::{load_config, load_raw_record};

use crate::record::RawRecord;

/// Check a record for invalid annotations
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

/// One line per problem, empty when the record is valid.
pub fn format_issues(raw: &RawRecord) -> String {
    raw.validate()
        .iter()
        .map(|e| format!("{} {}\n", color("31", "invalid:"), e))
        .collect()
}

/// Run the validate command. Fails when any annotation is invalid.
pub fn run(args: ValidateArgs) -> Result<(), String> {
    let config = load_config(&args.input)?;
    let raw = load_raw_record(&args.input, &config)?;
    let issues = raw.validate();
    let total = raw.title_traits.len() + raw.abstract_traits.len();

    if issues.is_empty() {
        log_info(&format!("{} annotations, all valid", total), args.quiet);
        return Ok(());
    }

    write_output(&format_issues(&raw), None)?;
    Err(format!("{} of {} annotations invalid", issues.len(), total))
}
