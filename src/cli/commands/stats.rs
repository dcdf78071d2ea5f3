//! Stats command - frequency and title vs abstract tables

use clap::Parser;
use serde::Serialize;

use super::super::output::{format_comparison_human, format_frequency_human, write_output};
use super::super::parser::{InputArgs, OutputFormat};
use super::super::utils::{load_config, load_record};

use crate::aggregate::{ComparisonTable, FrequencyTable};
use crate::chart::BarChart;
use crate::view::AnnotationView;

#[derive(Serialize)]
struct Tables<'a> {
    frequency: &'a FrequencyTable,
    comparison: &'a ComparisonTable,
}

#[derive(Serialize)]
struct Charts {
    frequency: BarChart,
    comparison: BarChart,
}

/// Frequency and title vs abstract tables
#[derive(Parser, Debug)]
pub struct StatsArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (human, json, tsv, chart)
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Format the aggregation tables of a built view.
pub fn format_stats(view: &AnnotationView, format: OutputFormat) -> Result<String, String> {
    let output = match format {
        OutputFormat::Human => format!(
            "Entity frequency:\n{}\nTitle vs abstract:\n{}",
            format_frequency_human(&view.frequency),
            format_comparison_human(&view.comparison)
        ),
        OutputFormat::Json => {
            let value = Tables {
                frequency: &view.frequency,
                comparison: &view.comparison,
            };
            let mut out = serde_json::to_string_pretty(&value)
                .map_err(|e| format!("Failed to serialize tables: {}", e))?;
            out.push('\n');
            out
        }
        OutputFormat::Tsv => {
            let mut out = "category\tcount\ttitle\tabstract\n".to_string();
            for (label, count) in view.frequency.iter() {
                let split = view.comparison.get(label).unwrap_or_default();
                out.push_str(&format!(
                    "{}\t{}\t{}\t{}\n",
                    label, count, split.title, split.abstract_
                ));
            }
            out
        }
        OutputFormat::Chart => {
            let value = Charts {
                frequency: BarChart::frequency(&view.frequency),
                comparison: BarChart::comparison(&view.comparison),
            };
            let mut out = serde_json::to_string_pretty(&value)
                .map_err(|e| format!("Failed to serialize charts: {}", e))?;
            out.push('\n');
            out
        }
        _ => return Err(format!("Format {:?} not supported by stats command", format)),
    };
    Ok(output)
}

/// Run the stats command.
pub fn run(args: StatsArgs) -> Result<(), String> {
    let config = load_config(&args.input)?;
    let record = load_record(&args.input, &config, args.quiet)?;
    let view = AnnotationView::build(&record);
    let output = format_stats(&view, args.format)?;
    write_output(&output, args.output.as_deref())
}
