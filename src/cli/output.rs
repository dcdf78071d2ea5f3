//! Output formatting utilities for CLI commands

use is_terminal::IsTerminal;
use std::io::{self, Write};

use crate::aggregate::{ComparisonTable, FrequencyTable};
use crate::align::Segment;
use crate::annotation::TraitCategory;

/// Log info message (respects quiet flag)
pub fn log_info(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{}", msg);
    }
}

/// Write output to file or stdout
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), String> {
    if let Some(path) = path {
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write to {}: {}", path, e))?;
    } else {
        print!("{}", content);
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;
    }
    Ok(())
}

/// Colorize text with ANSI escape codes (only if stdout is a terminal)
pub fn color(code: &str, text: &str) -> String {
    if io::stdout().is_terminal() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// ANSI color code for a trait label, matching its badge style
pub fn trait_color(label: &str) -> &'static str {
    match TraitCategory::from_label(label) {
        TraitCategory::ModelTrait => "32",
        TraitCategory::DictTrait => "33",
        TraitCategory::Other(_) => "90",
    }
}

/// Segments with highlighted spans colored and tagged
pub fn format_segments_human(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|seg| match &seg.trait_type {
            Some(label) => color(trait_color(label), &format!("[{}]{{{}}}", seg.text, label)),
            None => seg.text.clone(),
        })
        .collect()
}

/// Frequency table as aligned rows with a bar
pub fn format_frequency_human(table: &FrequencyTable) -> String {
    if table.is_empty() {
        return "  (no annotations)\n".to_string();
    }
    let width = table.labels().map(str::len).max().unwrap_or(0);
    let mut out = String::new();
    for (label, count) in table.iter() {
        out.push_str(&format!(
            "  {:<width$}  {:>4}  {}\n",
            label,
            count,
            color(trait_color(label), &"#".repeat(count.min(40))),
            width = width
        ));
    }
    out
}

/// Comparison table as aligned rows
pub fn format_comparison_human(table: &ComparisonTable) -> String {
    if table.is_empty() {
        return "  (no annotations)\n".to_string();
    }
    let width = table.labels().map(str::len).max().unwrap_or(0).max(8);
    let mut out = format!(
        "  {:<width$}  {:>5}  {:>8}\n",
        "category",
        "title",
        "abstract",
        width = width
    );
    for (label, counts) in table.iter() {
        out.push_str(&format!(
            "  {:<width$}  {:>5}  {:>8}\n",
            label,
            counts.title,
            counts.abstract_,
            width = width
        ));
    }
    out
}
