//! View command - highlighted title and abstract

use clap::Parser;
use std::time::Instant;

use super::super::output::{format_segments_human, log_info, write_output};
use super::super::parser::{InputArgs, OutputFormat};
use super::super::utils::{load_config, load_record};

use crate::render::{render_inline, render_view_html, StyleMap};
use crate::view::AnnotationView;

/// Highlight annotated terms in title and abstract
#[derive(Parser, Debug)]
pub struct ViewArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format (human, json, inline, html)
    #[arg(long, default_value = "human")]
    pub format: OutputFormat,

    /// Write output to file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<String>,

    /// Minimal output
    #[arg(short, long)]
    pub quiet: bool,
}

/// Format a built view.
pub fn format_view(
    view: &AnnotationView,
    format: OutputFormat,
    styles: &StyleMap,
) -> Result<String, String> {
    let output = match format {
        OutputFormat::Human => {
            let mut out = String::new();
            if !view.title.is_empty() {
                out.push_str(&format!("Title:\n  {}\n\n", format_segments_human(&view.title)));
            }
            if !view.abstract_.is_empty() {
                out.push_str(&format!(
                    "Abstract:\n  {}\n",
                    format_segments_human(&view.abstract_)
                ));
            }
            if out.is_empty() {
                out.push_str("Empty record.\n");
            }
            out
        }
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(view)
                .map_err(|e| format!("Failed to serialize view: {}", e))?;
            json.push('\n');
            json
        }
        OutputFormat::Inline => format!(
            "{}\n{}\n",
            render_inline(&view.title),
            render_inline(&view.abstract_)
        ),
        OutputFormat::Html => render_view_html(view, styles),
        _ => return Err(format!("Format {:?} not supported by view command", format)),
    };
    Ok(output)
}

/// Run the view command.
pub fn run(args: ViewArgs) -> Result<(), String> {
    let config = load_config(&args.input)?;
    let record = load_record(&args.input, &config, args.quiet)?;

    let start = Instant::now();
    let view = AnnotationView::build(&record);
    let elapsed = start.elapsed();

    let output = format_view(&view, args.format, &config.styles)?;
    write_output(&output, args.output.as_deref())?;

    log_info(
        &format!(
            "{} highlighted spans in {:.2}ms",
            view.highlighted(),
            elapsed.as_secs_f64() * 1000.0
        ),
        args.quiet,
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Annotation;
    use crate::record::Record;

    fn view() -> AnnotationView {
        let record = Record::new(
            "leaf width",
            "Leaf width and height.",
            vec![Annotation::new("width", "I-Trait")],
            vec![],
        )
        .unwrap();
        AnnotationView::build(&record)
    }

    #[test]
    fn test_inline_format() {
        let out = format_view(&view(), OutputFormat::Inline, &StyleMap::new()).unwrap();
        assert_eq!(out, "leaf [width (I-Trait)]\nLeaf [width (I-Trait)] and height.\n");
    }

    #[test]
    fn test_html_uses_styles() {
        let styles = StyleMap::new().with_style("I-Trait", "bg-info");
        let out = format_view(&view(), OutputFormat::Html, &styles).unwrap();
        assert!(out.contains(r#"class="badge bg-info mx-1""#));
    }

    #[test]
    fn test_tsv_rejected() {
        assert!(format_view(&view(), OutputFormat::Tsv, &StyleMap::new()).is_err());
    }

    #[test]
    fn test_empty_human() {
        let out = format_view(&AnnotationView::default(), OutputFormat::Human, &StyleMap::new())
            .unwrap();
        assert_eq!(out, "Empty record.\n");
    }
}
