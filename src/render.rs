//! Text and HTML renderings of aligned segments.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::align::Segment;
use crate::annotation::TraitCategory;
use crate::view::AnnotationView;

/// Category label to badge style class.
///
/// Built-in labels resolve through [`TraitCategory::style_class`]; overrides
/// take precedence and may add labels outside the known set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleMap {
    overrides: BTreeMap<String, String>,
}

impl StyleMap {
    /// Style map with only the built-in entries.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the style for `label`.
    #[must_use]
    pub fn with_style(mut self, label: impl Into<String>, class: impl Into<String>) -> Self {
        self.overrides.insert(label.into(), class.into());
        self
    }

    /// Style class for `label`.
    #[must_use]
    pub fn class_for(&self, label: &str) -> &str {
        match self.overrides.get(label) {
            Some(class) => class.as_str(),
            None => TraitCategory::from_label(label).style_class(),
        }
    }
}

/// Render segments as plain text with `[word (label)]` markers.
#[must_use]
pub fn render_inline(segments: &[Segment]) -> String {
    let mut out = String::new();
    for seg in segments {
        match &seg.trait_type {
            Some(label) => out.push_str(&format!("[{} ({})]", seg.text, label)),
            None => out.push_str(&seg.text),
        }
    }
    out
}

/// Render segments as an HTML fragment of badge spans.
#[must_use]
pub fn render_html(segments: &[Segment], styles: &StyleMap) -> String {
    let mut html = String::new();
    for seg in segments {
        match &seg.trait_type {
            Some(label) => html.push_str(&format!(
                r#"<span class="badge {} mx-1">{} ({})</span>"#,
                html_escape(styles.class_for(label)),
                html_escape(&seg.text),
                html_escape(label)
            )),
            None => html.push_str(&format!("<span>{}</span>", html_escape(&seg.text))),
        }
    }
    html
}

/// Render the abstract and title panels of a view.
///
/// Empty fields are omitted, as the viewer shows nothing for them.
#[must_use]
pub fn render_view_html(view: &AnnotationView, styles: &StyleMap) -> String {
    let mut html = String::from(r#"<div class="qtl-view">"#);
    for (heading, segments) in [("Abstract", &view.abstract_), ("Title", &view.title)] {
        if segments.is_empty() {
            continue;
        }
        html.push_str(&format!(
            r#"<div class="mb-4"><h5 class="text-secondary">{}</h5><div class="border rounded p-3">{}</div></div>"#,
            heading,
            render_html(segments, styles)
        ));
    }
    html.push_str("</div>\n");
    html
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
