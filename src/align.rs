//! Annotation-to-text alignment.
//!
//! Annotations arrive without offsets, so their positions are recovered by
//! substring search. The aligner walks the text once, left to right, with a
//! cursor marking the end of the last emitted span:
//!
//! ```text
//! text:        "QTL for grain yield and grain weight"
//! annotations: [grain yield : I-Trait, grain : dict_Trait, weight : I-Trait]
//!
//! sorted by first occurrence (stable):
//!   grain yield @8, grain @8, weight @30
//!
//!  cursor 0 ──► "QTL for " plain
//!               "grain yield" I-Trait        cursor = 19
//!  "grain" searched from 19 ──► found @24
//!               " and " plain
//!               "grain" dict_Trait           cursor = 29
//!  "weight" searched from 29 ──► found @30
//!               " " plain
//!               "weight" I-Trait             cursor = 36
//! ```
//!
//! Every emitted span starts at or after the cursor, so spans never overlap,
//! and every gap is emitted as plain text, so nothing is skipped.
//! An annotation whose word is absent from the text, or occurs only before
//! the cursor, is dropped for this text.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::annotation::{Annotation, TraitCategory};

/// A contiguous slice of the source text, optionally tagged with a category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    /// Slice of the source text
    pub text: String,
    /// Category label, `None` for plain text
    pub trait_type: Option<String>,
}

impl Segment {
    /// Create an unannotated segment.
    #[must_use]
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            trait_type: None,
        }
    }

    /// Create an annotated segment.
    #[must_use]
    pub fn annotated(text: impl Into<String>, trait_type: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            trait_type: Some(trait_type.into()),
        }
    }

    /// Whether this segment carries a category.
    #[must_use]
    pub fn is_annotated(&self) -> bool {
        self.trait_type.is_some()
    }

    /// Parsed category, if annotated.
    #[must_use]
    pub fn category(&self) -> Option<TraitCategory> {
        self.trait_type.as_deref().map(TraitCategory::from_label)
    }
}

/// A segment expressed as a byte range into the source text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSpan {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
    /// Category label, `None` for plain text
    pub trait_type: Option<String>,
}

impl SegmentSpan {
    /// Byte range of this span.
    #[must_use]
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    /// The slice of `text` this span covers.
    ///
    /// `text` must be the string the span was computed from.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> &'a str {
        &text[self.range()]
    }

    fn to_segment(&self, text: &str) -> Segment {
        Segment {
            text: self.slice(text).to_string(),
            trait_type: self.trait_type.clone(),
        }
    }
}

/// Partition `text` into plain and annotated segments.
///
/// Empty text yields no segments. With nothing to align, the whole text is
/// returned as one plain segment.
///
/// # Example
///
/// ```rust
/// use qtlview::{align, Annotation, Segment};
///
/// let segments = align("b a", &[Annotation::new("a", "X"), Annotation::new("b", "Y")]);
/// assert_eq!(
///     segments,
///     vec![Segment::annotated("b", "Y"), Segment::plain(" "), Segment::annotated("a", "X")]
/// );
/// ```
#[must_use]
pub fn align(text: &str, annotations: &[Annotation]) -> Vec<Segment> {
    align_spans(text, annotations)
        .iter()
        .map(|span| span.to_segment(text))
        .collect()
}

/// Same partition as [`align`], as byte ranges into `text`.
#[must_use]
pub fn align_spans(text: &str, annotations: &[Annotation]) -> Vec<SegmentSpan> {
    if text.is_empty() {
        return Vec::new();
    }

    // Keyed by first occurrence; sort_by_key is stable, so equal starts keep
    // list order and the first-listed annotation wins.
    let mut relevant: Vec<(usize, &Annotation)> = annotations
        .iter()
        .filter(|ann| {
            if !ann.has_alignable_word() {
                log::debug!("skipping annotation with blank word ({})", ann.trait_type);
                return false;
            }
            true
        })
        .filter_map(|ann| text.find(ann.word.as_str()).map(|first| (first, ann)))
        .collect();
    relevant.sort_by_key(|(first, _)| *first);

    let mut spans = Vec::with_capacity(relevant.len() * 2 + 1);
    let mut cursor = 0;

    for (_, ann) in relevant {
        let Some(offset) = text[cursor..].find(ann.word.as_str()) else {
            log::debug!(
                "annotation {:?} ({}) already consumed before offset {}",
                ann.word,
                ann.trait_type,
                cursor
            );
            continue;
        };
        let start = cursor + offset;
        let end = start + ann.word.len();

        if start > cursor {
            spans.push(SegmentSpan {
                start: cursor,
                end: start,
                trait_type: None,
            });
        }
        spans.push(SegmentSpan {
            start,
            end,
            trait_type: Some(ann.trait_type.clone()),
        });
        cursor = end;
    }

    if cursor < text.len() {
        spans.push(SegmentSpan {
            start: cursor,
            end: text.len(),
            trait_type: None,
        });
    }

    spans
}

/// Reassemble the text covered by a segment sequence.
#[must_use]
pub fn concat_segments(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect()
}
