//! # qtlview
//!
//! Trait annotations for PubMed titles and abstracts.
//!
//! - **Alignment**: place position-free annotations onto the text as a
//!   lossless sequence of plain and highlighted [`Segment`]s
//! - **Aggregation**: category frequencies and a title-vs-abstract split,
//!   ready for bar charts
//! - **Ingestion**: the `Title` / `Abstract` / `*_Traits` record JSON, with
//!   blank terms rejected up front
//!
//! ## Quick Start
//!
//! ```rust
//! use qtlview::{align, frequency_of, Annotation, Segment};
//!
//! let annotations = vec![
//!     Annotation::new("grain yield", "I-Trait"),
//!     Annotation::new("height", "dict_Trait"),
//! ];
//! let segments = align("Plant height and grain yield", &annotations);
//! assert_eq!(segments[1], Segment::annotated("height", "dict_Trait"));
//!
//! let table = frequency_of(&annotations);
//! assert_eq!(table.get("I-Trait"), Some(1));
//! ```
//!
//! ## From a record
//!
//! ```rust
//! use qtlview::{AnnotationView, Record};
//!
//! let record = Record::from_json(r#"{
//!     "Title": "QTL for grain yield",
//!     "Abstract": "Loci for grain yield were mapped.",
//!     "Title_Traits": [{"Word": "grain yield", "Trait_Type": "I-Trait"}],
//!     "Abstract_Traits": []
//! }"#)?;
//! let view = AnnotationView::build(&record);
//! assert_eq!(view.highlighted(), 2);
//! # Ok::<(), qtlview::Error>(())
//! ```
//!
//! ## Guarantees
//!
//! - Segments concatenate back to the input text, byte for byte
//! - Annotations that cannot be placed are dropped for that text, never errors
//! - All core functions are pure; identical inputs give identical outputs

#![warn(missing_docs)]

pub mod aggregate;
pub mod align;
pub mod annotation;
pub mod chart;
pub mod config;
mod error;
pub mod record;
pub mod render;
pub mod source;
pub mod view;

#[cfg(feature = "cli")]
pub mod cli;

pub mod prelude {
    //! Commonly used items, re-exported for convenience.
    //!
    //! ```rust
    //! use qtlview::prelude::*;
    //!
    //! let segments = align("leaf width", &[Annotation::new("width", "I-Trait")]);
    //! for s in &segments {
    //!     println!("{:?}: {}", s.trait_type, s.text);
    //! }
    //! ```
    pub use crate::aggregate::{compare, frequency_of, ComparisonTable, FrequencyTable};
    pub use crate::align::{align, Segment};
    pub use crate::annotation::{Annotation, TraitCategory};
    pub use crate::error::{Error, Result};
    pub use crate::record::Record;
    pub use crate::view::AnnotationView;
}

// Re-exports
pub use aggregate::{
    attributed_to, compare, frequency_of, ComparisonTable, FrequencyTable, SideCounts,
};
pub use align::{align, align_spans, concat_segments, Segment, SegmentSpan};
pub use annotation::{Annotation, TraitCategory, FALLBACK_STYLE};
pub use chart::BarChart;
pub use config::ViewerConfig;
pub use error::{Error, Field, Result};
pub use record::{RawRecord, RawTrait, Record};
pub use render::StyleMap;
pub use source::{fetch_or_empty, fetch_record, AnnotationSource, DirectorySource, MemorySource};
pub use view::AnnotationView;
