//! Annotation types: a detected trait term and its category label.

use serde::{Deserialize, Serialize};

/// Style class for any label outside the known set.
pub const FALLBACK_STYLE: &str = "bg-secondary";

/// Trait category classification.
///
/// The classifier emits IO-scheme `I-Trait` tags; the dictionary matcher
/// emits `dict_Trait`. Everything else is carried through as `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TraitCategory {
    /// Model-predicted trait (`I-Trait`)
    ModelTrait,
    /// Dictionary-matched trait (`dict_Trait`)
    DictTrait,
    /// Any other label, kept verbatim
    Other(String),
}

impl TraitCategory {
    /// Convert to the label string used on the wire.
    #[must_use]
    pub fn as_label(&self) -> &str {
        match self {
            TraitCategory::ModelTrait => "I-Trait",
            TraitCategory::DictTrait => "dict_Trait",
            TraitCategory::Other(s) => s.as_str(),
        }
    }

    /// Parse from a wire label. Matching is exact: labels are case-sensitive.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "I-Trait" => TraitCategory::ModelTrait,
            "dict_Trait" => TraitCategory::DictTrait,
            other => TraitCategory::Other(other.to_string()),
        }
    }

    /// Built-in display style class for this category.
    #[must_use]
    pub fn style_class(&self) -> &'static str {
        match self {
            TraitCategory::ModelTrait => "bg-success",
            TraitCategory::DictTrait => "bg-warning text-dark",
            TraitCategory::Other(_) => FALLBACK_STYLE,
        }
    }

    /// Whether this label belongs to the known set.
    #[must_use]
    pub fn is_known(&self) -> bool {
        !matches!(self, TraitCategory::Other(_))
    }
}

impl std::fmt::Display for TraitCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_label())
    }
}

/// One detected term occurrence and its category label.
///
/// Annotations carry no offsets. Their position is recovered from the text
/// by string search during alignment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotation {
    /// Surface string of the term
    pub word: String,
    /// Category label, verbatim from the source
    pub trait_type: String,
}

impl Annotation {
    /// Create a new annotation.
    #[must_use]
    pub fn new(word: impl Into<String>, trait_type: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            trait_type: trait_type.into(),
        }
    }

    /// Parsed category of this annotation.
    #[must_use]
    pub fn category(&self) -> TraitCategory {
        TraitCategory::from_label(&self.trait_type)
    }

    /// An empty or whitespace-only word matches everywhere and cannot be aligned.
    #[must_use]
    pub fn has_alignable_word(&self) -> bool {
        !self.word.trim().is_empty()
    }
}
