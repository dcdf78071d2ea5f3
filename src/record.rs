//! Record ingestion: the title/abstract JSON returned by the NER service.
//!
//! The wire shape uses the service's own keys:
//!
//! ```json
//! {
//!   "PMID": "34902587",
//!   "Title": "...",
//!   "Abstract": "...",
//!   "Title_Traits": [{ "Word": "grain yield", "Trait_Type": "I-Trait" }],
//!   "Abstract_Traits": [{ "Word": "plant height", "Trait_Type": "dict_Trait" }]
//! }
//! ```
//!
//! [`RawRecord`] mirrors that shape exactly. [`Record`] is the validated form:
//! every annotation has a non-blank word and a non-empty category, so
//! downstream alignment never sees an unalignable term.

use serde::{Deserialize, Serialize};

use crate::annotation::Annotation;
use crate::error::{Error, Field, Result};

/// One trait entry as emitted on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTrait {
    /// Surface string
    #[serde(rename = "Word")]
    pub word: String,
    /// Category label
    #[serde(rename = "Trait_Type")]
    pub trait_type: String,
}

/// The record exactly as returned by the annotation service.
///
/// Unknown keys (e.g. `PMID`) are ignored; missing trait lists are empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRecord {
    /// Article title
    #[serde(rename = "Title")]
    pub title: String,
    /// Article abstract
    #[serde(rename = "Abstract")]
    pub abstract_text: String,
    /// Traits detected in the title
    #[serde(rename = "Title_Traits", default)]
    pub title_traits: Vec<RawTrait>,
    /// Traits detected in the abstract
    #[serde(rename = "Abstract_Traits", default)]
    pub abstract_traits: Vec<RawTrait>,
}

impl RawRecord {
    /// Parse the wire JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::parse(format!("record JSON: {}", e)))
    }

    /// Check every trait entry, collecting all problems instead of stopping
    /// at the first one.
    #[must_use]
    pub fn validate(&self) -> Vec<Error> {
        let title = self
            .title_traits
            .iter()
            .enumerate()
            .filter_map(|(i, t)| check_trait(Field::Title, i, t).err());
        let abstract_ = self
            .abstract_traits
            .iter()
            .enumerate()
            .filter_map(|(i, t)| check_trait(Field::Abstract, i, t).err());
        title.chain(abstract_).collect()
    }
}

fn check_trait(field: Field, index: usize, raw: &RawTrait) -> Result<Annotation> {
    if raw.word.trim().is_empty() {
        return Err(Error::invalid_annotation(
            field,
            index,
            "word is empty or whitespace-only",
        ));
    }
    if raw.trait_type.trim().is_empty() {
        return Err(Error::invalid_annotation(
            field,
            index,
            format!("missing category for word {:?}", raw.word),
        ));
    }
    Ok(Annotation::new(raw.word.clone(), raw.trait_type.clone()))
}

fn ingest(field: Field, traits: &[RawTrait]) -> Result<Vec<Annotation>> {
    traits
        .iter()
        .enumerate()
        .map(|(i, t)| check_trait(field, i, t))
        .collect()
}

/// A validated title/abstract record with its annotations.
///
/// `Record::default()` is the empty record used when a fetch fails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    title: String,
    #[serde(rename = "abstract")]
    abstract_text: String,
    title_annotations: Vec<Annotation>,
    abstract_annotations: Vec<Annotation>,
}

impl Record {
    /// Build and validate a record from parts.
    ///
    /// Fails with [`Error::InvalidAnnotation`] on blank words or categories.
    pub fn new(
        title: impl Into<String>,
        abstract_text: impl Into<String>,
        title_annotations: Vec<Annotation>,
        abstract_annotations: Vec<Annotation>,
    ) -> Result<Self> {
        let to_raw = |anns: &[Annotation]| -> Vec<RawTrait> {
            anns.iter()
                .map(|a| RawTrait {
                    word: a.word.clone(),
                    trait_type: a.trait_type.clone(),
                })
                .collect()
        };
        Self::from_raw(RawRecord {
            title: title.into(),
            abstract_text: abstract_text.into(),
            title_traits: to_raw(&title_annotations),
            abstract_traits: to_raw(&abstract_annotations),
        })
    }

    /// Validate a raw record. The first invalid annotation is reported.
    pub fn from_raw(raw: RawRecord) -> Result<Self> {
        let title_annotations = ingest(Field::Title, &raw.title_traits)?;
        let abstract_annotations = ingest(Field::Abstract, &raw.abstract_traits)?;
        Ok(Self {
            title: raw.title,
            abstract_text: raw.abstract_text,
            title_annotations,
            abstract_annotations,
        })
    }

    /// Parse and validate the wire JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_raw(RawRecord::from_json(json)?)
    }

    /// Article title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Article abstract.
    #[must_use]
    pub fn abstract_text(&self) -> &str {
        &self.abstract_text
    }

    /// Annotations reported for the title.
    #[must_use]
    pub fn title_annotations(&self) -> &[Annotation] {
        &self.title_annotations
    }

    /// Annotations reported for the abstract.
    #[must_use]
    pub fn abstract_annotations(&self) -> &[Annotation] {
        &self.abstract_annotations
    }

    /// Text of one field.
    #[must_use]
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Title => &self.title,
            Field::Abstract => &self.abstract_text,
        }
    }

    /// Combined annotation list, abstract first then title.
    #[must_use]
    pub fn annotations(&self) -> Vec<Annotation> {
        self.abstract_annotations
            .iter()
            .chain(&self.title_annotations)
            .cloned()
            .collect()
    }

    /// True when there is no text and no annotation.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.abstract_text.is_empty()
            && self.title_annotations.is_empty()
            && self.abstract_annotations.is_empty()
    }
}

impl TryFrom<RawRecord> for Record {
    type Error = Error;

    fn try_from(raw: RawRecord) -> Result<Self> {
        Self::from_raw(raw)
    }
}
