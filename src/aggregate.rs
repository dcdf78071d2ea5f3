//! Frequency and title-vs-abstract tables over annotation lists.
//!
//! Both tables keep categories in the order they are first encountered and
//! serialize as JSON objects in that order, which is the order a chart
//! draws its bars in.

use std::collections::HashSet;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;

use crate::annotation::Annotation;

/// Occurrence count per category label, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<(String, usize)>,
}

impl FrequencyTable {
    fn bump(mut self, label: &str) -> Self {
        match self.entries.iter_mut().find(|(l, _)| l == label) {
            Some((_, count)) => *count += 1,
            None => self.entries.push((label.to_string(), 1)),
        }
        self
    }

    /// Count for `label`, if it was seen.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<usize> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, count)| *count)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Category labels in first-seen order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> usize {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Number of distinct categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no annotation was counted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for FrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, count) in &self.entries {
            map.serialize_entry(label, count)?;
        }
        map.end()
    }
}

/// Per-side word counts for one category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize, Deserialize)]
pub struct SideCounts {
    /// Distinct words of the category present on the title side
    pub title: usize,
    /// Distinct words of the category present on the abstract side
    #[serde(rename = "abstract")]
    pub abstract_: usize,
}

/// Title-vs-abstract split per category label, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComparisonTable {
    entries: Vec<(String, SideCounts)>,
}

impl ComparisonTable {
    fn entry(&mut self, label: &str) -> &mut SideCounts {
        let idx = match self.entries.iter().position(|(l, _)| l == label) {
            Some(idx) => idx,
            None => {
                self.entries.push((label.to_string(), SideCounts::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[idx].1
    }

    /// Counts for `label`, if it was seen on either side.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<SideCounts> {
        self.entries
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, counts)| *counts)
    }

    /// Entries in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, SideCounts)> {
        self.entries.iter().map(|(l, c)| (l.as_str(), *c))
    }

    /// Category labels in first-seen order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(l, _)| l.as_str())
    }

    /// Number of distinct categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if neither side had annotations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ComparisonTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (label, counts) in &self.entries {
            map.serialize_entry(label, counts)?;
        }
        map.end()
    }
}

/// Count annotations per category label.
///
/// Every instance counts, including repeated `(word, trait_type)` pairs.
///
/// ```rust
/// use qtlview::{frequency_of, Annotation};
///
/// let table = frequency_of(&[
///     Annotation::new("a", "X"),
///     Annotation::new("b", "X"),
///     Annotation::new("c", "Y"),
/// ]);
/// assert_eq!(table.get("X"), Some(2));
/// assert_eq!(table.labels().collect::<Vec<_>>(), ["X", "Y"]);
/// ```
#[must_use]
pub fn frequency_of(annotations: &[Annotation]) -> FrequencyTable {
    annotations
        .iter()
        .fold(FrequencyTable::default(), |table, ann| table.bump(&ann.trait_type))
}

/// Split distinct words per category between the title and abstract lists.
///
/// Every category seen in either list gets an entry, even when one side
/// counts zero. A word counts for a side when that side holds at least one
/// annotation with the same word and category.
#[must_use]
pub fn compare(title: &[Annotation], abstract_: &[Annotation]) -> ComparisonTable {
    let on_title: HashSet<(&str, &str)> = title.iter().map(key).collect();
    let on_abstract: HashSet<(&str, &str)> = abstract_.iter().map(key).collect();

    let (table, _) = title.iter().chain(abstract_).fold(
        (ComparisonTable::default(), HashSet::<(&str, &str)>::new()),
        |(mut table, mut counted), ann| {
            let k = key(ann);
            let counts = table.entry(k.0);
            if counted.insert(k) {
                if on_title.contains(&k) {
                    counts.title += 1;
                }
                if on_abstract.contains(&k) {
                    counts.abstract_ += 1;
                }
            }
            (table, counted)
        },
    );
    table
}

/// Annotations from `annotations` whose word occurs in `text`.
///
/// This is how a combined list is attributed to one field before
/// [`compare`]: the same annotation may be attributed to both fields.
#[must_use]
pub fn attributed_to(text: &str, annotations: &[Annotation]) -> Vec<Annotation> {
    annotations
        .iter()
        .filter(|ann| ann.has_alignable_word() && text.contains(ann.word.as_str()))
        .cloned()
        .collect()
}

fn key(ann: &Annotation) -> (&str, &str) {
    (ann.trait_type.as_str(), ann.word.as_str())
}
