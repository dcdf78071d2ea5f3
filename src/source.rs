//! Where records come from.
//!
//! The NER service that produces records sits behind [`AnnotationSource`].
//! Implementations return the raw wire record for a PubMed id; validation
//! happens afterwards in [`Record::from_raw`].

use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::record::{RawRecord, Record};

/// Produces the raw record for a PubMed id.
pub trait AnnotationSource {
    /// Fetch the record for `pmid`.
    fn fetch(&self, pmid: u64) -> Result<RawRecord>;

    /// Name used in log lines.
    fn name(&self) -> &str;
}

/// Reads `<dir>/<pmid>.json` files saved from the service.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
}

impl DirectorySource {
    /// Create a source rooted at `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file holding `pmid`.
    #[must_use]
    pub fn path_for(&self, pmid: u64) -> PathBuf {
        self.dir.join(format!("{}.json", pmid))
    }
}

impl AnnotationSource for DirectorySource {
    fn fetch(&self, pmid: u64) -> Result<RawRecord> {
        let path = self.path_for(pmid);
        let json = std::fs::read_to_string(&path)
            .map_err(|e| Error::fetch(format!("{}: {}", path.display(), e)))?;
        RawRecord::from_json(&json)
    }

    fn name(&self) -> &str {
        "directory"
    }
}

/// In-memory records keyed by PubMed id.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    records: HashMap<u64, RawRecord>,
}

impl MemorySource {
    /// Create an empty source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a record.
    #[must_use]
    pub fn with_record(mut self, pmid: u64, record: RawRecord) -> Self {
        self.records.insert(pmid, record);
        self
    }
}

impl AnnotationSource for MemorySource {
    fn fetch(&self, pmid: u64) -> Result<RawRecord> {
        self.records
            .get(&pmid)
            .cloned()
            .ok_or_else(|| Error::fetch(format!("no record for PMID {}", pmid)))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

/// Fetch and validate a record.
pub fn fetch_record(source: &dyn AnnotationSource, pmid: u64) -> Result<Record> {
    let raw = source.fetch(pmid)?;
    Record::from_raw(raw)
}

/// Fetch and validate a record, falling back to the empty record when the
/// source cannot produce one.
///
/// Only [`Error::Fetch`] falls back: the viewer keeps no stale state across
/// fetches, so a failed fetch clears title, abstract and annotations. A
/// record that arrives but fails parsing or ingestion is still an error.
pub fn fetch_or_empty(source: &dyn AnnotationSource, pmid: u64) -> Result<Record> {
    match fetch_record(source, pmid) {
        Err(Error::Fetch(reason)) => {
            log::warn!(
                "fetch of PMID {} from {} source failed, using empty record: {}",
                pmid,
                source.name(),
                reason
            );
            Ok(Record::default())
        }
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RawTrait;

    fn sample() -> RawRecord {
        RawRecord {
            title: "Yield QTL".into(),
            abstract_text: "yield and height".into(),
            title_traits: vec![],
            abstract_traits: vec![RawTrait {
                word: "height".into(),
                trait_type: "I-Trait".into(),
            }],
        }
    }

    #[test]
    fn test_memory_source_hit() {
        let source = MemorySource::new().with_record(42, sample());
        let record = fetch_record(&source, 42).unwrap();
        assert_eq!(record.title(), "Yield QTL");
    }

    #[test]
    fn test_missing_record_falls_back_to_empty() {
        let source = MemorySource::new();
        assert!(matches!(fetch_record(&source, 1), Err(Error::Fetch(_))));
        assert!(fetch_or_empty(&source, 1).unwrap().is_empty());
    }

    #[test]
    fn test_invalid_record_is_not_masked() {
        let mut raw = sample();
        raw.title_traits.push(RawTrait {
            word: "".into(),
            trait_type: "I-Trait".into(),
        });
        let source = MemorySource::new().with_record(7, raw);
        assert!(matches!(
            fetch_or_empty(&source, 7),
            Err(Error::InvalidAnnotation { index: 0, .. })
        ));
    }

    #[test]
    fn test_malformed_file_is_not_masked() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("8.json"), "{not json").unwrap();
        let source = DirectorySource::new(dir.path());
        assert!(matches!(fetch_or_empty(&source, 8), Err(Error::Parse(_))));
        assert!(fetch_or_empty(&source, 9).unwrap().is_empty());
    }

    #[test]
    fn test_directory_source() {
        let dir = tempfile::tempdir().unwrap();
        let json = serde_json::to_string(&sample()).unwrap();
        std::fs::write(dir.path().join("123.json"), json).unwrap();

        let source = DirectorySource::new(dir.path());
        assert_eq!(fetch_record(&source, 123).unwrap().abstract_text(), "yield and height");
        assert!(matches!(source.fetch(124), Err(Error::Fetch(_))));
    }
}
