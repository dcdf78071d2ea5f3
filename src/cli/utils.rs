//! Utility functions for CLI commands

use std::io::{self, Read};
use std::path::PathBuf;

use super::output::log_info;
use super::parser::InputArgs;
use crate::config::ViewerConfig;
use crate::error::Error;
use crate::record::{RawRecord, Record};
use crate::source::{fetch_record, AnnotationSource, DirectorySource};

/// Read input from file
pub fn read_input_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| format!("Failed to read file {}: {}", path, e))
}

/// Get the record JSON from a file or stdin
pub fn get_input_json(file: Option<&str>) -> Result<String, String> {
    if let Some(f) = file {
        read_input_file(f)
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| format!("Failed to read from stdin: {}", e))?;
        Ok(buffer)
    }
}

/// Load the config named by `--config`, or defaults
pub fn load_config(input: &InputArgs) -> Result<ViewerConfig, String> {
    ViewerConfig::load_or_default(input.config.as_deref()).map_err(|e| e.to_string())
}

fn records_dir(input: &InputArgs, config: &ViewerConfig) -> Result<PathBuf, String> {
    input
        .dir
        .clone()
        .or_else(|| config.records_dir.clone())
        .ok_or_else(|| {
            "--pmid needs a records directory: pass --dir or set records_dir in the config"
                .to_string()
        })
}

/// Resolve the validated record described by `input`.
///
/// With `fallback_to_empty`, a PMID the source cannot produce yields the
/// empty record; a record that fails parsing or ingestion is still an error.
pub fn load_record(
    input: &InputArgs,
    config: &ViewerConfig,
    quiet: bool,
) -> Result<Record, String> {
    if let Some(pmid) = input.pmid {
        let source = DirectorySource::new(records_dir(input, config)?);
        return match fetch_record(&source, pmid) {
            Err(Error::Fetch(reason)) if config.fallback_to_empty => {
                log_info(
                    &format!("PMID {}: fetch failed, showing empty record: {}", pmid, reason),
                    quiet,
                );
                Ok(Record::default())
            }
            result => result.map_err(|e| format!("PMID {}: {}", pmid, e)),
        };
    }

    let json = get_input_json(input.file.as_deref())?;
    Record::from_json(&json).map_err(|e| e.to_string())
}

/// Resolve the unvalidated record described by `input`
pub fn load_raw_record(input: &InputArgs, config: &ViewerConfig) -> Result<RawRecord, String> {
    if let Some(pmid) = input.pmid {
        let source = DirectorySource::new(records_dir(input, config)?);
        return source
            .fetch(pmid)
            .map_err(|e| format!("PMID {}: {}", pmid, e));
    }

    let json = get_input_json(input.file.as_deref())?;
    RawRecord::from_json(&json).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD: &str = r#"{"Title": "t", "Abstract": "a b",
        "Abstract_Traits": [{"Word": "b", "Trait_Type": "I-Trait"}]}"#;

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.json");
        std::fs::write(&path, RECORD).unwrap();
        let input = InputArgs {
            file: Some(path.to_string_lossy().into_owned()),
            ..InputArgs::default()
        };
        let record = load_record(&input, &ViewerConfig::default(), true).unwrap();
        assert_eq!(record.abstract_text(), "a b");
    }

    #[test]
    fn test_pmid_without_dir() {
        let input = InputArgs {
            pmid: Some(1),
            ..InputArgs::default()
        };
        assert!(load_record(&input, &ViewerConfig::default(), true).is_err());
    }

    #[test]
    fn test_pmid_fallback_policy() {
        let dir = tempfile::tempdir().unwrap();
        let input = InputArgs {
            pmid: Some(99),
            dir: Some(dir.path().to_path_buf()),
            ..InputArgs::default()
        };
        let lenient = ViewerConfig::default();
        assert!(load_record(&input, &lenient, true).unwrap().is_empty());

        let strict = ViewerConfig {
            fallback_to_empty: false,
            ..ViewerConfig::default()
        };
        assert!(load_record(&input, &strict, true).is_err());
    }

    #[test]
    fn test_pmid_invalid_record_not_masked() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("5.json"),
            r#"{"Title": "t", "Abstract": "a",
                "Title_Traits": [{"Word": "", "Trait_Type": "I-Trait"}]}"#,
        )
        .unwrap();
        let input = InputArgs {
            pmid: Some(5),
            dir: Some(dir.path().to_path_buf()),
            ..InputArgs::default()
        };
        let err = load_record(&input, &ViewerConfig::default(), true).unwrap_err();
        assert!(err.contains("Invalid annotation in title at index 0"));
    }
}
