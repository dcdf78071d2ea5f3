//! Viewer configuration, read from a TOML file.
//!
//! ```toml
//! records_dir = "data/records"
//! fallback_to_empty = true
//!
//! [styles]
//! "B-Gene" = "bg-info"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::render::StyleMap;

/// Settings shared by the CLI commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// Directory of `<pmid>.json` records
    pub records_dir: Option<PathBuf>,
    /// Extra or overriding label styles
    pub styles: StyleMap,
    /// Show the empty record instead of failing when a fetch fails
    pub fallback_to_empty: bool,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            records_dir: None,
            styles: StyleMap::default(),
            fallback_to_empty: true,
        }
    }
}

impl ViewerConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| Error::config(e.to_string()))
    }

    /// Read and parse a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| Error::config(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&content)?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Read `path` if given, otherwise use defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(p) => Self::load(p),
            None => Ok(Self::default()),
        }
    }
}
