// src/process/options.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};

/// Loader settings, typically read from a JSON file:
///
/// ```json
/// { "delimiter": ",", "parallel": true }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoadOptions {
    /// Field separator; a single character.
    pub delimiter: char,
    /// Parse files concurrently (results keep file-list order).
    pub parallel: bool,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: ',',
            parallel: false,
        }
    }
}

impl LoadOptions {
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)
            .with_context(|| format!("opening options file {}", path.display()))?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("parsing options file {}", path.display()))
    }
}
