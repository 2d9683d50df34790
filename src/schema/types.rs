// src/schema/types.rs

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use super::{V1, V2, V3};
use crate::schema::Record;

/// The value kind a column's tokens are converted into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColumnKind {
    Unsigned,
    Signed,
    Decimal,
    Character,
    Boolean,
    Text,
}

impl ColumnKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnKind::Unsigned => "unsigned",
            ColumnKind::Signed => "signed",
            ColumnKind::Decimal => "decimal",
            ColumnKind::Character => "character",
            ColumnKind::Boolean => "boolean",
            ColumnKind::Text => "text",
        }
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A single positional column of a dataset version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Column {
    pub name: &'static str,
    pub kind: ColumnKind,
}

/// One of the three ATHYG column layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Version {
    V1,
    V2,
    V3,
}

impl Version {
    pub const ALL: [Version; 3] = [Version::V1, Version::V2, Version::V3];

    /// Ordered column table for this version.
    pub fn columns(&self) -> &'static [Column] {
        match self {
            Version::V1 => V1::COLUMNS,
            Version::V2 => V2::COLUMNS,
            Version::V3 => V3::COLUMNS,
        }
    }

    /// Exact number of fields a data line must carry.
    pub fn element_count(&self) -> usize {
        self.columns().len()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Version::V1 => "v1",
            Version::V2 => "v2",
            Version::V3 => "v3",
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for Version {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "v1" | "1" => Ok(Version::V1),
            "v2" | "2" => Ok(Version::V2),
            "v3" | "3" => Ok(Version::V3),
            other => Err(format!("unknown ATHYG version `{}` (expected v1, v2 or v3)", other)),
        }
    }
}
