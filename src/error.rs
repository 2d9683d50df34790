// src/error.rs

use std::{io, path::PathBuf};
use thiserror::Error;

use crate::schema::Version;

/// A data line whose field count does not match the dataset version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("expected {expected} fields, found {found}")]
pub struct ArityError {
    pub expected: usize,
    pub found: usize,
}

/// Fatal errors raised while loading catalog files.
///
/// Any of these aborts the whole load; no records are returned.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("invalid path {}: {source}", .path.display())]
    InvalidPath {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("{}:{line}: field count not consistent with ATHYG {version}: {source}", .path.display())]
    ArityMismatch {
        path: PathBuf,
        /// 1-based line number within the file, header included.
        line: usize,
        version: Version,
        #[source]
        source: ArityError,
    },
}

pub type Result<T, E = LoadError> = std::result::Result<T, E>;
