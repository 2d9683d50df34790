// src/process/mod.rs
pub mod build;
pub mod options;
pub mod parse;
pub mod progress;
pub mod source;
pub mod split;

use rayon::prelude::*;
use std::path::Path;
use tracing::{debug, info, instrument, trace};

use crate::error::{LoadError, Result};
use crate::schema::Record;

pub use options::LoadOptions;
pub use progress::{NoProgress, Progress, TracingProgress};
pub use source::{FsSource, MemorySource, Source};

/// Loads ATHYG catalog files into typed records.
///
/// Reading bytes and reporting progress are delegated to `S` and `P`; the
/// defaults read from disk and report nothing.
#[derive(Debug, Clone)]
pub struct Loader<S = FsSource, P = NoProgress> {
    source: S,
    progress: P,
    delimiter: char,
}

impl Loader {
    pub fn new() -> Self {
        Self {
            source: FsSource,
            progress: NoProgress,
            delimiter: ',',
        }
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Source, P: Progress> Loader<S, P> {
    pub fn with_source<T: Source>(self, source: T) -> Loader<T, P> {
        Loader {
            source,
            progress: self.progress,
            delimiter: self.delimiter,
        }
    }

    pub fn with_progress<T: Progress>(self, progress: T) -> Loader<S, T> {
        Loader {
            source: self.source,
            progress,
            delimiter: self.delimiter,
        }
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn with_options(self, options: &LoadOptions) -> Self {
        self.with_delimiter(options.delimiter)
    }

    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Load every file in `paths`, one after another.
    ///
    /// Returns the records of each file in line order, files concatenated in
    /// the order given. The first invalid path or malformed line aborts the
    /// whole load and no records are returned.
    #[instrument(level = "info", skip_all, fields(version = %R::VERSION, files = paths.len()))]
    pub fn load<R, Q>(&self, paths: &[Q]) -> Result<Vec<R>>
    where
        R: Record,
        Q: AsRef<Path>,
    {
        let mut result = Vec::new();
        for path in paths {
            let records = self.load_file::<R>(path.as_ref())?;
            result.extend(records);
        }
        info!(records = result.len(), "load complete");
        Ok(result)
    }

    /// Same result as [`Loader::load`], with files parsed on the rayon pool.
    ///
    /// Each file is parsed independently and the per-file results are joined
    /// in `paths` order. The first error stops outstanding work and is
    /// returned; if several files fail, which error wins is unspecified.
    #[instrument(level = "info", skip_all, fields(version = %R::VERSION, files = paths.len()))]
    pub fn load_parallel<R, Q>(&self, paths: &[Q]) -> Result<Vec<R>>
    where
        R: Record + Send,
        Q: AsRef<Path> + Sync,
        S: Sync,
        P: Sync,
    {
        let per_file: Vec<Vec<R>> = paths
            .par_iter()
            .map(|path| self.load_file::<R>(path.as_ref()))
            .collect::<Result<_>>()?;

        let total = per_file.iter().map(Vec::len).sum();
        let mut result = Vec::with_capacity(total);
        for records in per_file {
            result.extend(records);
        }
        info!(records = result.len(), "load complete");
        Ok(result)
    }

    /// Parse a single file: skip its header line, build one record per
    /// remaining line.
    fn load_file<R: Record>(&self, path: &Path) -> Result<Vec<R>> {
        self.progress.file_started(path);

        // 1) bytes from the source; anything unreadable is an invalid path
        let bytes = self
            .source
            .read(path)
            .map_err(|source| LoadError::InvalidPath {
                path: path.to_path_buf(),
                source,
            })?;
        let text = String::from_utf8_lossy(&bytes);

        // 2) the first line is the header, whatever it holds
        let mut lines = text.lines();
        if let Some(header) = lines.next() {
            trace!(path = %path.display(), header, "skipping header");
        }

        // 3) every other line is a record
        let mut records = Vec::new();
        for (idx, line) in lines.enumerate() {
            let fields = split::split(line, self.delimiter, R::ELEMENT_COUNT);
            let record =
                build::build::<R>(fields).map_err(|source| LoadError::ArityMismatch {
                    path: path.to_path_buf(),
                    line: idx + 2,
                    version: R::VERSION,
                    source,
                })?;
            records.push(record);
        }

        debug!(path = %path.display(), records = records.len(), "parsed file");
        self.progress.file_finished(path, records.len());
        Ok(records)
    }
}

/// Load `paths` from disk with the default loader.
pub fn load<R, Q>(paths: &[Q]) -> Result<Vec<R>>
where
    R: Record,
    Q: AsRef<Path>,
{
    Loader::new().load(paths)
}
