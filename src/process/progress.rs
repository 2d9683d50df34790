// src/process/progress.rs

use std::path::Path;
use tracing::info;

/// Receives per-file notifications during a load. Purely informational.
pub trait Progress {
    fn file_started(&self, _path: &Path) {}
    fn file_finished(&self, _path: &Path, _records: usize) {}
}

impl<P: Progress + ?Sized> Progress for &P {
    fn file_started(&self, path: &Path) {
        (**self).file_started(path)
    }

    fn file_finished(&self, path: &Path, records: usize) {
        (**self).file_finished(path, records)
    }
}

/// Discards all notifications.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl Progress for NoProgress {}

/// Reports each file as an `info` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgress;

impl Progress for TracingProgress {
    fn file_started(&self, path: &Path) {
        info!(path = %path.display(), "parsing");
    }

    fn file_finished(&self, path: &Path, records: usize) {
        info!(path = %path.display(), records, "done");
    }
}
