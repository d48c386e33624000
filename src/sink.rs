// File: src/sink.rs
//
// Report persistence. The sink is only invoked after summarization has
// succeeded, so a failed run never replaces a prior successful report with
// incomplete data.

use crate::errors::BenchError;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes rendered report text to a destination path, replacing any
/// previous content. The handle is flushed and released on every exit path.
pub struct ReportSink {
    path: PathBuf,
}

impl ReportSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, text: &str) -> Result<(), BenchError> {
        let mut file = File::create(&self.path)
            .map_err(|e| BenchError::sink_write(self.path.clone(), e))?;
        file.write_all(text.as_bytes())
            .map_err(|e| BenchError::sink_write(self.path.clone(), e))?;
        file.flush()
            .map_err(|e| BenchError::sink_write(self.path.clone(), e))
    }
}
