// File: src/errors.rs
//
// Error handling for linbench benchmark runs.
// Every error here is fatal for the run that raised it: nothing is retried
// internally, and each variant carries enough context (stage, trial index,
// destination) to diagnose the failure without rerunning.

use std::fmt;
use std::path::PathBuf;

/// Errors that can abort a benchmark run.
#[derive(Debug)]
pub enum BenchError {
    /// Problem construction could not obtain the required memory.
    Allocation { what: String, elements: usize },
    /// The operation under test failed during some trial (1-based index).
    TrialExecution { trial: usize, cause: String },
    /// The rendered report could not be persisted at its destination.
    SinkWrite { path: PathBuf, source: std::io::Error },
}

impl BenchError {
    pub fn allocation(what: impl Into<String>, elements: usize) -> Self {
        Self::Allocation { what: what.into(), elements }
    }

    pub fn trial_execution(trial: usize, cause: impl Into<String>) -> Self {
        Self::TrialExecution { trial, cause: cause.into() }
    }

    pub fn sink_write(path: PathBuf, source: std::io::Error) -> Self {
        Self::SinkWrite { path, source }
    }
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            BenchError::Allocation { what, elements } => {
                write!(f, "Allocation Error: cannot allocate {} ({} elements)", what, elements)
            }
            BenchError::TrialExecution { trial, cause } => {
                write!(f, "Trial Execution Error: trial {} failed: {}", trial, cause)
            }
            BenchError::SinkWrite { path, source } => {
                write!(
                    f,
                    "Sink Write Error: cannot write report to '{}': {}",
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::SinkWrite { source, .. } => Some(source),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_allocation_display() {
        let err = BenchError::allocation("eigenvalue matrix", 100);
        let msg = err.to_string();
        assert!(msg.contains("eigenvalue matrix"));
        assert!(msg.contains("100 elements"));
    }

    #[test]
    fn test_trial_execution_display_includes_index_and_cause() {
        let err = BenchError::trial_execution(3, "failed to converge");
        let msg = err.to_string();
        assert!(msg.contains("trial 3"));
        assert!(msg.contains("failed to converge"));
    }

    #[test]
    fn test_sink_write_exposes_io_source() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory");
        let err = BenchError::sink_write(PathBuf::from("/missing/report.txt"), io);
        assert!(err.to_string().contains("/missing/report.txt"));
        assert!(err.source().is_some());
    }

    #[test]
    fn test_allocation_has_no_source() {
        let err = BenchError::allocation("vector", 8);
        assert!(err.source().is_none());
    }
}
