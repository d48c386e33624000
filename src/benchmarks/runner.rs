// Trial runner - repeated isolated timed execution of one operation

use crate::benchmarks::{SampleSeries, Timer};
use crate::errors::BenchError;

/// Default number of isolated trials per benchmark run.
pub const DEFAULT_REPEATS: usize = 100;
/// Default invocations of the operation inside one timed interval.
pub const DEFAULT_INVOCATIONS: usize = 1;

/// Executes an operation under test for a fixed number of timed trials.
///
/// Trials run strictly sequentially on the calling thread, with the clock
/// read immediately before and after each trial's invocation(s). Single-shot
/// trials (the default) capture the full variability distribution instead of
/// an averaged value, which is what makes percentile reporting meaningful.
pub struct TrialRunner {
    repeats: usize,
    invocations: usize,
}

impl TrialRunner {
    pub fn new() -> Self {
        Self { repeats: DEFAULT_REPEATS, invocations: DEFAULT_INVOCATIONS }
    }

    pub fn with_repeats(mut self, repeats: usize) -> Self {
        self.repeats = repeats;
        self
    }

    pub fn with_invocations(mut self, invocations: usize) -> Self {
        self.invocations = invocations;
        self
    }

    pub fn repeats(&self) -> usize {
        self.repeats
    }

    /// Runs the operation and returns one elapsed-seconds sample per trial.
    ///
    /// The operation's return value is computed but discarded through
    /// `black_box`, so the work cannot be optimized away. The first failing
    /// trial aborts the whole run with its 1-based index: a partial series
    /// could reflect an inconsistent state, so none is returned.
    pub fn run<R, E, F>(&self, mut op: F) -> Result<SampleSeries, BenchError>
    where
        F: FnMut() -> Result<R, E>,
        E: std::fmt::Display,
    {
        let mut samples = Vec::with_capacity(self.repeats);

        for trial in 1..=self.repeats {
            let timer = Timer::start();
            for _ in 0..self.invocations {
                match op() {
                    Ok(value) => {
                        std::hint::black_box(value);
                    }
                    Err(e) => {
                        return Err(BenchError::trial_execution(trial, e.to_string()));
                    }
                }
            }
            samples.push(timer.elapsed_secs());
        }

        Ok(samples)
    }
}

impl Default for TrialRunner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_equals_repeats() {
        let runner = TrialRunner::new().with_repeats(7);
        let samples = runner.run(|| Ok::<_, String>(42)).unwrap();
        assert_eq!(samples.len(), 7);
        for sample in samples {
            assert!(sample >= 0.0);
        }
    }

    #[test]
    fn test_operation_runs_once_per_trial_by_default() {
        let mut calls = 0;
        let runner = TrialRunner::new().with_repeats(5);
        runner
            .run(|| {
                calls += 1;
                Ok::<_, String>(())
            })
            .unwrap();
        assert_eq!(calls, 5);
    }

    #[test]
    fn test_invocations_multiply_calls_within_a_trial() {
        let mut calls = 0;
        let runner = TrialRunner::new().with_repeats(4).with_invocations(3);
        let samples = runner
            .run(|| {
                calls += 1;
                Ok::<_, String>(())
            })
            .unwrap();
        assert_eq!(calls, 12);
        assert_eq!(samples.len(), 4);
    }

    #[test]
    fn test_failure_aborts_with_trial_index() {
        let mut calls = 0;
        let runner = TrialRunner::new().with_repeats(5);
        let result = runner.run(|| {
            calls += 1;
            if calls == 3 {
                Err("failed to converge".to_string())
            } else {
                Ok(calls)
            }
        });

        match result {
            Err(BenchError::TrialExecution { trial, cause }) => {
                assert_eq!(trial, 3);
                assert!(cause.contains("failed to converge"));
            }
            other => panic!("expected TrialExecution error, got {:?}", other.map(|s| s.len())),
        }
        // no further trials after the failure
        assert_eq!(calls, 3);
    }

    #[test]
    fn test_default_configuration() {
        let runner = TrialRunner::default();
        assert_eq!(runner.repeats(), DEFAULT_REPEATS);
    }
}
