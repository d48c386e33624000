// Timing harness for linbench.
//
// This module provides the repeated-trial measurement infrastructure:
// - Timer: monotonic wall-clock interval timing
// - TrialRunner: N isolated timed executions of one operation
// - Summary: five-number statistics over the collected samples
// - Reporter: colored console output
//
// Usage:
//   let samples = TrialRunner::new().with_repeats(100).run(|| op())?;
//   let summary = Summary::from_samples(&samples);

pub mod reporter;
pub mod runner;
pub mod stats;
pub mod timer;

pub use reporter::Reporter;
pub use runner::TrialRunner;
pub use stats::Summary;
pub use timer::Timer;

/// Per-trial elapsed wall-clock seconds, in execution order.
///
/// Lives only between the runner and the summarizer; order is irrelevant to
/// the percentile statistics computed from it.
pub type SampleSeries = Vec<f64>;
