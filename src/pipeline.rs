// File: src/pipeline.rs
//
// Composition of the benchmark stages: build the problem, run the trials,
// summarize, report, persist. Each benchmarked operation instantiates this
// flow independently with its own problem instance and destination; the two
// pipelines share no state.

use crate::benchmarks::{Reporter, Summary, TrialRunner};
use crate::errors::BenchError;
use crate::ops;
use crate::problem::{ProblemBuilder, DEFAULT_SEED, DEFAULT_SIZE};
use crate::sink::ReportSink;
use std::path::Path;

/// Externally supplied configuration shared by both pipelines.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// Matrix/vector dimension n.
    pub size: usize,
    /// Seed for the problem generator.
    pub seed: u64,
    /// Number of isolated timed trials.
    pub repeats: usize,
    /// Invocations of the operation inside one timed interval.
    pub invocations: usize,
    /// Also write a JSON sidecar next to the text report.
    pub json: bool,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            seed: DEFAULT_SEED,
            repeats: crate::benchmarks::runner::DEFAULT_REPEATS,
            invocations: crate::benchmarks::runner::DEFAULT_INVOCATIONS,
            json: false,
        }
    }
}

/// Benchmarks the symmetric eigenvalue decomposition.
pub fn run_eigen(config: &BenchConfig, output: &Path) -> Result<Summary, BenchError> {
    let problem = ProblemBuilder::new(config.seed, config.size).eigen_problem()?;
    let samples = trial_runner(config).run(|| ops::eigenvalues(&problem))?;
    drop(problem);
    finish("eigenvalues", config, &samples, output)
}

/// Benchmarks the chained product `pᵀ · inv(diag(q)) · r`.
pub fn run_multi(config: &BenchConfig, output: &Path) -> Result<Summary, BenchError> {
    let problem = ProblemBuilder::new(config.seed, config.size).multi_problem()?;
    let samples = trial_runner(config).run(|| ops::multi_chain(&problem))?;
    drop(problem);
    finish("multi-operation", config, &samples, output)
}

fn trial_runner(config: &BenchConfig) -> TrialRunner {
    TrialRunner::new()
        .with_repeats(config.repeats)
        .with_invocations(config.invocations)
}

/// Summarize, report to the console, then persist. The console print comes
/// before the sink write, so a sink failure never silently drops the
/// statistics it was meant to persist.
fn finish(
    name: &str,
    config: &BenchConfig,
    samples: &[f64],
    output: &Path,
) -> Result<Summary, BenchError> {
    let summary = Summary::from_samples(samples)
        .ok_or_else(|| BenchError::trial_execution(0, "benchmark produced no samples"))?;

    Reporter::print_summary(name, &summary);

    let sink = ReportSink::new(output);
    sink.write(&summary.render())?;
    Reporter::print_written(sink.path());

    if config.json {
        let json_sink = ReportSink::new(output.with_extension("json"));
        json_sink.write(&summary.to_json())?;
        Reporter::print_written(json_sink.path());
    }

    Ok(summary)
}
