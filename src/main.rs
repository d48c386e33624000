// File: src/main.rs
//
// Main entry point for the linbench benchmark tool.
// Handles command-line argument parsing and dispatches to the appropriate
// benchmark pipeline (eigen, multi, or all).

use clap::{Args, Parser, Subcommand};
use linbench::benchmarks::Reporter;
use linbench::errors::BenchError;
use linbench::pipeline::{self, BenchConfig};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(
    name = "linbench",
    about = "Timing distributions for dense linear-algebra operations",
    version = env!("CARGO_PKG_VERSION"),
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct RunArgs {
    /// Matrix/vector dimension
    #[arg(short = 'n', long, default_value_t = 10_000)]
    size: usize,

    /// Seed for the problem generator
    #[arg(long, default_value_t = 123)]
    seed: u64,

    /// Number of isolated timed trials
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u32).range(1..))]
    repeats: u32,

    /// Invocations of the operation inside one timed interval
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    number: u32,

    /// Also write a JSON sidecar next to each text report
    #[arg(long)]
    json: bool,
}

impl RunArgs {
    fn config(&self) -> BenchConfig {
        BenchConfig {
            size: self.size,
            seed: self.seed,
            repeats: self.repeats as usize,
            invocations: self.number as usize,
            json: self.json,
        }
    }
}

#[derive(Subcommand)]
#[command(arg_required_else_help = true)]
enum Commands {
    /// Benchmark symmetric eigenvalue decomposition
    Eigen {
        /// Report destination path
        output: PathBuf,

        #[command(flatten)]
        args: RunArgs,
    },

    /// Benchmark the chained matrix-inverse/vector product
    Multi {
        /// Report destination path
        output: PathBuf,

        #[command(flatten)]
        args: RunArgs,
    },

    /// Run both benchmarks, writing one report per operation
    All {
        /// Directory for the report files
        #[arg(long, default_value = "data")]
        out_dir: PathBuf,

        #[command(flatten)]
        args: RunArgs,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eigen { output, args } => {
            Reporter::print_header("linbench: eigenvalues");
            pipeline::run_eigen(&args.config(), &output).map(|_| ())
        }

        Commands::Multi { output, args } => {
            Reporter::print_header("linbench: multi-operation");
            pipeline::run_multi(&args.config(), &output).map(|_| ())
        }

        Commands::All { out_dir, args } => {
            Reporter::print_header("linbench: all benchmarks");
            run_all(&args.config(), &out_dir)
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            Reporter::print_error(&e);
            ExitCode::FAILURE
        }
    }
}

fn run_all(config: &BenchConfig, out_dir: &PathBuf) -> Result<(), BenchError> {
    // Fail before any trial runs if the destination directory can't exist.
    std::fs::create_dir_all(out_dir)
        .map_err(|e| BenchError::sink_write(out_dir.clone(), e))?;

    pipeline::run_eigen(config, &out_dir.join("benchmark-speed-eigenvalues.txt"))?;
    Reporter::print_separator();
    pipeline::run_multi(config, &out_dir.join("benchmark-speed-multi.txt"))?;
    Ok(())
}
