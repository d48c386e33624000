// Console reporting for benchmark runs

use crate::benchmarks::Summary;
use crate::errors::BenchError;
use colored::*;

pub struct Reporter;

impl Reporter {
    pub fn print_header(title: &str) {
        let width = 80;
        println!("{}", "=".repeat(width).bright_blue());
        println!("{:^width$}", title.bright_white().bold(), width = width);
        println!(
            "{:^width$}",
            format!("started {}", chrono::Utc::now().to_rfc3339()).cyan(),
            width = width
        );
        println!("{}", "=".repeat(width).bright_blue());
        println!();
    }

    pub fn print_separator() {
        println!("{}", "-".repeat(80).blue());
    }

    pub fn print_summary(name: &str, summary: &Summary) {
        println!(
            "{} {} ({} trials)",
            "✓".green().bold(),
            name.bright_white(),
            summary.samples
        );
        println!("  Min:    {} s", format!("{:.6}", summary.min).green());
        println!("  p25:    {} s", format!("{:.6}", summary.p25).yellow());
        println!("  Median: {} s", format!("{:.6}", summary.median).yellow());
        println!("  p75:    {} s", format!("{:.6}", summary.p75).yellow());
        println!("  Max:    {} s", format!("{:.6}", summary.max).red());
    }

    pub fn print_written(path: &std::path::Path) {
        println!("  Report: {}", path.display().to_string().cyan());
    }

    pub fn print_error(error: &BenchError) {
        eprintln!("{} {}", "✗".red().bold(), error.to_string().red());
    }
}
