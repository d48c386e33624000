// Statistical summary of trial samples

use serde::Serialize;

/// Five-number summary of a benchmark run, in seconds.
///
/// `min ≤ p25 ≤ median ≤ p75 ≤ max` holds by construction: all five values
/// come from the same sorted sample via a monotone percentile function.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub min: f64,
    pub p25: f64,
    pub median: f64,
    pub p75: f64,
    pub max: f64,
    pub samples: usize,
}

impl Summary {
    /// Reduces a sample series to the five statistics.
    /// Returns None for an empty series.
    pub fn from_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }

        let mut sorted = samples.to_vec();
        sorted.sort_by(|a, b| a.total_cmp(b));

        Some(Self {
            min: sorted[0],
            p25: percentile(&sorted, 25.0),
            median: percentile(&sorted, 50.0),
            p75: percentile(&sorted, 75.0),
            max: sorted[sorted.len() - 1],
            samples: samples.len(),
        })
    }

    /// Renders the fixed five-line report text.
    ///
    /// This exact format, six decimal places and a line break after every
    /// statistic, is the persisted contract other tooling parses against.
    pub fn render(&self) -> String {
        format!(
            "Min execution time: {:.6} seconds\n\
             25th percentile (p25) execution time: {:.6} seconds\n\
             Median execution time: {:.6} seconds\n\
             75th percentile (p75) execution time: {:.6} seconds\n\
             Max execution time: {:.6} seconds\n",
            self.min, self.p25, self.median, self.p75, self.max
        )
    }

    /// Serializes the summary for the optional JSON sidecar.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Interpolated percentile over an ascending-sorted sample:
/// rank = p/100 × (len − 1), linear interpolation between the neighbouring
/// order statistics at a fractional rank.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let last = sorted.len() - 1;
    let rank = p / 100.0 * last as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        return sorted[lo];
    }
    let frac = rank - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
