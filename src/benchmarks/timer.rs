// High-precision timing for benchmark trials

use std::time::{Duration, Instant};

/// Monotonic wall-clock timer; one per timed interval.
pub struct Timer {
    start: Instant,
}

impl Timer {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Elapsed time in seconds, the unit the report format uses.
    pub fn elapsed_secs(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_timer_measures_sleep() {
        let timer = Timer::start();
        thread::sleep(Duration::from_millis(10));
        let elapsed = timer.elapsed();
        assert!(elapsed >= Duration::from_millis(10));
        assert!(elapsed < Duration::from_millis(100));
    }

    #[test]
    fn test_elapsed_secs_is_non_negative() {
        let timer = Timer::start();
        assert!(timer.elapsed_secs() >= 0.0);
    }

    #[test]
    fn test_elapsed_secs_matches_duration() {
        let timer = Timer::start();
        thread::sleep(Duration::from_millis(5));
        let secs = timer.elapsed_secs();
        assert!(secs >= 0.005);
    }
}
