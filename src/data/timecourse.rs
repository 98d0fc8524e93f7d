//! Synthetic time course with a multiplicative uncertainty band.

use tracing::debug;

/// Number of time points (0.0 to 10.0 inclusive).
pub const SAMPLE_COUNT: usize = 101;
/// Spacing between time points.
pub const TIME_STEP: f64 = 0.1;
/// Decay time constant of the toy median.
pub const DECAY_TIME: f64 = 3.0;
/// Lower bound as a fraction of the median.
pub const LOWER_FACTOR: f64 = 0.8;
/// Upper bound as a fraction of the median.
pub const UPPER_FACTOR: f64 = 1.2;

/// Index-aligned time, median, lower and upper series.
///
/// `lower <= median <= upper` only holds where the median is non-negative;
/// the factors are applied literally, so the bounds swap where it dips below
/// zero.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesTriple {
    time: Vec<f64>,
    median: Vec<f64>,
    lower: Vec<f64>,
    upper: Vec<f64>,
}

impl TimeSeriesTriple {
    /// Damped oscillation `exp(-t/3) * cos(t)` sampled every 0.1 over [0, 10],
    /// with bounds at 0.8x and 1.2x.
    pub fn synthesize() -> Self {
        // i / 10 rather than a running sum keeps the last point at exactly 10.0
        let time: Vec<f64> = (0..SAMPLE_COUNT).map(|i| i as f64 / 10.0).collect();
        let series = Self::from_time(time);
        debug!(
            samples = series.len(),
            t_end = series.time.last().copied().unwrap_or_default(),
            "synthesized time course"
        );
        series
    }

    /// Evaluate the toy median and its bounds at the given time points.
    pub fn from_time(time: Vec<f64>) -> Self {
        let median: Vec<f64> = time.iter().map(|&t| median_at(t)).collect();
        let lower = median.iter().map(|m| m * LOWER_FACTOR).collect();
        let upper = median.iter().map(|m| m * UPPER_FACTOR).collect();
        Self {
            time,
            median,
            lower,
            upper,
        }
    }

    pub fn time(&self) -> &[f64] {
        &self.time
    }

    pub fn median(&self) -> &[f64] {
        &self.median
    }

    pub fn lower(&self) -> &[f64] {
        &self.lower
    }

    pub fn upper(&self) -> &[f64] {
        &self.upper
    }

    pub fn len(&self) -> usize {
        self.time.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

/// `exp(-t / 3) * cos(t)`
pub fn median_at(t: f64) -> f64 {
    (-t / DECAY_TIME).exp() * t.cos()
}
