//! Summary statistics over benchmark duration samples.
//!
//! All values are milliseconds. Statistics are recomputed from the full
//! sample slice on every call.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Result, StatsError};
use crate::samples::Samples;

/// Descriptive statistics for one workload label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryStats {
    /// Arithmetic mean
    pub average: f64,
    /// Smallest sample
    pub minimum: f64,
    /// Largest sample
    pub maximum: f64,
    /// Population standard deviation (divides by N)
    #[serde(rename = "standard_deviation")]
    pub std_dev: f64,
    /// Number of samples summarised
    pub count: usize,
}

impl SummaryStats {
    /// Compute summary statistics from duration samples.
    ///
    /// # Arguments
    ///
    /// * `samples` - Durations in milliseconds, in any order
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::InvalidInput`] if `samples` is empty or holds a
    /// negative or non-finite value.
    ///
    /// # Examples
    ///
    /// ```
    /// use crud_bench::stats::SummaryStats;
    ///
    /// let stats = SummaryStats::from_samples(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
    /// assert_eq!(stats.average, 5.0);
    /// assert_eq!(stats.minimum, 2.0);
    /// assert_eq!(stats.maximum, 9.0);
    /// assert_eq!(stats.std_dev, 2.0);
    /// ```
    pub fn from_samples(samples: &[f64]) -> Result<Self> {
        if samples.is_empty() {
            return Err(StatsError::InvalidInput(
                "cannot compute statistics over an empty sample set".to_string(),
            ));
        }

        if let Some(bad) = samples.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(StatsError::InvalidInput(format!(
                "durations must be non-negative and finite (got {})",
                bad
            )));
        }

        let count = samples.len();
        let (minimum, maximum) = samples
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });

        // Summation error can push the mean a hair outside [min, max]
        // for near-constant input.
        let sum: f64 = samples.iter().sum();
        let average = (sum / count as f64).clamp(minimum, maximum);

        let squared_diffs: f64 = samples.iter().map(|&v| (v - average).powi(2)).sum();
        let std_dev = (squared_diffs / count as f64).sqrt();

        Ok(SummaryStats {
            average,
            minimum,
            maximum,
            std_dev,
            count,
        })
    }

    /// Coefficient of variation (`std_dev / average`).
    ///
    /// # Errors
    ///
    /// Returns [`StatsError::ArithmeticError`] when the average is zero, since
    /// the ratio is undefined.
    pub fn coefficient_of_variation(&self) -> Result<f64> {
        if self.average == 0.0 {
            return Err(StatsError::ArithmeticError(
                "coefficient of variation is undefined for a zero average".to_string(),
            ));
        }
        Ok(self.std_dev / self.average)
    }
}

/// Summarise every label in `samples`, keeping label order.
///
/// Fails on the first label whose samples are rejected, naming it in the error.
pub fn summarize(samples: &Samples) -> Result<IndexMap<String, SummaryStats>> {
    samples
        .iter()
        .map(|(label, values)| {
            SummaryStats::from_samples(values)
                .map(|stats| (label.to_string(), stats))
                .map_err(|e| match e {
                    StatsError::InvalidInput(msg) => {
                        StatsError::InvalidInput(format!("{}: {}", label, msg))
                    }
                    other => other,
                })
        })
        .collect()
}
