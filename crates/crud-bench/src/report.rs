//! Assembly of the full benchmark report from collected samples.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::Result;
use crate::reporter::format_duration;
use crate::samples::Samples;
use crate::stats::{summarize, Insights, SummaryStats};

/// Everything a reporter needs to render one benchmark run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Name of the benchmark suite
    pub suite_name: String,
    /// Timestamp when the run started (RFC 3339)
    pub started_at: String,
    /// Largest number of samples recorded for any label
    pub iterations: usize,
    /// Discarded runs executed before measurement started
    #[serde(default)]
    pub warmup: u32,
    /// Summary statistics per label, in collection order
    pub stats: IndexMap<String, SummaryStats>,
    /// Cross-tier comparisons, absent when they could not be computed
    pub insights: Option<Insights>,
    /// Why `insights` is absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub insights_error: Option<String>,
    /// Whether every threshold was met
    pub passed: bool,
    /// Threshold violations, one message each
    pub failures: Vec<String>,
}

impl BenchmarkReport {
    /// Summarise `samples` and check them against `thresholds`.
    ///
    /// `warmup` is only recorded; warmup runs are never part of `samples`.
    ///
    /// Statistics errors abort the report. Insight errors only drop the
    /// insights section; the reason is kept in `insights_error`.
    pub fn build(
        suite_name: &str,
        started_at: DateTime<Utc>,
        warmup: u32,
        samples: &Samples,
        thresholds: &IndexMap<String, f64>,
    ) -> Result<Self> {
        let stats = summarize(samples)?;

        let (insights, insights_error) = match Insights::compute(&stats) {
            Ok(insights) => (Some(insights), None),
            Err(e) => {
                warn!("Omitting insights: {}", e);
                (None, Some(e.to_string()))
            }
        };

        let failures = check_thresholds(&stats, thresholds);
        for failure in &failures {
            warn!("Threshold violated: {}", failure);
        }

        let iterations = samples.iter().map(|(_, v)| v.len()).max().unwrap_or(0);

        info!(
            "Report for '{}': {} labels, {} iterations ({} warmup), {} threshold failures",
            suite_name,
            stats.len(),
            iterations,
            warmup,
            failures.len()
        );

        Ok(BenchmarkReport {
            suite_name: suite_name.to_string(),
            started_at: started_at.to_rfc3339(),
            iterations,
            warmup,
            stats,
            insights,
            insights_error,
            passed: failures.is_empty(),
            failures,
        })
    }
}

/// Compare each label's average against its ceiling.
///
/// A threshold for a label with no statistics counts as a failure.
pub fn check_thresholds(
    stats: &IndexMap<String, SummaryStats>,
    thresholds: &IndexMap<String, f64>,
) -> Vec<String> {
    thresholds
        .iter()
        .filter_map(|(label, &max_ms)| match stats.get(label) {
            None => Some(format!("{}: no samples recorded for threshold check", label)),
            Some(summary) if summary.average > max_ms => Some(format!(
                "{} average ({}) exceeds threshold ({})",
                label,
                format_duration(summary.average),
                format_duration(max_ms)
            )),
            Some(_) => None,
        })
        .collect()
}
