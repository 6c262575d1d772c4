//! Cross-tier comparisons derived from per-label summary statistics.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::summary::SummaryStats;
use crate::error::{Result, StatsError};
use crate::samples::{HEAVY, LIGHTWEIGHT, TOTAL};

/// Derived comparisons between the CRUD tiers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    /// Heavy average divided by Lightweight average
    pub heavy_to_lightweight_ratio: f64,
    /// Heavy coefficient of variation, as a percentage
    pub heavy_cv_percent: f64,
    /// Label with the lowest coefficient of variation, `None` if no label qualifies
    pub most_consistent: Option<String>,
}

impl Insights {
    /// Compute insights from tier statistics.
    ///
    /// `Heavy` and `Lightweight` must be present. `Total` is ignored when
    /// picking the most consistent label.
    ///
    /// # Errors
    ///
    /// * [`StatsError::InvalidInput`] if `Heavy` or `Lightweight` is missing
    /// * [`StatsError::ArithmeticError`] if an average used as a divisor is zero
    ///
    /// # Examples
    ///
    /// ```
    /// use crud_bench::stats::{Insights, SummaryStats};
    /// use indexmap::IndexMap;
    ///
    /// let mut stats = IndexMap::new();
    /// stats.insert("Lightweight".to_string(), SummaryStats::from_samples(&[10.0, 20.0, 30.0]).unwrap());
    /// stats.insert("Heavy".to_string(), SummaryStats::from_samples(&[1000.0, 2000.0, 3000.0]).unwrap());
    ///
    /// let insights = Insights::compute(&stats).unwrap();
    /// assert_eq!(insights.ratio_display(), "100.0x");
    /// ```
    pub fn compute(stats: &IndexMap<String, SummaryStats>) -> Result<Self> {
        let heavy = require(stats, HEAVY)?;
        let lightweight = require(stats, LIGHTWEIGHT)?;

        if lightweight.average == 0.0 {
            return Err(StatsError::ArithmeticError(format!(
                "{} average is zero; {}/{} ratio is undefined",
                LIGHTWEIGHT, HEAVY, LIGHTWEIGHT
            )));
        }
        let heavy_to_lightweight_ratio = heavy.average / lightweight.average;

        let heavy_cv_percent = heavy
            .coefficient_of_variation()
            .map_err(|e| within(HEAVY, e))?
            * 100.0;

        Ok(Insights {
            heavy_to_lightweight_ratio,
            heavy_cv_percent,
            most_consistent: most_consistent(stats)?,
        })
    }

    /// Ratio rendered as a multiplier, e.g. `"14.3x"`.
    pub fn ratio_display(&self) -> String {
        format!("{:.1}x", self.heavy_to_lightweight_ratio)
    }

    /// Heavy variability rendered as a percentage, e.g. `"8.2%"`.
    pub fn heavy_cv_display(&self) -> String {
        format!("{:.1}%", self.heavy_cv_percent)
    }

    /// Most consistent label, or `"N/A"` when there was nothing to compare.
    pub fn most_consistent_display(&self) -> &str {
        self.most_consistent.as_deref().unwrap_or(NOT_APPLICABLE)
    }
}

impl fmt::Display for Insights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} vs {}: {} slower", HEAVY, LIGHTWEIGHT, self.ratio_display())?;
        writeln!(f, "{} variability (CV): {}", HEAVY, self.heavy_cv_display())?;
        write!(f, "Most consistent: {}", self.most_consistent_display())
    }
}

/// Placeholder shown when no label qualifies as most consistent.
pub const NOT_APPLICABLE: &str = "N/A";

/// Label with the smallest coefficient of variation, excluding `Total`.
///
/// Ties go to the label that appears first. Returns `Ok(None)` when no
/// label other than `Total` is present.
///
/// # Errors
///
/// Returns [`StatsError::ArithmeticError`] if a compared label has a zero average.
pub fn most_consistent(stats: &IndexMap<String, SummaryStats>) -> Result<Option<String>> {
    let mut best: Option<(&str, f64)> = None;

    for (label, summary) in stats.iter().filter(|(label, _)| label.as_str() != TOTAL) {
        let cv = summary
            .coefficient_of_variation()
            .map_err(|e| within(label, e))?;
        match best {
            Some((_, best_cv)) if cv >= best_cv => {}
            _ => best = Some((label.as_str(), cv)),
        }
    }

    Ok(best.map(|(label, _)| label.to_string()))
}

fn require<'a>(
    stats: &'a IndexMap<String, SummaryStats>,
    label: &str,
) -> Result<&'a SummaryStats> {
    stats
        .get(label)
        .ok_or_else(|| StatsError::InvalidInput(format!("no statistics for label '{}'", label)))
}

fn within(label: &str, err: StatsError) -> StatsError {
    match err {
        StatsError::ArithmeticError(msg) => {
            StatsError::ArithmeticError(format!("{}: {}", label, msg))
        }
        other => other,
    }
}
