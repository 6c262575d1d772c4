//! Raw duration samples keyed by workload label.
//!
//! The collector appends one duration per label per iteration; the finished
//! collection is handed to the reporter in one piece and never mutated again.

use anyhow::Context;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Label of the lightweight CRUD tier
pub const LIGHTWEIGHT: &str = "Lightweight";
/// Label of the medium CRUD tier
pub const MEDIUM: &str = "Medium";
/// Label of the heavy CRUD tier
pub const HEAVY: &str = "Heavy";
/// Label of the whole-iteration duration recorded by the collector
pub const TOTAL: &str = "Total";

/// Ordered mapping from label to the durations (ms) measured for it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Samples {
    series: IndexMap<String, Vec<f64>>,
}

impl Samples {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one duration to `label`, creating the series on first use.
    pub fn record(&mut self, label: &str, duration_ms: f64) {
        self.series
            .entry(label.to_string())
            .or_default()
            .push(duration_ms);
    }

    /// Durations recorded for `label`, in iteration order.
    pub fn get(&self, label: &str) -> Option<&[f64]> {
        self.series.get(label).map(Vec::as_slice)
    }

    /// Labels in the order they were first recorded.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f64])> {
        self.series
            .iter()
            .map(|(label, values)| (label.as_str(), values.as_slice()))
    }

    /// Load samples from a JSON object of the form `{"Heavy": [1020.5, 998.1], ...}`.
    ///
    /// Key order in the file is kept as display order.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read samples file: {}", path.display()))?;
        Self::from_json(&content)
    }

    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        serde_json::from_str(s).context("Failed to parse samples JSON")
    }
}

impl FromIterator<(String, Vec<f64>)> for Samples {
    fn from_iter<I: IntoIterator<Item = (String, Vec<f64>)>>(iter: I) -> Self {
        Self {
            series: iter.into_iter().collect(),
        }
    }
}
