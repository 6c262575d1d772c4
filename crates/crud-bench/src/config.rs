//! Configuration parsing for benchmark suites
//!
//! This module provides TOML-based configuration for the iteration plan,
//! report format, per-label thresholds and the simulated workloads used for
//! dry runs.

use anyhow::{bail, Context};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::reporter::OutputFormat;
use crate::samples::TOTAL;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Benchmark configuration
    pub benchmark: BenchmarkConfig,
    /// Report output settings
    #[serde(default)]
    pub report: ReportConfig,
    /// Per-label ceilings on the average duration, in milliseconds
    #[serde(default)]
    pub thresholds: IndexMap<String, f64>,
    /// Workloads to run, in execution order
    #[serde(default)]
    pub workloads: Vec<WorkloadConfig>,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML is malformed
    /// - Required fields are missing
    /// - The values fail validation (see [`Config::validate`])
    ///
    /// # Example
    ///
    /// ```no_run
    /// use crud_bench::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_file("crud-bench.toml")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use crud_bench::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let toml = r#"
    ///     [benchmark]
    ///     name = "ORM CRUD tiers"
    ///
    ///     [[workloads]]
    ///     label = "Lightweight"
    ///     simulated_ms = 5
    /// "#;
    /// let config = Config::from_str(toml)?;
    /// assert_eq!(config.benchmark.iterations, 10);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        let config: Config = toml::from_str(s).context("Failed to parse TOML configuration")?;
        config.validate()?;
        Ok(config)
    }

    /// Check values that the TOML schema alone cannot enforce.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.benchmark.iterations == 0 {
            bail!("benchmark.iterations must be at least 1");
        }

        let mut seen = HashSet::new();
        for workload in &self.workloads {
            if workload.label.trim().is_empty() {
                bail!("workload labels must not be empty");
            }
            if workload.label == TOTAL {
                bail!("workload label '{}' is reserved for the per-iteration total", TOTAL);
            }
            if !seen.insert(workload.label.as_str()) {
                bail!("duplicate workload label '{}'", workload.label);
            }
        }

        for (label, max_ms) in &self.thresholds {
            if !max_ms.is_finite() || *max_ms < 0.0 {
                bail!(
                    "threshold for '{}' must be a non-negative number of milliseconds (got {})",
                    label,
                    max_ms
                );
            }
        }

        Ok(())
    }
}

/// Core benchmark configuration parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkConfig {
    /// Name of the benchmark suite
    pub name: String,
    /// Number of measured iterations (default: 10)
    #[serde(default = "default_iterations")]
    pub iterations: u32,
    /// Number of discarded warmup iterations before measurement (default: 0)
    #[serde(default)]
    pub warmup: u32,
}

fn default_iterations() -> u32 {
    10
}

/// Report output settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Output format used when none is given on the command line
    #[serde(default)]
    pub format: OutputFormat,
}

/// A workload with simulated latency, for exercising the harness without a database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkloadConfig {
    /// Label the durations are recorded under
    pub label: String,
    /// Time each execution takes, in milliseconds
    pub simulated_ms: u64,
}
