//! Load-testing harness for tiered CRUD workloads
//!
//! This crate times labeled workloads ("Lightweight", "Medium", "Heavy")
//! over repeated iterations and reduces the raw latencies to summary
//! statistics, cross-tier insights and formatted reports.
//!
//! # Features
//!
//! - **Sample Collection**: Run async workloads for N iterations, with warmup,
//!   recording a per-iteration `Total`
//! - **Statistics**: Mean, min, max and population standard deviation per label
//! - **Insights**: Heavy/Lightweight ratio, Heavy variability, most consistent tier
//! - **Thresholds**: Fail a run when a label's average exceeds its ceiling
//! - **Multiple Output Formats**: Console table, JSON and Markdown reports
//!
//! # Example
//!
//! ```no_run
//! use crud_bench::{BenchmarkReport, Config, OutputFormat, Reporter};
//! use crud_bench::runner::{workloads_from_config, SampleCollector};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let config = Config::from_file("crud-bench.toml")?;
//!
//! let started_at = chrono::Utc::now();
//! let samples = SampleCollector::from_config(&config.benchmark)
//!     .collect(&workloads_from_config(&config))
//!     .await?;
//!
//! let report = BenchmarkReport::build(
//!     &config.benchmark.name,
//!     started_at,
//!     config.benchmark.warmup,
//!     &samples,
//!     &config.thresholds,
//! )?;
//! Reporter::new(OutputFormat::Console).report(&report)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! ```toml
//! [benchmark]
//! name = "ORM CRUD tiers"
//! iterations = 10
//! warmup = 1
//!
//! [report]
//! format = "console"
//!
//! [thresholds]
//! Heavy = 2500.0
//!
//! [[workloads]]
//! label = "Lightweight"
//! simulated_ms = 5
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod reporter;
pub mod runner;
pub mod samples;
pub mod stats;

// Re-export main types for convenience
pub use config::Config;
pub use error::StatsError;
pub use report::BenchmarkReport;
pub use reporter::{format_duration, render_table, OutputFormat, Reporter};
pub use runner::{SampleCollector, SimulatedWorkload, Workload};
pub use samples::Samples;
pub use stats::{summarize, Insights, SummaryStats};
