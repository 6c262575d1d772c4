//! Statistical analysis of benchmark durations
//!
//! This module reduces per-label duration samples to summary statistics and
//! derives comparisons between the CRUD tiers.
//!
//! # Examples
//!
//! ```
//! use crud_bench::samples::Samples;
//! use crud_bench::stats::{summarize, Insights};
//!
//! let mut samples = Samples::new();
//! for (light, heavy) in [(10.0, 1000.0), (20.0, 2000.0), (30.0, 3000.0)] {
//!     samples.record("Lightweight", light);
//!     samples.record("Heavy", heavy);
//! }
//!
//! let stats = summarize(&samples).unwrap();
//! let insights = Insights::compute(&stats).unwrap();
//! println!("Heavy is {} slower", insights.ratio_display());
//! ```

pub mod insights;
pub mod summary;

pub use insights::{most_consistent, Insights, NOT_APPLICABLE};
pub use summary::{summarize, SummaryStats};
