//! Benchmark execution
//!
//! The collector runs every workload once per iteration, in the order given,
//! and records each execution time under the workload's label. The wall time
//! of the whole iteration is recorded under [`TOTAL`].
//!
//! ```text
//! iteration 1:  Lightweight ─▶ Medium ─▶ Heavy    (Total = sum of the wall time)
//! iteration 2:  Lightweight ─▶ Medium ─▶ Heavy
//! ...
//! ```
//!
//! Warmup iterations run the same sequence but nothing is recorded.
//!
//! # Example
//!
//! ```no_run
//! use crud_bench::runner::{SampleCollector, SimulatedWorkload, Workload};
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let workloads: Vec<Box<dyn Workload>> = vec![
//!     Box::new(SimulatedWorkload::new("Lightweight", Duration::from_millis(5))),
//!     Box::new(SimulatedWorkload::new("Heavy", Duration::from_millis(50))),
//! ];
//!
//! let samples = SampleCollector::new(10, 1).collect(&workloads).await?;
//! assert_eq!(samples.get("Heavy").map(|s| s.len()), Some(10));
//! # Ok(())
//! # }
//! ```

use anyhow::{bail, Context, Result};
use async_trait::async_trait;
use std::collections::HashSet;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

use crate::config::{BenchmarkConfig, Config};
use crate::samples::{Samples, TOTAL};

/// A unit of work timed once per iteration.
///
/// Implementations wrap whatever the benchmark exercises (an ORM call
/// sequence, an HTTP request, ...). A failed execution aborts the run; the
/// collector does not retry.
#[async_trait]
pub trait Workload: Send + Sync {
    /// Label the durations are recorded under
    fn label(&self) -> &str;

    /// Execute the workload once
    async fn execute(&self) -> Result<()>;
}

/// Workload that only waits for a fixed latency.
///
/// Useful for dry runs of the harness and for tests.
#[derive(Debug, Clone)]
pub struct SimulatedWorkload {
    label: String,
    latency: Duration,
}

impl SimulatedWorkload {
    pub fn new(label: impl Into<String>, latency: Duration) -> Self {
        Self {
            label: label.into(),
            latency,
        }
    }
}

#[async_trait]
impl Workload for SimulatedWorkload {
    fn label(&self) -> &str {
        &self.label
    }

    async fn execute(&self) -> Result<()> {
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

/// Build the simulated workloads declared in a configuration, in order.
pub fn workloads_from_config(config: &Config) -> Vec<Box<dyn Workload>> {
    config
        .workloads
        .iter()
        .map(|w| {
            Box::new(SimulatedWorkload::new(
                w.label.clone(),
                Duration::from_millis(w.simulated_ms),
            )) as Box<dyn Workload>
        })
        .collect()
}

/// Runs workloads repeatedly and gathers their durations.
#[derive(Debug, Clone, Copy)]
pub struct SampleCollector {
    iterations: u32,
    warmup: u32,
}

impl SampleCollector {
    /// Collector for `iterations` measured runs after `warmup` discarded ones
    pub fn new(iterations: u32, warmup: u32) -> Self {
        Self { iterations, warmup }
    }

    pub fn from_config(config: &BenchmarkConfig) -> Self {
        Self::new(config.iterations, config.warmup)
    }

    /// Run all iterations and return the measured samples.
    ///
    /// The returned [`Samples`] holds one series per workload, in workload
    /// order, followed by [`TOTAL`]. Each series has exactly `iterations`
    /// entries.
    ///
    /// # Errors
    ///
    /// Fails if there are no iterations or workloads, if warmup plus
    /// iterations overflows `u32`, if labels repeat or use the reserved
    /// `Total` label, or as soon as any workload execution fails.
    #[instrument(skip(self, workloads), fields(iterations = self.iterations, warmup = self.warmup))]
    pub async fn collect(&self, workloads: &[Box<dyn Workload>]) -> Result<Samples> {
        if self.iterations == 0 {
            bail!("at least one iteration is required");
        }
        let Some(total_runs) = self.warmup.checked_add(self.iterations) else {
            bail!(
                "{} warmup plus {} measured runs exceeds {} total runs",
                self.warmup,
                self.iterations,
                u32::MAX
            );
        };
        validate_labels(workloads)?;

        info!(
            "Collecting {} iterations ({} warmup) over {} workloads",
            self.iterations,
            self.warmup,
            workloads.len()
        );

        let mut samples = Samples::new();

        for run in 0..total_runs {
            let measured = run >= self.warmup;
            let iteration_start = Instant::now();
            let mut timings = Vec::with_capacity(workloads.len());

            for workload in workloads {
                let start = Instant::now();
                workload.execute().await.with_context(|| {
                    format!(
                        "Workload '{}' failed in run {} of {}",
                        workload.label(),
                        run + 1,
                        total_runs
                    )
                })?;
                let elapsed = elapsed_ms(start);
                debug!(label = workload.label(), run, measured, "{:.3}ms", elapsed);
                timings.push((workload.label(), elapsed));
            }

            let total = elapsed_ms(iteration_start);
            if measured {
                for (label, elapsed) in timings {
                    samples.record(label, elapsed);
                }
                samples.record(TOTAL, total);
                info!(
                    "Iteration {}/{} finished in {:.1}ms",
                    run + 1 - self.warmup,
                    self.iterations,
                    total
                );
            } else {
                debug!("Warmup run {}/{} finished in {:.1}ms", run + 1, self.warmup, total);
            }
        }

        Ok(samples)
    }
}

fn validate_labels(workloads: &[Box<dyn Workload>]) -> Result<()> {
    if workloads.is_empty() {
        bail!("no workloads to run");
    }

    let mut seen = HashSet::new();
    for workload in workloads {
        let label = workload.label();
        if label == TOTAL {
            bail!("workload label '{}' is reserved for the per-iteration total", TOTAL);
        }
        if !seen.insert(label) {
            bail!("duplicate workload label '{}'", label);
        }
    }
    Ok(())
}

fn elapsed_ms(start: Instant) -> f64 {
    start.elapsed().as_secs_f64() * 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulated(label: &str) -> Box<dyn Workload> {
        Box::new(SimulatedWorkload::new(label, Duration::ZERO))
    }

    #[test]
    fn test_validate_labels_rejects_empty() {
        assert!(validate_labels(&[]).is_err());
    }

    #[test]
    fn test_validate_labels_rejects_duplicates() {
        let workloads = vec![simulated("Heavy"), simulated("Heavy")];
        let err = validate_labels(&workloads).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn test_validate_labels_rejects_total() {
        let workloads = vec![simulated("Lightweight"), simulated(TOTAL)];
        assert!(validate_labels(&workloads).is_err());
    }

    #[test]
    fn test_workloads_from_config() {
        let config = Config::from_str(
            r#"
            [benchmark]
            name = "Test"

            [[workloads]]
            label = "Lightweight"
            simulated_ms = 1

            [[workloads]]
            label = "Heavy"
            simulated_ms = 3
            "#,
        )
        .unwrap();

        let workloads = workloads_from_config(&config);
        let labels: Vec<_> = workloads.iter().map(|w| w.label()).collect();
        assert_eq!(labels, vec!["Lightweight", "Heavy"]);
    }

    #[test]
    fn test_collector_from_config() {
        let config = BenchmarkConfig {
            name: "Test".to_string(),
            iterations: 7,
            warmup: 2,
        };
        let collector = SampleCollector::from_config(&config);
        assert_eq!(collector.iterations, 7);
        assert_eq!(collector.warmup, 2);
    }
}
