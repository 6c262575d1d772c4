//! Sample collector integration tests
//!
//! Run with: cargo test -p crud-bench --test collector

use anyhow::{bail, Result};
use async_trait::async_trait;
use crud_bench::runner::{SampleCollector, SimulatedWorkload, Workload};
use crud_bench::samples::{HEAVY, LIGHTWEIGHT, MEDIUM, TOTAL};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Counts executions and optionally fails on a given call
struct CountingWorkload {
    label: String,
    calls: Arc<AtomicUsize>,
    fail_on_call: Option<usize>,
}

impl CountingWorkload {
    fn new(label: &str, calls: Arc<AtomicUsize>) -> Self {
        Self {
            label: label.to_string(),
            calls,
            fail_on_call: None,
        }
    }
}

#[async_trait]
impl Workload for CountingWorkload {
    fn label(&self) -> &str {
        &self.label
    }

    async fn execute(&self) -> Result<()> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if Some(call) == self.fail_on_call {
            bail!("connection reset");
        }
        Ok(())
    }
}

fn tiers(latencies_ms: [u64; 3]) -> Vec<Box<dyn Workload>> {
    [LIGHTWEIGHT, MEDIUM, HEAVY]
        .iter()
        .zip(latencies_ms)
        .map(|(label, ms)| {
            Box::new(SimulatedWorkload::new(*label, Duration::from_millis(ms))) as Box<dyn Workload>
        })
        .collect()
}

#[tokio::test]
async fn test_collects_one_sample_per_iteration() {
    let samples = SampleCollector::new(4, 0)
        .collect(&tiers([0, 0, 0]))
        .await
        .unwrap();

    let labels: Vec<_> = samples.labels().collect();
    assert_eq!(labels, vec![LIGHTWEIGHT, MEDIUM, HEAVY, TOTAL]);
    for (_, values) in samples.iter() {
        assert_eq!(values.len(), 4);
        assert!(values.iter().all(|v| v.is_finite() && *v >= 0.0));
    }
}

#[tokio::test]
async fn test_durations_reflect_latency() {
    let samples = SampleCollector::new(2, 0)
        .collect(&tiers([1, 2, 10]))
        .await
        .unwrap();

    let heavy = samples.get(HEAVY).unwrap();
    assert!(heavy.iter().all(|&ms| ms >= 9.0), "heavy samples: {:?}", heavy);

    // Total covers every workload in the iteration
    let total = samples.get(TOTAL).unwrap();
    for (i, &t) in total.iter().enumerate() {
        let parts: f64 = [LIGHTWEIGHT, MEDIUM, HEAVY]
            .iter()
            .map(|label| samples.get(label).unwrap()[i])
            .sum();
        assert!(t >= parts, "total {} < sum of parts {}", t, parts);
    }
}

#[tokio::test]
async fn test_warmup_runs_are_discarded() {
    let calls = Arc::new(AtomicUsize::new(0));
    let workloads: Vec<Box<dyn Workload>> =
        vec![Box::new(CountingWorkload::new(LIGHTWEIGHT, calls.clone()))];

    let samples = SampleCollector::new(3, 2).collect(&workloads).await.unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 5);
    assert_eq!(samples.get(LIGHTWEIGHT).unwrap().len(), 3);
    assert_eq!(samples.get(TOTAL).unwrap().len(), 3);
}

#[tokio::test]
async fn test_workload_failure_aborts_run() {
    let calls = Arc::new(AtomicUsize::new(0));
    let workloads: Vec<Box<dyn Workload>> = vec![Box::new(CountingWorkload {
        label: HEAVY.to_string(),
        calls: calls.clone(),
        fail_on_call: Some(2),
    })];

    let err = SampleCollector::new(5, 0)
        .collect(&workloads)
        .await
        .unwrap_err();

    // No retry: the failing call is the last one made
    assert_eq!(calls.load(Ordering::SeqCst), 2);
    let message = format!("{:#}", err);
    assert!(message.contains("Workload 'Heavy' failed in run 2 of 5"));
    assert!(message.contains("connection reset"));
}

#[tokio::test]
async fn test_zero_iterations_rejected() {
    let result = SampleCollector::new(0, 0).collect(&tiers([0, 0, 0])).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_run_count_overflow_rejected() {
    let calls = Arc::new(AtomicUsize::new(0));
    let workloads: Vec<Box<dyn Workload>> =
        vec![Box::new(CountingWorkload::new(LIGHTWEIGHT, calls.clone()))];

    let err = SampleCollector::new(1, u32::MAX)
        .collect(&workloads)
        .await
        .unwrap_err();

    assert!(err.to_string().contains("exceeds"), "{}", err);
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_no_workloads_rejected() {
    let result = SampleCollector::new(3, 0).collect(&[]).await;
    assert!(result.is_err());
}
