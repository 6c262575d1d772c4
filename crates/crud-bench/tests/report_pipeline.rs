//! End-to-end tests: samples in, rendered reports out
//!
//! Run with: cargo test -p crud-bench --test report_pipeline

use chrono::{TimeZone, Utc};
use crud_bench::runner::{workloads_from_config, SampleCollector};
use crud_bench::{BenchmarkReport, Config, OutputFormat, Reporter, Samples, StatsError};
use indexmap::IndexMap;
use pretty_assertions::assert_eq;

const TIER_SAMPLES: &str = r#"{
    "Lightweight": [10, 20, 30],
    "Medium": [100, 200, 300],
    "Heavy": [1000, 2000, 3000]
}"#;

fn started_at() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
}

#[test]
fn test_console_report_from_samples_file() {
    let samples = Samples::from_json(TIER_SAMPLES).unwrap();
    let report =
        BenchmarkReport::build("Offline", started_at(), 0, &samples, &IndexMap::new()).unwrap();

    let output = Reporter::new(OutputFormat::Console)
        .format_report(&report)
        .unwrap();

    let rows: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("│ ") && !line.starts_with("│ Label"))
        .collect();
    assert_eq!(
        rows,
        vec![
            "│ Lightweight     │ 20ms         │ 10ms         │ 30ms         │ 8ms          │",
            "│ Medium          │ 200ms        │ 100ms        │ 300ms        │ 82ms         │",
            "│ Heavy           │ 2.00s        │ 1.00s        │ 3.00s        │ 816ms        │",
        ]
    );
    assert!(output.contains("Heavy vs Lightweight: 100.0x slower"));
    assert!(output.contains("Overall Status: ✓ PASSED"));
}

#[test]
fn test_json_report_exposes_structured_stats() {
    let samples = Samples::from_json(TIER_SAMPLES).unwrap();
    let report =
        BenchmarkReport::build("Offline", started_at(), 0, &samples, &IndexMap::new()).unwrap();

    let output = Reporter::new(OutputFormat::Json)
        .format_report(&report)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["stats"]["Lightweight"]["average"], 20.0);
    assert_eq!(value["stats"]["Medium"]["minimum"], 100.0);
    assert_eq!(value["stats"]["Heavy"]["maximum"], 3000.0);
    assert_eq!(value["insights"]["heavy_to_lightweight_ratio"], 100.0);
    assert_eq!(value["passed"], true);
}

#[test]
fn test_all_zero_heavy_omits_insights() {
    let samples = Samples::from_json(
        r#"{"Lightweight": [0, 0], "Medium": [5, 5], "Heavy": [0, 0]}"#,
    )
    .unwrap();

    let report =
        BenchmarkReport::build("Degenerate", started_at(), 0, &samples, &IndexMap::new()).unwrap();

    assert!(report.insights.is_none());
    assert!(report
        .insights_error
        .as_deref()
        .unwrap()
        .starts_with("Arithmetic error"));

    let output = Reporter::new(OutputFormat::Console)
        .format_report(&report)
        .unwrap();
    assert!(output.contains("unavailable: Arithmetic error"));
}

#[test]
fn test_empty_series_is_invalid_input() {
    let samples = Samples::from_json(r#"{"Lightweight": [10], "Heavy": []}"#).unwrap();

    let err = BenchmarkReport::build("Broken", started_at(), 0, &samples, &IndexMap::new())
        .unwrap_err();
    assert_eq!(
        err,
        StatsError::InvalidInput(
            "Heavy: cannot compute statistics over an empty sample set".to_string()
        )
    );
}

#[tokio::test]
async fn test_configured_run_with_threshold_failure() {
    let config = Config::from_str(
        r#"
        [benchmark]
        name = "Dry Run"
        iterations = 3
        warmup = 1

        [thresholds]
        Heavy = 1.0

        [[workloads]]
        label = "Lightweight"
        simulated_ms = 0

        [[workloads]]
        label = "Medium"
        simulated_ms = 1

        [[workloads]]
        label = "Heavy"
        simulated_ms = 5
        "#,
    )
    .unwrap();

    let samples = SampleCollector::from_config(&config.benchmark)
        .collect(&workloads_from_config(&config))
        .await
        .unwrap();

    let report = BenchmarkReport::build(
        &config.benchmark.name,
        started_at(),
        config.benchmark.warmup,
        &samples,
        &config.thresholds,
    )
    .unwrap();

    assert_eq!(report.iterations, 3);
    assert_eq!(report.warmup, 1);
    assert_eq!(
        report.stats.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["Lightweight", "Medium", "Heavy", "Total"]
    );
    assert!(!report.passed);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].starts_with("Heavy average"));

    let markdown = Reporter::new(OutputFormat::Markdown)
        .format_report(&report)
        .unwrap();
    assert!(markdown.contains("## Threshold Violations"));

    let json = Reporter::new(OutputFormat::Json)
        .format_report(&report)
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["iterations"], 3);
    assert_eq!(value["warmup"], 1);
}
