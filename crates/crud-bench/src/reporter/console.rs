//! Console reporter for benchmark results
//!
//! Provides human-readable output with the comparison table, tier insights
//! and threshold status.

use anyhow::Result;
use std::fmt::Write;

use super::table::render_table;
use crate::report::BenchmarkReport;

/// Console format reporter
pub struct ConsoleReporter;

impl ConsoleReporter {
    /// Format a benchmark report for console output
    pub fn format(report: &BenchmarkReport) -> Result<String> {
        let mut output = String::new();

        // Header
        writeln!(output)?;
        writeln!(output, "╔══════════════════════════════════════════════════════════════╗")?;
        writeln!(output, "║                 CRUD BENCHMARK RESULTS                       ║")?;
        writeln!(output, "╚══════════════════════════════════════════════════════════════╝")?;
        writeln!(output)?;

        writeln!(output, "Suite:       {}", report.suite_name)?;
        writeln!(output, "Started:     {}", report.started_at)?;
        writeln!(output, "Iterations:  {}", report.iterations)?;
        writeln!(output, "Warmup:      {}", report.warmup)?;
        writeln!(output)?;

        output.push_str(&render_table(&report.stats));
        writeln!(output)?;

        Self::format_insights(&mut output, report)?;

        writeln!(output, "────────────────────────────────────────────────────────────────")?;
        let status = if report.passed { "PASSED" } else { "FAILED" };
        let status_symbol = if report.passed { "✓" } else { "✗" };
        writeln!(output, "Overall Status: {} {}", status_symbol, status)?;

        if !report.failures.is_empty() {
            writeln!(output)?;
            writeln!(output, "Threshold Violations:")?;
            for failure in &report.failures {
                writeln!(output, "  ✗ {}", failure)?;
            }
        }

        writeln!(output)?;
        Ok(output)
    }

    fn format_insights(output: &mut String, report: &BenchmarkReport) -> Result<()> {
        writeln!(output, "Insights:")?;
        match (&report.insights, &report.insights_error) {
            (Some(insights), _) => {
                for line in insights.to_string().lines() {
                    writeln!(output, "  • {}", line)?;
                }
            }
            (None, Some(reason)) => writeln!(output, "  unavailable: {}", reason)?,
            (None, None) => writeln!(output, "  unavailable")?,
        }
        writeln!(output)?;
        Ok(())
    }
}
