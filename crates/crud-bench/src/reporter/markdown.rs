//! Markdown reporter for benchmark results

use anyhow::Result;
use std::fmt::Write;

use super::duration::format_duration;
use crate::report::BenchmarkReport;

/// Markdown format reporter
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Format a benchmark report as a Markdown document
    pub fn format(report: &BenchmarkReport) -> Result<String> {
        let mut output = String::new();

        writeln!(output, "# {}", report.suite_name)?;
        writeln!(output)?;
        writeln!(output, "- **Started:** {}", report.started_at)?;
        writeln!(output, "- **Iterations:** {}", report.iterations)?;
        writeln!(output, "- **Warmup:** {}", report.warmup)?;
        let status = if report.passed { "✅ Passed" } else { "❌ Failed" };
        writeln!(output, "- **Status:** {}", status)?;
        writeln!(output)?;

        writeln!(output, "## Results")?;
        writeln!(output)?;
        writeln!(output, "| Label | Average | Minimum | Maximum | Std Dev |")?;
        writeln!(output, "|-------|--------:|--------:|--------:|--------:|")?;
        for (label, summary) in &report.stats {
            writeln!(
                output,
                "| {} | {} | {} | {} | {} |",
                label,
                format_duration(summary.average),
                format_duration(summary.minimum),
                format_duration(summary.maximum),
                format_duration(summary.std_dev)
            )?;
        }
        writeln!(output)?;

        writeln!(output, "## Insights")?;
        writeln!(output)?;
        match (&report.insights, &report.insights_error) {
            (Some(insights), _) => {
                writeln!(output, "- Heavy vs Lightweight: **{}**", insights.ratio_display())?;
                writeln!(output, "- Heavy variability (CV): **{}**", insights.heavy_cv_display())?;
                writeln!(
                    output,
                    "- Most consistent: **{}**",
                    insights.most_consistent_display()
                )?;
            }
            (None, Some(reason)) => writeln!(output, "_Unavailable: {}_", reason)?,
            (None, None) => writeln!(output, "_Unavailable_")?,
        }

        if !report.failures.is_empty() {
            writeln!(output)?;
            writeln!(output, "## Threshold Violations")?;
            writeln!(output)?;
            for failure in &report.failures {
                writeln!(output, "- {}", failure)?;
            }
        }

        Ok(output)
    }
}
