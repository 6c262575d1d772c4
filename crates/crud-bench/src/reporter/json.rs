//! JSON reporter for benchmark results

use crate::report::BenchmarkReport;
use anyhow::Result;

/// JSON format reporter
pub struct JsonReporter;

impl JsonReporter {
    /// Format a benchmark report as JSON
    ///
    /// Label order in `stats` follows collection order.
    pub fn format(report: &BenchmarkReport, pretty: bool) -> Result<String> {
        let mut output = if pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        if pretty {
            output.push('\n');
        }
        Ok(output)
    }
}
