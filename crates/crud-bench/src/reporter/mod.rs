//! Benchmark result reporting
//!
//! This module turns a [`BenchmarkReport`] into text. Every formatter is a
//! pure function returning a `String`; only [`Reporter::report`] and
//! [`Reporter::write_to_file`] touch the outside world.
//!
//! # Output Formats
//!
//! - **Console**: Box-drawn comparison table with insights
//! - **JSON**: Machine-readable format for external analysis
//! - **Markdown**: Documentation-friendly format for reports
//!
//! # Example
//!
//! ```no_run
//! use crud_bench::report::BenchmarkReport;
//! use crud_bench::reporter::{OutputFormat, Reporter};
//!
//! # fn example(report: BenchmarkReport) -> anyhow::Result<()> {
//! Reporter::new(OutputFormat::Console).report(&report)?;
//!
//! // Or write to a file
//! Reporter::new(OutputFormat::Json).write_to_file(&report, "results.json")?;
//! # Ok(())
//! # }
//! ```

mod console;
mod duration;
mod json;
mod markdown;
mod table;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::str::FromStr;

use crate::report::BenchmarkReport;

pub use console::ConsoleReporter;
pub use duration::format_duration;
pub use json::JsonReporter;
pub use markdown::MarkdownReporter;
pub use table::{render_table, LABEL_WIDTH, VALUE_WIDTH};

/// Output format for benchmark reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputFormat {
    /// Console output with box-drawn tables
    #[default]
    Console,
    /// JSON format for machine parsing
    Json,
    /// Pretty-printed JSON
    JsonPretty,
    /// Markdown format for documentation
    Markdown,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "console" => Ok(OutputFormat::Console),
            "json" => Ok(OutputFormat::Json),
            "json-pretty" => Ok(OutputFormat::JsonPretty),
            "markdown" => Ok(OutputFormat::Markdown),
            other => Err(format!(
                "unknown output format '{}' (expected console, json, json-pretty or markdown)",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Console => "console",
            OutputFormat::Json => "json",
            OutputFormat::JsonPretty => "json-pretty",
            OutputFormat::Markdown => "markdown",
        };
        f.write_str(name)
    }
}

/// Reporter for benchmark results
pub struct Reporter {
    format: OutputFormat,
}

impl Reporter {
    /// Create a new reporter with the specified output format
    pub fn new(format: OutputFormat) -> Self {
        Self { format }
    }

    /// Report results to stdout
    pub fn report(&self, report: &BenchmarkReport) -> Result<()> {
        let output = self.format_report(report)?;
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    /// Write results to a file
    pub fn write_to_file<P: AsRef<Path>>(&self, report: &BenchmarkReport, path: P) -> Result<()> {
        let output = self.format_report(report)?;
        fs::write(path, output)?;
        Ok(())
    }

    /// Format results as a string
    pub fn format_report(&self, report: &BenchmarkReport) -> Result<String> {
        match self.format {
            OutputFormat::Json => JsonReporter::format(report, false),
            OutputFormat::JsonPretty => JsonReporter::format(report, true),
            OutputFormat::Console => ConsoleReporter::format(report),
            OutputFormat::Markdown => MarkdownReporter::format(report),
        }
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new(OutputFormat::default())
    }
}
