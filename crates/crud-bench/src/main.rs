//! crud-bench binary
//!
//! Runs configured workloads or reports on previously collected samples.
//! Logs go to stderr; stdout carries only the report.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crud_bench::runner::{workloads_from_config, SampleCollector};
use crud_bench::{BenchmarkReport, Config, OutputFormat, Reporter, Samples};

#[derive(Parser, Debug)]
#[command(name = "crud-bench")]
#[command(version, about = "Tiered CRUD workload benchmarks with summary statistics")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the workloads declared in a config file and report
    Run {
        /// Path to the TOML configuration
        #[arg(short, long)]
        config: PathBuf,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Report on samples collected earlier (JSON object of label -> durations in ms)
    Report {
        /// Path to the samples JSON file
        #[arg(short, long)]
        samples: PathBuf,

        /// Optional TOML configuration for the suite name, thresholds and format
        #[arg(short, long)]
        config: Option<PathBuf>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Parse a config file and print what it declares
    Validate {
        /// Path to the TOML configuration
        #[arg(short, long)]
        config: PathBuf,
    },
}

#[derive(clap::Args, Debug)]
struct OutputArgs {
    /// Output format: console, json, json-pretty or markdown
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Write the report to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let passed = match args.command {
        Command::Run { config, output } => run(&config, &output).await?,
        Command::Report {
            samples,
            config,
            output,
        } => report(&samples, config.as_deref(), &output)?,
        Command::Validate { config } => {
            validate(&config)?;
            true
        }
    };

    if !passed {
        std::process::exit(1);
    }
    Ok(())
}

async fn run(config_path: &Path, output: &OutputArgs) -> Result<bool> {
    let config = Config::from_file(config_path)?;
    tracing::info!("Starting benchmark suite '{}'", config.benchmark.name);

    let started_at = chrono::Utc::now();
    let samples = SampleCollector::from_config(&config.benchmark)
        .collect(&workloads_from_config(&config))
        .await?;

    let report = BenchmarkReport::build(
        &config.benchmark.name,
        started_at,
        config.benchmark.warmup,
        &samples,
        &config.thresholds,
    )?;
    emit(&report, output, config.report.format)?;
    Ok(report.passed)
}

fn report(samples_path: &Path, config_path: Option<&Path>, output: &OutputArgs) -> Result<bool> {
    let samples = Samples::from_file(samples_path)?;
    let config = config_path.map(Config::from_file).transpose()?;

    let suite_name = match &config {
        Some(config) => config.benchmark.name.clone(),
        None => samples_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "samples".to_string()),
    };
    let thresholds = config
        .as_ref()
        .map(|c| c.thresholds.clone())
        .unwrap_or_else(IndexMap::new);
    let default_format = config.as_ref().map(|c| c.report.format).unwrap_or_default();
    let warmup = config.as_ref().map_or(0, |c| c.benchmark.warmup);

    let report =
        BenchmarkReport::build(&suite_name, chrono::Utc::now(), warmup, &samples, &thresholds)
            .with_context(|| format!("Failed to summarise {}", samples_path.display()))?;
    emit(&report, output, default_format)?;
    Ok(report.passed)
}

fn validate(config_path: &Path) -> Result<()> {
    let config = Config::from_file(config_path)?;

    println!("✓ {} is valid", config_path.display());
    println!();
    println!("Benchmark:   {}", config.benchmark.name);
    println!("Iterations:  {}", config.benchmark.iterations);
    println!("Warmup:      {}", config.benchmark.warmup);
    println!("Format:      {}", config.report.format);

    println!();
    println!("Thresholds ({}):", config.thresholds.len());
    for (label, max_ms) in &config.thresholds {
        println!("  {}: {}", label, crud_bench::format_duration(*max_ms));
    }

    println!();
    println!("Workloads ({}):", config.workloads.len());
    for (i, workload) in config.workloads.iter().enumerate() {
        println!("  {}. {} ({}ms simulated)", i + 1, workload.label, workload.simulated_ms);
    }

    Ok(())
}

fn emit(report: &BenchmarkReport, output: &OutputArgs, default_format: OutputFormat) -> Result<()> {
    let reporter = Reporter::new(output.format.unwrap_or(default_format));
    match &output.output {
        Some(path) => {
            reporter.write_to_file(report, path)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => reporter.report(report)?,
    }
    Ok(())
}
