//! qrbatch command-line entrypoint

use anyhow::Context;
use clap::Parser;
use qrbatch::output::render_report;
use qrbatch::{BatchConfig, BatchReport, Error, ErrorLevel, batch, logging};
use std::path::PathBuf;
use std::process::ExitCode;

const EXIT_FATAL: u8 = 1;
/// `EX_NOINPUT` from sysexits.h; clap uses 2 for usage errors.
const EXIT_INPUT_NOT_FOUND: u8 = 66;
const EXIT_PARTIAL_FAILURE: u8 = 3;

#[derive(Parser, Debug)]
#[command(
    name = "qrbatch",
    version,
    about = "Batch-generate vector QR codes (.svg, .eps, .ai) from URLs"
)]
struct Cli {
    /// Input text file with one URL per line
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Directory to save generated QR code files
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// QR code error correction level (l, m, q, h)
    #[arg(short, long, value_name = "LEVEL")]
    error_level: Option<ErrorLevel>,

    /// Optional configuration file (toml/yaml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the batch report as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(report) if report.has_failures() => ExitCode::from(EXIT_PARTIAL_FAILURE),
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            if let Some(Error::InputNotFound(_)) = err.downcast_ref::<Error>() {
                // Already logged by the batch runner.
                return ExitCode::from(EXIT_INPUT_NOT_FOUND);
            }
            eprintln!("qrbatch: {err:#}");
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<BatchReport> {
    let mut config =
        BatchConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    if let Some(ref input) = cli.input {
        config.input = input.clone();
    }
    if let Some(ref output) = cli.output {
        config.output = output.clone();
    }
    if let Some(level) = cli.error_level {
        config.render.error_level = level;
    }

    logging::init(&config.logging)?;
    if let Some(ref path) = cli.config {
        tracing::info!("Using configuration file: {}", path.display());
    }

    let report = batch::run(&config)?;

    let rendered = render_report(&report);
    if cli.json {
        println!("{}", serde_json::to_string_pretty(&rendered.json)?);
    } else {
        for line in &rendered.human {
            println!("{line}");
        }
    }

    Ok(report)
}
