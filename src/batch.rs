//! Sequential batch run over an input URL list

use crate::config::BatchConfig;
use crate::error::{Error, Result};
use crate::input::InputReader;
use crate::output::{BatchReport, Emitter};
use tracing::{error, info};

/// Generate every configured format for every URL in `config.input`.
///
/// A missing input file aborts before the output directory is touched.
/// Per-file failures are recorded in the report and do not stop the run.
pub fn run(config: &BatchConfig) -> Result<BatchReport> {
    config.render.validate()?;

    let reader = match InputReader::open(&config.input) {
        Ok(reader) => reader,
        Err(err @ Error::InputNotFound(_)) => {
            error!("{err}");
            return Err(err);
        }
        Err(err) => return Err(err),
    };

    std::fs::create_dir_all(&config.output).map_err(|e| {
        Error::Config(format!(
            "Failed to create output directory {}: {e}",
            config.output.display()
        ))
    })?;

    info!(
        input = %config.input.display(),
        output = %config.output.display(),
        level = %config.render.error_level,
        size = config.render.target_size,
        "Starting batch"
    );

    let emitter = Emitter::new(config.render.clone(), &config.output);
    let mut report = BatchReport {
        input: config.input.clone(),
        output_dir: config.output.clone(),
        jobs: Vec::new(),
    };

    for url in reader {
        let url = url?;
        report.jobs.push(emitter.emit(&url));
    }

    info!(
        urls = report.jobs.len(),
        files = report.files_written(),
        failures = report.failures(),
        "Batch finished"
    );

    Ok(report)
}
