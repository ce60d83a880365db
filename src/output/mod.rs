//! Per-URL emission of QR files and the reports describing them

pub mod report;

pub use report::{
    BatchReport, FormatOutcome, JobReport, OutcomeStatus, RenderedReport, render_report,
};

use crate::code::{extract_code, output_file_name};
use crate::config::RenderOptions;
use crate::error::Result;
use crate::qr::{QUIET_ZONE, QrEncoder};
use crate::render::OutputFormat;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// Writes every configured format for one URL at a time into `output_dir`.
pub struct Emitter {
    encoder: QrEncoder,
    options: RenderOptions,
    output_dir: PathBuf,
}

impl Emitter {
    /// Create an emitter for a run. The output directory must already exist.
    pub fn new(options: RenderOptions, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            encoder: QrEncoder::with_error_level(options.error_level),
            options,
            output_dir: output_dir.into(),
        }
    }

    /// Path a given code/format pair is written to.
    pub fn output_path(&self, code: &str, format: OutputFormat) -> PathBuf {
        self.output_dir
            .join(output_file_name(code, self.options.target_size, format))
    }

    /// Encode `url` and write one file per format.
    ///
    /// Never fails as a whole: each format is attempted independently and its
    /// outcome recorded. If encoding fails, every format is marked failed.
    pub fn emit(&self, url: &str) -> JobReport {
        let code = extract_code(url, self.options.code_length);
        if code.is_empty() {
            warn!(url, "URL yields an empty file code");
        }

        let symbol = match self.encoder.encode(url) {
            Ok(symbol) => symbol,
            Err(err) => {
                let reason = err.to_string();
                let outcomes = self
                    .options
                    .formats
                    .iter()
                    .map(|&format| {
                        let path = self.output_path(&code, format);
                        error!("Failed to generate {}: {reason}", path.display());
                        FormatOutcome::failed(format, path, reason.clone())
                    })
                    .collect();
                return JobReport {
                    url: url.to_string(),
                    code,
                    module_count: None,
                    scale: None,
                    outcomes,
                };
            }
        };

        let scale = symbol.scale_for(self.options.target_size);
        tracing::debug!(
            url,
            code = %code,
            modules = symbol.module_count(),
            border = QUIET_ZONE,
            scale,
            "Resolved symbol scale"
        );

        let mut outcomes = Vec::with_capacity(self.options.formats.len());
        for &format in &self.options.formats {
            let path = self.output_path(&code, format);
            let written = format
                .kind()
                .render(&symbol, scale)
                .and_then(|bytes| write_atomic(&path, &bytes).map(|()| bytes.len() as u64));

            match written {
                Ok(bytes) => {
                    info!("Generated {}", path.display());
                    outcomes.push(FormatOutcome::written(format, path, bytes));
                }
                Err(err) => {
                    error!("Failed to generate {}: {err}", path.display());
                    outcomes.push(FormatOutcome::failed(format, path, err.to_string()));
                }
            }
        }

        JobReport {
            url: url.to_string(),
            code,
            module_count: Some(symbol.module_count()),
            scale: Some(scale),
            outcomes,
        }
    }
}

/// Write `bytes` to a temporary file next to `path`, then rename it into place.
///
/// A failed write leaves `path` untouched and removes the temporary file.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut tmp = tempfile::Builder::new()
        .prefix(".qrbatch-")
        .suffix(".part")
        .tempfile_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path)?;
    Ok(())
}
