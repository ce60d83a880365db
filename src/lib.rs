//! qrbatch - batch generator for vector QR codes
//!
//! Reads a text file with one URL per line and writes, for each URL, a QR code
//! in SVG, EPS and AI form at a fixed nominal size of 413x413. File names are
//! derived from the last characters of the URL (`PAGE_413x413.svg`).
//!
//! The `.ai` output is PDF data with an Illustrator extension; there is no
//! native Illustrator encoder.
//!
//! # Example
//!
//! ```no_run
//! use qrbatch::{BatchConfig, batch};
//!
//! fn main() -> anyhow::Result<()> {
//!     let mut config = BatchConfig::default();
//!     config.input = "urls.txt".into();
//!     config.output = "qr_output".into();
//!
//!     let report = batch::run(&config)?;
//!     println!("{} files written", report.files_written());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod batch;
pub mod code;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod qr;
pub mod render;

// Re-exports for convenience
pub use error::{Error, Result};

pub use code::{extract_code, output_file_name};
pub use config::{BatchConfig, LogRotation, LoggingOptions, RenderOptions};
pub use input::InputReader;
pub use output::{BatchReport, Emitter, FormatOutcome, JobReport, OutcomeStatus};
pub use qr::{ErrorLevel, QrEncoder, QrSymbol, compute_scale};
pub use render::{EncoderKind, OutputFormat};
