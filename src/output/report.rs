//! Structured outcome of a batch run

use crate::render::OutputFormat;
use serde::Serialize;
use serde_json::{Value, json};
use std::path::PathBuf;

/// Result of writing one format for one URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum OutcomeStatus {
    /// File written in full
    Written {
        /// Bytes written
        bytes: u64,
    },
    /// Encoding, rendering or writing failed
    Failed {
        /// Human-readable cause
        reason: String,
    },
}

/// One (url, format) pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatOutcome {
    /// Requested format
    pub format: OutputFormat,
    /// Destination path
    pub path: PathBuf,
    /// What happened
    #[serde(flatten)]
    pub status: OutcomeStatus,
}

impl FormatOutcome {
    pub(crate) fn written(format: OutputFormat, path: PathBuf, bytes: u64) -> Self {
        Self {
            format,
            path,
            status: OutcomeStatus::Written { bytes },
        }
    }

    pub(crate) fn failed(format: OutputFormat, path: PathBuf, reason: String) -> Self {
        Self {
            format,
            path,
            status: OutcomeStatus::Failed { reason },
        }
    }

    /// Whether the file was written
    pub fn is_written(&self) -> bool {
        matches!(self.status, OutcomeStatus::Written { .. })
    }
}

/// Everything emitted for one input URL
#[derive(Debug, Clone, Serialize)]
pub struct JobReport {
    /// Trimmed input line
    pub url: String,
    /// Derived file code
    pub code: String,
    /// Symbol side length in modules; `None` when encoding failed
    pub module_count: Option<u32>,
    /// Pixel units per module; `None` when encoding failed
    pub scale: Option<u32>,
    /// Per-format outcomes, in format order
    pub outcomes: Vec<FormatOutcome>,
}

impl JobReport {
    /// True if every format was written
    pub fn is_complete(&self) -> bool {
        self.outcomes.iter().all(FormatOutcome::is_written)
    }
}

/// Outcome of a whole run, jobs in input order
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    /// Input URL list
    pub input: PathBuf,
    /// Output directory
    pub output_dir: PathBuf,
    /// One entry per non-empty input line
    pub jobs: Vec<JobReport>,
}

impl BatchReport {
    /// Number of files written
    pub fn files_written(&self) -> usize {
        self.outcomes().filter(|o| o.is_written()).count()
    }

    /// Number of (url, format) pairs that failed
    pub fn failures(&self) -> usize {
        self.outcomes().filter(|o| !o.is_written()).count()
    }

    /// Whether any pair failed
    pub fn has_failures(&self) -> bool {
        self.failures() > 0
    }

    fn outcomes(&self) -> impl Iterator<Item = &FormatOutcome> {
        self.jobs.iter().flat_map(|job| job.outcomes.iter())
    }
}

/// JSON and terminal renderings of a [`BatchReport`]
#[derive(Debug, Clone)]
pub struct RenderedReport {
    /// Structured JSON representation
    pub json: Value,
    /// Human-readable lines
    pub human: Vec<String>,
}

/// Render a batch report into both JSON and human-readable forms.
pub fn render_report(report: &BatchReport) -> RenderedReport {
    let json = json!({
        "input": report.input,
        "output_dir": report.output_dir,
        "urls": report.jobs.len(),
        "files_written": report.files_written(),
        "failures": report.failures(),
        "jobs": report.jobs,
    });

    let mut human = vec![format!(
        "{} URL(s), {} file(s) written to {}",
        report.jobs.len(),
        report.files_written(),
        report.output_dir.display()
    )];

    for job in report.jobs.iter().filter(|job| !job.is_complete()) {
        for outcome in &job.outcomes {
            if let OutcomeStatus::Failed { reason } = &outcome.status {
                human.push(format!("  FAILED {}: {reason}", outcome.path.display()));
            }
        }
    }

    RenderedReport { json, human }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> BatchReport {
        BatchReport {
            input: PathBuf::from("urls.txt"),
            output_dir: PathBuf::from("out"),
            jobs: vec![JobReport {
                url: "https://a.co/1111".to_string(),
                code: "1111".to_string(),
                module_count: Some(21),
                scale: Some(14),
                outcomes: vec![
                    FormatOutcome::written(
                        OutputFormat::Svg,
                        PathBuf::from("out/1111_413x413.svg"),
                        900,
                    ),
                    FormatOutcome::failed(
                        OutputFormat::Eps,
                        PathBuf::from("out/1111_413x413.eps"),
                        "disk full".to_string(),
                    ),
                ],
            }],
        }
    }

    #[test]
    fn test_counts() {
        let report = sample();
        assert_eq!(report.files_written(), 1);
        assert_eq!(report.failures(), 1);
        assert!(report.has_failures());
        assert!(!BatchReport::default().has_failures());
    }

    #[test]
    fn test_render_json_and_human() {
        let rendered = render_report(&sample());
        assert_eq!(rendered.json["files_written"], 1);
        assert_eq!(rendered.json["jobs"][0]["outcomes"][0]["status"], "written");
        assert_eq!(rendered.json["jobs"][0]["outcomes"][0]["format"], "svg");
        assert_eq!(rendered.json["jobs"][0]["outcomes"][1]["reason"], "disk full");
        assert_eq!(rendered.human.len(), 2);
        assert!(rendered.human[1].contains("disk full"));
    }
}
