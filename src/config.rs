//! qrbatch runtime configuration handling

use crate::code::DEFAULT_CODE_LENGTH;
use crate::error::{Error, Result};
use crate::qr::ErrorLevel;
use crate::render::{DEFAULT_FORMATS, OutputFormat};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default input URL list
pub const DEFAULT_INPUT: &str = "URL_List.txt";
/// Default output directory
pub const DEFAULT_OUTPUT: &str = "qr_output";
/// Default rendered size in pixel units, also used in file names
pub const DEFAULT_TARGET_SIZE: u32 = 413;

/// Top-level configuration, loaded from an explicit `--config` file or defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Text file with one URL per line
    pub input: PathBuf,
    /// Directory receiving generated files (created if absent)
    pub output: PathBuf,
    /// Symbol rendering options
    pub render: RenderOptions,
    /// Logging configuration
    pub logging: LoggingOptions,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output: PathBuf::from(DEFAULT_OUTPUT),
            render: RenderOptions::default(),
            logging: LoggingOptions::default(),
        }
    }
}

impl BatchConfig {
    /// Load configuration from an explicit file, or use defaults.
    ///
    /// Only logging settings read environment overrides; input, output and
    /// render options come from the file or the command line.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        let mut config = match explicit_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        config.logging.apply_env_overrides();
        Ok(config)
    }

    /// Read configuration from a concrete file path.
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read {}: {e}", path.display())))?;

        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_ascii_lowercase()
            .as_str()
        {
            "toml" => toml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse TOML {}: {e}", path.display()))
            }),
            "yaml" | "yml" => serde_yaml::from_str(&contents).map_err(|e| {
                Error::Config(format!("Failed to parse YAML {}: {e}", path.display()))
            }),
            other => Err(Error::Config(format!(
                "Unsupported config format '{}', expected toml/yaml",
                other
            ))),
        }
    }
}

/// Options shared by every QR job in a run
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Target side length in pixel units (actual size is `scale * total_modules`)
    pub target_size: u32,
    /// QR error-correction level
    pub error_level: ErrorLevel,
    /// Formats written per URL, in order
    pub formats: Vec<OutputFormat>,
    /// Number of trailing URL characters used in file names
    pub code_length: usize,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            target_size: DEFAULT_TARGET_SIZE,
            error_level: ErrorLevel::default(),
            formats: DEFAULT_FORMATS.to_vec(),
            code_length: DEFAULT_CODE_LENGTH,
        }
    }
}

impl RenderOptions {
    /// Reject option combinations that cannot produce any output.
    pub fn validate(&self) -> Result<()> {
        if self.target_size == 0 {
            return Err(Error::Config("target_size must be greater than 0".to_string()));
        }
        if self.code_length == 0 {
            return Err(Error::Config("code_length must be greater than 0".to_string()));
        }
        if self.formats.is_empty() {
            return Err(Error::Config("at least one output format is required".to_string()));
        }
        Ok(())
    }
}

/// Structured logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingOptions {
    /// Default log level (overridable via `QRBATCH_LOG_LEVEL`)
    pub level: String,
    /// Optional log file path for teeing structured logs
    pub file: Option<PathBuf>,
    /// Force ANSI colors in console logging
    pub color: bool,
    /// Optional log rotation strategy applied to `file`
    pub rotation: Option<LogRotation>,
}

impl Default for LoggingOptions {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            color: true,
            rotation: None,
        }
    }
}

impl LoggingOptions {
    pub(crate) fn apply_env_overrides(&mut self) {
        if let Ok(level) = env::var("QRBATCH_LOG_LEVEL") {
            self.level = level;
        }
        if let Ok(file) = env::var("QRBATCH_LOG_FILE") {
            self.file = Some(PathBuf::from(file));
        }
        if let Ok(color) = env::var("QRBATCH_LOG_COLOR") {
            match color.to_ascii_lowercase().as_str() {
                "0" | "false" | "off" => self.color = false,
                "1" | "true" | "on" => self.color = true,
                _ => {}
            }
        }
        if let Ok(rotation) = env::var("QRBATCH_LOG_ROTATION") {
            if let Some(parsed) = LogRotation::parse(&rotation) {
                self.rotation = Some(parsed);
            }
        }
    }
}

/// Supported log rotation policies for file sinks
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    /// Rotate log files once per hour
    Hourly,
    /// Rotate log files once per day
    Daily,
}

impl LogRotation {
    fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "hourly" => Some(Self::Hourly),
            "daily" => Some(Self::Daily),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = BatchConfig::default();
        assert_eq!(config.input, PathBuf::from("URL_List.txt"));
        assert_eq!(config.render.target_size, 413);
        assert_eq!(config.render.error_level, ErrorLevel::M);
        assert_eq!(
            config.render.formats,
            [OutputFormat::Svg, OutputFormat::Eps, OutputFormat::Ai]
        );
        assert_eq!(config.render.code_length, 4);
        assert!(config.render.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        write!(
            file,
            "output = \"out\"\n[render]\nerror_level = \"h\"\nformats = [\"svg\", \"pdf\"]\n"
        )
        .unwrap();

        let config = BatchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.output, PathBuf::from("out"));
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.render.error_level, ErrorLevel::H);
        assert_eq!(config.render.formats, [OutputFormat::Svg, OutputFormat::Pdf]);
        assert_eq!(config.render.target_size, 413);
    }

    #[test]
    fn test_from_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        write!(
            file,
            "input: urls.txt\nrender:\n  target_size: 300\nlogging:\n  rotation: daily\n"
        )
        .unwrap();

        let config = BatchConfig::from_file(file.path()).unwrap();
        assert_eq!(config.input, PathBuf::from("urls.txt"));
        assert_eq!(config.render.target_size, 300);
        assert_eq!(config.logging.rotation, Some(LogRotation::Daily));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = tempfile::Builder::new().suffix(".ini").tempfile().unwrap();
        assert!(matches!(
            BatchConfig::from_file(file.path()),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_validate_rejects_empty_formats() {
        let options = RenderOptions {
            formats: Vec::new(),
            ..RenderOptions::default()
        };
        assert!(options.validate().is_err());

        let options = RenderOptions {
            target_size: 0,
            ..RenderOptions::default()
        };
        assert!(options.validate().is_err());
    }

    #[test]
    fn test_load_without_file_uses_defaults() {
        let config = BatchConfig::load(None).unwrap();
        assert_eq!(config.input, PathBuf::from(DEFAULT_INPUT));
        assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT));
        assert_eq!(config.render.target_size, DEFAULT_TARGET_SIZE);
        assert_eq!(config.render.formats, DEFAULT_FORMATS);
    }
}
