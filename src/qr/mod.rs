//! QR code encoding
//!
//! Wraps the `qrcode` crate: URLs go in, a square module matrix comes out,
//! together with the scale computation used by every vector serializer.

mod encoder;

pub use encoder::QrEncoder;

use qrcode::{Color, EcLevel, QrCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quiet-zone width in modules on each side of the symbol.
pub const QUIET_ZONE: u32 = 4;

/// QR error-correction level
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorLevel {
    /// ~7% recovery
    L,
    /// ~15% recovery
    #[default]
    M,
    /// ~25% recovery
    Q,
    /// ~30% recovery
    H,
}

impl ErrorLevel {
    /// Parse a single-letter level (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "l" => Some(Self::L),
            "m" => Some(Self::M),
            "q" => Some(Self::Q),
            "h" => Some(Self::H),
            _ => None,
        }
    }

    pub(crate) fn ec_level(self) -> EcLevel {
        match self {
            Self::L => EcLevel::L,
            Self::M => EcLevel::M,
            Self::Q => EcLevel::Q,
            Self::H => EcLevel::H,
        }
    }
}

impl FromStr for ErrorLevel {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            format!("Unsupported error level '{value}', expected one of l, m, q, h")
        })
    }
}

impl fmt::Display for ErrorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::L => "l",
            Self::M => "m",
            Self::Q => "q",
            Self::H => "h",
        };
        f.write_str(label)
    }
}

/// Integer pixels-per-module needed to fit `module_count` plus the border into
/// `target_size`. Never below 1, so oversized symbols exceed the target instead.
pub fn compute_scale(target_size: u32, module_count: u32, border: u32) -> u32 {
    let total_modules = module_count + 2 * border;
    if total_modules == 0 {
        return target_size.max(1);
    }
    (target_size / total_modules).max(1)
}

/// An encoded QR symbol
pub struct QrSymbol {
    code: QrCode,
}

impl QrSymbol {
    pub(crate) fn new(code: QrCode) -> Self {
        Self { code }
    }

    /// Side length of the symbol in modules, excluding the quiet zone.
    pub fn module_count(&self) -> u32 {
        self.code.width() as u32
    }

    /// Whether the module at (`x`, `y`) is dark.
    pub fn is_dark(&self, x: u32, y: u32) -> bool {
        self.code[(x as usize, y as usize)] == Color::Dark
    }

    /// Scale for this symbol at the given target size with the standard quiet zone.
    pub fn scale_for(&self, target_size: u32) -> u32 {
        compute_scale(target_size, self.module_count(), QUIET_ZONE)
    }

    /// Rendered side length in pixel units for `scale`, quiet zone included.
    pub fn rendered_size(&self, scale: u32) -> u32 {
        (self.module_count() + 2 * QUIET_ZONE) * scale
    }

    /// Horizontal runs of dark modules as `(row, start_column, length)`.
    pub fn dark_runs(&self) -> Vec<(u32, u32, u32)> {
        let width = self.module_count();
        let mut runs = Vec::new();
        for y in 0..width {
            let mut x = 0;
            while x < width {
                if !self.is_dark(x, y) {
                    x += 1;
                    continue;
                }
                let start = x;
                while x < width && self.is_dark(x, y) {
                    x += 1;
                }
                runs.push((y, start, x - start));
            }
        }
        runs
    }

    pub(crate) fn code(&self) -> &QrCode {
        &self.code
    }
}

impl fmt::Debug for QrSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QrSymbol")
            .field("module_count", &self.module_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_version_one() {
        // 21 modules + 2 * 4 border = 29; 413 / 29 = 14
        assert_eq!(compute_scale(413, 21, QUIET_ZONE), 14);
    }

    #[test]
    fn test_scale_clamps_to_one() {
        assert_eq!(compute_scale(413, 409, QUIET_ZONE), 1);
        assert_eq!(compute_scale(100, 177, QUIET_ZONE), 1);
        assert_eq!(compute_scale(0, 21, QUIET_ZONE), 1);
    }

    #[test]
    fn test_scale_floors() {
        // 25 + 8 = 33; 413 / 33 = 12.5
        assert_eq!(compute_scale(413, 25, QUIET_ZONE), 12);
    }

    #[test]
    fn test_error_level_parse() {
        assert_eq!("l".parse::<ErrorLevel>(), Ok(ErrorLevel::L));
        assert_eq!("H".parse::<ErrorLevel>(), Ok(ErrorLevel::H));
        assert_eq!(ErrorLevel::parse(" q "), Some(ErrorLevel::Q));
        assert!("x".parse::<ErrorLevel>().is_err());
        assert!("mm".parse::<ErrorLevel>().is_err());
        assert_eq!(ErrorLevel::default(), ErrorLevel::M);
        assert_eq!(ErrorLevel::H.to_string(), "h");
    }
}
