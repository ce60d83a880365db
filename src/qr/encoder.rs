//! QR code encoder

use crate::error::{Error, Result};
use crate::qr::{ErrorLevel, QrSymbol};
use qrcode::QrCode;

/// QR code encoder
pub struct QrEncoder {
    /// Error correction level
    level: ErrorLevel,
}

impl QrEncoder {
    /// Create a new QR encoder with default settings (Medium ECC)
    pub fn new() -> Self {
        Self {
            level: ErrorLevel::M,
        }
    }

    /// Create a new QR encoder with a specific error correction level
    pub fn with_error_level(level: ErrorLevel) -> Self {
        Self { level }
    }

    /// Encode a URL (or any text) into a QR symbol
    pub fn encode(&self, data: &str) -> Result<QrSymbol> {
        let code = QrCode::with_error_correction_level(data.as_bytes(), self.level.ec_level())
            .map_err(|e| Error::QrEncode(format!("{e} ({} bytes)", data.len())))?;

        tracing::debug!(
            modules = code.width(),
            level = %self.level,
            "Encoded QR symbol"
        );

        Ok(QrSymbol::new(code))
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}
