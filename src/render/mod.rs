//! Vector serializers for QR symbols
//!
//! Every logical [`OutputFormat`] resolves to an [`EncoderKind`]. The `ai` format
//! has no encoder of its own: it is written by the PDF encoder and only keeps the
//! `.ai` extension. Illustrator opens PDF-compatible files, but the bytes are a
//! plain PDF, not native Illustrator data.

mod eps;
mod pdf;
mod svg;

pub use eps::render_eps;
pub use pdf::render_pdf;
pub use svg::render_svg;

use crate::error::Result;
use crate::qr::QrSymbol;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Formats written by default, in emission order.
pub const DEFAULT_FORMATS: [OutputFormat; 3] =
    [OutputFormat::Svg, OutputFormat::Eps, OutputFormat::Ai];

/// A requested output file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Scalable Vector Graphics
    Svg,
    /// Encapsulated PostScript
    Eps,
    /// PDF bytes saved with an `.ai` extension
    Ai,
    /// Portable Document Format
    Pdf,
}

/// The serializer that actually produces the bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncoderKind {
    /// SVG writer from the `qrcode` crate
    Svg,
    /// PostScript writer
    Eps,
    /// `svg2pdf` converter
    Pdf,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "svg" => Some(Self::Svg),
            "eps" => Some(Self::Eps),
            "ai" => Some(Self::Ai),
            "pdf" => Some(Self::Pdf),
            _ => None,
        }
    }

    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Eps => "eps",
            Self::Ai => "ai",
            Self::Pdf => "pdf",
        }
    }

    /// Underlying encoder for this format.
    pub fn kind(self) -> EncoderKind {
        match self {
            Self::Svg => EncoderKind::Svg,
            Self::Eps => EncoderKind::Eps,
            Self::Ai | Self::Pdf => EncoderKind::Pdf,
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            format!("Unsupported output format '{value}', expected svg, eps, ai or pdf")
        })
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

impl EncoderKind {
    /// Serialize `symbol` at `scale` pixel units per module, quiet zone included.
    pub fn render(self, symbol: &QrSymbol, scale: u32) -> Result<Vec<u8>> {
        match self {
            Self::Svg => Ok(render_svg(symbol, scale).into_bytes()),
            Self::Eps => Ok(render_eps(symbol, scale).into_bytes()),
            Self::Pdf => render_pdf(symbol, scale),
        }
    }
}
