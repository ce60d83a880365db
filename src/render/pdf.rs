//! PDF output with vector fidelity via svg2pdf

use crate::error::{Error, Result};
use crate::qr::QrSymbol;
use crate::render::render_svg;

/// Render `symbol` as a single-page vector PDF.
///
/// The SVG rendering is parsed with usvg and converted by svg2pdf, so no
/// rasterization takes place.
pub fn render_pdf(symbol: &QrSymbol, scale: u32) -> Result<Vec<u8>> {
    let svg = render_svg(symbol, scale);

    let tree = usvg::Tree::from_str(&svg, &usvg::Options::default()).map_err(|e| {
        Error::Render {
            kind: "pdf",
            reason: format!("Failed to parse SVG content: {e}"),
        }
    })?;

    let size = tree.size();
    if size.width() <= 0.0 || size.height() <= 0.0 {
        return Err(Error::Render {
            kind: "pdf",
            reason: format!("Invalid SVG dimensions: {}x{}", size.width(), size.height()),
        });
    }

    let pdf = svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    );

    tracing::trace!(bytes = pdf.len(), "PDF rendered");
    Ok(pdf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::QrEncoder;

    #[test]
    fn test_pdf_magic() {
        let symbol = QrEncoder::new().encode("https://a.co/1111").unwrap();
        let pdf = render_pdf(&symbol, 14).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
        assert!(pdf.len() > 100);
    }
}
