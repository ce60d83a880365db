//! Encapsulated PostScript output

use crate::qr::{QUIET_ZONE, QrSymbol};
use std::fmt::Write;

/// Render `symbol` as an EPSF-3.0 document.
///
/// The page is `rendered_size` points square with a white background; every
/// horizontal run of dark modules becomes one `rectfill`. PostScript's origin
/// is bottom-left, so rows are flipped.
pub fn render_eps(symbol: &QrSymbol, scale: u32) -> String {
    let size = symbol.rendered_size(scale);
    let mut out = String::new();

    out.push_str("%!PS-Adobe-3.0 EPSF-3.0\n");
    let _ = writeln!(out, "%%Creator: qrbatch {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(out, "%%BoundingBox: 0 0 {size} {size}");
    let _ = writeln!(out, "%%HiResBoundingBox: 0 0 {size}.0 {size}.0");
    out.push_str("%%LanguageLevel: 2\n");
    out.push_str("%%Pages: 0\n");
    out.push_str("%%EndComments\n");
    out.push_str("gsave\n");
    let _ = writeln!(out, "1 setgray 0 0 {size} {size} rectfill");
    out.push_str("0 setgray\n");

    for (row, column, length) in symbol.dark_runs() {
        let x = (column + QUIET_ZONE) * scale;
        let y = size - (row + QUIET_ZONE + 1) * scale;
        let _ = writeln!(out, "{x} {y} {} {scale} rectfill", length * scale);
    }

    out.push_str("grestore\n");
    out.push_str("showpage\n");
    out.push_str("%%EOF\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::QrEncoder;

    #[test]
    fn test_eps_header_and_bounding_box() {
        let symbol = QrEncoder::new().encode("a.co/1").unwrap();
        let eps = render_eps(&symbol, 14);
        assert!(eps.starts_with("%!PS-Adobe-3.0 EPSF-3.0\n"));
        assert!(eps.contains("%%BoundingBox: 0 0 406 406\n"));
        assert!(eps.trim_end().ends_with("%%EOF"));
    }

    #[test]
    fn test_eps_top_left_finder_row() {
        // Row 0 starts with the 7-module finder pattern at column 0.
        let symbol = QrEncoder::new().encode("a.co/1").unwrap();
        let eps = render_eps(&symbol, 10);
        // x = 4 * 10, y = 290 - (0 + 4 + 1) * 10
        assert!(eps.contains("\n40 240 70 10 rectfill\n"), "{eps}");
    }
}
