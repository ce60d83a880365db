//! SVG output via the `qrcode` renderer

use crate::qr::QrSymbol;
use qrcode::render::svg;

/// Render `symbol` as an SVG document with a 4-module quiet zone.
pub fn render_svg(symbol: &QrSymbol, scale: u32) -> String {
    symbol
        .code()
        .render::<svg::Color<'_>>()
        .quiet_zone(true)
        .module_dimensions(scale, scale)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::QrEncoder;

    #[test]
    fn test_svg_dimensions_follow_scale() {
        let symbol = QrEncoder::new().encode("https://a.co/1111").unwrap();
        let size = symbol.rendered_size(14);
        let svg = render_svg(&symbol, 14);
        assert!(svg.contains("<svg"));
        assert!(svg.contains(&format!(r#"width="{size}""#)), "unexpected svg header: {svg}");
        assert!(svg.contains(&format!(r#"height="{size}""#)));
    }
}
