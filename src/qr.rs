//! QR code rendering for short links.
//!
//! Renders a value either as SVG markup or as a block of Unicode half-block
//! characters that scans straight from a terminal. Raster export is not
//! provided.

use qrcode::QrCode;
use qrcode::render::{svg, unicode};

use crate::error::AppError;

/// Default edge length of the SVG output, in pixels.
pub const DEFAULT_SVG_SIZE: u32 = 256;

/// QR code output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QrFormat {
    #[default]
    Terminal,
    Svg,
}

impl QrFormat {
    /// Guesses the format from an output file name.
    pub fn from_path(path: &std::path::Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("svg") => QrFormat::Svg,
            _ => QrFormat::Terminal,
        }
    }
}

fn encode(value: &str) -> Result<QrCode, AppError> {
    QrCode::new(value.as_bytes()).map_err(|e| AppError::Qr(e.to_string()))
}

/// Renders `value` as an SVG document, black on white, at least `size`×`size`.
pub fn render_svg(value: &str, size: u32) -> Result<String, AppError> {
    let code = encode(value)?;

    Ok(code
        .render()
        .min_dimensions(size, size)
        .dark_color(svg::Color("#000000"))
        .light_color(svg::Color("#ffffff"))
        .build())
}

/// Renders `value` for display in a terminal.
///
/// Colors are inverted so the code reads correctly on dark backgrounds.
pub fn render_terminal(value: &str) -> Result<String, AppError> {
    let code = encode(value)?;

    Ok(code
        .render::<unicode::Dense1x2>()
        .dark_color(unicode::Dense1x2::Light)
        .light_color(unicode::Dense1x2::Dark)
        .build())
}

/// Renders `value` in the requested format.
pub fn render(value: &str, format: QrFormat) -> Result<String, AppError> {
    match format {
        QrFormat::Terminal => render_terminal(value),
        QrFormat::Svg => render_svg(value, DEFAULT_SVG_SIZE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_format_from_path() {
        assert_eq!(QrFormat::from_path(Path::new("code.svg")), QrFormat::Svg);
        assert_eq!(QrFormat::from_path(Path::new("code.SVG")), QrFormat::Svg);
        assert_eq!(QrFormat::from_path(Path::new("code.txt")), QrFormat::Terminal);
        assert_eq!(QrFormat::from_path(Path::new("code")), QrFormat::Terminal);
    }

    #[test]
    fn test_render_svg() {
        let svg = render_svg("https://s.example.com/abcde", DEFAULT_SVG_SIZE).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
        assert!(svg.contains("#ffffff"));
    }

    #[test]
    fn test_render_terminal() {
        let text = render_terminal("https://s.example.com/abcde").unwrap();
        assert!(text.lines().count() > 10);
        assert!(text.chars().any(|c| matches!(c, '█' | '▀' | '▄' | ' ')));
    }

    #[test]
    fn test_render_is_deterministic() {
        let first = render("https://s.example.com/abcde", QrFormat::Svg).unwrap();
        let second = render("https://s.example.com/abcde", QrFormat::Svg).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_rejects_oversized_input() {
        let huge = "a".repeat(8000);
        assert!(matches!(render_terminal(&huge), Err(AppError::Qr(_))));
    }
}
