//! qr-svg - Render QR module matrices as compact SVG documents
//!
//! Encoding is delegated to the [`qrcode`] crate. This library turns the
//! finished module grid into an SVG with a white background and a single
//! black `<path>` containing one square subpath per dark module.
//!
//! # Example
//!
//! ```rust
//! use qr_svg::qr_to_svg;
//!
//! let svg = qr_to_svg("https://example.com").unwrap();
//! assert!(svg.starts_with("<svg"));
//! ```

pub mod encoder;
pub mod error;
pub mod matrix;
pub mod options;
pub mod renderer;

pub use encoder::{encode, EncoderConfig, ErrorCorrection};
pub use error::MatrixError;
pub use matrix::{BitMatrix, ModuleMatrix};
pub use options::OptionsError;
pub use renderer::{render_matrix, render_svg, Geometry, SvgOptions};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use qrcode::types::QrError;
use thiserror::Error;

/// Errors that can occur during the render pipeline
#[derive(Debug, Error)]
pub enum RenderError {
    /// The payload could not be encoded at the requested level
    #[error("encode error: {0}")]
    Encode(QrError),

    /// A text module matrix could not be read
    #[error("matrix error: {0}")]
    Matrix(#[from] MatrixError),

    /// A configuration file could not be loaded
    #[error("config error: {0}")]
    Options(#[from] OptionsError),
}

impl From<QrError> for RenderError {
    fn from(error: QrError) -> Self {
        RenderError::Encode(error)
    }
}

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Encoder configuration
    pub encoder: EncoderConfig,
    /// SVG output configuration
    pub svg: SvgOptions,
    /// Debug mode: log matrix statistics
    pub debug: bool,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the encoder configuration
    pub fn with_encoder(mut self, config: EncoderConfig) -> Self {
        self.encoder = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgOptions) -> Self {
        self.svg = config;
        self
    }

    /// Enable or disable debug mode
    pub fn with_debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }
}

/// Encode a payload and render it to SVG with default configuration
///
/// The payload is encoded at error correction level H and drawn with a
/// cell size of 2 and a margin of 8.
///
/// # Example
///
/// ```rust
/// use qr_svg::qr_to_svg;
///
/// let svg = qr_to_svg("hello").unwrap();
/// // 21 modules + 8 margin, doubled
/// assert!(svg.contains(r#"viewBox="0 0 58 58""#));
/// ```
pub fn qr_to_svg(payload: &str) -> Result<String, RenderError> {
    render_with_config(payload, &RenderConfig::default())
}

/// Encode a payload and render it to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use qr_svg::{render_with_config, EncoderConfig, ErrorCorrection, RenderConfig, SvgOptions};
///
/// let config = RenderConfig::new()
///     .with_encoder(EncoderConfig::new().with_error_correction(ErrorCorrection::Low))
///     .with_svg(SvgOptions::new().with_margin(0.0));
///
/// let svg = render_with_config("hello", &config).unwrap();
/// assert!(svg.contains(r#"viewBox="0 0 42 42""#));
/// ```
pub fn render_with_config(payload: &str, config: &RenderConfig) -> Result<String, RenderError> {
    let code = encode(payload, &config.encoder)?;

    if config.debug {
        log::debug!(
            "matrix {}x{} with {} dark modules, geometry {:?}",
            code.side_length(),
            code.side_length(),
            code.dark_count(),
            config.svg.geometry()
        );
    }

    Ok(render_svg(&code, &config.svg))
}

/// Parse a plain-text module matrix and render it to SVG
///
/// See [`BitMatrix::parse`] for the accepted characters.
pub fn render_matrix_text(source: &str, options: &SvgOptions) -> Result<String, RenderError> {
    let matrix = BitMatrix::parse(source)?;
    Ok(render_svg(&matrix, options))
}

/// Wrap an SVG document as a base64 `data:` URL for inline embedding
pub fn to_data_url(svg: &str) -> String {
    format!("data:image/svg+xml;base64,{}", STANDARD.encode(svg.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_to_svg_structure() {
        let svg = qr_to_svg("hello").unwrap();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert_eq!(svg.matches("<rect").count(), 1);
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn test_move_count_matches_encoded_modules() {
        let code = encode("hello", &EncoderConfig::default()).unwrap();
        let svg = qr_to_svg("hello").unwrap();
        assert_eq!(svg.matches("l2,0 0,2 -2,0 0,-2z").count(), code.dark_count());
    }

    #[test]
    fn test_render_with_config_uses_level() {
        let payload = "x".repeat(20);
        let high = qr_to_svg(&payload).unwrap();
        let low = render_with_config(
            &payload,
            &RenderConfig::new()
                .with_encoder(EncoderConfig::new().with_error_correction(ErrorCorrection::Low)),
        )
        .unwrap();
        // version 3 vs version 2
        assert!(high.contains(r#"viewBox="0 0 74 74""#));
        assert!(low.contains(r#"viewBox="0 0 66 66""#));
    }

    #[test]
    fn test_debug_does_not_change_output() {
        let plain = qr_to_svg("hello").unwrap();
        let debug = render_with_config("hello", &RenderConfig::new().with_debug(true)).unwrap();
        assert_eq!(plain, debug);
    }

    #[test]
    fn test_encode_error() {
        let result = qr_to_svg(&"x".repeat(4000));
        let err = result.unwrap_err();
        assert!(matches!(err, RenderError::Encode(_)));
        assert!(err.to_string().starts_with("encode error"));
    }

    #[test]
    fn test_render_matrix_text() {
        let svg = render_matrix_text("10\n01\n", &SvgOptions::new().with_margin(0.0)).unwrap();
        assert!(svg.contains(r#"<path d="M0,0l2,0 0,2 -2,0 0,-2z M2,2l2,0 0,2 -2,0 0,-2z ""#));
    }

    #[test]
    fn test_render_matrix_text_error() {
        let err = render_matrix_text("10\n0?\n", &SvgOptions::default()).unwrap_err();
        assert!(matches!(
            err,
            RenderError::Matrix(MatrixError::InvalidModule { found: '?', .. })
        ));
    }

    #[test]
    fn test_options_error_converts() {
        fn load() -> Result<RenderConfig, RenderError> {
            Ok(RenderConfig::from_str("[geometry]\ncell_size = \"big\"\n")?)
        }
        assert!(matches!(load(), Err(RenderError::Options(_))));
    }

    #[test]
    fn test_to_data_url() {
        let url = to_data_url("<svg/>");
        assert_eq!(url, "data:image/svg+xml;base64,PHN2Zy8+");
    }
}
