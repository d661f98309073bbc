//! QR encoding, delegated to the `qrcode` crate
//!
//! The rasterizer never sees encoder state beyond the finished module grid;
//! this module only chooses the error correction level, feeds the payload
//! and hands back a finalized [`QrCode`].

use std::fmt;
use std::str::FromStr;

use qrcode::{EcLevel, QrCode};
use serde::Deserialize;

use crate::RenderError;

/// Error correction level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum ErrorCorrection {
    /// Recovers ~7% of codewords
    #[serde(rename = "L")]
    Low,
    /// Recovers ~15% of codewords
    #[serde(rename = "M")]
    Medium,
    /// Recovers ~25% of codewords
    #[serde(rename = "Q")]
    Quartile,
    /// Recovers ~30% of codewords
    #[default]
    #[serde(rename = "H")]
    High,
}

impl ErrorCorrection {
    /// Single-letter name used in configuration
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCorrection::Low => "L",
            ErrorCorrection::Medium => "M",
            ErrorCorrection::Quartile => "Q",
            ErrorCorrection::High => "H",
        }
    }
}

impl From<ErrorCorrection> for EcLevel {
    fn from(level: ErrorCorrection) -> Self {
        match level {
            ErrorCorrection::Low => EcLevel::L,
            ErrorCorrection::Medium => EcLevel::M,
            ErrorCorrection::Quartile => EcLevel::Q,
            ErrorCorrection::High => EcLevel::H,
        }
    }
}

impl fmt::Display for ErrorCorrection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCorrection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "L" | "LOW" => Ok(ErrorCorrection::Low),
            "M" | "MEDIUM" => Ok(ErrorCorrection::Medium),
            "Q" | "QUARTILE" => Ok(ErrorCorrection::Quartile),
            "H" | "HIGH" => Ok(ErrorCorrection::High),
            _ => Err(format!(
                "unknown error correction level '{}' (expected L, M, Q or H)",
                s
            )),
        }
    }
}

/// Configuration for the upstream encoder
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderConfig {
    pub error_correction: ErrorCorrection,
}

impl EncoderConfig {
    /// Create a new configuration with defaults (level H)
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the error correction level
    pub fn with_error_correction(mut self, level: ErrorCorrection) -> Self {
        self.error_correction = level;
        self
    }
}

/// Encode a UTF-8 payload into a finalized QR code
///
/// Version and data mode are picked by the `qrcode` crate. Payloads that do
/// not fit at the configured level surface as [`RenderError::Encode`].
pub fn encode(payload: &str, config: &EncoderConfig) -> Result<QrCode, RenderError> {
    let level = EcLevel::from(config.error_correction);
    let code = QrCode::with_error_correction_level(payload.as_bytes(), level)?;
    log::debug!(
        "encoded {} bytes at level {} into {}x{} modules",
        payload.len(),
        config.error_correction,
        code.width(),
        code.width()
    );
    Ok(code)
}
