//! Render configuration files
//!
//! A configuration file is TOML with three optional tables:
//!
//! ```toml
//! [geometry]
//! cell_size = 3
//! margin = 0
//!
//! [metadata]
//! alt = "QR code"
//! title = "Example"
//!
//! [encoder]
//! error_correction = "M"
//! ```
//!
//! Anything left out keeps its default.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::encoder::ErrorCorrection;
use crate::RenderConfig;

/// Errors that can occur when loading or parsing configuration files
#[derive(Error, Debug)]
pub enum OptionsError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// TOML structure for deserializing configuration
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    geometry: Option<TomlGeometry>,
    metadata: Option<TomlMetadata>,
    encoder: Option<TomlEncoder>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlGeometry {
    cell_size: Option<f64>,
    margin: Option<f64>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlMetadata {
    alt: Option<String>,
    title: Option<String>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlEncoder {
    error_correction: Option<ErrorCorrection>,
}

impl RenderConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, OptionsError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, OptionsError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = RenderConfig::default();

        if let Some(geometry) = parsed.geometry {
            if let Some(cell_size) = geometry.cell_size {
                config.svg.cell_size = cell_size;
            }
            config.svg.margin = geometry.margin;
        }
        if let Some(metadata) = parsed.metadata {
            config.svg.alt = metadata.alt;
            config.svg.title = metadata.title;
        }
        if let Some(level) = parsed.encoder.and_then(|e| e.error_correction) {
            config.encoder.error_correction = level;
        }

        Ok(config)
    }
}
