//! SVG renderer for module matrices
//!
//! This module takes anything implementing [`ModuleMatrix`](crate::ModuleMatrix)
//! and produces a self-contained SVG string: a white background and a single
//! black path with one square subpath per dark module.

pub mod config;
pub mod svg;

pub use config::{Geometry, SvgOptions};
pub use svg::{render_matrix, render_svg};
