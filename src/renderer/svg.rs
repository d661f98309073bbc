//! SVG generation from module matrices

use crate::matrix::ModuleMatrix;

use super::{Geometry, SvgOptions};

/// Build the SVG document incrementally
pub struct SvgBuilder {
    geometry: Geometry,
    cell: String,
    path: String,
    subpaths: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(geometry: Geometry) -> Self {
        let cs = geometry.cell_size;
        Self {
            geometry,
            cell: format!("l{cs},0 0,{cs} -{cs},0 0,-{cs}z "),
            path: String::new(),
            subpaths: 0,
        }
    }

    /// Append one filled square with its top-left corner at `(row, col)`
    pub fn add_module(&mut self, row: usize, col: usize) {
        let mr = self.geometry.offset(row);
        let mc = self.geometry.offset(col);
        self.path.push_str(&format!("M{},{}", mc, mr));
        self.path.push_str(&self.cell);
        self.subpaths += 1;
    }

    /// Number of modules added so far
    pub fn module_count(&self) -> usize {
        self.subpaths
    }

    /// Build the final SVG string for a matrix of `side_length` modules
    pub fn build(self, side_length: usize) -> String {
        let size = self.geometry.canvas_size(side_length);
        let mut svg = String::with_capacity(self.path.len() + 256);

        svg.push_str(r#"<svg version="1.1" xmlns="http://www.w3.org/2000/svg""#);
        svg.push_str(&format!(r#" viewBox="0 0 {} {}" "#, size, size));
        svg.push_str(r#" preserveAspectRatio="xMinYMin meet""#);
        svg.push('>');
        svg.push_str(r#"<rect width="100%" height="100%" fill="white" cx="0" cy="0"/>"#);
        svg.push_str(r#"<path d=""#);
        svg.push_str(&self.path);
        svg.push_str(r#"" stroke="transparent" fill="black"/>"#);
        svg.push_str("</svg>");

        svg
    }
}

/// Render a module matrix to SVG with the given options
///
/// Geometry is resolved once up front. Every dark module becomes a
/// `M{x},{y}` move followed by a closed square of relative lines, all inside
/// a single `<path>`.
pub fn render_svg<M: ModuleMatrix + ?Sized>(matrix: &M, options: &SvgOptions) -> String {
    let n = matrix.side_length();
    let mut builder = SvgBuilder::new(options.geometry());

    for r in 0..n {
        for c in 0..n {
            if matrix.is_dark(r, c) {
                builder.add_module(r, c);
            }
        }
    }

    builder.build(n)
}

/// Render a module matrix to SVG with default options
pub fn render_matrix<M: ModuleMatrix + ?Sized>(matrix: &M) -> String {
    render_svg(matrix, &SvgOptions::default())
}
