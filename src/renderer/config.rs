//! Geometric parameters for SVG output

/// Default edge length of one module
pub const DEFAULT_CELL_SIZE: f64 = 2.0;

/// Default margin, in multiples of the cell size
pub const DEFAULT_MARGIN_CELLS: f64 = 4.0;

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq)]
pub struct SvgOptions {
    /// Edge length of one rendered module
    pub cell_size: f64,

    /// Blank border around the matrix; `None` means four cells
    pub margin: Option<f64>,

    /// Alternative text. Accepted for callers but not rendered.
    pub alt: Option<String>,

    /// Document title. Accepted for callers but not rendered.
    pub title: Option<String>,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            margin: None,
            alt: None,
            title: None,
        }
    }
}

impl SvgOptions {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the module edge length
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Set an explicit margin
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = Some(margin);
        self
    }

    /// Go back to the cell-size derived margin
    pub fn without_margin(mut self) -> Self {
        self.margin = None;
        self
    }

    /// Set the alternative text
    pub fn with_alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Resolve optional fields into concrete geometry.
    ///
    /// A cell size that is zero, negative or NaN falls back to the default.
    pub fn geometry(&self) -> Geometry {
        let cell_size = if self.cell_size > 0.0 {
            self.cell_size
        } else {
            DEFAULT_CELL_SIZE
        };
        let margin = self.margin.unwrap_or(cell_size * DEFAULT_MARGIN_CELLS);
        Geometry { cell_size, margin }
    }
}

/// Resolved geometry used by the rasterizer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub cell_size: f64,
    pub margin: f64,
}

impl Geometry {
    /// Side of the square canvas for a matrix of `side_length` modules.
    ///
    /// This is `(side_length + margin) * 2` regardless of the cell size, so
    /// cell sizes other than 2 under- or overflow the canvas.
    pub fn canvas_size(&self, side_length: usize) -> f64 {
        (side_length as f64 + self.margin) * 2.0
    }

    /// Offset of a row or column index on the canvas
    pub fn offset(&self, index: usize) -> f64 {
        index as f64 * self.cell_size + self.margin
    }
}
