//! Module matrices consumed by the rasterizer
//!
//! The rasterizer only needs two things from an encoded QR code: its side
//! length and whether a given module is dark. [`ModuleMatrix`] is that
//! interface. [`BitMatrix`] is an owned implementation that can also be read
//! from a plain-text grid.

use qrcode::{Color, QrCode};

use crate::error::MatrixError;

/// Read-only view of a square grid of QR modules
pub trait ModuleMatrix {
    /// Number of modules along one edge
    fn side_length(&self) -> usize;

    /// Whether the module at `(row, col)` is dark.
    ///
    /// Cells outside the stored grid must read as light.
    fn is_dark(&self, row: usize, col: usize) -> bool;

    /// Count dark modules within `side_length × side_length`
    fn dark_count(&self) -> usize {
        let n = self.side_length();
        (0..n)
            .flat_map(|r| (0..n).map(move |c| (r, c)))
            .filter(|&(r, c)| self.is_dark(r, c))
            .count()
    }
}

impl<M: ModuleMatrix + ?Sized> ModuleMatrix for &M {
    fn side_length(&self) -> usize {
        (**self).side_length()
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        (**self).is_dark(row, col)
    }
}

impl ModuleMatrix for [Vec<bool>] {
    fn side_length(&self) -> usize {
        self.len()
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        self.get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }
}

impl ModuleMatrix for Vec<Vec<bool>> {
    fn side_length(&self) -> usize {
        self.as_slice().side_length()
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        self.as_slice().is_dark(row, col)
    }
}

impl<const N: usize> ModuleMatrix for [[bool; N]; N] {
    fn side_length(&self) -> usize {
        N
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        self.get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .unwrap_or(false)
    }
}

impl ModuleMatrix for QrCode {
    fn side_length(&self) -> usize {
        self.width()
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        let n = self.width();
        // qrcode indexes by (x, y), i.e. (column, row)
        row < n && col < n && self[(col, row)] == Color::Dark
    }
}

/// Owned square module grid, stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    side: usize,
    cells: Vec<bool>,
}

impl BitMatrix {
    /// Create an all-light matrix
    pub fn new(side: usize) -> Self {
        Self {
            side,
            cells: vec![false; side * side],
        }
    }

    /// Build from rows. The side length is the number of rows; short rows
    /// are padded with light modules and long rows are truncated.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Self {
        let side = rows.len();
        let mut matrix = Self::new(side);
        for (r, row) in rows.iter().enumerate() {
            for (c, &dark) in row.as_ref().iter().take(side).enumerate() {
                matrix.cells[r * side + c] = dark;
            }
        }
        matrix
    }

    /// Copy the modules of a finalized QR code
    pub fn from_qr(code: &QrCode) -> Self {
        let side = code.width();
        let cells = code
            .to_colors()
            .into_iter()
            .map(|color| color == Color::Dark)
            .collect();
        Self { side, cells }
    }

    /// Parse a plain-text grid, one row per line.
    ///
    /// Dark modules are `1`, `#` or `X`; light modules are `0`, `.` or `-`.
    /// Blank lines are skipped and trailing whitespace is ignored.
    pub fn parse(source: &str) -> Result<Self, MatrixError> {
        let mut rows: Vec<(usize, Vec<bool>)> = Vec::new();
        let mut offset = 0;

        for line in source.split_inclusive('\n') {
            let start = offset;
            offset += line.len();

            let content = line.trim_end();
            if content.is_empty() {
                continue;
            }

            let mut row = Vec::with_capacity(content.len());
            for (i, ch) in content.char_indices() {
                match ch {
                    '1' | '#' | 'X' => row.push(true),
                    '0' | '.' | '-' => row.push(false),
                    other => {
                        return Err(MatrixError::InvalidModule {
                            span: start + i..start + i + other.len_utf8(),
                            found: other,
                        });
                    }
                }
            }
            rows.push((start, row));
        }

        if rows.is_empty() {
            return Err(MatrixError::Empty);
        }

        let side = rows.len();
        for (line_start, row) in &rows {
            if row.len() != side {
                return Err(MatrixError::NotSquare {
                    span: *line_start..*line_start + row.len(),
                    expected: side,
                    found: row.len(),
                });
            }
        }

        let cells = rows.into_iter().flat_map(|(_, row)| row).collect();
        Ok(Self { side, cells })
    }

    /// Module at `(row, col)`, or `None` when out of range
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.side && col < self.side {
            Some(self.cells[row * self.side + col])
        } else {
            None
        }
    }

    /// Set a module. Out-of-range coordinates are ignored.
    pub fn set(&mut self, row: usize, col: usize, dark: bool) {
        if row < self.side && col < self.side {
            self.cells[row * self.side + col] = dark;
        }
    }
}

impl ModuleMatrix for BitMatrix {
    fn side_length(&self) -> usize {
        self.side
    }

    fn is_dark(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }
}

impl From<&QrCode> for BitMatrix {
    fn from(code: &QrCode) -> Self {
        Self::from_qr(code)
    }
}
