//! Glyph: a small binary grid drawn in ASCII art.
//!
//! Glyphs are how the letter demo talks to the network. A glyph is
//! flattened row-major into an input vector, and a learned prototype is
//! reshaped back into a glyph for display. `#` marks a set cell; every
//! other character is a clear cell.

use std::fmt;
use std::ops::Index;

use crate::error::{ArtError, Result};

/// A `rows × cols` grid of binary cells, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Glyph {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Glyph {
    /// Create an all-clear glyph.
    pub fn blank(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    /// Parse ASCII art, one string per row.
    ///
    /// The width is taken from the first row. Characters beyond it are
    /// ignored and short rows are padded with clear cells.
    pub fn from_ascii(lines: &[&str]) -> Result<Self> {
        let first = lines
            .first()
            .ok_or_else(|| ArtError::Glyph("no rows".into()))?;
        let cols = first.chars().count();
        if cols == 0 {
            return Err(ArtError::Glyph("first row is empty".into()));
        }

        let mut glyph = Self::blank(lines.len(), cols);
        for (r, line) in lines.iter().enumerate() {
            for (c, ch) in line.chars().take(cols).enumerate() {
                glyph.cells[r * cols + c] = ch == '#';
            }
        }
        Ok(glyph)
    }

    /// Rebuild a glyph from a flat vector; any entry above zero is set.
    ///
    /// Learned prototypes carry real-valued weights, so this is the
    /// inverse of [`to_input`](Self::to_input) only up to thresholding.
    pub fn from_prototype(rows: usize, cols: usize, values: &[f64]) -> Result<Self> {
        if values.len() != rows * cols {
            return Err(ArtError::Glyph(format!(
                "cannot reshape {} values into {}x{}",
                values.len(),
                rows,
                cols
            )));
        }
        Ok(Self {
            rows,
            cols,
            cells: values.iter().map(|&v| v > 0.0).collect(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Flatten row-major into a 0/1 input vector.
    pub fn to_input(&self) -> Vec<f64> {
        self.cells
            .iter()
            .map(|&c| if c { 1.0 } else { 0.0 })
            .collect()
    }
}

impl Index<(usize, usize)> for Glyph {
    type Output = bool;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        assert!(col < self.cols, "column {} out of range", col);
        &self.cells[row * self.cols + col]
    }
}

impl fmt::Display for Glyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.cols == 0 {
            return Ok(());
        }
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(|&c| if c { '#' } else { ' ' }).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
