// src/grid.rs

//! The square routing grid: `size * size` cells addressed by `(x, y)`.
//!
//! Cells are stored row-major, so cell `(x, y)` lives at `x + y * size`.
//! Coordinates are signed because they come straight from the document;
//! anything outside `[0, size)` is rejected by the accessors.

use crate::cell::{Cell, EMPTY_CELL};
use crate::error::NetError;
use log::trace;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid. `size` must be strictly positive.
    pub fn new(size: usize) -> Result<Self, NetError> {
        if size == 0 {
            return Err(NetError::malformed("grid size must be positive"));
        }
        let too_large = || NetError::malformed(format!("grid size {} is too large", size));
        let count = size.checked_mul(size).ok_or_else(too_large)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(count).map_err(|_| too_large())?;
        cells.resize(count, EMPTY_CELL);
        trace!("Grid::new: {}x{} ({} cells)", size, size, count);
        Ok(Grid { size, cells })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Linear index of `(x, y)`, or `OutOfBounds` without an origin.
    pub fn index_of(&self, x: i64, y: i64) -> Result<usize, NetError> {
        let in_range = |v: i64| v >= 0 && (v as u64) < self.size as u64;
        if !in_range(x) || !in_range(y) {
            return Err(NetError::OutOfBounds {
                origin: None,
                x,
                y,
                size: self.size,
            });
        }
        Ok(x as usize + y as usize * self.size)
    }

    pub fn get(&self, x: i64, y: i64) -> Result<&Cell, NetError> {
        let idx = self.index_of(x, y)?;
        Ok(&self.cells[idx])
    }

    pub fn get_mut(&mut self, x: i64, y: i64) -> Result<&mut Cell, NetError> {
        let idx = self.index_of(x, y)?;
        Ok(&mut self.cells[idx])
    }

    /// Rows in increasing `y`, each a slice of `size` cells in increasing `x`.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// Number of cells carrying at least one marker.
    pub fn marked_cells(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}
