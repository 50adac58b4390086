//! Board module - manages the game grid
//!
//! The board is a fixed `width x height` grid where each cell is either empty
//! or holds the kind of the piece that froze there. Dimensions never change
//! after construction.
//!
//! Coordinates: (x, y) where x is the column (0 at the left) and y is the row
//! (0 at the top). Anchors are signed so a candidate position left of or above
//! the well can be expressed and rejected.

use crate::grid::{Grid, Mask};
use crate::types::{Cell, PieceKind};

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Grid::new(width, height, None),
        }
    }

    /// Map signed coordinates into the grid, or None if outside it.
    #[inline(always)]
    fn locate(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        if self.is_out_of_bounds(x, y) {
            return None;
        }
        Some((x as usize, y as usize))
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        let (x, y) = self.locate(x, y)?;
        self.grid.get(x, y).copied()
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.locate(x, y) {
            Some((x, y)) => self.grid.set(x, y, cell),
            None => false,
        }
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i32, y: i32) -> bool {
        x < 0 || y < 0 || x as usize >= self.width() || y as usize >= self.height()
    }

    /// Whether (x, y) is blocked.
    ///
    /// Positions outside the grid count as blocked.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        !matches!(self.get(x, y), Some(None))
    }

    /// Whether `mask` anchored at (x, y) hits a wall, the floor, the ceiling
    /// or a frozen cell.
    ///
    /// This is the only legality test for piece placement. Bounds are checked
    /// before occupancy for every cell; a cell whose coordinate overflows is
    /// out of bounds.
    pub fn collides(&self, x: i32, y: i32, mask: &Mask) -> bool {
        mask.occupied().any(|(dx, dy)| match offset(x, y, dx, dy) {
            Some((px, py)) => self.is_out_of_bounds(px, py) || self.is_occupied(px, py),
            None => true,
        })
    }

    /// Write `kind` into every cell covered by `mask` anchored at (x, y).
    ///
    /// No validation is performed: the caller must have checked
    /// `!collides(x, y, mask)`. Frozen cells underneath are overwritten and
    /// cells falling outside the grid are dropped.
    pub fn freeze(&mut self, x: i32, y: i32, mask: &Mask, kind: PieceKind) {
        for (dx, dy) in mask.occupied() {
            if let Some((px, py)) = offset(x, y, dx, dy) {
                self.set(px, py, Some(kind));
            }
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height() {
            return false;
        }
        self.grid.row(y).iter().all(|cell| cell.is_some())
    }

    /// Remove every full row, shift the rest down, and refill the top with
    /// empty rows. Returns the number of rows removed.
    ///
    /// Surviving rows keep their relative order and the height is unchanged.
    pub fn clear_full_lines(&mut self) -> usize {
        let width = self.width();
        let height = self.height();
        let mut cleared = 0;
        let mut write_y = height;

        // Scan bottom to top, compacting kept rows toward the floor.
        for read_y in (0..height).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.grid
                    .cells_mut()
                    .copy_within(src..src + width, write_y * width);
            }
        }

        self.grid.cells_mut()[..write_y * width].fill(None);
        cleared
    }

    /// One row as a slice, left to right.
    pub fn row(&self, y: usize) -> &[Cell] {
        self.grid.row(y)
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.grid.rows()
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[Cell] {
        self.grid.cells()
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        self.grid.cells().iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.grid.fill(None);
    }

    /// Build a board from rows of cells, for tests and scripted setups.
    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Result<Self, crate::error::ConfigError> {
        Ok(Self {
            grid: Grid::from_rows(rows)?,
        })
    }
}

/// Absolute position of mask cell (dx, dy) anchored at (x, y).
#[inline(always)]
fn offset(x: i32, y: i32, dx: usize, dy: usize) -> Option<(i32, i32)> {
    let px = x.checked_add(i32::try_from(dx).ok()?)?;
    let py = y.checked_add(i32::try_from(dy).ok()?)?;
    Some((px, py))
}
