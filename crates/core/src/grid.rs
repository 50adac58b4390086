//! Grid module - generic rectangular storage
//!
//! A `Grid<T>` is a fixed `width x height` block of values in row-major order.
//! The board's cells and every piece mask are grids, so bounds handling and
//! rotation live in one place.
//!
//! Coordinates: (x, y) where x is the column (left to right) and y is the row
//! (top to bottom).

use crate::error::ConfigError;

/// Fixed-size rectangular grid with row-major storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    width: usize,
    height: usize,
    cells: Vec<T>,
}

/// Occupancy mask of a piece within its bounding box.
pub type Mask = Grid<bool>;

impl<T: Clone> Grid<T> {
    /// Create a grid with every cell set to `fill`.
    ///
    /// Callers are expected to pass non-zero dimensions; a zero-sized grid is
    /// representable but has no addressable cells.
    pub fn new(width: usize, height: usize, fill: T) -> Self {
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Build a grid from nested rows.
    ///
    /// Rejects empty input and rows of differing length.
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, ConfigError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyGrid);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != width {
                return Err(ConfigError::RaggedGrid {
                    row,
                    len: values.len(),
                    expected: width,
                });
            }
            cells.extend(values);
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Return this grid rotated 90° clockwise.
    ///
    /// A `W x H` grid becomes `H x W`; the value at `(x, y)` moves to
    /// `(H - 1 - y, x)`. `self` is left untouched.
    pub fn rotate_cw(&self) -> Self {
        let out_width = self.height;
        let out_height = self.width;
        let mut cells = Vec::with_capacity(self.cells.len());

        for out_y in 0..out_height {
            for out_x in 0..out_width {
                // Inverse of (x, y) -> (H - 1 - y, x).
                let x = out_y;
                let y = self.height - 1 - out_x;
                cells.push(self.cells[y * self.width + x].clone());
            }
        }

        Self {
            width: out_width,
            height: out_height,
            cells,
        }
    }

    /// Set cell at (x, y). Returns false if out of bounds.
    pub fn set(&mut self, x: usize, y: usize, value: T) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = value;
                true
            }
            None => false,
        }
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: T) {
        self.cells.fill(value);
    }
}

impl<T> Grid<T> {
    #[inline(always)]
    fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y * self.width + x)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (x, y), or None if out of bounds.
    pub fn get(&self, x: usize, y: usize) -> Option<&T> {
        self.index(x, y).map(|idx| &self.cells[idx])
    }

    /// One row as a slice. Panics if `y` is out of bounds.
    pub fn row(&self, y: usize) -> &[T] {
        let start = y * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width.max(1))
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[T] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [T] {
        &mut self.cells
    }
}

impl Grid<bool> {
    /// Iterate `(x, y)` of every set cell, row by row.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, set)| **set)
            .map(move |(idx, _)| (idx % self.width, idx / self.width))
    }

    /// Number of set cells.
    pub fn count(&self) -> usize {
        self.cells.iter().filter(|&&set| set).count()
    }

    /// Build a mask from rows of 0/1 values.
    pub fn from_bits(rows: &[&[u8]]) -> Result<Self, ConfigError> {
        Self::from_rows(
            rows.iter()
                .map(|row| row.iter().map(|&bit| bit != 0).collect())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_bounds() {
        let grid = Grid::new(3, 2, 0u8);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(2, 0), Some(2));
        assert_eq!(grid.index(0, 1), Some(3));
        assert_eq!(grid.index(3, 0), None);
        assert_eq!(grid.index(0, 2), None);
    }

    #[test]
    fn test_from_rows_rejects_ragged_and_empty() {
        assert_eq!(
            Grid::<u8>::from_rows(vec![]),
            Err(ConfigError::EmptyGrid)
        );
        assert_eq!(
            Grid::<u8>::from_rows(vec![vec![]]),
            Err(ConfigError::EmptyGrid)
        );
        assert_eq!(
            Grid::from_rows(vec![vec![1, 2], vec![3]]),
            Err(ConfigError::RaggedGrid {
                row: 1,
                len: 1,
                expected: 2
            })
        );
    }

    #[test]
    fn test_rotate_cw_swaps_dimensions_and_remaps() {
        // 1 2 3
        // 4 5 6
        let grid = Grid::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
        let rotated = grid.rotate_cw();

        // 4 1
        // 5 2
        // 6 3
        assert_eq!(rotated.width(), 2);
        assert_eq!(rotated.height(), 3);
        assert_eq!(rotated.row(0), &[4, 1]);
        assert_eq!(rotated.row(1), &[5, 2]);
        assert_eq!(rotated.row(2), &[6, 3]);

        // Input untouched.
        assert_eq!(grid.row(0), &[1, 2, 3]);
    }

    #[test]
    fn test_rotate_single_row_becomes_column() {
        let bar = Mask::from_bits(&[&[1, 1, 1, 1]]).unwrap();
        let column = bar.rotate_cw();
        assert_eq!(column.width(), 1);
        assert_eq!(column.height(), 4);
        assert_eq!(column.count(), 4);
    }

    #[test]
    fn test_occupied_yields_column_row_pairs() {
        let mask = Mask::from_bits(&[&[0, 1, 0], &[1, 1, 1]]).unwrap();
        let cells: Vec<_> = mask.occupied().collect();
        assert_eq!(cells, vec![(1, 0), (0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_rows_iterates_top_to_bottom() {
        let grid = Grid::from_rows(vec![vec!['a', 'b'], vec!['c', 'd']]).unwrap();
        let rows: Vec<&[char]> = grid.rows().collect();
        assert_eq!(rows, vec![&['a', 'b'][..], &['c', 'd'][..]]);
    }
}
