//! Fixed-size boolean grid.

use std::fmt;

/// A bounded 2-D field of live/dead cells.
///
/// Cells are stored row-major in a flat buffer: index = row * cols + col.
/// The dimensions are fixed at construction; a grid is only ever replaced
/// wholesale by the next generation, never resized.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: Vec<bool>,
    rows: usize,
    cols: usize,
}

/// Number of cells in a `rows` x `cols` grid.
///
/// # Panics
///
/// Panics if `rows * cols` overflows `usize`. Validated configs never do.
fn cell_count(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(count) => count,
        None => panic!("grid dimensions {rows}x{cols} overflow usize"),
    }
}

impl Grid {
    /// Create an all-dead grid.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            cells: vec![false; cell_count(rows, cols)],
            rows,
            cols,
        }
    }

    /// Create a grid with the given `(row, col)` cells alive.
    ///
    /// Coordinates outside the grid are ignored.
    pub fn from_cells(rows: usize, cols: usize, alive: &[(usize, usize)]) -> Self {
        let mut grid = Self::new(rows, cols);
        for &(row, col) in alive {
            grid.set(row, col, true);
        }
        grid
    }

    /// Create a grid from nested rows, where non-zero means alive.
    ///
    /// Every row must have the same length; ragged input is truncated to the
    /// shortest row.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Self {
        let cols = rows.iter().map(|r| r.as_ref().len()).min().unwrap_or(0);
        let cells = rows
            .iter()
            .flat_map(|r| r.as_ref()[..cols].iter().map(|&v| v != 0))
            .collect();
        Self {
            cells,
            rows: rows.len(),
            cols,
        }
    }

    /// Build a grid by evaluating `f(row, col)` for every cell.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(cell_count(rows, cols));
        for row in 0..rows {
            for col in 0..cols {
                cells.push(f(row, col));
            }
        }
        Self { cells, rows, cols }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells (rows * cols).
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// True for degenerate grids with a zero dimension.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Cell state at `(row, col)`, or `None` outside the grid.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        if row < self.rows && col < self.cols {
            Some(self.cells[self.idx(row, col)])
        } else {
            None
        }
    }

    /// Cell state at `(row, col)`; positions outside the grid are dead.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.get(row, col).unwrap_or(false)
    }

    /// Set a cell. Out-of-bounds writes are ignored.
    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, alive: bool) {
        if row < self.rows && col < self.cols {
            let idx = self.idx(row, col);
            self.cells[idx] = alive;
        }
    }

    /// Iterate over rows as slices.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> {
        // chunks() panics on a zero chunk size
        self.cells.chunks(self.cols.max(1)).take(self.rows)
    }

    /// Number of live cells.
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Coordinates of all live cells, row-major.
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(|(i, _)| (i / self.cols, i % self.cols))
            .collect()
    }
}

impl fmt::Display for Grid {
    /// One line per row, `X` for live cells and a space for dead ones.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "X" } else { " " })?;
            }
        }
        Ok(())
    }
}
