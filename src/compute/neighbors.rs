//! Moore-neighborhood counting on a bounded grid.
//!
//! The grid does not wrap: positions past an edge do not exist and
//! contribute nothing, so corner cells see 3 neighbors and edge cells 5.

use super::Grid;

/// Offsets of the 8 surrounding cells as (row, col) deltas.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// In-bounds neighbor coordinates of `(row, col)`.
pub fn neighbor_positions(
    grid: &Grid,
    row: usize,
    col: usize,
) -> impl Iterator<Item = (usize, usize)> + '_ {
    NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < grid.rows() && c < grid.cols()).then_some((r, c))
    })
}

/// Count live cells among the 8 neighbors of `(row, col)`.
///
/// Output range: [0, 8].
#[inline]
pub fn count_live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    neighbor_positions(grid, row, col)
        .filter(|&(r, c)| grid.is_alive(r, c))
        .count() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full(rows: usize, cols: usize) -> Grid {
        Grid::from_fn(rows, cols, |_, _| true)
    }

    #[test]
    fn test_corner_sees_three() {
        let grid = full(5, 5);
        for (r, c) in [(0, 0), (0, 4), (4, 0), (4, 4)] {
            assert_eq!(neighbor_positions(&grid, r, c).count(), 3);
            assert_eq!(count_live_neighbors(&grid, r, c), 3);
        }
    }

    #[test]
    fn test_edge_sees_five() {
        let grid = full(5, 5);
        for (r, c) in [(0, 2), (2, 0), (4, 2), (2, 4)] {
            assert_eq!(neighbor_positions(&grid, r, c).count(), 5);
            assert_eq!(count_live_neighbors(&grid, r, c), 5);
        }
    }

    #[test]
    fn test_interior_sees_eight() {
        let grid = full(5, 5);
        assert_eq!(neighbor_positions(&grid, 2, 2).count(), 8);
        assert_eq!(count_live_neighbors(&grid, 2, 2), 8);
    }

    #[test]
    fn test_cell_itself_not_counted() {
        let grid = Grid::from_cells(3, 3, &[(1, 1)]);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 0);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 1);
    }

    #[test]
    fn test_no_wraparound() {
        // Live cell on the far edge must not count for the opposite edge.
        let grid = Grid::from_cells(4, 4, &[(0, 3), (3, 0)]);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 0);
        assert_eq!(count_live_neighbors(&grid, 3, 3), 0);
    }

    #[test]
    fn test_single_row_and_column() {
        let row = full(1, 4);
        assert_eq!(count_live_neighbors(&row, 0, 0), 1);
        assert_eq!(count_live_neighbors(&row, 0, 2), 2);

        let cell = full(1, 1);
        assert_eq!(count_live_neighbors(&cell, 0, 0), 0);
    }
}
