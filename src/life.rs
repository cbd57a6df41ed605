//! Conway's Game of Life rule engine (B3/S23).

use rand::Rng;

use crate::grid::{CellState, Grid};

/// Number of alive cells.
pub fn population(grid: &Grid) -> usize {
    grid.rows().flatten().filter(|cell| cell.is_alive()).count()
}

/// Advance the grid one generation.
///
/// Any live cell with two or three live neighbours survives; any dead
/// cell with exactly three live neighbours becomes alive; every other
/// cell is dead in the next generation. The grid edge is a hard
/// boundary, not a wrap-around.
pub fn step(grid: &mut Grid) {
    let counts = neighbour_counts(grid);
    let width = grid.width();

    for (row, cells) in grid.rows_mut().enumerate() {
        for (col, cell) in cells.iter_mut().enumerate() {
            let neighbours = counts[row * width + col];
            *cell = match (cell.is_alive(), neighbours) {
                (true, 2 | 3) => CellState::Alive,
                (false, 3) => CellState::Alive,
                _ => CellState::Dead,
            };
        }
    }
}

/// Alive-neighbour count for every cell, bounded at the edges.
fn neighbour_counts(grid: &Grid) -> Vec<u8> {
    let height = grid.height();
    let width = grid.width();
    let mut counts = vec![0u8; height * width];

    for (row, cells) in grid.rows().enumerate() {
        for (col, cell) in cells.iter().enumerate() {
            if !cell.is_alive() {
                continue;
            }
            // Bump every in-bounds neighbour of this live cell.
            let row_lo = row.saturating_sub(1);
            let row_hi = (row + 1).min(height - 1);
            let col_lo = col.saturating_sub(1);
            let col_hi = (col + 1).min(width - 1);
            for r in row_lo..=row_hi {
                for c in col_lo..=col_hi {
                    if r != row || c != col {
                        counts[r * width + c] += 1;
                    }
                }
            }
        }
    }

    counts
}

/// Set every cell alive or dead with equal probability.
pub fn randomize<R: Rng>(grid: &mut Grid, rng: &mut R) {
    for cells in grid.rows_mut() {
        for cell in cells.iter_mut() {
            *cell = CellState::from(rng.gen_bool(0.5));
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn from_bools(rows: &[&[bool]]) -> Grid {
        let height = rows.len();
        let width = rows[0].len();
        let cells = rows
            .iter()
            .flat_map(|row| row.iter().map(|&alive| CellState::from(alive)))
            .collect();
        Grid::from_cells(height, width, cells).unwrap()
    }

    #[test]
    fn test_blinker_oscillates() {
        let vertical = from_bools(&[
            &[false, true, false],
            &[false, true, false],
            &[false, true, false],
        ]);
        let horizontal = from_bools(&[
            &[false, false, false],
            &[true, true, true],
            &[false, false, false],
        ]);

        let mut grid = vertical.clone();
        step(&mut grid);
        assert_eq!(grid, horizontal);
        step(&mut grid);
        assert_eq!(grid, vertical);
    }

    #[test]
    fn test_block_is_still() {
        let block = from_bools(&[
            &[false, false, false, false],
            &[false, true, true, false],
            &[false, true, true, false],
            &[false, false, false, false],
        ]);
        let mut grid = block.clone();
        step(&mut grid);
        assert_eq!(grid, block);
    }

    #[test]
    fn test_glider_translates() {
        // After four generations a glider has moved one cell down-right.
        let mut grid: Grid = Grid::new(8, 8).unwrap();
        let glider = from_bools(&[
            &[false, true, false],
            &[false, false, true],
            &[true, true, true],
        ]);
        grid.place(&glider, 1, 1);

        for _ in 0..4 {
            step(&mut grid);
        }

        let mut expected: Grid = Grid::new(8, 8).unwrap();
        expected.place(&glider, 2, 2);
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut grid: Grid = Grid::new(3, 3).unwrap();
        grid.set(1, 1, CellState::Alive).unwrap();
        step(&mut grid);
        assert_eq!(population(&grid), 0);
    }

    #[test]
    fn test_population() {
        let grid = from_bools(&[&[true, false], &[true, true]]);
        assert_eq!(population(&grid), 3);
    }

    #[test]
    fn test_randomize_is_deterministic_per_seed() {
        let mut a: Grid = Grid::new(16, 16).unwrap();
        let mut b: Grid = Grid::new(16, 16).unwrap();
        randomize(&mut a, &mut StdRng::seed_from_u64(7));
        randomize(&mut b, &mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);

        // 256 coin flips landing all dead or all alive would mean a
        // broken generator.
        let alive = population(&a);
        assert!(alive > 0 && alive < 256);
    }
}
