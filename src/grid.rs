//! Rectangular cell grid underlying the editor and the pattern codecs.

use thiserror::Error;

/// State of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    /// True for [`CellState::Alive`].
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, CellState::Alive)
    }
}

impl From<bool> for CellState {
    fn from(alive: bool) -> Self {
        if alive { CellState::Alive } else { CellState::Dead }
    }
}

/// Grid contract violations. These are caller bugs, never recovered from.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid dimensions must be non-zero (got {height}x{width})")]
    InvalidDimension { height: usize, width: usize },
    #[error("cell ({row}, {col}) is outside a {height}x{width} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
    },
    #[error(
        "{height}x{width} region at ({row}, {col}) does not fit in a {grid_height}x{grid_width} grid"
    )]
    InvalidRegion {
        row: usize,
        col: usize,
        height: usize,
        width: usize,
        grid_height: usize,
        grid_width: usize,
    },
}

/// 2D rectangular container of cells, row-major.
///
/// The codecs and the rule engine work on `Grid<CellState>`; the payload
/// stays generic so callers can attach richer per-cell data the same way.
/// A grid owns its storage exclusively; readers hand ownership of new
/// grids to the caller and writers only borrow.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<T = CellState> {
    height: usize,
    width: usize,
    cells: Vec<T>,
}

impl<T: Clone + Default> Grid<T> {
    /// Create a grid with every cell set to the default (dead) state.
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimension { height, width });
        }
        Ok(Self {
            height,
            width,
            cells: vec![T::default(); height * width],
        })
    }
}

impl<T> Grid<T> {
    /// Build a grid from row-major cell storage of exactly
    /// `height * width` entries.
    pub fn from_cells(height: usize, width: usize, cells: Vec<T>) -> Result<Self, GridError> {
        if height == 0 || width == 0 || cells.len() != height * width {
            return Err(GridError::InvalidDimension { height, width });
        }
        Ok(Self {
            height,
            width,
            cells,
        })
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)` pair.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<&T, GridError> {
        self.check_bounds(row, col)?;
        Ok(&self.cells[row * self.width + col])
    }

    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), GridError> {
        self.check_bounds(row, col)?;
        self.cells[row * self.width + col] = value;
        Ok(())
    }

    /// Iterate over rows as slices.
    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.width)
    }

    /// Iterate over rows as mutable slices.
    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [T]> {
        self.cells.chunks_mut(self.width)
    }

    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }
}

impl<T: Clone> Grid<T> {
    /// Transpose in place: `new[j][i] = old[i][j]`. Swaps the dimensions.
    /// Applying it twice restores the grid exactly, shape included.
    pub fn transpose(&mut self) {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in 0..self.width {
            for row in 0..self.height {
                cells.push(self.cells[row * self.width + col].clone());
            }
        }
        self.cells = cells;
        std::mem::swap(&mut self.height, &mut self.width);
    }

    /// Transpose over the other diagonal: `new[j][i] = old[h-1-i][w-1-j]`.
    /// Swaps the dimensions; applying it twice restores the grid.
    pub fn anti_transpose(&mut self) {
        let mut cells = Vec::with_capacity(self.cells.len());
        for col in (0..self.width).rev() {
            for row in (0..self.height).rev() {
                cells.push(self.cells[row * self.width + col].clone());
            }
        }
        self.cells = cells;
        std::mem::swap(&mut self.height, &mut self.width);
    }

    /// Copy the designated rectangle into a new, independently owned grid.
    ///
    /// The rectangle must be non-empty and lie fully inside the grid;
    /// there is no silent clamping. Callers wanting a partial overlap
    /// clamp beforehand.
    pub fn extract_subrect(
        &self,
        row0: usize,
        col0: usize,
        height: usize,
        width: usize,
    ) -> Result<Grid<T>, GridError> {
        let fits = height > 0
            && width > 0
            && row0.checked_add(height).is_some_and(|end| end <= self.height)
            && col0.checked_add(width).is_some_and(|end| end <= self.width);
        if !fits {
            return Err(GridError::InvalidRegion {
                row: row0,
                col: col0,
                height,
                width,
                grid_height: self.height,
                grid_width: self.width,
            });
        }

        let mut cells = Vec::with_capacity(height * width);
        for row in row0..row0 + height {
            let start = row * self.width + col0;
            cells.extend_from_slice(&self.cells[start..start + width]);
        }
        Ok(Grid {
            height,
            width,
            cells,
        })
    }

    /// Copy `other` into this grid with its top-left corner at
    /// `(row0, col0)`. Cells falling outside the grid are dropped, so a
    /// pattern placed near the edge is clipped rather than rejected.
    pub fn place(&mut self, other: &Grid<T>, row0: usize, col0: usize) {
        for (row, source) in other.rows().enumerate() {
            let target_row = row0 + row;
            if target_row >= self.height {
                break;
            }
            for (col, value) in source.iter().enumerate() {
                let target_col = col0 + col;
                if target_col >= self.width {
                    break;
                }
                self.cells[target_row * self.width + target_col] = value.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
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
    fn test_new_initializes_dead() {
        let grid: Grid = Grid::new(3, 4).unwrap();
        assert_eq!(grid.shape(), (3, 4));
        assert!(grid.rows().flatten().all(|cell| !cell.is_alive()));
    }

    #[test]
    fn test_new_rejects_zero_dimension() {
        assert_eq!(
            Grid::<CellState>::new(0, 4),
            Err(GridError::InvalidDimension {
                height: 0,
                width: 4
            })
        );
        assert_eq!(
            Grid::<CellState>::new(4, 0),
            Err(GridError::InvalidDimension {
                height: 4,
                width: 0
            })
        );
    }

    #[test]
    fn test_from_cells_rejects_length_mismatch() {
        let cells = vec![CellState::Dead; 5];
        assert!(Grid::from_cells(2, 3, cells).is_err());
    }

    #[test]
    fn test_get_set_bounds() {
        let mut grid: Grid = Grid::new(2, 2).unwrap();
        grid.set(1, 1, CellState::Alive).unwrap();
        assert!(grid.get(1, 1).unwrap().is_alive());
        assert!(!grid.get(0, 0).unwrap().is_alive());

        assert_eq!(
            grid.set(2, 0, CellState::Alive),
            Err(GridError::OutOfBounds {
                row: 2,
                col: 0,
                height: 2,
                width: 2
            })
        );
        assert!(grid.get(0, 2).is_err());
    }

    #[test]
    fn test_transpose() {
        let mut grid = from_bools(&[&[true, false, true], &[false, false, true]]);
        grid.transpose();

        let expected = from_bools(&[&[true, false], &[false, false], &[true, true]]);
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_transpose_is_involutive() {
        let original = from_bools(&[&[true, false, true], &[false, true, false]]);
        let mut grid = original.clone();
        grid.transpose();
        grid.transpose();
        assert_eq!(grid, original);
    }

    #[test]
    fn test_anti_transpose() {
        // new[j][i] = old[h-1-i][w-1-j]
        let mut grid = from_bools(&[&[true, false, false], &[false, true, true]]);
        grid.anti_transpose();

        let expected = from_bools(&[&[true, false], &[true, false], &[false, true]]);
        assert_eq!(grid, expected);
    }

    #[test]
    fn test_anti_transpose_is_involutive() {
        let original = from_bools(&[&[true, true, false], &[false, true, false]]);
        let mut grid = original.clone();
        grid.anti_transpose();
        grid.anti_transpose();
        assert_eq!(grid, original);
    }

    #[test]
    fn test_extract_subrect() {
        // 5x5 all dead except the center; the 3x3 window around it sees
        // the live cell at (1, 1).
        let mut grid: Grid = Grid::new(5, 5).unwrap();
        grid.set(2, 2, CellState::Alive).unwrap();

        let sub = grid.extract_subrect(1, 1, 3, 3).unwrap();
        assert_eq!(sub.shape(), (3, 3));
        for row in 0..3 {
            for col in 0..3 {
                assert_eq!(sub.get(row, col).unwrap().is_alive(), row == 1 && col == 1);
            }
        }
    }

    #[test]
    fn test_extract_subrect_rejects_bad_regions() {
        let grid: Grid = Grid::new(4, 4).unwrap();
        assert!(matches!(
            grid.extract_subrect(0, 0, 0, 2),
            Err(GridError::InvalidRegion { .. })
        ));
        assert!(matches!(
            grid.extract_subrect(2, 2, 3, 3),
            Err(GridError::InvalidRegion { .. })
        ));
        assert!(matches!(
            grid.extract_subrect(4, 0, 1, 1),
            Err(GridError::InvalidRegion { .. })
        ));
    }

    #[test]
    fn test_place_copies_at_offset() {
        let mut grid: Grid = Grid::new(4, 4).unwrap();
        let stamp = from_bools(&[&[true, true], &[true, false]]);
        grid.place(&stamp, 1, 2);

        assert!(grid.get(1, 2).unwrap().is_alive());
        assert!(grid.get(1, 3).unwrap().is_alive());
        assert!(grid.get(2, 2).unwrap().is_alive());
        assert!(!grid.get(2, 3).unwrap().is_alive());
        assert!(!grid.get(0, 0).unwrap().is_alive());
    }

    #[test]
    fn test_place_clips_at_edges() {
        let mut grid: Grid = Grid::new(3, 3).unwrap();
        let stamp = from_bools(&[&[true, true], &[true, true]]);
        grid.place(&stamp, 2, 2);

        // Only the top-left cell of the stamp fits.
        assert!(grid.get(2, 2).unwrap().is_alive());
        assert_eq!(
            grid.rows().flatten().filter(|cell| cell.is_alive()).count(),
            1
        );
    }
}
