//! Plaintext `.cells` codec: one character per cell, one row per line.
//!
//! <https://www.conwaylife.com/wiki/Plaintext>

use crate::grid::{CellState, Grid};

use super::{Metadata, Pattern, PatternReader, PatternWriter, ReaderError};

/// Reader for the plaintext format.
#[derive(Debug)]
pub struct CellsReader;

impl PatternReader for CellsReader {
    fn extension(&self) -> &'static str {
        ".cells"
    }

    fn parse(&self, text: &str) -> Result<Pattern, ReaderError> {
        // A line belongs to the body iff its first character is '.' or
        // 'O'; '!' comments and anything else carry no geometry.
        let body: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with(['.', 'O']))
            .collect();
        if body.is_empty() {
            return Err(ReaderError::NoData);
        }

        let height = body.len();
        let width = body[0].chars().count();
        let mut cells = vec![CellState::Dead; height * width];

        for (row, line) in body.iter().enumerate() {
            let len = line.chars().count();
            if len > width {
                return Err(ReaderError::MalformedRow { row, len, width });
            }
            // Rows shorter than the first decode with the remainder dead.
            for (col, c) in line.chars().enumerate() {
                if c == 'O' {
                    cells[row * width + col] = CellState::Alive;
                }
            }
        }

        let grid = Grid::from_cells(height, width, cells)
            .map_err(|e| ReaderError::Malformed(e.to_string()))?;
        Ok(Pattern {
            grid,
            metadata: Metadata::default(),
        })
    }
}

/// Writer for the plaintext format.
#[derive(Debug)]
pub struct CellsWriter;

impl PatternWriter for CellsWriter {
    fn extension(&self) -> &'static str {
        ".cells"
    }

    fn serialize(&self, grid: &Grid) -> String {
        let mut out = String::with_capacity((grid.width() + 1) * grid.height());
        for row in grid.rows() {
            for cell in row {
                out.push(if cell.is_alive() { 'O' } else { '.' });
            }
            out.push('\n');
        }
        out
    }
}
