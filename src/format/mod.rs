//! Pattern file formats and the reader/writer dispatch tables.
//!
//! Two interchange formats are supported: plaintext `.cells` and
//! run-length encoded `.rle`. Readers parse full file text into a
//! [`Pattern`]; writers serialize a grid back to text. Lookup is by
//! lowercase file extension including the leading dot.

mod plaintext;
mod rle;

pub use plaintext::{CellsReader, CellsWriter};
pub use rle::{RleReader, RleWriter};

use thiserror::Error;

use crate::grid::Grid;

/// Malformed-input failures while reading a pattern file.
///
/// All validation is eager; on any error no grid is produced, partial
/// results are never exposed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReaderError {
    /// The file contains no pattern body at all.
    #[error("no pattern data found")]
    NoData,
    /// The run-length header lacks a mandatory `x`/`y` field.
    #[error("pattern header is missing required field {0:?}")]
    MissingHeaderField(&'static str),
    /// A plaintext row is wider than the width set by the first row.
    #[error("row {row} is {len} cells wide, expected at most {width}")]
    MalformedRow { row: usize, len: usize, width: usize },
    /// Any other grammar violation in the pattern body or header.
    #[error("malformed pattern: {0}")]
    Malformed(String),
    /// No reader is registered for the extension.
    #[error("file format {0:?} is not supported")]
    UnsupportedFormat(String),
}

/// Failures while writing a pattern file.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum WriterError {
    /// No writer is registered for the extension.
    #[error("file format {0:?} is not supported for writing")]
    UnsupportedFormat(String),
}

/// Optional metadata carried by the run-length format's comment lines.
///
/// Never participates in cell-data round trips and is not emitted by
/// writers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
    pub name: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
}

/// A pattern parsed from a file: the cell grid plus any metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    pub grid: Grid,
    pub metadata: Metadata,
}

/// Parses pattern file text into a [`Pattern`].
pub trait PatternReader: Sync + std::fmt::Debug {
    /// File extension this reader handles (lowercase, leading dot).
    fn extension(&self) -> &'static str;

    /// Parse the full text of a pattern file.
    fn parse(&self, text: &str) -> Result<Pattern, ReaderError>;
}

/// Serializes a grid into pattern file text.
pub trait PatternWriter: Sync + std::fmt::Debug {
    /// File extension this writer handles (lowercase, leading dot).
    fn extension(&self) -> &'static str;

    /// Serialize the grid. Infallible; file I/O happens at the caller.
    fn serialize(&self, grid: &Grid) -> String;
}

// The historical reader/writer factories, flattened into constant lookup
// tables. This is the single place new formats are registered.
static READERS: &[&dyn PatternReader] = &[&RleReader, &CellsReader];
static WRITERS: &[&dyn PatternWriter] = &[&RleWriter, &CellsWriter];

/// Look up the reader registered for a file extension.
pub fn get_reader(extension: &str) -> Result<&'static dyn PatternReader, ReaderError> {
    READERS
        .iter()
        .find(|reader| reader.extension() == extension)
        .copied()
        .ok_or_else(|| ReaderError::UnsupportedFormat(extension.to_string()))
}

/// Look up the writer registered for a file extension.
pub fn get_writer(extension: &str) -> Result<&'static dyn PatternWriter, WriterError> {
    WRITERS
        .iter()
        .find(|writer| writer.extension() == extension)
        .copied()
        .ok_or_else(|| WriterError::UnsupportedFormat(extension.to_string()))
}

/// Extensions with a registered reader, for file-picker filters.
pub fn supported_extensions() -> impl Iterator<Item = &'static str> {
    READERS.iter().map(|reader| reader.extension())
}

#[cfg(test)]
pub(crate) fn arb_grid() -> impl proptest::strategy::Strategy<Value = Grid> {
    use proptest::prelude::*;

    use crate::grid::CellState;

    (1usize..24, 1usize..24).prop_flat_map(|(height, width)| {
        proptest::collection::vec(any::<bool>(), height * width).prop_map(move |bits| {
            let cells = bits.into_iter().map(CellState::from).collect();
            Grid::from_cells(height, width, cells).unwrap()
        })
    })
}
