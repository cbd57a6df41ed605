//! Game of Life pattern editor core.
//!
//! This crate provides the engine-independent core of an editor/player
//! for Conway's Game of Life: the cell grid, the pattern interchange
//! subsystem (plaintext `.cells` and run-length `.rle` codecs with
//! extension-based dispatch), the B3/S23 rule engine, and the editor
//! mode machine. Windowing, input routing and rendering stay outside
//! and drive this crate through [`Editor`], [`files::FileManager`] and
//! the codec traits.
//!
//! # Architecture
//!
//! - `grid`: the rectangular cell container and its transforms
//! - `format`: pattern file codecs and the reader/writer dispatch table
//! - `files`: filesystem and file-picker boundary
//! - `life`: the generation rule engine
//! - `editor`: mode state machine and editing operations
//! - `settings`: editor geometry configuration
//!
//! # Example
//!
//! ```rust
//! use life_patterns::format::{PatternReader, get_reader};
//! use life_patterns::life;
//!
//! let reader = get_reader(".rle").unwrap();
//! let pattern = reader.parse("x = 3, y = 3\nbo$2bo$3o!").unwrap();
//!
//! let mut grid = pattern.grid;
//! life::step(&mut grid);
//! assert_eq!(life::population(&grid), 5);
//! ```

pub mod editor;
pub mod files;
pub mod format;
pub mod grid;
pub mod life;
pub mod settings;

// Re-export commonly used types
pub use editor::{Editor, EditorError, Mode};
pub use format::{Metadata, Pattern, ReaderError, WriterError, get_reader, get_writer};
pub use grid::{CellState, Grid, GridError};
pub use settings::Settings;
