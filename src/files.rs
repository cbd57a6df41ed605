//! Filesystem and file-picker boundary for pattern files.
//!
//! The codec chosen is keyed by the lowercase file extension. The
//! platform file dialog is reduced to the [`PathPicker`] trait;
//! cancellation surfaces as `None` and never reaches a parser.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use thiserror::Error;

use crate::format::{self, Pattern, PatternReader, PatternWriter, ReaderError, WriterError};
use crate::grid::Grid;

/// Failures crossing the pattern file boundary. Storage errors carry
/// the attempted path.
#[derive(Debug, Error)]
pub enum FileError {
    #[error("could not read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not read pattern from {}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: ReaderError,
    },
    #[error("could not write pattern to {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot encode pattern for {}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: WriterError,
    },
}

/// Lowercase file extension with leading dot, or empty when absent.
fn extension_of(path: &Path) -> String {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => format!(".{}", ext.to_ascii_lowercase()),
        None => String::new(),
    }
}

/// Load and parse the pattern file at `path`.
pub fn load_pattern(path: &Path) -> Result<Pattern, FileError> {
    let reader = format::get_reader(&extension_of(path)).map_err(|source| FileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    let text = fs::read_to_string(path).map_err(|source| FileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let pattern = reader.parse(&text).map_err(|source| FileError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "loaded {}x{} pattern from {}",
        pattern.grid.height(),
        pattern.grid.width(),
        path.display()
    );
    Ok(pattern)
}

/// Serialize `grid` in the format selected by the extension of `path`
/// and write it there.
pub fn save_pattern(path: &Path, grid: &Grid) -> Result<(), FileError> {
    let writer = format::get_writer(&extension_of(path)).map_err(|source| FileError::Format {
        path: path.to_path_buf(),
        source,
    })?;
    let text = writer.serialize(grid);
    fs::write(path, text).map_err(|source| FileError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(
        "wrote {}x{} pattern to {}",
        grid.height(),
        grid.width(),
        path.display()
    );
    Ok(())
}

/// File-picker collaborator. `None` means the user cancelled the
/// dialog.
pub trait PathPicker {
    /// Prompt for a pattern file to open.
    fn pick_open(&mut self) -> Option<PathBuf>;

    /// Prompt for a destination to save to.
    fn pick_save(&mut self) -> Option<PathBuf>;
}

/// Ties the file picker, format dispatch and filesystem together.
pub struct FileManager<P> {
    picker: P,
}

impl<P: PathPicker> FileManager<P> {
    pub fn new(picker: P) -> Self {
        Self { picker }
    }

    /// Dialog filter string covering every registered format.
    pub fn file_filter(&self) -> String {
        let patterns: Vec<String> = format::supported_extensions()
            .map(|ext| format!("*{ext}"))
            .collect();
        format!("Game of Life file ({})", patterns.join(" "))
    }

    /// Prompt for a pattern file and load it. `Ok(None)` when the user
    /// cancels.
    pub fn load(&mut self) -> Result<Option<Pattern>, FileError> {
        match self.picker.pick_open() {
            Some(path) => load_pattern(&path).map(Some),
            None => Ok(None),
        }
    }

    /// Prompt for a destination and save `grid` there. Returns the
    /// chosen path, or `None` when the user cancels.
    pub fn save(&mut self, grid: &Grid) -> Result<Option<PathBuf>, FileError> {
        match self.picker.pick_save() {
            Some(path) => {
                save_pattern(&path, grid)?;
                Ok(Some(path))
            }
            None => Ok(None),
        }
    }
}
