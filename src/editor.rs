//! Editor modes and grid-level editing operations.
//!
//! Each mode is a variant carrying only the state it needs; a transition
//! replaces the variant, subject to a fixed allowed-transition table.

use thiserror::Error;

use crate::format::Pattern;
use crate::grid::{CellState, Grid, GridError};
use crate::life;
use crate::settings::{Settings, SettingsError};

/// Interaction mode of the editor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    MainMenu,
    SettingsMenu,
    PlayMenu,
    Play,
    /// Randomizes the grid on its first frame, then becomes [`Mode::Play`].
    PlayRandom,
    Pause,
    /// Map editing, optionally holding a pattern loaded from file that
    /// has not been placed yet.
    MapEditor { loaded: Option<Grid> },
}

impl Mode {
    pub fn name(&self) -> &'static str {
        match self {
            Mode::MainMenu => "main_menu",
            Mode::SettingsMenu => "settings",
            Mode::PlayMenu => "play_menu",
            Mode::Play => "play",
            Mode::PlayRandom => "play_random",
            Mode::Pause => "pause",
            Mode::MapEditor { .. } => "map_editor",
        }
    }

    /// Modes reachable from this one.
    fn allowed(&self) -> &'static [&'static str] {
        match self {
            Mode::MainMenu => &["play_menu", "settings"],
            Mode::SettingsMenu => &["main_menu"],
            Mode::PlayMenu => &["play_random", "map_editor", "main_menu"],
            Mode::Play => &["map_editor", "pause"],
            Mode::PlayRandom => &["map_editor", "pause"],
            Mode::Pause => &["play", "map_editor", "main_menu"],
            Mode::MapEditor { .. } => &["play", "pause", "main_menu"],
        }
    }

    pub fn can_switch_to(&self, next: &Mode) -> bool {
        self.allowed().contains(&next.name())
    }

    /// True in modes that display and mutate the cell grid.
    pub fn is_play_mode(&self) -> bool {
        matches!(self, Mode::Play | Mode::PlayRandom | Mode::MapEditor { .. })
    }
}

#[derive(Debug, Error)]
pub enum EditorError {
    #[error("switching from {from:?} to {to:?} is not allowed")]
    ForbiddenTransition {
        from: &'static str,
        to: &'static str,
    },
    #[error("invalid editor settings")]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Grid(#[from] GridError),
}

/// The pattern editor: a live grid, the current mode and the settings
/// that size the grid. The windowing layer drives it through `tick` and
/// the editing methods; rendering and input stay outside.
#[derive(Debug)]
pub struct Editor {
    settings: Settings,
    grid: Grid,
    mode: Mode,
}

impl Editor {
    pub fn new(settings: Settings) -> Result<Self, EditorError> {
        settings.validate()?;
        let grid = Grid::new(settings.cells_vertical(), settings.cells_horizontal())?;
        Ok(Self {
            settings,
            grid,
            mode: Mode::MainMenu,
        })
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    #[inline]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Switch to `next`, enforcing the transition table. Entering the
    /// main menu resets the grid.
    pub fn switch(&mut self, next: Mode) -> Result<(), EditorError> {
        if !self.mode.can_switch_to(&next) {
            return Err(EditorError::ForbiddenTransition {
                from: self.mode.name(),
                to: next.name(),
            });
        }
        if matches!(next, Mode::MainMenu) {
            self.grid = Grid::new(self.grid.height(), self.grid.width())?;
        }
        self.mode = next;
        Ok(())
    }

    /// Run one frame of the current mode.
    pub fn tick(&mut self) {
        match self.mode {
            Mode::Play => life::step(&mut self.grid),
            Mode::PlayRandom => {
                life::randomize(&mut self.grid, &mut rand::thread_rng());
                self.mode = Mode::Play;
            }
            _ => {}
        }
    }

    /// Bring a pattern loaded from file into the map editor.
    pub fn load_pattern(&mut self, pattern: Pattern) -> Result<(), EditorError> {
        self.switch(Mode::MapEditor {
            loaded: Some(pattern.grid),
        })
    }

    /// Stamp the loaded pattern into the live grid at the offset,
    /// clipped at the edges, and clear it. Returns false when nothing
    /// is loaded.
    pub fn place_loaded(&mut self, row: usize, col: usize) -> bool {
        if let Mode::MapEditor { loaded } = &mut self.mode {
            if let Some(pattern) = loaded.take() {
                self.grid.place(&pattern, row, col);
                return true;
            }
        }
        false
    }

    /// Transpose the loaded pattern in place. Returns false when
    /// nothing is loaded.
    pub fn transpose_loaded(&mut self) -> bool {
        if let Mode::MapEditor {
            loaded: Some(pattern),
        } = &mut self.mode
        {
            pattern.transpose();
            true
        } else {
            false
        }
    }

    /// Transpose the loaded pattern over the other diagonal. Returns
    /// false when nothing is loaded.
    pub fn anti_transpose_loaded(&mut self) -> bool {
        if let Mode::MapEditor {
            loaded: Some(pattern),
        } = &mut self.mode
        {
            pattern.anti_transpose();
            true
        } else {
            false
        }
    }

    /// Paint a single cell (map-editor drawing).
    pub fn paint_cell(&mut self, row: usize, col: usize, state: CellState) -> Result<(), GridError> {
        self.grid.set(row, col, state)
    }
}
