//! Editor settings: screen and cell geometry.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default cell edge length in pixels.
fn default_cell_size() -> u32 {
    8
}

/// Pixel geometry of the editor window and its cells. The live grid's
/// cell counts derive from these.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Window width in pixels.
    pub screen_width: u32,
    /// Window height in pixels.
    pub screen_height: u32,
    /// Cell width in pixels.
    #[serde(default = "default_cell_size")]
    pub cell_width: u32,
    /// Cell height in pixels.
    #[serde(default = "default_cell_size")]
    pub cell_height: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            screen_width: 800,
            screen_height: 600,
            cell_width: 8,
            cell_height: 8,
        }
    }
}

impl Settings {
    pub fn new(screen_width: u32, screen_height: u32) -> Self {
        Self {
            screen_width,
            screen_height,
            ..Self::default()
        }
    }

    /// Number of grid columns covering the screen.
    #[inline]
    pub fn cells_horizontal(&self) -> usize {
        (self.screen_width as usize).div_ceil(self.cell_width as usize)
    }

    /// Number of grid rows covering the screen.
    #[inline]
    pub fn cells_vertical(&self) -> usize {
        (self.screen_height as usize).div_ceil(self.cell_height as usize)
    }

    /// Total number of grid cells.
    pub fn cell_count(&self) -> usize {
        self.cells_horizontal() * self.cells_vertical()
    }

    /// Validate the geometry.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(SettingsError::InvalidScreen);
        }
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(SettingsError::InvalidCell);
        }
        Ok(())
    }
}

/// Settings validation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SettingsError {
    #[error("screen dimensions must be non-zero")]
    InvalidScreen,
    #[error("cell dimensions must be non-zero")]
    InvalidCell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_counts_round_up() {
        let settings = Settings {
            screen_width: 100,
            screen_height: 60,
            cell_width: 8,
            cell_height: 8,
        };
        assert_eq!(settings.cells_horizontal(), 13);
        assert_eq!(settings.cells_vertical(), 8);
        assert_eq!(settings.cell_count(), 104);
    }

    #[test]
    fn test_validate() {
        assert!(Settings::default().validate().is_ok());

        let mut settings = Settings::default();
        settings.screen_width = 0;
        assert_eq!(settings.validate(), Err(SettingsError::InvalidScreen));

        let mut settings = Settings::default();
        settings.cell_height = 0;
        assert_eq!(settings.validate(), Err(SettingsError::InvalidCell));
    }

    #[test]
    fn test_deserialize_applies_cell_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{"screen_width": 640, "screen_height": 480}"#).unwrap();
        assert_eq!(settings.cell_width, 8);
        assert_eq!(settings.cell_height, 8);
    }
}
