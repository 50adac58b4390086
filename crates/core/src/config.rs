//! Engine configuration, fixed at construction.

use crate::error::ConfigError;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH, CELL_WIDTH, TICK_MS};

/// Parameters of one game session.
///
/// `width`/`height` shape the simulation; `tick_ms` and `cell_width` are
/// read by the driver and renderer but live here so one value describes
/// the whole session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: u16,
    pub height: u16,
    pub tick_ms: u32,
    pub cell_width: u16,
}

impl GameConfig {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_tick_ms(mut self, tick_ms: u32) -> Self {
        self.tick_ms = tick_ms;
        self
    }

    pub fn with_cell_width(mut self, cell_width: u16) -> Self {
        self.cell_width = cell_width;
        self
    }

    /// Reject configurations no valid game state can exist for.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::InvalidTickInterval);
        }
        if self.cell_width == 0 {
            return Err(ConfigError::InvalidCellWidth);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            tick_ms: TICK_MS,
            cell_width: CELL_WIDTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert_eq!(config.tick_ms, 400);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        assert_eq!(
            GameConfig::new(0, 20).validate(),
            Err(ConfigError::InvalidDimensions {
                width: 0,
                height: 20
            })
        );
        assert!(GameConfig::new(10, 0).validate().is_err());
    }

    #[test]
    fn zero_tick_and_cell_width_are_rejected() {
        assert_eq!(
            GameConfig::default().with_tick_ms(0).validate(),
            Err(ConfigError::InvalidTickInterval)
        );
        assert_eq!(
            GameConfig::default().with_cell_width(0).validate(),
            Err(ConfigError::InvalidCellWidth)
        );
    }

    #[test]
    fn tiny_board_is_still_valid() {
        assert!(GameConfig::new(1, 1).validate().is_ok());
    }
}
