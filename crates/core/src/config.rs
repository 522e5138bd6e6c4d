//! Construction-time configuration
//!
//! Invalid dimensions are a programming error on the host side, so they are rejected once,
//! when the grid or game is built, instead of being checked on every command.

use thiserror::Error;

use crate::types::{DEFAULT_HEIGHT, DEFAULT_WIDTH, MAX_START_LEVEL, MIN_HEIGHT, MIN_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board width {width} is below the minimum of {min}")]
    InvalidWidth { width: usize, min: usize },
    #[error("board height {height} is below the minimum of {min}")]
    InvalidHeight { height: usize, min: usize },
    #[error("start level must be at least 1")]
    InvalidStartLevel,
    #[error("start level {level} is above the maximum of {max}")]
    StartLevelTooHigh { level: u32, max: u32 },
}

/// Game construction parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Seed for the piece randomizer
    pub seed: u32,
    pub start_level: u32,
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_dimensions(self.width, self.height)?;
        if self.start_level == 0 {
            return Err(ConfigError::InvalidStartLevel);
        }
        if self.start_level > MAX_START_LEVEL {
            return Err(ConfigError::StartLevelTooHigh {
                level: self.start_level,
                max: MAX_START_LEVEL,
            });
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_start_level(mut self, level: u32) -> Self {
        self.start_level = level;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            seed: 1,
            start_level: 1,
        }
    }
}

pub(crate) fn check_dimensions(width: usize, height: usize) -> Result<(), ConfigError> {
    if width < MIN_WIDTH {
        return Err(ConfigError::InvalidWidth {
            width,
            min: MIN_WIDTH,
        });
    }
    if height < MIN_HEIGHT {
        return Err(ConfigError::InvalidHeight {
            height,
            min: MIN_HEIGHT,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = GameConfig::default();
        assert_eq!(config.width, 10);
        assert_eq!(config.height, 20);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_boards() {
        assert_eq!(
            GameConfig::default().with_size(0, 20).validate(),
            Err(ConfigError::InvalidWidth { width: 0, min: 4 })
        );
        assert_eq!(
            GameConfig::default().with_size(10, 1).validate(),
            Err(ConfigError::InvalidHeight { height: 1, min: 2 })
        );
        assert_eq!(
            GameConfig::default().with_start_level(0).validate(),
            Err(ConfigError::InvalidStartLevel)
        );
    }

    #[test]
    fn rejects_start_level_above_cap() {
        assert!(GameConfig::default()
            .with_start_level(MAX_START_LEVEL)
            .validate()
            .is_ok());
        assert_eq!(
            GameConfig::default().with_start_level(10_000_000).validate(),
            Err(ConfigError::StartLevelTooHigh {
                level: 10_000_000,
                max: MAX_START_LEVEL
            })
        );
    }

    #[test]
    fn error_messages_name_the_value() {
        let err = GameConfig::default().with_size(3, 20).validate().unwrap_err();
        assert_eq!(err.to_string(), "board width 3 is below the minimum of 4");
    }
}
