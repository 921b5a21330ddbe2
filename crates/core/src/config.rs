//! Tunable generation constants.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_WIDTH: usize = 80;
pub const DEFAULT_HEIGHT: usize = 30;
/// Upper bound for `width`, `height` and room sizes. Keeps tile counts and `i32`
/// coordinates far from overflow.
pub const MAX_DIMENSION: usize = 4096;
pub const MAX_ROOM_COUNT: usize = 100_000;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GenerationConfig {
    pub width: usize,
    pub height: usize,
    /// Inclusive lower bound of the room count draw.
    pub min_rooms: usize,
    /// Exclusive upper bound of the room count draw.
    pub max_rooms: usize,
    pub min_room_size: usize,
    /// Exclusive upper bound for room width and height.
    pub max_room_size: usize,
    pub max_items: usize,
    /// Gaussian sample a floor tile must exceed to become decoration.
    pub decoration_threshold: f64,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            min_rooms: 25,
            max_rooms: 30,
            min_room_size: 2,
            max_room_size: 10,
            max_items: 15,
            decoration_threshold: 0.8,
        }
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("grid {width}x{height} leaves no room origins for rooms up to {max_room_size} wide")]
    GridTooSmall { width: usize, height: usize, max_room_size: usize },
    #[error("grid {width}x{height} exceeds the {MAX_DIMENSION}x{MAX_DIMENSION} limit")]
    GridTooLarge { width: usize, height: usize },
    #[error("room count range [{min}, {max}) is empty or above {MAX_ROOM_COUNT}")]
    EmptyRoomCountRange { min: usize, max: usize },
    #[error("room size range [{min}, {max}) must be non-empty within [1, {MAX_DIMENSION}]")]
    InvalidRoomSizeRange { min: usize, max: usize },
    #[error("decoration threshold must be finite, got {0}")]
    NonFiniteThreshold(f64),
}

impl GenerationConfig {
    /// Room origins are drawn from `[1, dimension - room_margin())`.
    pub fn room_margin(&self) -> usize {
        self.max_room_size + 1
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(ConfigError::GridTooLarge { width: self.width, height: self.height });
        }
        if self.min_room_size == 0
            || self.min_room_size >= self.max_room_size
            || self.max_room_size > MAX_DIMENSION
        {
            return Err(ConfigError::InvalidRoomSizeRange {
                min: self.min_room_size,
                max: self.max_room_size,
            });
        }
        if self.min_rooms >= self.max_rooms || self.max_rooms > MAX_ROOM_COUNT {
            return Err(ConfigError::EmptyRoomCountRange {
                min: self.min_rooms,
                max: self.max_rooms,
            });
        }
        // Origins need a non-empty [1, dim - margin) range, and the door band needs
        // at least one column.
        let margin = self.room_margin();
        if self.width <= margin + 1 || self.height <= margin + 1 || self.width < 3 {
            return Err(ConfigError::GridTooSmall {
                width: self.width,
                height: self.height,
                max_room_size: self.max_room_size,
            });
        }
        if !self.decoration_threshold.is_finite() {
            return Err(ConfigError::NonFiniteThreshold(self.decoration_threshold));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GenerationConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_grids_without_room_origins() {
        let config = GenerationConfig { width: 12, height: 30, ..GenerationConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::GridTooSmall { .. })));

        let smallest = GenerationConfig { width: 13, height: 13, ..GenerationConfig::default() };
        assert_eq!(smallest.validate(), Ok(()));
    }

    #[test]
    fn rejects_oversized_grids_and_ranges() {
        let wide = GenerationConfig { width: 1 << 62, ..GenerationConfig::default() };
        assert_eq!(
            wide.validate(),
            Err(ConfigError::GridTooLarge { width: 1 << 62, height: DEFAULT_HEIGHT })
        );

        let tall = GenerationConfig { height: MAX_DIMENSION + 1, ..GenerationConfig::default() };
        assert!(matches!(tall.validate(), Err(ConfigError::GridTooLarge { .. })));

        let largest = GenerationConfig {
            width: MAX_DIMENSION,
            height: MAX_DIMENSION,
            ..GenerationConfig::default()
        };
        assert_eq!(largest.validate(), Ok(()));

        let huge_rooms =
            GenerationConfig { max_room_size: usize::MAX, ..GenerationConfig::default() };
        assert!(matches!(huge_rooms.validate(), Err(ConfigError::InvalidRoomSizeRange { .. })));

        let many_rooms =
            GenerationConfig { max_rooms: MAX_ROOM_COUNT + 1, ..GenerationConfig::default() };
        assert!(matches!(many_rooms.validate(), Err(ConfigError::EmptyRoomCountRange { .. })));
    }

    #[test]
    fn rejects_empty_ranges() {
        let rooms = GenerationConfig { min_rooms: 5, max_rooms: 5, ..GenerationConfig::default() };
        assert_eq!(rooms.validate(), Err(ConfigError::EmptyRoomCountRange { min: 5, max: 5 }));

        let sizes =
            GenerationConfig { min_room_size: 0, max_room_size: 4, ..GenerationConfig::default() };
        assert!(matches!(sizes.validate(), Err(ConfigError::InvalidRoomSizeRange { .. })));
    }

    #[test]
    fn rejects_nan_threshold() {
        let config =
            GenerationConfig { decoration_threshold: f64::NAN, ..GenerationConfig::default() };
        assert!(matches!(config.validate(), Err(ConfigError::NonFiniteThreshold(_))));
    }

    #[test]
    fn partial_documents_fall_back_to_defaults() {
        let config: GenerationConfig =
            serde_json::from_str(r#"{ "width": 60, "max_items": 3 }"#).unwrap();
        assert_eq!(config.width, 60);
        assert_eq!(config.max_items, 3);
        assert_eq!(config.height, DEFAULT_HEIGHT);
        assert_eq!(config.max_rooms, 30);
    }
}
