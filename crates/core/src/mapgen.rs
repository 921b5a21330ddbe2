//! Procedural map generation split into one module per pipeline stage.

pub mod model;

mod decor;
mod door;
mod generator;
mod grid;
mod regions;
mod rooms;
mod walls;

pub use generator::MapGenerator;
pub use grid::Grid;
pub use model::{GeneratedMap, GenerationReport};

use crate::config::{ConfigError, GenerationConfig};
use crate::random::RandomSource;

pub fn generate_map(config: &GenerationConfig, seed: u64) -> Result<GeneratedMap, ConfigError> {
    config.validate()?;
    Ok(MapGenerator::new(config).generate(&mut RandomSource::new(seed)))
}
