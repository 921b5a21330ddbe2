//! High-level generation orchestration: rooms, region links, walls, decoration, door.
//!
//! The stage order is part of the reproducibility contract: every stage that consumes
//! randomness draws from the same [`RandomSource`] in a fixed order, so a seed always
//! yields the same map.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::config::GenerationConfig;
use crate::random::RandomSource;
use crate::types::Pos;

use super::decor::{place_items, scatter_decoration};
use super::door::place_door;
use super::grid::Grid;
use super::model::{GeneratedMap, GenerationReport};
use super::regions::link_regions;
use super::rooms::place_rooms;
use super::walls::draw_walls;

pub struct MapGenerator<'a> {
    config: &'a GenerationConfig,
}

impl<'a> MapGenerator<'a> {
    pub fn new(config: &'a GenerationConfig) -> Self {
        Self { config }
    }

    /// Runs every stage once. The config must pass [`GenerationConfig::validate`]; room
    /// origin ranges underflow otherwise.
    pub fn generate(&self, random: &mut RandomSource) -> GeneratedMap {
        debug_assert!(self.config.validate().is_ok(), "invalid generation config");
        let config = self.config;
        let mut grid = Grid::new(config.width, config.height);
        let mut report = GenerationReport::default();

        report.rooms = place_rooms(&mut grid, random, config);
        debug!(rooms = report.rooms, "rooms placed");

        report.regions_linked = link_regions(&mut grid, random);
        debug!(regions = report.regions_linked, "regions linked");

        report.walls = draw_walls(&mut grid);
        report.decorations = scatter_decoration(&mut grid, random, config.decoration_threshold);
        let mut items: BTreeSet<Pos> =
            place_items(&grid, random, config.max_items).into_iter().collect();
        debug!(walls = report.walls, decorations = report.decorations, "map dressed");

        let door = place_door(&mut grid);
        let start = match door {
            Some(door) => Pos { y: door.y + 1, x: door.x },
            None => {
                warn!(
                    seed = random.seed(),
                    width = config.width,
                    height = config.height,
                    "no door site found; player left at the origin"
                );
                Pos::ORIGIN
            }
        };

        // The player begins standing on the start cell, so an item there counts as taken.
        if items.remove(&start) {
            debug!(?start, "item under the start cell dropped");
        }
        report.items = items.len();

        GeneratedMap { grid, items, door, start, report }
    }
}

#[cfg(test)]
mod tests;
