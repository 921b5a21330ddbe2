//! The dungeon session: one generated grid, its random source, the player and the
//! uncollected items.

mod fingerprint;
mod movement;

use std::collections::BTreeSet;

use crate::config::{ConfigError, GenerationConfig};
use crate::mapgen::{GenerationReport, Grid, MapGenerator};
use crate::random::RandomSource;
use crate::types::{Pos, TileKind};

pub struct DungeonMap {
    config: GenerationConfig,
    grid: Grid,
    random: RandomSource,
    player: Pos,
    items: BTreeSet<Pos>,
    door: Option<Pos>,
}

impl DungeonMap {
    /// An ungenerated map: all `Empty`, player at the origin, no items.
    pub fn empty(config: GenerationConfig, random: RandomSource) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::blank(config, random))
    }

    /// Generates a default-sized (80x30) dungeon. `None` seeds from runtime entropy.
    pub fn new_game(seed: Option<u64>) -> Self {
        let mut map = Self::blank(GenerationConfig::default(), random_source(seed));
        map.generate();
        map
    }

    pub fn new_game_with(config: GenerationConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        let mut map = Self::empty(config, random_source(seed))?;
        map.generate();
        Ok(map)
    }

    fn blank(config: GenerationConfig, random: RandomSource) -> Self {
        let grid = Grid::new(config.width, config.height);
        Self { config, grid, random, player: Pos::ORIGIN, items: BTreeSet::new(), door: None }
    }

    /// Runs the full pipeline from the current random state, replacing the grid, the
    /// items and the player position.
    pub fn generate(&mut self) -> GenerationReport {
        let generated = MapGenerator::new(&self.config).generate(&mut self.random);
        self.grid = generated.grid;
        self.items = generated.items;
        self.door = generated.door;
        self.player = generated.start;
        generated.report
    }

    /// Persisted tiles with items and then the player drawn on top, in a fresh grid.
    pub fn snapshot(&self) -> Grid {
        let mut view = self.grid.clone();
        for &item in &self.items {
            view.set(item, TileKind::Item);
        }
        view.set(self.player, TileKind::Player);
        view
    }

    pub fn config(&self) -> &GenerationConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn tile_at(&self, pos: Pos) -> TileKind {
        self.grid.tile_at(pos)
    }

    pub fn player(&self) -> Pos {
        self.player
    }

    pub fn items(&self) -> &BTreeSet<Pos> {
        &self.items
    }

    pub fn items_remaining(&self) -> usize {
        self.items.len()
    }

    pub fn door(&self) -> Option<Pos> {
        self.door
    }

    /// True when generation found no door site and the player sits on the origin sentinel.
    pub fn is_degenerate(&self) -> bool {
        self.door.is_none()
    }

    pub fn seed(&self) -> u64 {
        self.random.seed()
    }

    pub(crate) fn random(&self) -> &RandomSource {
        &self.random
    }

    pub(crate) fn from_parts(
        config: GenerationConfig,
        grid: Grid,
        random: RandomSource,
        player: Pos,
        items: BTreeSet<Pos>,
        door: Option<Pos>,
    ) -> Self {
        Self { config, grid, random, player, items, door }
    }
}

/// Builds a fresh default-sized dungeon session; shorthand for [`DungeonMap::new_game`].
pub fn generate(seed: Option<u64>) -> DungeonMap {
    DungeonMap::new_game(seed)
}

fn random_source(seed: Option<u64>) -> RandomSource {
    seed.map_or_else(RandomSource::from_entropy, RandomSource::new)
}
