//! Save blobs for a [`DungeonMap`] session.
//!
//! A save is a JSON envelope `{ format_version, sha256_hex, state }` where
//! `sha256_hex` is the SHA-256 of the canonical JSON of `state`. Loading verifies
//! the version, the checksum and every structural invariant before rebuilding the
//! map, so a restored session renders the exact same snapshot and continues the
//! same random stream.

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::iter;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::info;

use crate::config::{ConfigError, GenerationConfig};
use crate::dungeon::DungeonMap;
use crate::mapgen::Grid;
use crate::random::{RandomSource, RandomState};
use crate::types::{Pos, TileKind};

pub const SAVE_FORMAT_VERSION: u16 = 1;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("save JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unsupported save format version {found} (expected {SAVE_FORMAT_VERSION})")]
    UnsupportedVersion { found: u16 },
    #[error("save checksum mismatch")]
    ChecksumMismatch,
    #[error("save holds {tiles} tiles for a {width}x{height} grid")]
    DimensionMismatch { width: usize, height: usize, tiles: usize },
    #[error("save grid stores overlay tile {tile:?} at index {index}")]
    OverlayTile { tile: TileKind, index: usize },
    #[error("saved position {pos:?} lies outside the grid")]
    OutOfBounds { pos: Pos },
    #[error("saved generation config is invalid: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Serialize, Deserialize)]
struct SaveEnvelope {
    format_version: u16,
    sha256_hex: String,
    state: SavedState,
}

#[derive(Serialize, Deserialize)]
struct SavedState {
    config: GenerationConfig,
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
    random: RandomState,
    player: Pos,
    items: BTreeSet<Pos>,
    door: Option<Pos>,
}

fn state_sha256(state: &SavedState) -> Result<String, SaveError> {
    let body = serde_json::to_vec(state)?;
    let digest = Sha256::digest(&body);
    Ok(format!("{digest:064x}"))
}

impl DungeonMap {
    pub fn to_bytes(&self) -> Result<Vec<u8>, SaveError> {
        let state = SavedState {
            config: self.config().clone(),
            width: self.width(),
            height: self.height(),
            tiles: self.grid().tiles().to_vec(),
            random: self.random().state(),
            player: self.player(),
            items: self.items().clone(),
            door: self.door(),
        };
        let sha256_hex = state_sha256(&state)?;
        let envelope = SaveEnvelope { format_version: SAVE_FORMAT_VERSION, sha256_hex, state };
        Ok(serde_json::to_vec(&envelope)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SaveError> {
        let envelope: SaveEnvelope = serde_json::from_slice(bytes)?;
        if envelope.format_version != SAVE_FORMAT_VERSION {
            return Err(SaveError::UnsupportedVersion { found: envelope.format_version });
        }
        if state_sha256(&envelope.state)? != envelope.sha256_hex {
            return Err(SaveError::ChecksumMismatch);
        }

        let SavedState { config, width, height, tiles, random, player, items, door } =
            envelope.state;
        config.validate()?;
        if config.width != width || config.height != height {
            return Err(SaveError::DimensionMismatch { width, height, tiles: tiles.len() });
        }
        if let Some((index, &tile)) = tiles.iter().enumerate().find(|(_, tile)| tile.is_overlay())
        {
            return Err(SaveError::OverlayTile { tile, index });
        }
        let tile_count = tiles.len();
        let grid = Grid::from_tiles(width, height, tiles).ok_or(SaveError::DimensionMismatch {
            width,
            height,
            tiles: tile_count,
        })?;
        for pos in iter::once(player).chain(items.iter().copied()).chain(door) {
            if !grid.in_bounds(pos) {
                return Err(SaveError::OutOfBounds { pos });
            }
        }

        Ok(Self::from_parts(config, grid, RandomSource::from_state(random), player, items, door))
    }

    /// Writes through a temporary sibling file and renames it into place.
    pub fn write_atomic(&self, path: &Path) -> Result<(), SaveError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, self.to_bytes()?)?;
        fs::rename(&tmp_path, path)?;
        info!(path = %path.display(), items = self.items_remaining(), "dungeon saved");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self, SaveError> {
        let map = Self::from_bytes(&fs::read(path)?)?;
        info!(path = %path.display(), seed = map.seed(), "dungeon loaded");
        Ok(map)
    }
}
