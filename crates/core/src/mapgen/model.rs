//! Public data models produced by the generation pipeline.

use std::collections::BTreeSet;

use crate::types::{Pos, TileKind};

use super::grid::Grid;

/// Per-stage counters, useful for logging and tests. Not part of the persisted state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub rooms: usize,
    pub regions_linked: usize,
    pub walls: usize,
    pub decorations: usize,
    pub items: usize,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMap {
    pub grid: Grid,
    pub items: BTreeSet<Pos>,
    /// `None` when no door site exists; the start then falls back to [`Pos::ORIGIN`].
    pub door: Option<Pos>,
    pub start: Pos,
    pub report: GenerationReport,
}

impl GeneratedMap {
    pub fn is_degenerate(&self) -> bool {
        self.door.is_none()
    }
}

pub(crate) fn tile_code(tile: TileKind) -> u8 {
    match tile {
        TileKind::Empty => 0,
        TileKind::Floor => 1,
        TileKind::Decoration => 2,
        TileKind::Wall => 3,
        TileKind::LockedDoor => 4,
        TileKind::Player => 5,
        TileKind::Item => 6,
    }
}

/// Stable byte encoding of a map state, used for fingerprints.
pub(crate) fn canonical_bytes(grid: &Grid, player: Pos, items: &BTreeSet<Pos>) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(grid.tiles().len() + 16 + items.len() * 8);
    bytes.extend((grid.width() as u32).to_le_bytes());
    bytes.extend((grid.height() as u32).to_le_bytes());
    bytes.extend(grid.tiles().iter().map(|&tile| tile_code(tile)));
    bytes.extend(player.y.to_le_bytes());
    bytes.extend(player.x.to_le_bytes());
    bytes.extend((items.len() as u32).to_le_bytes());
    for item in items {
        bytes.extend(item.y.to_le_bytes());
        bytes.extend(item.x.to_le_bytes());
    }
    bytes
}
