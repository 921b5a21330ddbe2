//! Stable state hashing for deterministic verification.

use xxhash_rust::xxh3::xxh3_64;

use super::*;
use crate::mapgen::model::canonical_bytes;

impl DungeonMap {
    /// Hash of the persisted grid, player position and remaining items.
    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&canonical_bytes(&self.grid, self.player, &self.items))
    }
}
