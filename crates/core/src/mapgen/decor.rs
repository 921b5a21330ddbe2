//! Decoration scattering and item placement.

use crate::random::RandomSource;
use crate::types::{Pos, TileKind};

use super::grid::Grid;

/// One Gaussian draw per floor cell, in column-major order; samples above `threshold`
/// turn the cell into decoration.
pub(super) fn scatter_decoration(
    grid: &mut Grid,
    random: &mut RandomSource,
    threshold: f64,
) -> usize {
    let mut decorated = 0;
    for pos in grid.positions_column_major() {
        if grid.tile_at(pos) == TileKind::Floor && random.gaussian() > threshold {
            grid.set(pos, TileKind::Decoration);
            decorated += 1;
        }
    }
    decorated
}

/// Picks up to `max_items` distinct walkable cells without replacement.
pub(super) fn place_items(grid: &Grid, random: &mut RandomSource, max_items: usize) -> Vec<Pos> {
    let mut candidates: Vec<Pos> = grid
        .positions_column_major()
        .filter(|&pos| grid.tile_at(pos).is_walkable_ground())
        .collect();

    let count = candidates.len().min(max_items);
    (0..count)
        .map(|_| {
            let index = random.uniform(candidates.len());
            candidates.remove(index)
        })
        .collect()
}
