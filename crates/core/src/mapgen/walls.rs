use crate::types::TileKind;

use super::grid::{Grid, surrounding_neighbors};

/// Turns every empty cell in the 8-neighborhood of a floor cell into wall. Walls only
/// ever replace `Empty`, so scan order does not change the result.
pub(super) fn draw_walls(grid: &mut Grid) -> usize {
    let mut walls = 0;
    for pos in grid.positions_column_major() {
        if grid.tile_at(pos) != TileKind::Floor {
            continue;
        }
        for neighbor in surrounding_neighbors(pos) {
            if grid.get(neighbor) == Some(TileKind::Empty) {
                grid.set(neighbor, TileKind::Wall);
                walls += 1;
            }
        }
    }
    walls
}
