use crate::types::{Pos, TileKind};

use super::grid::Grid;

/// Scans the band `x in [W/3, 2W/3)`, `y in [0, H/2)` (x outer, y ascending) for a wall
/// with walkable ground above and empty space or the map edge below. The first match
/// becomes a locked door; returns the door position.
pub(super) fn place_door(grid: &mut Grid) -> Option<Pos> {
    let (width, height) = (grid.width() as i32, grid.height() as i32);
    for x in (width / 3)..(width * 2 / 3) {
        for y in 0..(height / 2) {
            let pos = Pos { y, x };
            if is_door_site(grid, pos) {
                grid.set(pos, TileKind::LockedDoor);
                return Some(pos);
            }
        }
    }
    None
}

fn is_door_site(grid: &Grid, pos: Pos) -> bool {
    let above = Pos { y: pos.y + 1, x: pos.x };
    let below = Pos { y: pos.y - 1, x: pos.x };
    grid.tile_at(pos) == TileKind::Wall
        && grid.get(above).is_some_and(TileKind::is_walkable_ground)
        && (pos.y == 0 || grid.tile_at(below) == TileKind::Empty)
}
