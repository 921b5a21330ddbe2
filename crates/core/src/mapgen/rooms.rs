//! Random room placement. Rooms may overlap; stamping the same floor twice is harmless.

use crate::config::GenerationConfig;
use crate::random::RandomSource;
use crate::types::{Pos, TileKind};

use super::grid::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct RoomRect {
    pub(super) x: usize,
    pub(super) y: usize,
    pub(super) width: usize,
    pub(super) height: usize,
}

impl RoomRect {
    fn right(self) -> usize {
        self.x + self.width - 1
    }

    fn top(self) -> usize {
        self.y + self.height - 1
    }

    #[cfg(test)]
    pub(super) fn contains(self, pos: Pos) -> bool {
        let (px, py) = (pos.x as usize, pos.y as usize);
        pos.x >= 0 && pos.y >= 0 && px >= self.x && px <= self.right() && py >= self.y
            && py <= self.top()
    }
}

/// Draws the room count, then `x, y, width, height` for each room, in that order.
pub(super) fn build_room_scheme(
    random: &mut RandomSource,
    config: &GenerationConfig,
) -> Vec<RoomRect> {
    let room_count = random.uniform_range(config.min_rooms, config.max_rooms);
    let margin = config.room_margin();

    (0..room_count)
        .map(|_| {
            let x = random.uniform_range(1, config.width - margin);
            let y = random.uniform_range(1, config.height - margin);
            let width = random.uniform_range(config.min_room_size, config.max_room_size);
            let height = random.uniform_range(config.min_room_size, config.max_room_size);
            RoomRect { x, y, width, height }
        })
        .collect()
}

pub(super) fn carve_room(grid: &mut Grid, room: &RoomRect) {
    for x in room.x..=room.right() {
        for y in room.y..=room.top() {
            grid.set(Pos { y: y as i32, x: x as i32 }, TileKind::Floor);
        }
    }
}

pub(super) fn place_rooms(
    grid: &mut Grid,
    random: &mut RandomSource,
    config: &GenerationConfig,
) -> usize {
    let rooms = build_room_scheme(random, config);
    for room in &rooms {
        carve_room(grid, room);
    }
    rooms.len()
}
