//! Player movement and item collection.

use super::*;
use crate::types::{Direction, MoveMode, MoveOutcome};

impl DungeonMap {
    /// Moves the player one cell (`Normal`) or until blocked (`Slide`). Blocked or
    /// off-map moves are no-ops. An item on the final cell is collected.
    pub fn step(&mut self, direction: Direction, mode: MoveMode) -> MoveOutcome {
        let steps = match mode {
            MoveMode::Normal => u32::from(self.try_advance(direction)),
            MoveMode::Slide => {
                let mut steps = 0;
                while self.try_advance(direction) {
                    steps += 1;
                }
                steps
            }
        };
        let collected = self.items.remove(&self.player).then_some(self.player);
        MoveOutcome { steps, collected }
    }

    pub fn can_enter(&self, pos: Pos) -> bool {
        self.grid.get(pos).is_some_and(|tile| !tile.blocks_movement())
    }

    fn try_advance(&mut self, direction: Direction) -> bool {
        let next = self.player.offset(direction);
        if !self.can_enter(next) {
            return false;
        }
        self.player = next;
        true
    }
}
