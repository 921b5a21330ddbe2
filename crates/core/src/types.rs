use serde::{Deserialize, Serialize};

/// Grid coordinate. `y` grows upward: row 0 is the bottom edge of the map.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub const ORIGIN: Pos = Pos { y: 0, x: 0 };

    pub fn offset(self, direction: Direction) -> Pos {
        let (dy, dx) = direction.delta();
        Pos { y: self.y + dy, x: self.x + dx }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TileKind {
    Empty,
    Floor,
    Decoration,
    Wall,
    LockedDoor,
    /// Overlay produced by snapshots; never stored in a persisted grid.
    Player,
    /// Overlay produced by snapshots; never stored in a persisted grid.
    Item,
}

impl TileKind {
    pub fn is_walkable_ground(self) -> bool {
        matches!(self, TileKind::Floor | TileKind::Decoration)
    }

    pub fn blocks_movement(self) -> bool {
        matches!(self, TileKind::Wall | TileKind::LockedDoor)
    }

    pub fn is_overlay(self) -> bool {
        matches!(self, TileKind::Player | TileKind::Item)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] =
        [Direction::Up, Direction::Left, Direction::Down, Direction::Right];

    /// `(dy, dx)` for one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (1, 0),
            Direction::Down => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveMode {
    #[default]
    Normal,
    /// Keep moving until the next cell is blocked or off the map.
    Slide,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub steps: u32,
    pub collected: Option<Pos>,
}

impl MoveOutcome {
    pub fn moved(&self) -> bool {
        self.steps > 0
    }
}
