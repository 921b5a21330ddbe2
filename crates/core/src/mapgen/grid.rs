//! Fixed-size tile grid shared by every generation stage.

use crate::types::{Pos, TileKind};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid {
    width: usize,
    height: usize,
    tiles: Vec<TileKind>,
}

impl Grid {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, tiles: vec![TileKind::Empty; width * height] }
    }

    /// Builds a grid from row-major tiles (`y * width + x`); `None` if the length is wrong.
    pub fn from_tiles(width: usize, height: usize, tiles: Vec<TileKind>) -> Option<Self> {
        let expected = width.checked_mul(height)?;
        (tiles.len() == expected).then_some(Self { width, height, tiles })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn tiles(&self) -> &[TileKind] {
        &self.tiles
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.x >= 0 && pos.y >= 0 && (pos.x as usize) < self.width && (pos.y as usize) < self.height
    }

    pub fn get(&self, pos: Pos) -> Option<TileKind> {
        self.in_bounds(pos).then(|| self.tiles[self.index(pos)])
    }

    /// Out-of-bounds reads see `Empty`.
    pub fn tile_at(&self, pos: Pos) -> TileKind {
        self.get(pos).unwrap_or(TileKind::Empty)
    }

    /// Out-of-bounds writes are ignored.
    pub fn set(&mut self, pos: Pos, tile: TileKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    /// Every position, x outer and y inner. Generation stages that draw randomness
    /// per cell rely on this order.
    pub fn positions_column_major(&self) -> impl Iterator<Item = Pos> + use<> {
        let (width, height) = (self.width as i32, self.height as i32);
        (0..width).flat_map(move |x| (0..height).map(move |y| Pos { y, x }))
    }

    pub fn count(&self, tile: TileKind) -> usize {
        self.tiles.iter().filter(|&&candidate| candidate == tile).count()
    }

    pub(crate) fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

pub(super) fn orthogonal_neighbors(pos: Pos) -> [Pos; 4] {
    [
        Pos { y: pos.y, x: pos.x + 1 },
        Pos { y: pos.y + 1, x: pos.x },
        Pos { y: pos.y, x: pos.x - 1 },
        Pos { y: pos.y - 1, x: pos.x },
    ]
}

pub(super) fn surrounding_neighbors(pos: Pos) -> impl Iterator<Item = Pos> {
    (-1..=1).flat_map(move |dy| {
        (-1..=1)
            .filter(move |&dx| dy != 0 || dx != 0)
            .map(move |dx| Pos { y: pos.y + dy, x: pos.x + dx })
    })
}
