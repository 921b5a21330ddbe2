//! Plain-text rendering of dungeon snapshots.

use dungeon::{Grid, Pos, TileKind};

pub fn glyph(tile: TileKind) -> char {
    match tile {
        TileKind::Empty => ' ',
        TileKind::Floor => '.',
        TileKind::Decoration => '"',
        TileKind::Wall => '#',
        TileKind::LockedDoor => '+',
        TileKind::Player => '@',
        TileKind::Item => '$',
    }
}

/// One line per row, top row first. Row `height - 1` is printed first because `y` grows
/// upward.
pub fn render_ascii(grid: &Grid) -> String {
    let mut out = String::with_capacity((grid.width() + 1) * grid.height());
    for y in (0..grid.height() as i32).rev() {
        let row: String =
            (0..grid.width() as i32).map(|x| glyph(grid.tile_at(Pos { y, x }))).collect();
        out.push_str(row.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use dungeon::DungeonMap;
    use proptest::prelude::*;

    #[test]
    fn bottom_row_is_printed_last() {
        let mut grid = Grid::new(3, 2);
        grid.set(Pos { y: 0, x: 0 }, TileKind::Wall);
        grid.set(Pos { y: 1, x: 2 }, TileKind::Floor);
        grid.set(Pos { y: 1, x: 1 }, TileKind::LockedDoor);

        assert_eq!(render_ascii(&grid), " +.\n#\n");
    }

    #[test]
    fn snapshot_shows_player_and_items() {
        let map = DungeonMap::new_game(Some(123));
        let text = render_ascii(&map.snapshot());

        assert_eq!(text.lines().count(), 30);
        assert_eq!(text.matches('@').count(), 1);
        assert_eq!(text.matches('$').count(), map.items_remaining());
        assert_eq!(text.matches('+').count(), 1);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]
        #[test]
        fn rendered_rows_fit_the_grid(seed in any::<u64>()) {
            let map = DungeonMap::new_game(Some(seed));
            let text = render_ascii(&map.snapshot());
            prop_assert_eq!(text.lines().count(), map.height());
            for line in text.lines() {
                prop_assert!(line.chars().count() <= map.width());
            }
        }
    }
}
