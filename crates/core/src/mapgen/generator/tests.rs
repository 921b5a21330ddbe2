use std::collections::{BTreeSet, VecDeque};

use proptest::prelude::*;

use super::*;
use crate::mapgen::grid::{orthogonal_neighbors, surrounding_neighbors};
use crate::mapgen::regions::label_regions;
use crate::types::TileKind;

fn generate(seed: u64) -> GeneratedMap {
    let config = GenerationConfig::default();
    MapGenerator::new(&config).generate(&mut RandomSource::new(seed))
}

fn reachable_ground(grid: &Grid, start: Pos) -> BTreeSet<Pos> {
    let mut open = VecDeque::from([start]);
    let mut seen = BTreeSet::from([start]);
    while let Some(pos) = open.pop_front() {
        for next in orthogonal_neighbors(pos) {
            if seen.contains(&next) || !grid.tile_at(next).is_walkable_ground() {
                continue;
            }
            seen.insert(next);
            open.push_back(next);
        }
    }
    seen
}

fn all_ground_reachable_from_start(generated: &GeneratedMap) -> bool {
    let ground: BTreeSet<Pos> = generated
        .grid
        .positions_column_major()
        .filter(|&pos| generated.grid.tile_at(pos).is_walkable_ground())
        .collect();
    reachable_ground(&generated.grid, generated.start) == ground
}

fn walls_enclose_ground(grid: &Grid) -> bool {
    grid.positions_column_major()
        .filter(|&pos| grid.tile_at(pos).is_walkable_ground())
        .all(|pos| {
            surrounding_neighbors(pos).all(|neighbor| grid.get(neighbor) != Some(TileKind::Empty))
        })
}

#[test]
fn same_seed_produces_identical_maps() {
    let a = generate(123_456);
    let b = generate(123_456);
    assert_eq!(a, b);
}

#[test]
fn different_seeds_produce_different_maps() {
    assert_ne!(generate(1).grid, generate(2).grid);
}

#[test]
fn generated_map_has_door_with_player_directly_above() {
    for seed in [0_u64, 7, 123, 2_024, 99_999] {
        let generated = generate(seed);
        let door = generated.door.expect("default-size maps always have a door site");
        assert!(!generated.is_degenerate());
        assert_eq!(generated.grid.tile_at(door), TileKind::LockedDoor);
        assert_eq!(generated.start, Pos { y: door.y + 1, x: door.x });
        assert!(generated.grid.tile_at(generated.start).is_walkable_ground());
        assert!((26..53).contains(&door.x) && (0..15).contains(&door.y), "door {door:?}");
        assert_eq!(generated.grid.count(TileKind::LockedDoor), 1);
    }
}

#[test]
fn generated_map_never_stores_overlay_tiles() {
    let generated = generate(31_337);
    assert_eq!(generated.grid.count(TileKind::Player), 0);
    assert_eq!(generated.grid.count(TileKind::Item), 0);
}

#[test]
fn items_sit_on_distinct_walkable_cells() {
    let generated = generate(4_242);
    assert_eq!(generated.items.len(), 15);
    assert_eq!(generated.report.items, 15);
    for item in &generated.items {
        assert!(generated.grid.tile_at(*item).is_walkable_ground(), "item on {item:?}");
    }
}

#[test]
fn item_drawn_on_the_start_cell_is_dropped() {
    // Each of these seeds draws one of its 15 items onto the start cell.
    for seed in [92_u64, 95, 100, 105, 107, 130] {
        let generated = generate(seed);
        assert!(!generated.items.contains(&generated.start), "seed {seed}");
        assert_eq!(generated.items.len(), 14, "seed {seed}");
        assert_eq!(generated.report.items, 14, "seed {seed}");
    }
}

#[test]
fn decoration_report_matches_grid() {
    let generated = generate(8);
    assert_eq!(generated.report.decorations, generated.grid.count(TileKind::Decoration));
    assert_eq!(
        generated.report.walls,
        generated.grid.count(TileKind::Wall) + generated.grid.count(TileKind::LockedDoor)
    );
    assert!((25..30).contains(&generated.report.rooms));
}

#[test]
fn floor_is_a_single_region_after_generation() {
    let generated = generate(444_444);
    let mut ground_only = Grid::new(generated.grid.width(), generated.grid.height());
    for pos in generated.grid.positions_column_major() {
        if generated.grid.tile_at(pos).is_walkable_ground() {
            ground_only.set(pos, TileKind::Floor);
        }
    }
    assert_eq!(label_regions(&ground_only).region_count(), 1);
}

#[test]
fn tiny_band_yields_degenerate_map_without_panicking() {
    let config = GenerationConfig {
        width: 13,
        height: 13,
        min_rooms: 1,
        max_rooms: 2,
        ..GenerationConfig::default()
    };
    for seed in 0..50 {
        let generated = MapGenerator::new(&config).generate(&mut RandomSource::new(seed));
        if generated.is_degenerate() {
            assert_eq!(generated.start, Pos::ORIGIN);
            assert_eq!(generated.grid.count(TileKind::LockedDoor), 0);
        } else {
            assert!(generated.grid.tile_at(generated.start).is_walkable_ground());
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]
    #[test]
    fn generated_maps_are_connected_and_walled(seed in any::<u64>()) {
        let generated = generate(seed);
        prop_assert!(
            all_ground_reachable_from_start(&generated),
            "seed={seed} left ground unreachable from {:?}", generated.start
        );
        prop_assert!(walls_enclose_ground(&generated.grid), "seed={seed} leaks into empty space");
        prop_assert!(!generated.items.contains(&generated.start), "seed={seed} item on start");
    }
}
