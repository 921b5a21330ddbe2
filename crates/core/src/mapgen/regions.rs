//! Connected-region labeling and corridor linking.
//!
//! Every non-empty cell is labeled with the 4-connected region it belongs to, regions
//! are numbered in column-major discovery order, and each region is then joined to the
//! next one with an L-shaped corridor. The resulting chain makes the whole floor one
//! 4-connected area.

use crate::random::RandomSource;
use crate::types::{Pos, TileKind};

use super::grid::{Grid, orthogonal_neighbors};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Label {
    Void,
    Unvisited,
    Region(u32),
}

#[derive(Debug)]
pub(super) struct RegionMap {
    width: usize,
    labels: Vec<Label>,
    region_count: u32,
}

impl RegionMap {
    pub(super) fn label_at(&self, pos: Pos) -> Label {
        self.labels[(pos.y as usize) * self.width + (pos.x as usize)]
    }

    pub(super) fn region_count(&self) -> u32 {
        self.region_count
    }
}

pub(super) fn label_regions(grid: &Grid) -> RegionMap {
    let mut labels: Vec<Label> = grid
        .tiles()
        .iter()
        .map(|&tile| if tile == TileKind::Empty { Label::Void } else { Label::Unvisited })
        .collect();

    let mut region_count = 0_u32;
    for pos in grid.positions_column_major() {
        if labels[grid.index(pos)] == Label::Unvisited {
            region_count += 1;
            flood_fill(grid, &mut labels, pos, region_count);
        }
    }

    RegionMap { width: grid.width(), labels, region_count }
}

fn flood_fill(grid: &Grid, labels: &mut [Label], start: Pos, region: u32) {
    let mut pending = vec![start];
    while let Some(pos) = pending.pop() {
        if !grid.in_bounds(pos) {
            continue;
        }
        let idx = grid.index(pos);
        if labels[idx] != Label::Unvisited {
            continue;
        }
        labels[idx] = Label::Region(region);
        pending.extend(orthogonal_neighbors(pos));
    }
}

/// Positions of each region, indexed by `region id - 1`, each list in column-major order.
pub(super) fn group_regions(grid: &Grid, region_map: &RegionMap) -> Vec<Vec<Pos>> {
    let mut regions = vec![Vec::new(); region_map.region_count() as usize];
    for pos in grid.positions_column_major() {
        if let Label::Region(region) = region_map.label_at(pos) {
            regions[(region - 1) as usize].push(pos);
        }
    }
    regions
}

/// Joins region `i` to region `i + 1` for every consecutive pair. Returns the number of
/// regions found before linking.
pub(super) fn link_regions(grid: &mut Grid, random: &mut RandomSource) -> usize {
    let region_map = label_regions(grid);
    let regions = group_regions(grid, &region_map);

    for pair in regions.windows(2) {
        let from = pair[0][random.uniform(pair[0].len())];
        let to = pair[1][random.uniform(pair[1].len())];
        carve_corridor(grid, from, to);
    }

    regions.len()
}

/// Vertical leg at `from.x`, then horizontal leg at `to.y`, both inclusive.
pub(super) fn carve_corridor(grid: &mut Grid, from: Pos, to: Pos) {
    for y in from.y.min(to.y)..=from.y.max(to.y) {
        grid.set(Pos { y, x: from.x }, TileKind::Floor);
    }
    for x in from.x.min(to.x)..=from.x.max(to.x) {
        grid.set(Pos { y: to.y, x }, TileKind::Floor);
    }
}
