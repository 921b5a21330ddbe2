use anyhow::{Result, ensure};
use clap::Parser;
use dungeon::{Direction, DungeonMap, MoveMode, TileKind};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Number of consecutive seeds to explore
    #[arg(short, long, default_value_t = 20)]
    maps: u64,
    /// Moves per map
    #[arg(long, default_value_t = 1000)]
    moves: u32,
}

fn choose<T: Copy>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p]
}

fn check_map(map: &DungeonMap) -> Result<()> {
    let player = map.player();
    ensure!(map.grid().in_bounds(player), "player {player:?} left the grid");
    ensure!(!map.tile_at(player).blocks_movement(), "player {player:?} inside a wall");
    ensure!(!map.items().contains(&player), "item left under the player at {player:?}");
    let snapshot = map.snapshot();
    ensure!(snapshot.count(TileKind::Player) == 1, "snapshot must show exactly one player");
    ensure!(map.grid().count(TileKind::Player) == 0, "player stored in the persisted grid");
    ensure!(map.grid().count(TileKind::Item) == 0, "item stored in the persisted grid");
    Ok(())
}

fn fuzz_seed(seed: u64, moves: u32) -> Result<()> {
    let mut map = DungeonMap::new_game(Some(seed));
    ensure!(!map.is_degenerate(), "seed {seed} produced no door");
    check_map(&map)?;
    let layout = map.grid().clone();
    let max_slide = map.width().max(map.height()) as u32;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut items_left = map.items_remaining();

    for turn in 0..moves {
        let direction = choose(&mut rng, &Direction::ALL);
        let mode = choose(&mut rng, &[MoveMode::Normal, MoveMode::Normal, MoveMode::Slide]);
        let outcome = map.step(direction, mode);

        ensure!(outcome.steps <= max_slide, "seed {seed}: slide of {} cells", outcome.steps);
        ensure!(map.items_remaining() <= items_left, "seed {seed}: items reappeared");
        items_left = map.items_remaining();
        check_map(&map)?;

        // Periodically round-trip through a save blob.
        if turn % 250 == 0 {
            let restored = DungeonMap::from_bytes(&map.to_bytes()?)?;
            ensure!(
                restored.fingerprint() == map.fingerprint(),
                "seed {seed}: save round trip changed the fingerprint at turn {turn}"
            );
        }
    }

    ensure!(map.grid() == &layout, "seed {seed}: movement changed the layout");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let end = args.seed.saturating_add(args.maps);

    println!(
        "Starting fuzz harness on seeds {}..{} with {} moves each...",
        args.seed, end, args.moves
    );
    for seed in args.seed..end {
        fuzz_seed(seed, args.moves)?;
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
