pub mod command;
pub mod config;
pub mod dungeon;
pub mod mapgen;
pub mod random;
pub mod save;
pub mod types;

pub use command::{
    RunSummary, Script, ScriptError, Start, Step, parse_script, run_steps, run_steps_with,
};
pub use config::{ConfigError, GenerationConfig};
pub use dungeon::{DungeonMap, generate};
pub use mapgen::{GeneratedMap, GenerationReport, Grid, MapGenerator, generate_map};
pub use random::{RandomSource, RandomState};
pub use save::{SAVE_FORMAT_VERSION, SaveError};
pub use types::*;
