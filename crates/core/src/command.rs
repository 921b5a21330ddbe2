//! Keystroke script protocol used by non-interactive front ends.
//!
//! A script starts with `n` (new game, optionally followed by decimal seed digits) or
//! `l` (load the saved game), followed by movement keys. `w`/`k` move up, `a`/`h` left,
//! `s`/`j` down and `d`/`l` right, case-insensitively. `:w` saves the map as it stands at
//! that point, `:q` saves and quits. Any other character is ignored.
//!
//! Example: `n123sswwd:q` builds the seed-123 dungeon, moves down twice, up twice, right
//! once, then saves and quits.

use std::convert::Infallible;

use thiserror::Error;

use crate::dungeon::DungeonMap;
use crate::types::{Direction, MoveMode};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Start {
    /// `None` means no seed digits were given.
    New { seed: Option<u64> },
    Load,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Move(Direction),
    Save,
    SaveAndQuit,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Script {
    pub start: Start,
    pub steps: Vec<Step>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScriptError {
    #[error("script is empty")]
    Empty,
    #[error("script must start with 'n' or 'l', found {0:?}")]
    UnknownStart(char),
    #[error("seed {0} does not fit in 64 bits")]
    SeedOverflow(String),
    #[error("unknown option ':{0}' at offset {1}")]
    UnknownOption(char, usize),
    #[error("option marker ':' at offset {0} has no option")]
    DanglingOption(usize),
}

pub fn key_direction(key: char) -> Option<Direction> {
    match key.to_ascii_lowercase() {
        'w' | 'k' => Some(Direction::Up),
        'a' | 'h' => Some(Direction::Left),
        's' | 'j' => Some(Direction::Down),
        'd' | 'l' => Some(Direction::Right),
        _ => None,
    }
}

pub fn parse_script(input: &str) -> Result<Script, ScriptError> {
    let mut chars = input.char_indices().peekable();
    let (_, first) = chars.next().ok_or(ScriptError::Empty)?;

    let start = match first.to_ascii_lowercase() {
        'n' => {
            let mut digits = String::new();
            while let Some(&(_, digit)) = chars.peek().filter(|(_, c)| c.is_ascii_digit()) {
                digits.push(digit);
                chars.next();
            }
            let seed = if digits.is_empty() {
                None
            } else {
                Some(digits.parse::<u64>().map_err(|_| ScriptError::SeedOverflow(digits))?)
            };
            Start::New { seed }
        }
        'l' => Start::Load,
        other => return Err(ScriptError::UnknownStart(other)),
    };

    let mut steps = Vec::new();
    while let Some((offset, key)) = chars.next() {
        if key == ':' {
            let (_, option) = chars.next().ok_or(ScriptError::DanglingOption(offset))?;
            match option.to_ascii_lowercase() {
                'q' => steps.push(Step::SaveAndQuit),
                'w' => steps.push(Step::Save),
                other => return Err(ScriptError::UnknownOption(other, offset)),
            }
        } else if let Some(direction) = key_direction(key) {
            steps.push(Step::Move(direction));
        }
    }

    Ok(Script { start, steps })
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub moves: usize,
    pub collected: usize,
    /// `:w` and `:q` steps reached.
    pub saves: usize,
    pub quit: bool,
}

/// Applies steps in order, calling `save` with the map as it stands at every `:w` and
/// `:q`. Stops after the first `:q` or the first failed save.
pub fn run_steps_with<E>(
    map: &mut DungeonMap,
    steps: &[Step],
    mode: MoveMode,
    mut save: impl FnMut(&DungeonMap) -> Result<(), E>,
) -> Result<RunSummary, E> {
    let mut summary = RunSummary::default();
    for step in steps {
        match *step {
            Step::Move(direction) => {
                let outcome = map.step(direction, mode);
                summary.moves += 1;
                summary.collected += usize::from(outcome.collected.is_some());
            }
            Step::Save => {
                save(map)?;
                summary.saves += 1;
            }
            Step::SaveAndQuit => {
                save(map)?;
                summary.saves += 1;
                summary.quit = true;
                break;
            }
        }
    }
    Ok(summary)
}

/// [`run_steps_with`] for callers that do not persist anything.
pub fn run_steps(map: &mut DungeonMap, steps: &[Step], mode: MoveMode) -> RunSummary {
    let Ok(summary) = run_steps_with(map, steps, mode, |_| Ok::<(), Infallible>(()));
    summary
}
