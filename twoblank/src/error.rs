use std::io;
use thiserror::Error;

/// Problems with the values describing the initial board.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InputError {
    #[error("expected 16 cell values, got {found}")]
    Count { found: usize },
    #[error("value {value} of cell {index} is out of range 0..=14")]
    TileOutOfRange { index: usize, value: i64 },
    #[error("expected exactly 2 blank cells, got {found}")]
    BlankCount { found: usize },
    #[error("tile {tile} occurs more than once")]
    DuplicateTile { tile: u8 },
    #[error("`{token}` is not an integer")]
    NotANumber { token: String },
    #[error("cannot read values: {message}")]
    Unreadable { message: String },
}

/// The configuration cannot provide the initial board; the caller may ask for values interactively.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read configuration: {0}")]
    Unreadable(#[from] io::Error),
    #[error("configuration does not start with `initState`")]
    MissingMarker,
    #[error("`=` expected after `initState`")]
    MissingSeparator,
    #[error("configuration lists only {found} of 16 cell values")]
    NotEnoughValues { found: usize },
    #[error("configuration value is invalid: {0}")]
    BadValue(#[source] InputError),
}

/// Search did not produce a valid solution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    #[error("initial board does not have exactly two blanks and tiles 1..14")]
    MalformedStart,
    #[error("no solution: all {expanded} reachable boards expanded without reaching the goal")]
    Exhausted { expanded: u64 },
    #[error("search stopped by its limit after {expanded} expansions")]
    LimitReached { expanded: u64 },
    #[error("path step {step} changes {differing} cells instead of 2")]
    PathConsistency { step: usize, differing: usize },
    #[error("predecessor chain of the goal does not lead to the initial board")]
    DetachedPath,
}
