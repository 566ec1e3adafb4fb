//! Reading and validation of the initial board.

use crate::puzzle_sliding16x2::state::State;
use crate::puzzle_sliding16x2::utils::{BOARD_SIZE, BLANKS, MAX_TILE};
use crate::error::{ConfigError, InputError};
use std::fs;
use std::io::BufRead;
use std::path::Path;

/// Key of the configuration entry listing cells of the initial board.
pub const CONFIG_KEY: &str = "initState";

/// Default name of the configuration file.
pub const CONFIG_FILE_NAME: &str = "solverConfig.ini";

/// Default name of the file the moves are written to.
pub const MOVES_FILE_NAME: &str = "output.txt";

/// Characters that separate values.
#[inline] fn is_separator(c: char) -> bool { c.is_whitespace() || c == ',' || c == ';' }

/// Returns all integers from `text`, separated by whitespace, commas or semicolons.
/// Fails on the first token that is not an integer.
pub fn parse_values(text: &str) -> Result<Vec<i64>, InputError> {
    text.split(is_separator)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().map_err(|_| InputError::NotANumber { token: s.to_owned() }))
        .collect()
}

/// Parses configuration `initState = v0,v1,...,v15`.
///
/// Fails if the key, the `=` or any of 16 values is missing, or a value is not an integer.
/// More than 16 values are all returned, to be rejected by [`validate`].
pub fn parse_config(text: &str) -> Result<Vec<i64>, ConfigError> {
    let rest = text.trim_start().strip_prefix(CONFIG_KEY).ok_or(ConfigError::MissingMarker)?;
    let rest = rest.trim_start().strip_prefix('=').ok_or(ConfigError::MissingSeparator)?;
    let values = parse_values(rest).map_err(ConfigError::BadValue)?;
    if values.len() < BOARD_SIZE {
        return Err(ConfigError::NotEnoughValues { found: values.len() });
    }
    Ok(values)
}

/// Reads and parses the configuration file.
pub fn read_config(file_name: impl AsRef<Path>) -> Result<Vec<i64>, ConfigError> {
    parse_config(&fs::read_to_string(file_name)?)
}

/// Reads lines from `reader` until at least `required` values are collected or the input ends.
/// All values from the lines read are returned.
pub fn read_values<R: BufRead>(reader: R, required: usize) -> Result<Vec<i64>, InputError> {
    let mut values = Vec::with_capacity(required);
    for line in reader.lines() {
        let line = line.map_err(|e| InputError::Unreadable { message: e.to_string() })?;
        values.extend(parse_values(&line)?);
        if values.len() >= required { break; }
    }
    Ok(values)
}

/// Checks that `values` describe a board: 16 cells in 0..=14, two blanks, no repeated tile.
pub fn validate(values: &[i64]) -> Result<State, InputError> {
    if values.len() != BOARD_SIZE {
        return Err(InputError::Count { found: values.len() });
    }
    let mut seen = [false; MAX_TILE as usize + 1];
    for (index, &value) in values.iter().enumerate() {
        if !(0..=MAX_TILE as i64).contains(&value) {
            return Err(InputError::TileOutOfRange { index, value });
        }
        if value != 0 {
            if seen[value as usize] { return Err(InputError::DuplicateTile { tile: value as u8 }); }
            seen[value as usize] = true;
        }
    }
    let blanks = values.iter().filter(|v| **v == 0).count();
    if blanks != BLANKS {
        return Err(InputError::BlankCount { found: blanks });
    }
    Ok(values.iter().map(|v| *v as u8).collect())
}
