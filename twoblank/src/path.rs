use crate::puzzle_sliding16x2::state::State;
use crate::puzzle_sliding16x2::utils::BOARD_SIZE;
use crate::solver::Visited;
use crate::error::SolveError;
use arrayvec::ArrayVec;
use std::fmt;
use std::fs::File;
use std::io::{self, Write, BufWriter};
use std::path::Path;

/// Predecessor key of the initial board.
/// No valid board packs to 0, as 14 of its cells are non-zero.
pub const NO_PREDECESSOR: u64 = 0;

/// Swap of two cells: the blank (first) and the tile that moves into it (second).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct MoveCommand(pub u8, pub u8);

impl MoveCommand {
    /// Returns `state` after the swap.
    #[inline] pub fn apply(&self, state: State) -> State { state.swapped(self.0, self.1) }
}

impl fmt::Display for MoveCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.0, self.1)
    }
}

/// Follows predecessors from `goal` through `visited`, until the initial board or a missing entry.
/// Returns boards in order from the initial one to `goal`.
pub fn reconstruct(visited: &Visited, goal: State) -> Vec<State> {
    let mut path = vec![goal];
    let mut key = goal.key();
    while let Some(predecessor) = visited.predecessor(key) {
        if predecessor == NO_PREDECESSOR { break; }
        path.push(State { board: predecessor });
        key = predecessor;
    }
    path.reverse();
    path
}

/// Returns the swap that transforms `from` into `to`.
/// The boards must differ in exactly two cells whose contents are exchanged, one of them blank in `from`.
/// `step` is only used to describe the error.
pub fn move_between(step: usize, from: State, to: State) -> Result<MoveCommand, SolveError> {
    let differing: ArrayVec<u8, BOARD_SIZE> = (0..BOARD_SIZE as u8)
        .filter(|i| from.tile_at(*i) != to.tile_at(*i))
        .collect();
    if let &[a, b] = differing.as_slice() {
        if from.tile_at(a) == to.tile_at(b) && from.tile_at(b) == to.tile_at(a) {
            match (from.tile_at(a), from.tile_at(b)) {
                (0, t) if t != 0 => return Ok(MoveCommand(a, b)),
                (t, 0) if t != 0 => return Ok(MoveCommand(b, a)),
                _ => {}
            }
        }
    }
    Err(SolveError::PathConsistency { step, differing: differing.len() })
}

/// Converts consecutive boards of `path` to swaps.
pub fn move_commands(path: &[State]) -> Result<Vec<MoveCommand>, SolveError> {
    path.windows(2).enumerate().map(|(step, pair)| move_between(step, pair[0], pair[1])).collect()
}

/// Applies `moves` to `state`, in order.
pub fn replay(state: State, moves: &[MoveCommand]) -> State {
    moves.iter().fold(state, |s, m| m.apply(s))
}

/// Format of the move list file: every cell index followed by a comma, `a,b,a,b,`.
pub fn format_moves(moves: &[MoveCommand]) -> String {
    moves.iter().map(|m| format!("{},", m)).collect()
}

/// Writes `moves` in the format of [`format_moves`] to the file `file_name`.
pub fn write_moves(file_name: impl AsRef<Path>, moves: &[MoveCommand]) -> io::Result<()> {
    let mut file = BufWriter::new(File::create(file_name)?);
    file.write_all(format_moves(moves).as_bytes())?;
    file.flush()
}

/// Parses the format produced by [`format_moves`]; whitespace and semicolons separate cells too.
pub fn parse_moves(text: &str) -> Option<Vec<MoveCommand>> {
    let cells = text.split(|c: char| c.is_whitespace() || c == ',' || c == ';')
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u8>().ok().filter(|c| (*c as usize) < BOARD_SIZE))
        .collect::<Option<Vec<_>>>()?;
    if cells.len() % 2 != 0 { return None; }
    Some(cells.chunks(2).map(|c| MoveCommand(c[0], c[1])).collect())
}
