use crate::puzzle_sliding16x2::neighbors::{Neighbors, neighbors_of};
use crate::puzzle_sliding16x2::state::State;
use crate::path::MoveCommand;
use arrayvec::ArrayVec;
use rand::Rng;
use rand::seq::SliceRandom;

/// Maximum number of successors: two blanks, four directions each.
pub const MAX_SUCCESSORS: usize = 8;

/// Board reachable by a single swap, together with that swap.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Successor {
    pub state: State,
    /// Swap that leads from the source state to `state`. Its first cell is the blank of the source.
    pub swap: MoveCommand,
    /// Tile that moved into the blank cell.
    pub tile: u8,
}

/// Returns all states that differ from `state` by swapping a blank with an orthogonally adjacent tile.
///
/// Blank-blank swaps are never produced, they do not change the board.
/// `state` must be well formed, with exactly two blanks.
pub fn successors(neighbors: &Neighbors, state: State) -> ArrayVec<Successor, MAX_SUCCESSORS> {
    debug_assert!(state.is_well_formed(), "successors of malformed board [{}]", state.line());
    let mut result = ArrayVec::new();
    for blank_pos in state.blank_positions() {
        for neighbor_cell in neighbors_of(neighbors, blank_pos) {
            let tile = state.tile_at(neighbor_cell);
            if tile == 0 { continue; }
            result.push(Successor {
                state: state.swapped(blank_pos, neighbor_cell),
                swap: MoveCommand(blank_pos, neighbor_cell),
                tile
            });
        }
    }
    result
}

/// Returns a state obtained from the goal by `steps` random swaps that never immediately undo the previous one.
///
/// The returned state can be solved in at most `steps` moves.
pub fn scramble<R: Rng + ?Sized>(neighbors: &Neighbors, rng: &mut R, steps: usize) -> State {
    let mut state = State::goal();
    let mut previous = State::goal();
    for _ in 0..steps {
        let candidates: ArrayVec<Successor, MAX_SUCCESSORS> = successors(neighbors, state).into_iter()
            .filter(|s| s.state != previous)
            .collect();
        let Some(next) = candidates.choose(rng) else { break };
        previous = state;
        state = next.state;
    }
    state
}
