use crate::puzzle_sliding16x2::utils::{BITS_PER_CELL, BITS_PER_CELL_MASK64, BOARD_SIZE, BLANKS, GOAL_BOARD, MAX_TILE, COLS};
use arrayvec::ArrayVec;
use std::fmt;
use std::iter::{FromIterator, FusedIterator};

/// Board state.
///
/// Sixteen cells, 4 bits each, cell `i` occupying bits `4*i..4*i+4` of `board`.
/// The packed word injectively represents the cell assignment,
/// so it is used verbatim as the key of the frontier and visited maps.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct State {
    /// Indexed by board indices, gives tiles numbers that occupy given board cell.
    pub board: u64,
}

impl FromIterator<u8> for State {
    fn from_iter<T: IntoIterator<Item=u8>>(tiles: T) -> Self {
        let mut board = 0u64;
        let mut index = 0;
        for t in tiles.into_iter().take(BOARD_SIZE) {
            board |= (t as u64 & BITS_PER_CELL_MASK64) << index;
            index += BITS_PER_CELL;
        }
        Self { board }
    }
}

impl State {
    /// The goal state: tiles 1..14 in row-major order, two blanks in the last two cells.
    pub const GOAL: State = State { board: GOAL_BOARD };

    /// Constructs the goal state.
    #[inline] pub fn goal() -> Self { Self::GOAL }

    /// Tile at position.
    #[inline] pub fn tile_at(&self, position: u8) -> u8 {
        ((self.board >> (position * BITS_PER_CELL)) & BITS_PER_CELL_MASK64) as u8
    }

    /// Writes `tile` at `position`. Only 4 lowest bits of `tile` are stored,
    /// so the caller is responsible for passing values that fit.
    #[inline] pub fn set_tile(&mut self, position: u8, tile: u8) {
        let shift = position * BITS_PER_CELL;
        self.board &= !(BITS_PER_CELL_MASK64 << shift);
        self.board |= (tile as u64 & BITS_PER_CELL_MASK64) << shift;
    }

    /// Returns copy of `self` with contents of the two given cells exchanged.
    #[inline] pub fn swapped(mut self, first: u8, second: u8) -> Self {
        let first_tile = self.tile_at(first);
        let second_tile = self.tile_at(second);
        self.set_tile(first, second_tile);
        self.set_tile(second, first_tile);
        self
    }

    /// Returns the packed board, which doubles as a collision-free hash.
    #[inline(always)] pub fn key(&self) -> u64 { self.board }

    #[inline] pub fn is_goal(&self) -> bool { self.board == GOAL_BOARD }

    /// Returns positions of all blank cells, in increasing order.
    pub fn blank_positions(&self) -> ArrayVec<u8, BOARD_SIZE> {
        (0..BOARD_SIZE as u8).filter(|p| self.tile_at(*p) == 0).collect()
    }

    /// Checks whether `self` has exactly two blanks and each of tiles 1..14 exactly once.
    pub fn is_well_formed(&self) -> bool {
        let mut seen = 0u16;
        let mut blanks = 0;
        for tile in self.iter() {
            if tile == 0 {
                blanks += 1;
            } else if tile > MAX_TILE || seen & (1 << tile) != 0 {
                return false;
            } else {
                seen |= 1 << tile;
            }
        }
        blanks == BLANKS
    }

    /// Returns an object that displays `self` in one line, cells separated by commas.
    #[inline] pub fn line(&self) -> Line { Line(*self) }

    #[inline] pub fn iter(&self) -> TilesIterator {
        TilesIterator::new(self.board)
    }
}

/// Square rendering: 4 rows of 4 comma separated cells.
impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.iter().enumerate() {
            if (i as u8 + 1) % COLS == 0 {
                writeln!(f, "{:2}", tile)?;
            } else {
                write!(f, "{:2},", tile)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "State[{}]", self.line())
    }
}

/// One-line rendering of [`State`].
#[derive(Clone, Copy)]
pub struct Line(State);

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tile) in self.0.iter().enumerate() {
            if i != 0 { f.write_str(",")?; }
            write!(f, "{:2}", tile)?;
        }
        Ok(())
    }
}

/// Iterates over the tiles of all cells, in the order of cell indices.
#[derive(Copy, Clone)]
pub struct TilesIterator {
    rest: u64,
    remaining: u8
}

impl TilesIterator {
    #[inline] pub fn new(board: u64) -> Self {
        Self { rest: board, remaining: BOARD_SIZE as u8 }
    }
}

impl Iterator for TilesIterator {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 { return None; }
        self.remaining -= 1;
        let result = (self.rest & BITS_PER_CELL_MASK64) as u8;
        self.rest >>= BITS_PER_CELL;
        Some(result)
    }

    #[inline] fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining as usize, Some(self.remaining as usize))
    }
}

impl ExactSizeIterator for TilesIterator {}

impl FusedIterator for TilesIterator {}
