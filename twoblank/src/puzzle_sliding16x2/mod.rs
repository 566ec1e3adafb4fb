//! The 4x4 board with tiles 1..14 and two interchangeable blanks.

pub mod utils;
pub mod state;
pub mod neighbors;
pub mod heuristic;
pub mod successors;
