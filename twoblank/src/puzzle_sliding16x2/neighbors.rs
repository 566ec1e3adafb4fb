use crate::puzzle_sliding16x2::utils::{BOARD_SIZE, DENIED, COLS, ROWS};
use arrayvec::ArrayVec;

pub const LEFT: usize = 0;
pub const UP: usize  = 1;
pub const RIGHT: usize  = 2;
pub const DOWN: usize  = 3;

/// Stores indices of neighbors (or DENIED in the case of no neighbor) and is indexed by (in order): index of the cell and the direction.
pub type Neighbors = [[u8; 4]; BOARD_SIZE];

/// Returns index of cell with given (c, r) coordinates in the board with given number of cols.
#[inline(always)] pub fn cell_nr(cols: u8, c: u8, r: u8) -> u8 { r * cols + c }

/// Returns (column, row) coordinates of the cell with given index.
#[inline(always)] pub fn cell_coords(cols: u8, cell: u8) -> (u8, u8) { (cell % cols, cell / cols) }

/// Constructs neighbors matrix for the board of the size `cols` x `rows`.
pub fn construct_neighbors(cols: u8, rows: u8) -> Neighbors {
    assert!(cols as usize * rows as usize <= BOARD_SIZE);
    let mut neighbors = [[DENIED; 4]; BOARD_SIZE];
    for r in 0..rows {
        for c in 0..cols {
            let cell = &mut neighbors[cell_nr(cols, c, r) as usize];
            if c != 0 { cell[LEFT] = cell_nr(cols, c-1, r); }
            if r != 0 { cell[UP] = cell_nr(cols, c, r-1); }
            if c+1 != cols { cell[RIGHT] = cell_nr(cols, c+1, r); }
            if r+1 != rows { cell[DOWN] = cell_nr(cols, c, r+1); }
        }
    }
    neighbors
}

/// Neighbors matrix of the 4x4 board.
#[inline] pub fn board_neighbors() -> Neighbors { construct_neighbors(COLS, ROWS) }

/// Returns neighbors (cell numbers) of the given `cell`.
pub fn neighbors_of(neighbors: &Neighbors, cell: u8) -> ArrayVec::<u8, 4> {
    neighbors[cell as usize].iter().copied().filter(|n| *n != DENIED).collect()
}

/// Checks whether the two cells share a side.
pub fn are_adjacent(neighbors: &Neighbors, first: u8, second: u8) -> bool {
    neighbors[first as usize].contains(&second)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_cell_nr() {
        assert_eq!(cell_nr(4, 0, 0), 0);
        assert_eq!(cell_nr(4, 3, 0), 3);
        assert_eq!(cell_nr(4, 0, 1), 4);
        assert_eq!(cell_nr(4, 2, 3), 14);
        assert_eq!(cell_coords(4, 14), (2, 3));
        assert_eq!(cell_coords(4, 7), (3, 1));
    }

    #[test]
    fn test_neighbors_4x4() {
        let neighbors = board_neighbors();
        assert_eq!(neighbors[0], [DENIED, DENIED, 1, 4]);
        assert_eq!(neighbors[5], [4, 1, 6, 9]);
        assert_eq!(neighbors[15], [14, 11, DENIED, DENIED]);
        // no wrap-around between rows
        assert_eq!(neighbors[3][RIGHT], DENIED);
        assert_eq!(neighbors[4][LEFT], DENIED);
        assert_eq!(neighbors_of(&neighbors, 0).len(), 2);
        assert_eq!(neighbors_of(&neighbors, 1).len(), 3);
        assert_eq!(neighbors_of(&neighbors, 10).len(), 4);
        assert_eq!(neighbors_of(&neighbors, 12).into_iter().collect::<HashSet<_>>(),
                   [8, 13].into_iter().collect::<HashSet<_>>());
        assert!(are_adjacent(&neighbors, 14, 15));
        assert!(are_adjacent(&neighbors, 11, 15));
        assert!(!are_adjacent(&neighbors, 3, 4));
        assert!(!are_adjacent(&neighbors, 0, 5));
    }

    #[test]
    fn test_neighbors_3x2() {
        let neighbors = construct_neighbors(3, 2);
        assert_eq!(neighbors[cell_nr(3, 0, 0) as usize][LEFT], DENIED);
        assert_eq!(neighbors[cell_nr(3, 0, 0) as usize][RIGHT], cell_nr(3, 1, 0));
        assert_eq!(neighbors[cell_nr(3, 0, 0) as usize][DOWN], cell_nr(3, 0, 1));
        assert_eq!(neighbors_of(&neighbors, cell_nr(3, 1, 1)).len(), 3);
        assert_eq!(neighbors_of(&neighbors, cell_nr(3, 2, 1)).len(), 2);
    }

    #[test]
    fn test_neighbors_symmetric() {
        let neighbors = board_neighbors();
        for cell in 0..BOARD_SIZE as u8 {
            for n in neighbors_of(&neighbors, cell) {
                assert!(are_adjacent(&neighbors, n, cell));
            }
        }
    }
}
