use crate::puzzle_sliding16x2::utils::{BOARD_SIZE, COLS, ROWS};
use crate::puzzle_sliding16x2::neighbors::{cell_nr, cell_coords};
use crate::puzzle_sliding16x2::state::State;

/// Distances between all pair of cells.
pub type CellMetric = [[u8; BOARD_SIZE]; BOARD_SIZE];

/// Returns Manhattan metric for the board of given size.
pub fn manhattan_metric(cols: u8, rows: u8) -> CellMetric {
    let mut cell_distances = [[0u8; BOARD_SIZE]; BOARD_SIZE];
    for first_r in 0..rows {
        for first_c in 0..cols {
            let first_cell = cell_nr(cols, first_c, first_r) as usize;
            for second_r in 0..rows {
                let row_dist = first_r.abs_diff(second_r);
                for second_c in first_c..cols {
                    let second_cell = cell_nr(cols, second_c, second_r) as usize;
                    let distance = row_dist + second_c - first_c;
                    cell_distances[first_cell][second_cell] = distance;
                    cell_distances[second_cell][first_cell] = distance;
                }
            }
        }
    }
    cell_distances
}

/// Manhattan metric of the 4x4 board.
#[inline] pub fn board_metric() -> CellMetric { manhattan_metric(COLS, ROWS) }

/// Cell that `tile` occupies in the goal state. Must not be called for blank.
#[inline(always)] pub fn goal_position(tile: u8) -> u8 { tile - 1 }

/// Distance between the cell `index` and the goal cell of `tile`; blanks cost nothing.
///
/// Both row and column are taken from the goal cell of `tile`, not from `index`.
pub fn manhattan(index: u8, tile: u8) -> u8 {
    if tile == 0 { return 0; }
    let (c, r) = cell_coords(COLS, index);
    let (goal_c, goal_r) = cell_coords(COLS, goal_position(tile));
    r.abs_diff(goal_r) + c.abs_diff(goal_c)
}

/// Distance between the cell `index` and the goal cell of `tile`, read from `metric`.
#[inline(always)] pub fn tile_distance(metric: &CellMetric, index: u8, tile: u8) -> u8 {
    if tile == 0 { 0 } else { metric[index as usize][goal_position(tile) as usize] }
}

/// Sum of Manhattan distances of all non-blank tiles to their goal cells.
pub fn calc_manhattan_heuristic(metric: &CellMetric, state: State) -> u8 {
    state.iter().enumerate().map(|(i, t)| tile_distance(metric, i as u8, t)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_metric_32() {
        // 0, 1, 2
        // 3, 4, 5
        let metric = manhattan_metric(3, 2);
        assert_eq!(metric[0][0], 0);
        assert_eq!(metric[0][1], 1);    assert_eq!(metric[1][0], 1);
        assert_eq!(metric[0][2], 2);    assert_eq!(metric[2][0], 2);
        assert_eq!(metric[0][5], 3);    assert_eq!(metric[5][0], 3);
        assert_eq!(metric[2][3], 3);    assert_eq!(metric[3][2], 3);
        assert_eq!(metric[4][5], 1);    assert_eq!(metric[5][4], 1);
    }

    #[test]
    fn test_metric_agrees_with_formula() {
        let metric = board_metric();
        for index in 0..16 {
            for tile in 0..=14 {
                assert_eq!(tile_distance(&metric, index, tile), manhattan(index, tile), "index {} tile {}", index, tile);
            }
        }
    }

    #[test]
    fn test_manhattan_uses_goal_column() {
        assert_eq!(manhattan(0, 4), 3);     // tile 4 belongs to the top-right corner
        assert_eq!(manhattan(3, 1), 3);
        assert_eq!(manhattan(15, 1), 6);
        assert_eq!(manhattan(12, 14), 1);
        assert_eq!(manhattan(5, 6), 0);
        assert_eq!(manhattan(7, 0), 0);
    }

    #[test]
    fn test_goal_heuristic_is_zero() {
        assert_eq!(calc_manhattan_heuristic(&board_metric(), State::goal()), 0);
    }

    #[test]
    fn test_heuristic_sum() {
        // 14 and 13 exchanged: each is one cell away; blanks are free wherever they are
        let state: State = (1..=12).chain([14, 13, 0, 0]).collect();
        assert_eq!(calc_manhattan_heuristic(&board_metric(), state), 2);
        let state: State = [0, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 0, 1].iter().cloned().collect();
        assert_eq!(calc_manhattan_heuristic(&board_metric(), state), 6);
    }
}
