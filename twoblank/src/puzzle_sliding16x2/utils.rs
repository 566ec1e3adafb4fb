pub const DENIED: u8 = u8::MAX;

/// Number of bits needed to store either tile number or its position (index of the board cell).
pub const BITS_PER_CELL: u8 = 4;

/// 0..01..1 mask with BITS_PER_CELL bits set.
pub const BITS_PER_CELL_MASK64: u64 = (1u64<<BITS_PER_CELL)-1;

/// Width and height of the board.
pub const COLS: u8 = 4;
pub const ROWS: u8 = 4;

/// Number of cells in the board.
pub const BOARD_SIZE: usize = (COLS * ROWS) as usize;

/// Number of blank cells (tiles with number 0).
pub const BLANKS: usize = 2;

/// The largest tile number.
pub const MAX_TILE: u8 = (BOARD_SIZE - BLANKS) as u8;

/// Packed goal board: 1..14 in row-major order followed by two blanks.
pub const GOAL_BOARD: u64 = 0x00ed_cba9_8765_4321;
