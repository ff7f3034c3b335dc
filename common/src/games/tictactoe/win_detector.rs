use super::board::Board;
use super::types::{Cell, Player, WinningLine};

/// Rows, then columns, then diagonals. The order decides which line is
/// reported when several are complete at once.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [6, 4, 2],
];

pub fn check_win(board: &Board, player: Player) -> Option<WinningLine> {
    let owned = Cell::Occupied(player);
    WINNING_LINES
        .iter()
        .enumerate()
        .find(|(_, line)| line.iter().all(|&cell| board.cell(cell) == Some(owned)))
        .map(|(index, &cells)| WinningLine::new(index, cells))
}

pub fn has_win(board: &Board, player: Player) -> bool {
    check_win(board, player).is_some()
}
