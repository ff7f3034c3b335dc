use crate::error::{GameError, Result};

use super::types::{Cell, GameOutcome, MarkAssignment, Player, WinningLine};
use super::win_detector::{check_win, has_win};

pub const CELL_COUNT: usize = 9;
pub const BOARD_SIDE: usize = 3;

/// The 3x3 grid in row-major order:
///
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    pub fn is_valid_move(&self, index: usize) -> bool {
        self.cell(index).is_some_and(|cell| cell.is_empty())
    }

    pub fn apply_move(&mut self, index: usize, player: Player) -> Result<()> {
        match self.cells.get(index) {
            None => Err(GameError::InvalidCellIndex(index)),
            Some(Cell::Occupied(_)) => Err(GameError::CellAlreadyOccupied(index)),
            Some(Cell::Empty) => {
                self.cells[index] = Cell::Occupied(player);
                Ok(())
            }
        }
    }

    /// Unchecked placement for the search; `index` must be empty.
    pub(crate) fn place(&mut self, index: usize, player: Player) {
        self.cells[index] = Cell::Occupied(player);
    }

    pub(crate) fn clear(&mut self, index: usize) {
        self.cells[index] = Cell::Empty;
    }

    pub fn empty_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    pub fn winner_for(&self, player: Player) -> Option<WinningLine> {
        check_win(self, player)
    }

    pub fn is_tie(&self) -> bool {
        self.is_full() && !has_win(self, Player::Human) && !has_win(self, Player::Computer)
    }

    pub fn outcome(&self) -> GameOutcome {
        for player in [Player::Human, Player::Computer] {
            if let Some(line) = check_win(self, player) {
                return GameOutcome::Win {
                    winner: player,
                    line,
                };
            }
        }

        if self.is_full() {
            GameOutcome::Tie
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn render(&self, marks: &MarkAssignment) -> String {
        self.cells
            .chunks(BOARD_SIDE)
            .map(|row| {
                row.iter()
                    .map(|cell| match cell {
                        Cell::Empty => '.',
                        Cell::Occupied(player) => marks.mark_of(*player).symbol(),
                    })
                    .map(String::from)
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;
    use Player::{Computer, Human};

    /// Builds a board from a mark layout such as "XOX OXO OXO".
    fn board_from_marks(layout: &str, marks: &MarkAssignment) -> Board {
        let mut cells = [Cell::Empty; CELL_COUNT];
        let symbols: Vec<char> = layout.chars().filter(|c| !c.is_whitespace()).collect();
        assert_eq!(symbols.len(), CELL_COUNT);
        for (index, symbol) in symbols.into_iter().enumerate() {
            cells[index] = match symbol {
                'X' => Cell::Occupied(marks.player_with(Mark::X)),
                'O' => Cell::Occupied(marks.player_with(Mark::O)),
                _ => Cell::Empty,
            };
        }
        Board::from_cells(cells)
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.empty_cells(), (0..9).collect::<Vec<_>>());
        assert!(board.is_empty());
        assert_eq!(board.outcome(), GameOutcome::InProgress);
    }

    #[test]
    fn reset_clears_every_cell() {
        let mut board = Board::new();
        board.apply_move(4, Human).unwrap();
        board.apply_move(0, Computer).unwrap();
        board.reset();
        assert_eq!(board, Board::new());
    }

    #[test]
    fn empty_cells_are_ascending() {
        let mut board = Board::new();
        board.apply_move(8, Human).unwrap();
        board.apply_move(0, Computer).unwrap();
        board.apply_move(4, Human).unwrap();
        assert_eq!(board.empty_cells(), vec![1, 2, 3, 5, 6, 7]);
        assert_eq!(board.occupied_count(), 3);
    }

    #[test]
    fn top_row_reports_line_zero() {
        let marks = MarkAssignment::new(Mark::X);
        let mut board = Board::new();
        for cell in [0, 1, 2] {
            board.apply_move(cell, marks.player_with(Mark::X)).unwrap();
        }
        let line = board.winner_for(Human).unwrap();
        assert_eq!(line.index, 0);
        assert_eq!(line.cells, [0, 1, 2]);
        assert!(board.winner_for(Computer).is_none());
        assert_eq!(
            board.outcome(),
            GameOutcome::Win {
                winner: Human,
                line
            }
        );
    }

    #[test]
    fn full_board_without_line_is_tie() {
        let marks = MarkAssignment::new(Mark::X);
        let board = board_from_marks("XOX OXO OXO", &marks);
        assert!(board.is_tie());
        assert!(board.winner_for(Human).is_none());
        assert!(board.winner_for(Computer).is_none());
        assert!(board.empty_cells().is_empty());
        assert_eq!(board.outcome(), GameOutcome::Tie);
    }

    #[test]
    fn full_board_with_line_is_not_tie() {
        let marks = MarkAssignment::new(Mark::X);
        let board = board_from_marks("XXX OOX XOO", &marks);
        assert!(!board.is_tie());
        assert_eq!(board.winner_for(Human).unwrap().index, 0);
    }

    #[test]
    fn occupied_cell_is_rejected_without_change() {
        let mut board = Board::new();
        board.apply_move(3, Computer).unwrap();
        let before = board;
        assert_eq!(board.apply_move(3, Human), Err(GameError::CellAlreadyOccupied(3)));
        assert_eq!(board, before);
        assert_eq!(board.cell(3), Some(Cell::Occupied(Computer)));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut board = Board::new();
        assert_eq!(board.apply_move(9, Human), Err(GameError::InvalidCellIndex(9)));
        assert_eq!(board, Board::new());
        assert!(!board.is_valid_move(9));
        assert!(board.is_valid_move(8));
    }

    #[test]
    fn render_uses_assigned_marks() {
        let marks = MarkAssignment::new(Mark::O);
        let mut board = Board::new();
        board.apply_move(0, Computer).unwrap();
        board.apply_move(4, Human).unwrap();
        assert_eq!(board.render(&marks), "X . .\n. O .\n. . .");
    }
}
