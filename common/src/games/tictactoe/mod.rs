mod board;
mod minimax;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::{Board, BOARD_SIDE, CELL_COUNT};
pub use minimax::{LOSS_SCORE, SearchResult, TIE_SCORE, WIN_SCORE, best_move, score_moves, search};
pub use session::GameSession;
pub use settings::GameSetup;
pub use types::{Cell, FirstPlayerMode, GameOutcome, Mark, MarkAssignment, Player, SessionPhase, WinningLine};
pub use win_detector::{WINNING_LINES, check_win, has_win};
