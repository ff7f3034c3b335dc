//! Exhaustive minimax over the remaining moves.
//!
//! Scores are taken from the computer's side: `WIN_SCORE` when the computer
//! completes a line, `LOSS_SCORE` when the human does, `TIE_SCORE` for a full
//! board. There is no pruning and no depth discount, so a win five plies away
//! is worth as much as a win on the next move. Among equal scores the lowest
//! cell index is kept.

use super::board::Board;
use super::types::Player;
use super::win_detector::has_win;

pub const WIN_SCORE: i32 = 10;
pub const LOSS_SCORE: i32 = -10;
pub const TIE_SCORE: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// `None` when the board was already terminal.
    pub cell: Option<usize>,
    pub score: i32,
    /// Positions visited, the root included.
    pub nodes: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Candidate {
    cell: usize,
    score: i32,
}

/// Picks the optimal move for `player_to_move`. The caller's board is left untouched.
pub fn search(board: &Board, player_to_move: Player) -> SearchResult {
    let mut working = *board;
    let mut nodes = 0;
    let (cell, score) = minimax(&mut working, player_to_move, &mut nodes);
    SearchResult { cell, score, nodes }
}

/// The computer's move on `board`, or `None` if the game is already over.
pub fn best_move(board: &Board) -> Option<usize> {
    search(board, Player::Computer).cell
}

/// Value of every legal move for `player`, in ascending cell order.
pub fn score_moves(board: &Board, player: Player) -> Vec<SearchResult> {
    if terminal_score(board).is_some() {
        return Vec::new();
    }

    let mut working = *board;
    board
        .empty_cells()
        .into_iter()
        .map(|cell| {
            let mut nodes = 0;
            working.place(cell, player);
            let (_, score) = minimax(&mut working, player.opponent(), &mut nodes);
            working.clear(cell);
            SearchResult {
                cell: Some(cell),
                score,
                nodes,
            }
        })
        .collect()
}

fn terminal_score(board: &Board) -> Option<i32> {
    if has_win(board, Player::Human) {
        Some(LOSS_SCORE)
    } else if has_win(board, Player::Computer) {
        Some(WIN_SCORE)
    } else if board.is_full() {
        Some(TIE_SCORE)
    } else {
        None
    }
}

fn minimax(board: &mut Board, player: Player, nodes: &mut u64) -> (Option<usize>, i32) {
    *nodes += 1;

    if let Some(score) = terminal_score(board) {
        return (None, score);
    }

    let mut candidates = Vec::new();
    for cell in board.empty_cells() {
        board.place(cell, player);
        let (_, score) = minimax(board, player.opponent(), nodes);
        board.clear(cell);
        candidates.push(Candidate { cell, score });
    }

    match select(player, &candidates) {
        Some(best) => (Some(best.cell), best.score),
        None => (None, TIE_SCORE),
    }
}

/// Computer maximizes, human minimizes; the first of equal candidates wins.
fn select(player: Player, candidates: &[Candidate]) -> Option<Candidate> {
    let mut best: Option<Candidate> = None;
    for &candidate in candidates {
        let better = match best {
            None => true,
            Some(current) => match player {
                Player::Computer => candidate.score > current.score,
                Player::Human => candidate.score < current.score,
            },
        };
        if better {
            best = Some(candidate);
        }
    }
    best
}
