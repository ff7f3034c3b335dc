//! Whole-game properties of the search, checked over every position that can
//! arise in a legal game with either player opening.

use std::collections::HashSet;

use tictactoe_common::games::SessionRng;
use tictactoe_common::games::tictactoe::{
    Board, Cell, FirstPlayerMode, GameOutcome, GameSession, GameSetup, LOSS_SCORE, Mark, Player,
    SessionPhase, score_moves, search,
};

/// Every non-terminal (board, player to move) pair reachable from the empty board.
fn reachable_positions() -> Vec<(Board, Player)> {
    let mut seen = HashSet::new();
    let mut positions = Vec::new();
    for first in [Player::Computer, Player::Human] {
        collect(Board::new(), first, &mut seen, &mut positions);
    }
    positions
}

fn collect(
    board: Board,
    to_move: Player,
    seen: &mut HashSet<(Board, Player)>,
    positions: &mut Vec<(Board, Player)>,
) {
    if !seen.insert((board, to_move)) || board.outcome() != GameOutcome::InProgress {
        return;
    }
    positions.push((board, to_move));

    for cell in board.empty_cells() {
        let mut next = board;
        next.apply_move(cell, to_move).unwrap();
        collect(next, to_move.opponent(), seen, positions);
    }
}

#[test]
fn search_always_picks_an_empty_cell() {
    for (board, to_move) in reachable_positions() {
        let before = board;
        let result = search(&board, to_move);
        let cell = result.cell.expect("non-terminal board must yield a move");
        assert_eq!(board.cell(cell), Some(Cell::Empty), "board {:?}", board);
        assert_eq!(board, before);
    }
}

#[test]
fn computer_never_chooses_a_loss_when_avoidable() {
    for (board, _) in reachable_positions() {
        let candidates = score_moves(&board, Player::Computer);
        let best_score = candidates.iter().map(|c| c.score).max().unwrap();
        let first_best = candidates.iter().find(|c| c.score == best_score).unwrap();

        let chosen = search(&board, Player::Computer);
        assert_eq!(chosen.score, best_score, "board {:?}", board);
        assert_eq!(chosen.cell, first_best.cell, "board {:?}", board);
        if best_score > LOSS_SCORE {
            assert_ne!(chosen.score, LOSS_SCORE);
        }
    }
}

#[test]
fn perfect_play_from_empty_board_is_a_tie() {
    let mut board = Board::new();
    let mut to_move = Player::Computer;
    let mut sequence = Vec::new();

    while let Some(cell) = search(&board, to_move).cell {
        board.apply_move(cell, to_move).unwrap();
        sequence.push(cell);
        to_move = to_move.opponent();
    }

    assert_eq!(sequence, vec![0, 4, 1, 2, 6, 3, 5, 7, 8]);
    assert!(board.is_tie());
    assert!(board.winner_for(Player::Computer).is_none());
    assert!(board.winner_for(Player::Human).is_none());
}

#[test]
fn human_replies_to_corner_opening_in_the_center() {
    let mut board = Board::new();
    board.apply_move(0, Player::Computer).unwrap();
    assert_eq!(search(&board, Player::Human).cell, Some(4));
}

#[test]
fn session_with_optimal_human_ends_tied() {
    for first_player in [FirstPlayerMode::Human, FirstPlayerMode::Computer] {
        let setup = GameSetup::new(Mark::X, first_player);
        let mut session = GameSession::new(setup, SessionRng::new(3));

        while let Some(player) = session.player_to_move() {
            match player {
                Player::Human => {
                    let cell = search(session.board(), Player::Human).cell.unwrap();
                    session.apply_human_move(cell).unwrap();
                }
                Player::Computer => {
                    session.compute_and_apply_computer_move().unwrap();
                }
            }
        }

        assert_eq!(session.current_outcome(), GameOutcome::Tie);
        assert_eq!(session.phase(), SessionPhase::Tied);
    }
}

#[test]
fn computer_never_loses_against_any_human_line() {
    // Exhaustive over every human choice, computer opening second.
    fn explore(session_board: Board, wins: &mut usize, ties: &mut usize) {
        for cell in session_board.empty_cells() {
            let mut board = session_board;
            board.apply_move(cell, Player::Human).unwrap();
            match board.outcome() {
                GameOutcome::Win { winner, .. } => {
                    assert_eq!(winner, Player::Computer, "human won on {:?}", board);
                }
                GameOutcome::Tie => *ties += 1,
                GameOutcome::InProgress => {
                    let reply = search(&board, Player::Computer).cell.unwrap();
                    board.apply_move(reply, Player::Computer).unwrap();
                    match board.outcome() {
                        GameOutcome::Win { winner, .. } => {
                            assert_eq!(winner, Player::Computer);
                            *wins += 1;
                        }
                        GameOutcome::Tie => *ties += 1,
                        GameOutcome::InProgress => explore(board, wins, ties),
                    }
                }
            }
        }
    }

    let mut wins = 0;
    let mut ties = 0;
    explore(Board::new(), &mut wins, &mut ties);
    assert!(wins > 0);
    assert!(ties > 0);
}
