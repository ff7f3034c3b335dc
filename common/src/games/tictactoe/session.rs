use crate::error::{GameError, Result};
use crate::games::SessionRng;
use crate::log;

use super::board::Board;
use super::minimax::search;
use super::settings::GameSetup;
use super::types::{FirstPlayerMode, GameOutcome, MarkAssignment, Player, SessionPhase};

/// One game against the computer. Owns the board for the session's lifetime;
/// the outcome is always recomputed from the board, never stored.
pub struct GameSession {
    board: Board,
    setup: GameSetup,
    marks: MarkAssignment,
    first_player: Player,
    last_move: Option<(Player, usize)>,
    rng: SessionRng,
}

impl GameSession {
    pub fn new(setup: GameSetup, mut rng: SessionRng) -> Self {
        let first_player = resolve_first_player(setup.first_player, &mut rng);
        let session = Self {
            board: Board::new(),
            setup,
            marks: setup.marks(),
            first_player,
            last_move: None,
            rng,
        };
        session.log_start();
        session
    }

    /// Clears the board and starts a new game with the same setup. A random
    /// first player is drawn again.
    pub fn reset_game(&mut self) -> &Board {
        self.board.reset();
        self.last_move = None;
        self.first_player = resolve_first_player(self.setup.first_player, &mut self.rng);
        self.log_start();
        &self.board
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn setup(&self) -> &GameSetup {
        &self.setup
    }

    pub fn marks(&self) -> &MarkAssignment {
        &self.marks
    }

    pub fn first_player(&self) -> Player {
        self.first_player
    }

    pub fn last_move(&self) -> Option<(Player, usize)> {
        self.last_move
    }

    pub fn current_outcome(&self) -> GameOutcome {
        self.board.outcome()
    }

    pub fn phase(&self) -> SessionPhase {
        match self.current_outcome() {
            GameOutcome::Win { .. } => SessionPhase::Won,
            GameOutcome::Tie => SessionPhase::Tied,
            GameOutcome::InProgress if self.board.is_empty() => SessionPhase::NotStarted,
            GameOutcome::InProgress => SessionPhase::InProgress,
        }
    }

    /// `None` once the game is over.
    pub fn player_to_move(&self) -> Option<Player> {
        if self.current_outcome().is_over() {
            None
        } else {
            Some(self.next_player())
        }
    }

    pub fn apply_human_move(&mut self, cell: usize) -> Result<GameOutcome> {
        self.play(Player::Human, cell)
    }

    pub fn compute_and_apply_computer_move(&mut self) -> Result<(usize, GameOutcome)> {
        self.check_turn(Player::Computer)?;

        let result = search(&self.board, Player::Computer);
        let cell = result.cell.ok_or(GameError::MoveAfterGameOver)?;
        log!(
            "Computer chose cell {} (score {}, {} positions searched)",
            cell,
            result.score,
            result.nodes
        );

        let outcome = self.play(Player::Computer, cell)?;
        Ok((cell, outcome))
    }

    fn play(&mut self, player: Player, cell: usize) -> Result<GameOutcome> {
        self.check_turn(player)?;
        self.board.apply_move(cell, player)?;
        self.last_move = Some((player, cell));
        log!("{:?} ({}) played cell {}", player, self.marks.mark_of(player), cell);

        let outcome = self.current_outcome();
        match outcome {
            GameOutcome::Win { winner, line } => {
                log!("{:?} won on line {} {:?}", winner, line.index, line.cells)
            }
            GameOutcome::Tie => log!("Game ended in a tie"),
            GameOutcome::InProgress => {}
        }
        Ok(outcome)
    }

    fn check_turn(&self, player: Player) -> Result<()> {
        if self.current_outcome().is_over() {
            return Err(GameError::MoveAfterGameOver);
        }

        let expected = self.next_player();
        if expected != player {
            return Err(GameError::OutOfTurn { expected });
        }

        Ok(())
    }

    fn next_player(&self) -> Player {
        if self.board.occupied_count() % 2 == 0 {
            self.first_player
        } else {
            self.first_player.opponent()
        }
    }

    fn log_start(&self) {
        log!(
            "New game: human plays {}, computer plays {}, {:?} moves first",
            self.marks.mark_of(Player::Human),
            self.marks.mark_of(Player::Computer),
            self.first_player
        );
    }
}

fn resolve_first_player(mode: FirstPlayerMode, rng: &mut SessionRng) -> Player {
    match mode {
        FirstPlayerMode::Human => Player::Human,
        FirstPlayerMode::Computer => Player::Computer,
        FirstPlayerMode::Random => {
            if rng.random_bool() {
                Player::Human
            } else {
                Player::Computer
            }
        }
    }
}
