use tictactoe_common::games::tictactoe::{GameOutcome, GameSession, Player, SessionPhase};
use tictactoe_common::log;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Play(usize),
    Reset,
    Help,
    Quit,
}

pub fn parse_command(input: &str) -> Result<Command, String> {
    let input = input.trim().to_ascii_lowercase();
    match input.as_str() {
        "r" | "reset" => Ok(Command::Reset),
        "h" | "help" | "?" => Ok(Command::Help),
        "q" | "quit" | "exit" => Ok(Command::Quit),
        other => other
            .parse::<usize>()
            .map(Command::Play)
            .map_err(|_| format!("Unknown command '{}', type help for a list", other)),
    }
}

pub const HELP_TEXT: &str = "Enter a cell 0-8 to play it, r to restart, q to quit.\n\
0 1 2\n\
3 4 5\n\
6 7 8";

/// Turns console commands into session calls and the results into text.
pub struct Controller {
    session: GameSession,
}

impl Controller {
    pub fn new(session: GameSession) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Opening output for a fresh game, including the computer's move when it opens.
    pub fn start(&mut self) -> Vec<String> {
        let marks = self.session.marks();
        let mut output = vec![format!(
            "You are {}, the computer is {}.",
            marks.mark_of(Player::Human),
            marks.mark_of(Player::Computer)
        )];

        if self.session.player_to_move() == Some(Player::Computer) {
            output.extend(self.computer_turn());
        } else {
            output.push(self.session.board().render(self.session.marks()));
        }
        output
    }

    pub fn handle(&mut self, command: Command) -> Vec<String> {
        match command {
            Command::Play(cell) => self.human_turn(cell),
            Command::Reset => {
                self.session.reset_game();
                log!("Game restarted from the console");
                self.start()
            }
            Command::Help => vec![HELP_TEXT.to_string()],
            Command::Quit => Vec::new(),
        }
    }

    fn human_turn(&mut self, cell: usize) -> Vec<String> {
        match self.session.apply_human_move(cell) {
            Err(err) => vec![err.to_string()],
            Ok(GameOutcome::InProgress) => self.computer_turn(),
            Ok(outcome) => self.finished(outcome),
        }
    }

    fn computer_turn(&mut self) -> Vec<String> {
        match self.session.compute_and_apply_computer_move() {
            Err(err) => vec![err.to_string()],
            Ok((cell, GameOutcome::InProgress)) => vec![
                format!("Computer plays {}.", cell),
                self.session.board().render(self.session.marks()),
            ],
            Ok((cell, outcome)) => {
                let mut output = vec![format!("Computer plays {}.", cell)];
                output.extend(self.finished(outcome));
                output
            }
        }
    }

    fn finished(&self, outcome: GameOutcome) -> Vec<String> {
        let mut output = vec![self.session.board().render(self.session.marks())];
        if let Some(message) = outcome_message(&outcome) {
            output.push(message.to_string());
        }
        if matches!(self.session.phase(), SessionPhase::Won | SessionPhase::Tied) {
            output.push("Type r to play again.".to_string());
        }
        output
    }
}

pub fn outcome_message(outcome: &GameOutcome) -> Option<&'static str> {
    match outcome {
        GameOutcome::InProgress => None,
        GameOutcome::Win {
            winner: Player::Computer,
            ..
        } => Some("You will never win."),
        GameOutcome::Win {
            winner: Player::Human,
            ..
        } => Some("Player never wins!"),
        GameOutcome::Tie => Some("TIE - so close!"),
    }
}
