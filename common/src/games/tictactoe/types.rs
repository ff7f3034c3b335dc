use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Computer,
}

impl Player {
    pub fn opponent(&self) -> Player {
        match self {
            Player::Human => Player::Computer,
            Player::Computer => Player::Human,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    pub fn player(&self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(*player),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Mark {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Mark::X),
            "o" => Ok(Mark::O),
            other => Err(format!("Unknown mark '{}', expected x or o", other)),
        }
    }
}

/// Which mark each player holds. Fixed for the duration of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MarkAssignment {
    human: Mark,
}

impl MarkAssignment {
    pub fn new(human: Mark) -> Self {
        Self { human }
    }

    pub fn mark_of(&self, player: Player) -> Mark {
        match player {
            Player::Human => self.human,
            Player::Computer => self.human.opponent(),
        }
    }

    pub fn player_with(&self, mark: Mark) -> Player {
        if mark == self.human {
            Player::Human
        } else {
            Player::Computer
        }
    }
}

impl Default for MarkAssignment {
    fn default() -> Self {
        Self::new(Mark::O)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FirstPlayerMode {
    #[default]
    Human,
    Computer,
    Random,
}

impl FromStr for FirstPlayerMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(FirstPlayerMode::Human),
            "computer" => Ok(FirstPlayerMode::Computer),
            "random" => Ok(FirstPlayerMode::Random),
            other => Err(format!(
                "Unknown first player '{}', expected human, computer or random",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WinningLine {
    pub index: usize,
    pub cells: [usize; 3],
}

impl WinningLine {
    pub fn new(index: usize, cells: [usize; 3]) -> Self {
        Self { index, cells }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameOutcome {
    InProgress,
    Win { winner: Player, line: WinningLine },
    Tie,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win { winner, .. } => Some(*winner),
            _ => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Won,
    Tied,
}
