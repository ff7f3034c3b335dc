use serde::{Deserialize, Serialize};

use super::types::{FirstPlayerMode, Mark, MarkAssignment};

/// Setup choice made by the view before a game: which mark the human holds
/// and who opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSetup {
    pub human_mark: Mark,
    #[serde(default)]
    pub first_player: FirstPlayerMode,
}

impl GameSetup {
    pub fn new(human_mark: Mark, first_player: FirstPlayerMode) -> Self {
        Self {
            human_mark,
            first_player,
        }
    }

    pub fn marks(&self) -> MarkAssignment {
        MarkAssignment::new(self.human_mark)
    }
}

impl Default for GameSetup {
    fn default() -> Self {
        Self {
            human_mark: Mark::O,
            first_player: FirstPlayerMode::Human,
        }
    }
}
