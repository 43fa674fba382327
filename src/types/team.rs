use serde::{Deserialize, Serialize};

/// Ownership tag held by every grid cell, and the side an actor paints for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum Team {
    #[default]
    Neutral = 0,
    TeamA = 1,
    TeamB = 2,
}

impl Team {
    /// Display name used by the HUD and the game-over overlay.
    pub fn label(self) -> &'static str {
        match self {
            Team::Neutral => "Neutral",
            Team::TeamA => "Team 1 (Blue)",
            Team::TeamB => "Team 2 (Red)",
        }
    }
}

impl From<Team> for u8 {
    fn from(team: Team) -> u8 {
        team as u8
    }
}

impl From<u8> for Team {
    fn from(value: u8) -> Team {
        match value {
            1 => Team::TeamA,
            2 => Team::TeamB,
            _ => Team::Neutral,
        }
    }
}
