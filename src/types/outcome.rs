use serde::{Deserialize, Serialize};

use super::team::Team;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPhase {
    #[default]
    Running,
    Ended,
}

/// Per-team tile coverage. Percentages are truncated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Scores {
    pub team_a_tiles: u32,
    pub team_b_tiles: u32,
    pub team_a_percent: u32,
    pub team_b_percent: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    TeamA,
    TeamB,
    Tie,
}

impl Winner {
    /// Higher percentage wins; equal percentages tie.
    pub fn decide(scores: &Scores) -> Self {
        if scores.team_a_percent > scores.team_b_percent {
            Winner::TeamA
        } else if scores.team_b_percent > scores.team_a_percent {
            Winner::TeamB
        } else {
            Winner::Tie
        }
    }

    pub fn team(self) -> Option<Team> {
        match self {
            Winner::TeamA => Some(Team::TeamA),
            Winner::TeamB => Some(Team::TeamB),
            Winner::Tie => None,
        }
    }

    /// Headline shown on the game-over screen.
    pub fn headline(self) -> String {
        match self.team() {
            Some(team) => format!("{} wins!", team.label()),
            None => "It's a tie!".to_string(),
        }
    }
}

/// Result frozen at the moment the countdown reaches zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: Winner,
    pub scores: Scores,
}

impl MatchOutcome {
    pub fn from_scores(scores: Scores) -> Self {
        Self {
            winner: Winner::decide(&scores),
            scores,
        }
    }
}
