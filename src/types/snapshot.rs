use serde::{Deserialize, Serialize};

use super::actor::{Actor, Facing};
use super::outcome::{MatchOutcome, MatchPhase, Scores};
use super::team::Team;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActorSnapshot {
    pub x: f32,
    pub y: f32,
    pub team: Team,
    pub facing: Facing,
    pub cooldown: i32,
    pub animation: u32,
}

impl From<&Actor> for ActorSnapshot {
    fn from(actor: &Actor) -> Self {
        Self {
            x: actor.position_x,
            y: actor.position_y,
            team: actor.team,
            facing: actor.facing,
            cooldown: actor.paint_cooldown,
            animation: actor.animation,
        }
    }
}

/// Row-major copy of the ownership tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub width: usize,
    pub height: usize,
    pub tags: Vec<u8>,
}

/// Everything the renderer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchSnapshot {
    pub grid: GridSnapshot,
    pub player: ActorSnapshot,
    pub opponents: Vec<ActorSnapshot>,
    pub time_remaining: u32,
    pub phase: MatchPhase,
    pub scores: Scores,
    /// Present only once the match has ended.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<MatchOutcome>,
}
