use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::types::{ActorSnapshot, Facing, MatchOutcome, Scores, Team};

pub const BACKGROUND: &str = "#000";
pub const GRID_LINE: &str = "#333";
pub const TEAM_A_COLOR: &str = "#5bf";
pub const TEAM_B_COLOR: &str = "#f55";
pub const EYE_COLOR: &str = "#fff";
pub const NOZZLE_READY: &str = "#fff";
pub const NOZZLE_COOLING: &str = "#999";
pub const OVERLAY_VEIL: &str = "rgba(0, 0, 0, 0.7)";
pub const OVERLAY_TEXT: &str = "#fff";
pub const OVERLAY_FONT: &str = "24px \"Courier New\", monospace";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub color: &'static str,
    pub rect: Rect,
}

pub fn team_color(team: Team) -> Option<&'static str> {
    match team {
        Team::TeamA => Some(TEAM_A_COLOR),
        Team::TeamB => Some(TEAM_B_COLOR),
        Team::Neutral => None,
    }
}

/// Vertical offset of the paint tank, a slow two-pixel bob.
pub fn bob_offset(animation: u32) -> f64 {
    (animation as f64 * 0.1).sin() * 2.0
}

/// Fills for one character in draw order: body, two eyes, tank, nozzle.
pub fn actor_sprite(actor: &ActorSnapshot) -> [Fill; 5] {
    let color = team_color(actor.team).unwrap_or(TEAM_A_COLOR);
    let x = actor.x.floor() as f64;
    let y = actor.y.floor() as f64;

    let (left_eye, right_eye) = match actor.facing {
        Facing::Down => ((3.0, 6.0), (10.0, 6.0)),
        Facing::Left => ((2.0, 6.0), (2.0, 10.0)),
        Facing::Right => ((11.0, 6.0), (11.0, 10.0)),
        Facing::Up => ((3.0, 3.0), (10.0, 3.0)),
    };

    let nozzle = match actor.facing {
        Facing::Down => Rect::new(x + 7.0, y + 14.0, 2.0, 4.0),
        Facing::Left => Rect::new(x - 2.0, y + 7.0, 4.0, 2.0),
        Facing::Right => Rect::new(x + 14.0, y + 7.0, 4.0, 2.0),
        Facing::Up => Rect::new(x + 7.0, y - 2.0, 2.0, 4.0),
    };
    let nozzle_color = if actor.cooldown <= 0 {
        NOZZLE_READY
    } else {
        NOZZLE_COOLING
    };

    [
        Fill {
            color,
            rect: Rect::new(x + 2.0, y + 2.0, 12.0, 12.0),
        },
        Fill {
            color: EYE_COLOR,
            rect: Rect::new(x + left_eye.0, y + left_eye.1, 3.0, 3.0),
        },
        Fill {
            color: EYE_COLOR,
            rect: Rect::new(x + right_eye.0, y + right_eye.1, 3.0, 3.0),
        },
        Fill {
            color,
            rect: Rect::new(x + 4.0, y + 8.0 + bob_offset(actor.animation), 8.0, 6.0),
        },
        Fill {
            color: nozzle_color,
            rect: nozzle,
        },
    ]
}

/// HUD score lines for team 1 and team 2, in that order.
pub fn score_texts(scores: &Scores) -> [String; 2] {
    [
        format!("Team 1: {}%", scores.team_a_percent),
        format!("Team 2: {}%", scores.team_b_percent),
    ]
}

pub fn timer_text(seconds: u32) -> String {
    format!("Time: {}", seconds)
}

/// Centered game-over lines with their baseline y.
pub fn overlay_lines(outcome: &MatchOutcome) -> [(String, f64); 4] {
    let mid_y = CANVAS_HEIGHT as f64 / 2.0;
    [
        ("GAME OVER".to_string(), mid_y - 40.0),
        (outcome.winner.headline(), mid_y),
        (
            format!(
                "Blue: {}% - Red: {}%",
                outcome.scores.team_a_percent, outcome.scores.team_b_percent
            ),
            mid_y + 40.0,
        ),
        ("Press SPACE to play again".to_string(), mid_y + 80.0),
    ]
}

pub fn overlay_center_x() -> f64 {
    CANVAS_WIDTH as f64 / 2.0
}
