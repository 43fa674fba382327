use serde::{Deserialize, Serialize};

use super::team::Team;
use crate::constants::{ACTOR_SIZE, ANIMATION_PERIOD};

/// Direction an actor is looking, encoded for the renderer as 0=Down 1=Left 2=Right 3=Up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u32", from = "u32")]
pub enum Facing {
    #[default]
    Down = 0,
    Left = 1,
    Right = 2,
    Up = 3,
}

impl From<Facing> for u32 {
    fn from(facing: Facing) -> u32 {
        facing as u32
    }
}

impl From<u32> for Facing {
    fn from(value: u32) -> Facing {
        match value {
            1 => Facing::Left,
            2 => Facing::Right,
            3 => Facing::Up,
            _ => Facing::Down,
        }
    }
}

/// Roaming state carried by an autonomous opponent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AiBrain {
    pub target_x: f32,
    pub target_y: f32,
    /// Ticks until a new roam target is picked; may go negative between picks.
    pub think_timer: i32,
}

/// Where an actor's per-tick decisions come from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Controller {
    /// Keyboard intents, resolved per axis.
    InputDriven,
    /// Steering toward a periodically re-picked roam target.
    AiDriven(AiBrain),
}

/// A moving, painting entity: the player or one of the opponents.
#[derive(Debug, Clone, PartialEq)]
pub struct Actor {
    pub position_x: f32,
    pub position_y: f32,
    pub size: f32,
    pub speed: f32,
    pub team: Team,
    pub facing: Facing,
    pub paint_cooldown: i32,
    pub animation: u32,
    pub controller: Controller,
}

impl Actor {
    pub fn new(team: Team, position_x: f32, position_y: f32, speed: f32, controller: Controller) -> Self {
        Self {
            position_x,
            position_y,
            size: ACTOR_SIZE,
            speed,
            team,
            facing: Facing::Down,
            paint_cooldown: 0,
            animation: 0,
            controller,
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self.controller, Controller::AiDriven(_))
    }

    pub fn brain(&self) -> Option<&AiBrain> {
        match &self.controller {
            Controller::AiDriven(brain) => Some(brain),
            Controller::InputDriven => None,
        }
    }

    pub fn ready_to_paint(&self) -> bool {
        self.paint_cooldown <= 0
    }

    #[inline]
    pub fn tick_cooldown(&mut self) {
        if self.paint_cooldown > 0 {
            self.paint_cooldown -= 1;
        }
    }

    #[inline]
    pub fn advance_animation(&mut self) {
        self.animation = (self.animation + 1) % ANIMATION_PERIOD;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cooldown_stops_at_zero() {
        let mut actor = Actor::new(Team::TeamA, 0.0, 0.0, 2.0, Controller::InputDriven);
        actor.paint_cooldown = 1;
        actor.tick_cooldown();
        actor.tick_cooldown();
        assert_eq!(actor.paint_cooldown, 0);
        assert!(actor.ready_to_paint());
    }

    #[test]
    fn animation_wraps_after_one_period() {
        let mut actor = Actor::new(Team::TeamB, 0.0, 0.0, 1.6, Controller::AiDriven(AiBrain::default()));
        actor.animation = ANIMATION_PERIOD - 1;
        actor.advance_animation();
        assert_eq!(actor.animation, 0);
        assert!(actor.is_ai());
    }
}
