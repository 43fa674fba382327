use rand::Rng;

use super::movement;
use crate::constants::{
    ACTOR_SIZE, ANIMATION_PERIOD, CANVAS_HEIGHT, CANVAS_WIDTH, THINK_TICKS_MAX, THINK_TICKS_MIN,
};
use crate::types::{Actor, AiBrain, Controller, Facing, Team};

/// Creates an opponent with a random spawn point, facing, animation phase,
/// roam target and think-timer.
pub fn spawn_opponent<R: Rng + ?Sized>(rng: &mut R, speed: f32) -> Actor {
    let position_x = rng.gen_range(0.0..CANVAS_WIDTH - ACTOR_SIZE);
    let position_y = rng.gen_range(0.0..CANVAS_HEIGHT - ACTOR_SIZE);
    let (target_x, target_y) = random_target(rng);
    let brain = AiBrain {
        target_x,
        target_y,
        think_timer: random_think_ticks(rng),
    };

    let mut actor = Actor::new(
        Team::TeamB,
        position_x,
        position_y,
        speed,
        Controller::AiDriven(brain),
    );
    actor.facing = Facing::from(rng.gen_range(0..4u32));
    actor.animation = rng.gen_range(0..ANIMATION_PERIOD);
    actor
}

/// Re-picks the roam target when the think-timer has run out, counts the
/// timer down, then steers one step toward the current target.
pub fn update<R: Rng + ?Sized>(actor: &mut Actor, rng: &mut R) {
    let (target_x, target_y) = match &mut actor.controller {
        Controller::AiDriven(brain) => {
            if brain.think_timer <= 0 {
                let (x, y) = random_target(rng);
                brain.target_x = x;
                brain.target_y = y;
                brain.think_timer = random_think_ticks(rng);
            }
            brain.think_timer -= 1;
            (brain.target_x, brain.target_y)
        }
        Controller::InputDriven => return,
    };

    movement::step_toward(actor, target_x, target_y);
}

fn random_target<R: Rng + ?Sized>(rng: &mut R) -> (f32, f32) {
    (rng.gen_range(0.0..CANVAS_WIDTH), rng.gen_range(0.0..CANVAS_HEIGHT))
}

fn random_think_ticks<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    rng.gen_range(THINK_TICKS_MIN..THINK_TICKS_MAX)
}
