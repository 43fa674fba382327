use crate::constants::{ARRIVAL_RADIUS, CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::types::{Actor, Facing, InputState};

#[inline]
fn max_x(actor: &Actor) -> f32 {
    CANVAS_WIDTH - actor.size
}

#[inline]
fn max_y(actor: &Actor) -> f32 {
    CANVAS_HEIGHT - actor.size
}

/// Keyboard movement. Each axis is resolved on its own: a candidate that
/// would leave the canvas is dropped for this tick rather than clamped.
/// Facing follows the last active flag in up, down, left, right order.
pub fn step_input(actor: &mut Actor, input: &InputState) {
    if !input.any_direction() {
        return;
    }

    let mut new_x = actor.position_x;
    let mut new_y = actor.position_y;

    if input.up {
        new_y -= actor.speed;
        actor.facing = Facing::Up;
    }
    if input.down {
        new_y += actor.speed;
        actor.facing = Facing::Down;
    }
    if input.left {
        new_x -= actor.speed;
        actor.facing = Facing::Left;
    }
    if input.right {
        new_x += actor.speed;
        actor.facing = Facing::Right;
    }

    if (0.0..=max_x(actor)).contains(&new_x) {
        actor.position_x = new_x;
    }
    if (0.0..=max_y(actor)).contains(&new_y) {
        actor.position_y = new_y;
    }
}

/// Steering movement: one straight step of `speed` toward the target,
/// then the position is clamped into the canvas.
pub fn step_toward(actor: &mut Actor, target_x: f32, target_y: f32) {
    let dx = target_x - actor.position_x;
    let dy = target_y - actor.position_y;
    let dist = (dx * dx + dy * dy).sqrt();

    if dist > ARRIVAL_RADIUS {
        actor.position_x += dx / dist * actor.speed;
        actor.position_y += dy / dist * actor.speed;
        actor.facing = facing_for(dx, dy);
    }

    actor.position_x = actor.position_x.clamp(0.0, max_x(actor));
    actor.position_y = actor.position_y.clamp(0.0, max_y(actor));
}

/// Dominant axis wins. The comparison is a strict `>`, so equal magnitudes
/// resolve to the vertical facing. Keep it strict: diagonal roamers have
/// always turned up or down on an exact tie.
fn facing_for(dx: f32, dy: f32) -> Facing {
    if dx.abs() > dy.abs() {
        if dx > 0.0 {
            Facing::Right
        } else {
            Facing::Left
        }
    } else if dy > 0.0 {
        Facing::Down
    } else {
        Facing::Up
    }
}
