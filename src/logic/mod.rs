pub mod ai_controller;
pub mod movement;
mod run_loop;

pub use run_loop::{DueSteps, RunLoop};

use rand::rngs::SmallRng;
use rand::Rng;
use tracing::{debug, info, trace};

use crate::constants::OPPONENT_EXTRA_COOLDOWN_MAX;
use crate::data::{Grid, MatchData, ScoreBuilder};
use crate::types::{
    Actor, Controller, InputState, MatchConfig, MatchOutcome, MatchPhase, MatchSnapshot,
};

/// Match lifecycle: Running until the countdown reaches zero, then Ended
/// until an explicit restart.
pub struct MatchLogic<R: Rng = SmallRng> {
    data: MatchData,
    rng: R,
}

impl<R: Rng> MatchLogic<R> {
    pub fn new(config: MatchConfig, rng: R) -> Self {
        let mut logic = Self {
            data: MatchData::new(config),
            rng,
        };
        logic.reset();
        logic
    }

    /// One simulation tick. A no-op once the match has ended.
    pub fn step(&mut self) {
        if !self.data.running() {
            return;
        }

        self.data.increment_tick();
        let paint_cooldown = self.data.config().paint_cooldown;
        let (grid, player, opponents, input) = self.data.split_mut();

        update_actor(player, input, grid, paint_cooldown, &mut self.rng);
        for opponent in opponents.iter_mut() {
            update_actor(opponent, input, grid, paint_cooldown, &mut self.rng);
        }

        let scores = ScoreBuilder::compute(self.data.grid());
        self.data.set_scores(scores);

        trace!(
            tick = self.data.tick(),
            team_a = scores.team_a_percent,
            team_b = scores.team_b_percent,
            "simulation step"
        );
    }

    /// One countdown second. Ends the match when the timer reaches zero.
    pub fn countdown(&mut self) {
        if !self.data.running() {
            return;
        }

        if self.data.decrement_time() {
            let outcome = MatchOutcome::from_scores(ScoreBuilder::compute(self.data.grid()));
            info!(
                winner = ?outcome.winner,
                team_a = outcome.scores.team_a_percent,
                team_b = outcome.scores.team_b_percent,
                "match ended"
            );
            self.data.end(outcome);
        }
    }

    /// Starts a new match. Only accepted once the current one has ended.
    pub fn restart(&mut self) -> bool {
        if self.data.running() {
            debug!("restart ignored while the match is running");
            return false;
        }
        self.reset();
        true
    }

    fn reset(&mut self) {
        self.data.reset();
        let speed = self.data.config().opponent_speed();
        let count = self.data.config().opponent_count;
        for _ in 0..count {
            let opponent = ai_controller::spawn_opponent(&mut self.rng, speed);
            self.data.opponents_mut().push(opponent);
        }
        info!(
            opponents = count,
            duration_secs = self.data.time_remaining(),
            "match started"
        );
    }

    pub fn running(&self) -> bool {
        self.data.running()
    }

    pub fn phase(&self) -> MatchPhase {
        self.data.phase()
    }

    pub fn tick(&self) -> u64 {
        self.data.tick()
    }

    pub fn time_remaining(&self) -> u32 {
        self.data.time_remaining()
    }

    pub fn config(&self) -> &MatchConfig {
        self.data.config()
    }

    pub fn set_tick_rate(&mut self, tick_rate: u32) {
        self.data.config_mut().tick_rate = tick_rate;
    }

    pub fn input(&self) -> &InputState {
        self.data.input()
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        self.data.input_mut()
    }

    pub fn data(&self) -> &MatchData {
        &self.data
    }

    pub fn snapshot(&self) -> MatchSnapshot {
        self.data.build_snapshot()
    }
}

/// Per-actor tick, dispatched on the actor's controller.
fn update_actor<R: Rng + ?Sized>(
    actor: &mut Actor,
    input: &InputState,
    grid: &mut Grid,
    paint_cooldown: i32,
    rng: &mut R,
) {
    match actor.controller {
        Controller::InputDriven => {
            movement::step_input(actor, input);
            actor.tick_cooldown();
            if input.paint && actor.ready_to_paint() {
                grid.paint(actor);
                actor.paint_cooldown = paint_cooldown;
            }
        }
        Controller::AiDriven(_) => {
            ai_controller::update(actor, rng);
            actor.tick_cooldown();
            if actor.ready_to_paint() {
                grid.paint(actor);
                actor.paint_cooldown =
                    paint_cooldown.saturating_add(rng.gen_range(0..OPPONENT_EXTRA_COOLDOWN_MAX));
            }
        }
    }
    actor.advance_animation();
}

#[cfg(test)]
impl<R: Rng> MatchLogic<R> {
    pub(crate) fn data_mut(&mut self) -> &mut MatchData {
        &mut self.data
    }
}
