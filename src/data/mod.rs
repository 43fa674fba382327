mod grid;
mod score_builder;

pub use grid::Grid;
pub use score_builder::{coverage_percent, ScoreBuilder};

use crate::constants::{CANVAS_HEIGHT, CANVAS_WIDTH};
use crate::types::{
    Actor, ActorSnapshot, Controller, InputState, MatchConfig, MatchOutcome, MatchPhase,
    MatchSnapshot, Scores, Team,
};

/// All state for one match. Mutated only by `MatchLogic`.
pub struct MatchData {
    tick: u64,
    config: MatchConfig,
    phase: MatchPhase,
    time_remaining: u32,
    grid: Grid,
    player: Actor,
    opponents: Vec<Actor>,
    input: InputState,
    scores: Scores,
    outcome: Option<MatchOutcome>,
}

impl MatchData {
    pub fn new(config: MatchConfig) -> Self {
        let (spawn_x, spawn_y) = Self::player_spawn();
        Self {
            tick: 0,
            config,
            phase: MatchPhase::Running,
            time_remaining: config.duration_secs,
            grid: Grid::new(),
            player: Actor::new(
                Team::TeamA,
                spawn_x,
                spawn_y,
                config.player_speed,
                Controller::InputDriven,
            ),
            opponents: Vec::with_capacity(config.opponent_count),
            input: InputState::default(),
            scores: Scores::default(),
            outcome: None,
        }
    }

    /// Canvas center; the player is moved back here on every reset.
    pub fn player_spawn() -> (f32, f32) {
        (CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0)
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn increment_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut MatchConfig {
        &mut self.config
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn running(&self) -> bool {
        self.phase == MatchPhase::Running
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    pub fn player(&self) -> &Actor {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut Actor {
        &mut self.player
    }

    pub fn opponents(&self) -> &[Actor] {
        &self.opponents
    }

    pub fn opponents_mut(&mut self) -> &mut Vec<Actor> {
        &mut self.opponents
    }

    /// Disjoint borrows for a tick: the grid is painted while actors move.
    pub fn split_mut(&mut self) -> (&mut Grid, &mut Actor, &mut [Actor], &InputState) {
        (
            &mut self.grid,
            &mut self.player,
            self.opponents.as_mut_slice(),
            &self.input,
        )
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputState {
        &mut self.input
    }

    pub fn scores(&self) -> &Scores {
        &self.scores
    }

    pub fn set_scores(&mut self, scores: Scores) {
        self.scores = scores;
    }

    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Counts the timer down one second. Returns true when it hits zero.
    pub fn decrement_time(&mut self) -> bool {
        self.time_remaining = self.time_remaining.saturating_sub(1);
        self.time_remaining == 0
    }

    pub fn end(&mut self, outcome: MatchOutcome) {
        self.scores = outcome.scores;
        self.outcome = Some(outcome);
        self.phase = MatchPhase::Ended;
    }

    /// Fresh grid, full timer, player back at center. Opponents are cleared
    /// and must be respawned by the caller.
    pub fn reset(&mut self) {
        let (spawn_x, spawn_y) = Self::player_spawn();
        self.grid = Grid::new();
        self.time_remaining = self.config.duration_secs;
        self.player.position_x = spawn_x;
        self.player.position_y = spawn_y;
        self.player.speed = self.config.player_speed;
        self.opponents.clear();
        self.scores = Scores::default();
        self.outcome = None;
        self.phase = MatchPhase::Running;
        self.tick = 0;
    }

    pub fn build_snapshot(&self) -> MatchSnapshot {
        MatchSnapshot {
            grid: self.grid.snapshot(),
            player: ActorSnapshot::from(&self.player),
            opponents: self.opponents.iter().map(ActorSnapshot::from).collect(),
            time_remaining: self.time_remaining,
            phase: self.phase,
            scores: self.scores,
            outcome: self.outcome,
        }
    }
}

impl Default for MatchData {
    fn default() -> Self {
        Self::new(MatchConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Winner;

    #[test]
    fn new_match_starts_running_with_full_timer() {
        let data = MatchData::default();
        assert!(data.running());
        assert_eq!(data.time_remaining(), 60);
        assert_eq!(data.player().position_x, 256.0);
        assert_eq!(data.player().position_y, 240.0);
        assert_eq!(data.player().team, Team::TeamA);
        assert!(data.outcome().is_none());
    }

    #[test]
    fn timer_saturates_at_zero() {
        let mut data = MatchData::new(MatchConfig {
            duration_secs: 1,
            ..MatchConfig::default()
        });
        assert!(data.decrement_time());
        assert!(data.decrement_time());
        assert_eq!(data.time_remaining(), 0);
    }

    #[test]
    fn reset_keeps_player_state_but_moves_it_home() {
        let mut data = MatchData::default();
        data.player_mut().position_x = 4.0;
        data.player_mut().paint_cooldown = 9;
        data.grid_mut().set(0, 0, Team::TeamA);
        data.end(MatchOutcome {
            winner: Winner::TeamA,
            scores: Scores::default(),
        });

        data.reset();

        assert!(data.running());
        assert_eq!(data.player().position_x, 256.0);
        assert_eq!(data.player().paint_cooldown, 9);
        assert_eq!(data.grid().get(0, 0), Some(Team::Neutral));
        assert!(data.opponents().is_empty());
        assert!(data.outcome().is_none());
    }

    #[test]
    fn snapshot_carries_outcome_only_after_end() {
        let mut data = MatchData::default();
        assert!(data.build_snapshot().outcome.is_none());

        data.end(MatchOutcome::from_scores(Scores::default()));
        let snapshot = data.build_snapshot();
        assert_eq!(snapshot.phase, MatchPhase::Ended);
        assert_eq!(snapshot.outcome.map(|o| o.winner), Some(Winner::Tie));
    }
}
