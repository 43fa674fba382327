use rand::rngs::SmallRng;
use rand::SeedableRng;
use tracing::debug;
use wasm_bindgen::prelude::*;
use web_sys::CanvasRenderingContext2d;

use super::keymap::Key;
use crate::error::HostError;
use crate::logic::{MatchLogic, RunLoop};
use crate::render;
use crate::types::MatchConfig;
use crate::utils::entropy_seed;

/// Browser-facing handle to one match. The host forwards key events and
/// drives either `frame` from `requestAnimationFrame`, or `tick` and
/// `tick_second` from its own timers.
#[wasm_bindgen]
pub struct GameHandler {
    logic: MatchLogic<SmallRng>,
    run_loop: RunLoop,
}

#[wasm_bindgen]
impl GameHandler {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::build(MatchConfig::default(), entropy_seed())
    }

    /// Reproducible match for demos and debugging.
    #[wasm_bindgen]
    pub fn with_seed(seed: u64) -> Self {
        Self::build(MatchConfig::default(), seed)
    }

    /// Accepts a partial config object; missing fields use the defaults.
    #[wasm_bindgen]
    pub fn with_config(config: JsValue) -> Result<GameHandler, JsValue> {
        let config: MatchConfig = serde_wasm_bindgen::from_value(config)
            .map_err(|err| HostError::InvalidConfig(err.to_string()))?;
        Ok(Self::from_config(config)?)
    }

    /// Routes `tracing` output to the browser console. Safe to call twice.
    #[wasm_bindgen]
    pub fn init_logging() {
        #[cfg(target_arch = "wasm32")]
        {
            if tracing_wasm::try_set_as_global_default().is_err() {
                debug!("logging already initialised");
            }
        }
    }

    #[wasm_bindgen]
    pub fn key_down(&mut self, code: &str) {
        let Some(key) = Key::from_code(code) else {
            debug!(code, "ignoring unmapped key");
            return;
        };
        key.apply(self.logic.input_mut(), true);
        if key == Key::Paint && !self.logic.running() {
            self.restart();
        }
    }

    #[wasm_bindgen]
    pub fn key_up(&mut self, code: &str) {
        if let Some(key) = Key::from_code(code) {
            key.apply(self.logic.input_mut(), false);
        }
    }

    /// Releases every held key, e.g. when the window loses focus.
    #[wasm_bindgen]
    pub fn clear_input(&mut self) {
        self.logic.input_mut().clear();
    }

    /// Simulation driver, expected at the tick rate.
    #[wasm_bindgen]
    pub fn tick(&mut self) {
        self.logic.step();
    }

    /// Countdown driver, expected once per second.
    #[wasm_bindgen]
    pub fn tick_second(&mut self) {
        self.logic.countdown();
    }

    /// Runs whatever simulation and countdown steps are due at `now_ms`.
    #[wasm_bindgen]
    pub fn frame(&mut self, now_ms: f64) {
        let due = self.run_loop.advance(now_ms);
        for _ in 0..due.simulation {
            self.logic.step();
        }
        for _ in 0..due.countdown {
            self.logic.countdown();
        }
    }

    #[wasm_bindgen]
    pub fn restart(&mut self) -> bool {
        let restarted = self.logic.restart();
        if restarted {
            self.run_loop.reset();
        }
        restarted
    }

    #[wasm_bindgen]
    pub fn is_running(&self) -> bool {
        self.logic.running()
    }

    #[wasm_bindgen]
    pub fn get_tick(&self) -> u64 {
        self.logic.tick()
    }

    #[wasm_bindgen]
    pub fn get_time_remaining(&self) -> u32 {
        self.logic.time_remaining()
    }

    #[wasm_bindgen]
    pub fn get_opponent_count(&self) -> usize {
        self.logic.data().opponents().len()
    }

    #[wasm_bindgen]
    pub fn get_tick_rate(&self) -> u32 {
        self.run_loop.tick_rate()
    }

    #[wasm_bindgen]
    pub fn set_tick_rate(&mut self, tick_rate: u32) {
        self.run_loop.set_tick_rate(tick_rate);
        self.logic.set_tick_rate(self.run_loop.tick_rate());
    }

    #[wasm_bindgen]
    pub fn get_team_a_percent(&self) -> u32 {
        self.logic.data().scores().team_a_percent
    }

    #[wasm_bindgen]
    pub fn get_team_b_percent(&self) -> u32 {
        self.logic.data().scores().team_b_percent
    }

    #[wasm_bindgen]
    pub fn team_a_text(&self) -> String {
        let [team_a, _] = render::score_texts(self.logic.data().scores());
        team_a
    }

    #[wasm_bindgen]
    pub fn team_b_text(&self) -> String {
        let [_, team_b] = render::score_texts(self.logic.data().scores());
        team_b
    }

    #[wasm_bindgen]
    pub fn timer_text(&self) -> String {
        render::timer_text(self.logic.time_remaining())
    }

    /// Game-over headline, only once the match has ended.
    #[wasm_bindgen]
    pub fn winner_text(&self) -> Option<String> {
        self.logic.data().outcome().map(|o| o.winner.headline())
    }

    #[wasm_bindgen]
    pub fn get_snapshot(&self) -> JsValue {
        serde_wasm_bindgen::to_value(&self.logic.snapshot()).unwrap_or(JsValue::NULL)
    }

    #[cfg(target_arch = "wasm32")]
    #[wasm_bindgen]
    pub fn grid_tags(&self) -> js_sys::Uint8Array {
        let tags: Vec<u8> = self.logic.data().grid().tags().collect();
        js_sys::Uint8Array::from(tags.as_slice())
    }

    #[wasm_bindgen]
    pub fn render(&self, ctx: &CanvasRenderingContext2d) -> Result<(), JsValue> {
        render::draw_frame(ctx, &self.logic.snapshot())
    }
}

impl GameHandler {
    pub fn from_config(config: MatchConfig) -> Result<Self, HostError> {
        config.validate()?;
        Ok(Self::build(config, entropy_seed()))
    }

    fn build(config: MatchConfig, seed: u64) -> Self {
        Self {
            logic: MatchLogic::new(config, SmallRng::seed_from_u64(seed)),
            run_loop: RunLoop::new(config.tick_rate, config.countdown_rate),
        }
    }
}

impl Default for GameHandler {
    fn default() -> Self {
        Self::new()
    }
}

/// Prepares the named canvas for `GameHandler::render`.
#[wasm_bindgen]
pub fn canvas_context(canvas_id: &str) -> Result<CanvasRenderingContext2d, JsValue> {
    Ok(render::context_for(canvas_id)?)
}

#[cfg(test)]
impl GameHandler {
    pub fn logic(&self) -> &MatchLogic<SmallRng> {
        &self.logic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn end_match(handler: &mut GameHandler) {
        for _ in 0..60 {
            handler.tick_second();
        }
    }

    #[test]
    fn creates_running_match() {
        let handler = GameHandler::with_seed(1);
        assert!(handler.is_running());
        assert_eq!(handler.get_tick(), 0);
        assert_eq!(handler.get_time_remaining(), 60);
        assert_eq!(handler.get_opponent_count(), 3);
        assert_eq!(handler.timer_text(), "Time: 60");
        assert_eq!(handler.winner_text(), None);
    }

    #[test]
    fn steps_and_updates_tick() {
        let mut handler = GameHandler::with_seed(2);
        handler.tick();
        assert_eq!(handler.get_tick(), 1);
    }

    #[test]
    fn keys_set_and_release_intents() {
        let mut handler = GameHandler::with_seed(3);
        handler.key_down("KeyD");
        handler.key_down("Space");
        assert!(handler.logic().input().right);
        assert!(handler.logic().input().paint);

        handler.key_up("ArrowRight");
        handler.key_down("Escape");
        assert!(!handler.logic().input().right);

        handler.clear_input();
        assert!(!handler.logic().input().paint);
    }

    #[test]
    fn held_right_moves_player() {
        let mut handler = GameHandler::with_seed(4);
        handler.key_down("ArrowRight");
        for _ in 0..10 {
            handler.tick();
        }
        assert_eq!(handler.logic().data().player().position_x, 276.0);
    }

    #[test]
    fn space_restarts_only_after_the_match_ends() {
        let mut handler = GameHandler::with_seed(5);
        handler.tick_second();
        handler.key_down("Space");
        assert_eq!(handler.get_time_remaining(), 59);

        end_match(&mut handler);
        assert!(!handler.is_running());
        assert!(handler.winner_text().is_some());

        handler.key_up("Space");
        handler.key_down("Space");
        assert!(handler.is_running());
        assert_eq!(handler.get_time_remaining(), 60);
        assert_eq!(handler.get_opponent_count(), 3);
    }

    #[test]
    fn frame_drives_both_cadences() {
        let mut handler = GameHandler::with_seed(6);
        handler.frame(0.0);
        let mut now = 0.0;
        for _ in 0..120 {
            now += 1000.0 / 60.0;
            handler.frame(now + 0.001);
        }
        assert_eq!(handler.get_tick(), 120);
        assert_eq!(handler.get_time_remaining(), 58);
    }

    #[test]
    fn tick_rate_configuration() {
        let mut handler = GameHandler::with_seed(7);
        assert_eq!(handler.get_tick_rate(), 60);
        handler.set_tick_rate(30);
        assert_eq!(handler.get_tick_rate(), 30);
        assert_eq!(handler.logic().config().tick_rate, 30);
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = MatchConfig {
            duration_secs: 0,
            ..MatchConfig::default()
        };
        assert!(matches!(
            GameHandler::from_config(config),
            Err(HostError::InvalidConfig(_))
        ));
    }

    #[test]
    fn oversized_config_values_are_rejected() {
        let huge_cooldown = MatchConfig {
            paint_cooldown: i32::MAX,
            ..MatchConfig::default()
        };
        assert!(matches!(
            GameHandler::from_config(huge_cooldown),
            Err(HostError::InvalidConfig(_))
        ));

        let huge_crowd = MatchConfig {
            opponent_count: usize::MAX,
            ..MatchConfig::default()
        };
        assert!(matches!(
            GameHandler::from_config(huge_crowd),
            Err(HostError::InvalidConfig(_))
        ));
    }

    #[test]
    fn score_lines_follow_live_scores() {
        let handler = GameHandler::with_seed(9);
        assert_eq!(handler.team_a_text(), "Team 1: 0%");
        assert_eq!(handler.team_b_text(), "Team 2: 0%");
    }

    #[test]
    fn custom_duration_is_honoured() {
        let config = MatchConfig {
            duration_secs: 3,
            opponent_count: 1,
            ..MatchConfig::default()
        };
        let mut handler = GameHandler::from_config(config).unwrap();
        assert_eq!(handler.get_opponent_count(), 1);
        handler.tick_second();
        handler.tick_second();
        assert!(handler.is_running());
        handler.tick_second();
        assert!(!handler.is_running());
    }
}
