use serde::{Deserialize, Serialize};

use crate::constants::{
    COUNTDOWN_TICK_RATE, MATCH_DURATION_SECS, MAX_OPPONENTS, MAX_PAINT_COOLDOWN, OPPONENT_COUNT,
    OPPONENT_SPEED_FACTOR, PAINT_COOLDOWN, PLAYER_SPEED, SIMULATION_TICK_RATE,
};
use crate::error::HostError;

/// Tunable match parameters. Grid size and the two-team model are fixed.
///
/// Hosts may pass a partial object; absent fields take the default.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    pub duration_secs: u32,
    pub paint_cooldown: i32,
    pub player_speed: f32,
    pub opponent_speed_factor: f32,
    pub opponent_count: usize,
    pub tick_rate: u32,
    pub countdown_rate: u32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            duration_secs: MATCH_DURATION_SECS,
            paint_cooldown: PAINT_COOLDOWN,
            player_speed: PLAYER_SPEED,
            opponent_speed_factor: OPPONENT_SPEED_FACTOR,
            opponent_count: OPPONENT_COUNT,
            tick_rate: SIMULATION_TICK_RATE,
            countdown_rate: COUNTDOWN_TICK_RATE,
        }
    }
}

impl MatchConfig {
    pub fn opponent_speed(&self) -> f32 {
        self.player_speed * self.opponent_speed_factor
    }

    pub fn validate(&self) -> Result<(), HostError> {
        if self.duration_secs == 0 {
            return Err(HostError::InvalidConfig("duration_secs must be positive".into()));
        }
        if self.tick_rate == 0 || self.countdown_rate == 0 {
            return Err(HostError::InvalidConfig("tick rates must be positive".into()));
        }
        if !(0..=MAX_PAINT_COOLDOWN).contains(&self.paint_cooldown) {
            return Err(HostError::InvalidConfig(format!(
                "paint_cooldown must be between 0 and {}",
                MAX_PAINT_COOLDOWN
            )));
        }
        if self.opponent_count > MAX_OPPONENTS {
            return Err(HostError::InvalidConfig(format!(
                "opponent_count must be at most {}",
                MAX_OPPONENTS
            )));
        }
        if !(self.player_speed.is_finite() && self.player_speed > 0.0) {
            return Err(HostError::InvalidConfig("player_speed must be a positive number".into()));
        }
        if !(self.opponent_speed_factor.is_finite() && self.opponent_speed_factor > 0.0) {
            return Err(HostError::InvalidConfig(
                "opponent_speed_factor must be a positive number".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_arcade_rules() {
        let config = MatchConfig::default();
        assert_eq!(config.duration_secs, 60);
        assert_eq!(config.paint_cooldown, 15);
        assert_eq!(config.opponent_count, 3);
        assert!((config.opponent_speed() - 1.6).abs() < f32::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_objects_fill_in_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{ "duration_secs": 90 }"#).unwrap();
        assert_eq!(config.duration_secs, 90);
        assert_eq!(config.tick_rate, 60);
    }

    #[test]
    fn rejects_zero_rates() {
        let config = MatchConfig {
            tick_rate: 0,
            ..MatchConfig::default()
        };
        assert!(matches!(config.validate(), Err(HostError::InvalidConfig(_))));
    }

    #[test]
    fn rejects_out_of_range_cooldowns() {
        for paint_cooldown in [-1, MAX_PAINT_COOLDOWN + 1, i32::MAX] {
            let config = MatchConfig {
                paint_cooldown,
                ..MatchConfig::default()
            };
            assert!(matches!(config.validate(), Err(HostError::InvalidConfig(_))));
        }
        let config = MatchConfig {
            paint_cooldown: MAX_PAINT_COOLDOWN,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_too_many_opponents() {
        for opponent_count in [MAX_OPPONENTS + 1, usize::MAX] {
            let config = MatchConfig {
                opponent_count,
                ..MatchConfig::default()
            };
            assert!(matches!(config.validate(), Err(HostError::InvalidConfig(_))));
        }
        let config = MatchConfig {
            opponent_count: 0,
            ..MatchConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
