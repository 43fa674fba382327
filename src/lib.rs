pub mod constants;
pub mod data;
pub mod error;
pub mod logic;
pub mod render;
pub mod service;
pub mod types;
pub mod utils;

pub use error::HostError;
pub use logic::{MatchLogic, RunLoop};
pub use service::{canvas_context, GameHandler};
pub use types::{
    Actor, Facing, InputState, MatchConfig, MatchOutcome, MatchPhase, MatchSnapshot, Scores, Team,
    Winner,
};

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Drives a whole match the way the browser does: sixty simulation
    /// ticks, then one countdown tick, until time runs out.
    #[test]
    fn full_match_plays_out_and_freezes() {
        let mut logic = MatchLogic::new(MatchConfig::default(), StdRng::seed_from_u64(2024));
        logic.input_mut().paint = true;
        logic.input_mut().right = true;

        let mut last_time = logic.time_remaining();
        let mut ended_at = None;
        for second in 0..70u32 {
            for frame in 0..60 {
                if frame == 30 {
                    let input = logic.input_mut();
                    input.right = !input.right;
                    input.left = !input.right;
                }
                logic.step();
            }
            logic.countdown();

            let time = logic.time_remaining();
            if logic.running() {
                assert_eq!(time, last_time - 1);
            } else {
                assert_eq!(time, 0);
                ended_at.get_or_insert(second);
            }
            last_time = time;

            let scores = logic.data().scores();
            assert!(scores.team_a_percent <= 100 && scores.team_b_percent <= 100);
            assert!(scores.team_a_percent + scores.team_b_percent <= 100);
        }

        assert_eq!(ended_at, Some(59));
        let outcome = *logic.data().outcome().unwrap();
        assert_eq!(outcome.winner, Winner::decide(&outcome.scores));
        assert!(outcome.scores.team_a_tiles > 0);
        assert!(outcome.scores.team_b_tiles > 0);
    }

    #[test]
    fn snapshot_wire_shape() {
        let mut logic = MatchLogic::new(MatchConfig::default(), StdRng::seed_from_u64(8));
        logic.step();
        let json = serde_json::to_value(logic.snapshot()).unwrap();

        assert_eq!(json["grid"]["width"], 32);
        assert_eq!(json["grid"]["height"], 30);
        assert_eq!(json["grid"]["tags"].as_array().unwrap().len(), 960);
        assert_eq!(json["player"]["facing"], 0);
        assert_eq!(json["player"]["team"], 1);
        assert_eq!(json["opponents"].as_array().unwrap().len(), 3);
        assert_eq!(json["time_remaining"], 60);
        assert_eq!(json["phase"], "running");
        assert!(json.get("outcome").is_none());

        for _ in 0..60 {
            logic.countdown();
        }
        let json = serde_json::to_value(logic.snapshot()).unwrap();
        assert_eq!(json["phase"], "ended");
        assert!(json["outcome"]["winner"].is_string());
    }
}
