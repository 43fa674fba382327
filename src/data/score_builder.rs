use super::grid::Grid;
use crate::types::{Scores, Team};

pub struct ScoreBuilder;

impl ScoreBuilder {
    /// Single pass over the grid counting each team's tiles.
    pub fn compute(grid: &Grid) -> Scores {
        let mut team_a_tiles = 0u32;
        let mut team_b_tiles = 0u32;
        for &owner in grid.cells() {
            match owner {
                Team::TeamA => team_a_tiles += 1,
                Team::TeamB => team_b_tiles += 1,
                Team::Neutral => {}
            }
        }

        let total = grid.len() as u32;
        Scores {
            team_a_tiles,
            team_b_tiles,
            team_a_percent: coverage_percent(team_a_tiles, total),
            team_b_percent: coverage_percent(team_b_tiles, total),
        }
    }
}

/// floor(count / total * 100), computed exactly in integers.
pub fn coverage_percent(count: u32, total: u32) -> u32 {
    if total == 0 {
        return 0;
    }
    (count as u64 * 100 / total as u64) as u32
}
