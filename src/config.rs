use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{GRID_WIDTH, MAX_MOVE_COUNT};
use crate::error::ConfigError;

/// Which rows and columns may be pushed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PushRules {
    /// Every row and column, 0 through 6.
    #[default]
    #[value(name = "all")]
    AllLines,
    /// Only 0, 2, 4 and 6; odd lines hold fixed tiles.
    #[value(name = "even")]
    EvenLinesOnly,
}

impl PushRules {
    pub fn is_legal(&self, index: usize) -> bool {
        match self {
            PushRules::AllLines => index < GRID_WIDTH as usize,
            PushRules::EvenLinesOnly => index < GRID_WIDTH as usize && index % 2 == 0,
        }
    }

    pub fn line_indices(self) -> impl Iterator<Item = usize> {
        (0..GRID_WIDTH as usize).filter(move |&index| self.is_legal(index))
    }
}

/// Weights of the push scoring heuristic. Only the ordering matters:
/// reachable and near > reachable and far > held off board > unreachable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub reachable_bonus: i32,
    pub near_bonus_range: i32,
    pub center_bonus_range: i32,
    pub off_board_bonus: i32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        ScoreWeights {
            reachable_bonus: 2000,
            near_bonus_range: 20,
            center_bonus_range: 6,
            off_board_bonus: 1000,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Time the push evaluator may spend starting new candidates.
    pub push_budget_ms: u64,
    /// Spare time on the first turn spent filling the state graph.
    pub first_turn_budget_ms: u64,
    pub state_graph_node_limit: usize,
    pub rules: PushRules,
    pub max_move_count: usize,
    pub weights: ScoreWeights,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            push_budget_ms: 45,
            first_turn_budget_ms: 900,
            state_graph_node_limit: 20_000,
            rules: PushRules::default(),
            max_move_count: MAX_MOVE_COUNT,
            weights: ScoreWeights::default(),
        }
    }
}

impl Config {
    pub fn from_json_str(json: &str) -> Result<Config, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        Config::from_json_str(&text)
    }

    pub fn push_budget(&self) -> Duration {
        Duration::from_millis(self.push_budget_ms)
    }

    pub fn first_turn_budget(&self) -> Duration {
        Duration::from_millis(self.first_turn_budget_ms)
    }
}
