use log::{debug, info, warn};
use serde::Serialize;

use crate::ai::Deadline;
use crate::config::Config;
use crate::core::{Direction, GameState, PushCommand};
use crate::state_graph::StateGraph;

/// Answer used when the budget runs out before any push was scored.
pub const DEFAULT_PUSH: PushCommand = PushCommand {
    index: 0,
    direction: Direction::Up,
};

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct CandidateScore {
    pub command: PushCommand,
    pub score: i32,
}

/// Outcome of one push turn, kept for logs and JSON reports.
#[derive(Serialize, Clone, Debug)]
pub struct Evaluation {
    pub command: PushCommand,
    pub best_score: Option<i32>,
    pub candidates: usize,
    pub evaluated: Vec<CandidateScore>,
    pub from_state_graph: usize,
    pub fell_back: bool,
    pub elapsed_us: u64,
}

/// One ply brute force over every legal push.
pub struct PushAi<'a> {
    config: &'a Config,
    graph: Option<&'a StateGraph>,
}

impl<'a> PushAi<'a> {
    pub fn new(config: &'a Config) -> Self {
        PushAi { config, graph: None }
    }

    /// Reuse successors already expanded in `graph` instead of simulating them.
    pub fn with_state_graph(mut self, graph: &'a StateGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn compute_command(&self, game: &GameState) -> Evaluation {
        self.compute_command_within(game, Deadline::after(self.config.push_budget()))
    }

    pub fn compute_command_within(&self, game: &GameState, deadline: Deadline) -> Evaluation {
        let commands = PushCommand::all(self.config.rules);
        let root = self.graph.and_then(|graph| graph.id_of(game));
        let weights = &self.config.weights;

        let mut best: Option<CandidateScore> = None;
        let mut evaluated = Vec::with_capacity(commands.len());
        let mut from_state_graph = 0;

        for &command in &commands {
            if deadline.expired() {
                debug!("push budget spent after {} of {} candidates", evaluated.len(), commands.len());
                break;
            }

            let cached = match (self.graph, root) {
                (Some(graph), Some(id)) => graph.successor(id, command),
                _ => None,
            };
            let score = match cached {
                Some(next) => {
                    from_state_graph += 1;
                    next.compute_score(weights)
                }
                None => game.run_command(command).compute_score(weights),
            };
            debug!("{command} scores {score}");

            // first seen wins ties
            if best.as_ref().is_none_or(|b| score > b.score) {
                best = Some(CandidateScore { command, score });
            }
            evaluated.push(CandidateScore { command, score });
        }

        let fell_back = best.is_none();
        let command = match &best {
            Some(best) => best.command,
            None => {
                let fallback = commands.first().copied().unwrap_or(DEFAULT_PUSH);
                warn!("no push evaluated within {:?}, falling back to {fallback}", deadline.elapsed());
                fallback
            }
        };

        let evaluation = Evaluation {
            command,
            best_score: best.map(|b| b.score),
            candidates: commands.len(),
            evaluated,
            from_state_graph,
            fell_back,
            elapsed_us: deadline.elapsed().as_micros() as u64,
        };
        info!(
            "{} (score {:?}, {}/{} candidates, {} cached, {}us)",
            evaluation.command,
            evaluation.best_score,
            evaluation.evaluated.len(),
            evaluation.candidates,
            evaluation.from_state_graph,
            evaluation.elapsed_us
        );
        evaluation
    }
}
