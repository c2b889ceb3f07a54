use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::{GameState, PushCommand};

/// Push successors explored breadth first from an observed state.
#[derive(Clone)]
pub struct StateGraph {
    // map from game state to node id
    pub nodes: bimap::BiMap<GameState, usize>,
    pub edges: HashSet<Edge>,
    pub successors: HashMap<(usize, PushCommand), usize>,
    pub unvisited: VecDeque<usize>,
    pub next_id: usize,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
pub struct Edge {
    pub from: usize,
    pub to: usize,
    pub command: PushCommand,
}

#[derive(Debug, PartialEq, Eq)]
pub enum PopulateResult {
    AllVisited,
    Populated,
}
