use std::collections::{HashMap, HashSet, VecDeque};

use crate::core::{GameState, PushCommand};
use crate::state_graph::models::{Edge, StateGraph};

impl StateGraph {
    pub fn new() -> Self {
        StateGraph {
            nodes: bimap::BiMap::new(),
            edges: HashSet::new(),
            successors: HashMap::new(),
            unvisited: VecDeque::new(),
            next_id: 0,
        }
    }

    pub fn upsert_state(&mut self, state: GameState) -> usize {
        if let Some(&id) = self.nodes.get_by_left(&state) {
            id
        } else {
            let id = self.next_id;
            self.next_id += 1;
            self.nodes.insert(state, id);
            self.unvisited.push_back(id);
            id
        }
    }

    pub fn get_state(&self, id: usize) -> Option<&GameState> {
        self.nodes.get_by_right(&id)
    }

    pub fn id_of(&self, state: &GameState) -> Option<usize> {
        self.nodes.get_by_left(state).copied()
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.successors.insert((edge.from, edge.command), edge.to);
        self.edges.insert(edge);
    }

    /// State reached from node `from` by `command`, if that node was expanded.
    pub fn successor(&self, from: usize, command: PushCommand) -> Option<&GameState> {
        self.successors
            .get(&(from, command))
            .and_then(|&to| self.get_state(to))
    }

    /// Oldest node still waiting to be expanded.
    pub fn next_unvisited_node(&mut self) -> Option<usize> {
        self.unvisited.pop_front()
    }

    pub fn max_depth(&self) -> u32 {
        self.nodes.left_values().map(|state| state.depth).max().unwrap_or(0)
    }
}

impl Default for StateGraph {
    fn default() -> Self {
        StateGraph::new()
    }
}
