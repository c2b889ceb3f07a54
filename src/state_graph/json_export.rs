use serde::{Deserialize, Serialize};

use crate::config::ScoreWeights;
use crate::state_graph::StateGraph;

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonData {
    pub nodes: Vec<JsonNode>,
    pub links: Vec<JsonEdge>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonNode {
    pub id: usize,
    pub depth: u32,
    pub score: i32,
    pub components: usize,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct JsonEdge {
    pub source: usize,
    pub target: usize,
    pub command: String,
}

pub fn get_json_data(graph: &StateGraph, weights: &ScoreWeights) -> Result<String, serde_json::Error> {
    let mut nodes: Vec<JsonNode> = graph
        .nodes
        .iter()
        .map(|(state, &id)| JsonNode {
            id,
            depth: state.depth,
            score: state.compute_score(weights),
            components: state.grid.component_count(),
        })
        .collect();
    nodes.sort_by_key(|node| node.id);

    let mut links: Vec<JsonEdge> = graph
        .edges
        .iter()
        .map(|edge| JsonEdge {
            source: edge.from,
            target: edge.to,
            command: edge.command.to_string(),
        })
        .collect();
    links.sort_by(|a, b| (a.source, &a.command).cmp(&(b.source, &b.command)));

    let json_data = JsonData { nodes, links };
    serde_json::to_string_pretty(&json_data)
}
