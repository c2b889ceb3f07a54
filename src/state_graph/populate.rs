use crate::ai::Deadline;
use crate::config::PushRules;
use crate::core::PushCommand;
use crate::state_graph::graph_info::GraphInfo;
use crate::state_graph::models::{Edge, PopulateResult, StateGraph};

pub fn populate_node(graph: &mut StateGraph, from_id: usize, rules: PushRules) {
    let Some(from_state) = graph.get_state(from_id) else {
        return;
    };
    let from_state = from_state.clone();

    for command in PushCommand::all(rules) {
        let new_state = from_state.run_command(command);
        let to_id = graph.upsert_state(new_state);
        graph.add_edge(Edge {
            from: from_id,
            to: to_id,
            command,
        });
    }
}

pub fn populate_step(graph: &mut StateGraph, rules: PushRules) -> PopulateResult {
    let Some(node_id) = graph.next_unvisited_node() else {
        return PopulateResult::AllVisited;
    };
    populate_node(graph, node_id, rules);
    PopulateResult::Populated
}

/// Expands nodes breadth first until the deadline passes, the graph holds
/// `node_limit` states, or nothing is left to expand.
pub fn populate_until(
    graph: &mut StateGraph,
    rules: PushRules,
    deadline: Deadline,
    node_limit: usize,
) -> GraphInfo {
    let mut expanded = 0;
    while !deadline.expired() && graph.nodes.len() < node_limit {
        if populate_step(graph, rules) == PopulateResult::AllVisited {
            break;
        }
        expanded += 1;
    }
    let info = GraphInfo::new(graph);
    log::info!(
        "expanded {expanded} nodes in {:?}: {}",
        deadline.elapsed(),
        info.to_human_string()
    );
    info
}
