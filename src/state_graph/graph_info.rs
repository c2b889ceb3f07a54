use crate::state_graph::StateGraph;

pub struct GraphInfo {
    pub nodes: usize,
    pub edges: usize,
    pub visited: usize,
    pub percent_visited: f64,
    pub max_depth: u32,
}

impl GraphInfo {
    pub fn new(graph: &StateGraph) -> Self {
        let nodes = graph.nodes.len();
        let edges = graph.edges.len();
        let visited = nodes - graph.unvisited.len();
        let percent_visited = if nodes > 0 {
            (visited as f64 / nodes as f64) * 100.0
        } else {
            0.0
        };
        Self {
            nodes,
            edges,
            visited,
            percent_visited,
            max_depth: graph.max_depth(),
        }
    }

    pub fn to_human_string(&self) -> String {
        format!(
            "Graph has {} nodes, {} edges, {} visited nodes ({:.1}%), max depth {}.",
            self.nodes, self.edges, self.visited, self.percent_visited, self.max_depth
        )
    }
}

pub fn get_graph_info(graph: &StateGraph) -> String {
    GraphInfo::new(graph).to_human_string()
}
