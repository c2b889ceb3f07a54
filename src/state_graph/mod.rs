mod graph;
mod graph_info;
mod json_export;
mod models;
mod populate;

pub use graph_info::{get_graph_info, GraphInfo};
pub use json_export::{get_json_data, JsonData, JsonEdge, JsonNode};
pub use models::{Edge, PopulateResult, StateGraph};
pub use populate::{populate_node, populate_step, populate_until};
