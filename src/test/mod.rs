
mod test_push_ai;
mod test_state_graph;
mod test_update;
