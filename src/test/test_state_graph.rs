
mod test {
    use std::time::Duration;

    use crate::ai::Deadline;
    use crate::config::{PushRules, ScoreWeights};
    use crate::core::*;
    use crate::state_graph::*;
    use crate::test::test_util::{OPEN_GRID, GameTestState};

    /// Open board, players in opposite corners. Only pushes through a
    /// player's row or column change anything.
    fn open_graph() -> (StateGraph, usize) {
        let mut graph = StateGraph::new();
        let root = graph.upsert_state(GameTestState::new(OPEN_GRID).game_state);
        (graph, root)
    }

    #[test]
    fn expanding_root_adds_one_node_per_distinct_successor() {
        let (mut graph, root) = open_graph();
        assert_eq!(populate_step(&mut graph, PushRules::AllLines), PopulateResult::Populated);

        assert_eq!(graph.nodes.len(), 9);
        assert_eq!(graph.edges.len(), 28);
        let root_state = graph.get_state(root).unwrap().clone();
        assert_eq!(graph.successor(root, PushCommand::new(3, Direction::Up)), Some(&root_state));
    }

    #[test]
    fn successors_match_simulated_pushes() {
        let (mut graph, root) = open_graph();
        populate_step(&mut graph, PushRules::AllLines);
        let root_state = graph.get_state(root).unwrap().clone();

        for command in PushCommand::all(PushRules::AllLines) {
            assert_eq!(graph.successor(root, command), Some(&root_state.run_command(command)), "{command}");
        }
    }

    #[test]
    fn upserting_a_known_state_returns_its_id() {
        let (mut graph, root) = open_graph();
        let mut again = graph.get_state(root).unwrap().clone();
        again.depth = 5;
        assert_eq!(graph.upsert_state(again), root);
        assert_eq!(graph.nodes.len(), 1);
    }

    #[test]
    fn empty_graph_has_nothing_to_visit() {
        let mut graph = StateGraph::new();
        assert_eq!(populate_step(&mut graph, PushRules::AllLines), PopulateResult::AllVisited);
    }

    #[test]
    fn populate_until_stops_at_the_node_limit() {
        let (mut graph, _) = open_graph();
        let info = populate_until(
            &mut graph,
            PushRules::AllLines,
            Deadline::after(Duration::from_secs(60)),
            50,
        );
        assert!(info.nodes >= 50);
        assert_eq!(info.nodes, graph.nodes.len());
        assert!(info.visited < info.nodes);
        assert!(info.max_depth >= 1);
    }

    #[test]
    fn populate_until_respects_the_deadline() {
        let (mut graph, _) = open_graph();
        let info = populate_until(&mut graph, PushRules::AllLines, Deadline::after(Duration::ZERO), 1000);
        assert_eq!(info.nodes, 1);
        assert_eq!(info.visited, 0);
    }

    #[test]
    fn json_export_lists_nodes_and_links() {
        let (mut graph, _) = open_graph();
        populate_step(&mut graph, PushRules::AllLines);

        let json = get_json_data(&graph, &ScoreWeights::default()).unwrap();
        let data: JsonData = serde_json::from_str(&json).unwrap();
        assert_eq!(data.nodes.len(), 9);
        assert_eq!(data.links.len(), 28);
        assert_eq!(data.nodes[0].id, 0);
        assert_eq!(data.nodes[0].depth, 0);
        assert_eq!(data.nodes[0].components, 1);
        assert!(data.links.iter().all(|link| link.source == 0));
        assert!(data.links.iter().any(|link| link.command == "PUSH 0 LEFT"));
    }

    #[test]
    fn graph_info_reports_progress() {
        let (mut graph, _) = open_graph();
        populate_step(&mut graph, PushRules::AllLines);
        let info = GraphInfo::new(&graph);
        assert_eq!(info.visited, 1);
        assert_eq!(
            get_graph_info(&graph),
            "Graph has 9 nodes, 28 edges, 1 visited nodes (11.1%), max depth 1."
        );
    }
}
