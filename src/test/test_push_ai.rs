
mod test {
    use std::time::Duration;

    use Direction::*;

    use crate::ai::{Deadline, PushAi, DEFAULT_PUSH};
    use crate::config::{Config, PushRules};
    use crate::core::*;
    use crate::state_graph::{populate_step, StateGraph};
    use crate::test::test_util::{CORRIDOR_GRID, GameTestState};

    fn generous() -> Deadline {
        Deadline::after(Duration::from_secs(60))
    }

    /// Rows are corridors: only a column push can bring us to the row of the
    /// item at (3,1).
    fn corridor_game() -> GameTestState {
        GameTestState::new(CORRIDOR_GRID)
            .with_held_tiles("0101", "0101")
            .with_quest("apple", 3, 1)
    }

    #[test]
    fn picks_the_push_that_connects_us_closest() {
        let config = Config::default();
        let evaluation = PushAi::new(&config).compute_command_within(&corridor_game().game_state, generous());

        assert_eq!(evaluation.command, PushCommand::new(0, Down));
        assert_eq!(evaluation.best_score, Some(2021));
        assert_eq!(evaluation.candidates, 28);
        assert_eq!(evaluation.evaluated.len(), 28);
        assert!(!evaluation.fell_back);

        let column_3_up = evaluation
            .evaluated
            .iter()
            .find(|candidate| candidate.command == PushCommand::new(3, Up))
            .unwrap();
        assert_eq!(column_3_up.score, 2020);
    }

    #[test]
    fn even_lines_rules_only_try_even_lines() {
        let config = Config {
            rules: PushRules::EvenLinesOnly,
            ..Config::default()
        };
        let evaluation = PushAi::new(&config).compute_command_within(&corridor_game().game_state, generous());

        assert_eq!(evaluation.candidates, 16);
        assert!(evaluation.evaluated.iter().all(|candidate| candidate.command.index % 2 == 0));
        assert_eq!(evaluation.command, PushCommand::new(0, Down));
    }

    #[test]
    fn ties_go_to_the_first_candidate() {
        let config = Config::default();
        let game = GameTestState::new(CORRIDOR_GRID);
        let evaluation = PushAi::new(&config).compute_command_within(&game.game_state, generous());

        assert_eq!(evaluation.command, DEFAULT_PUSH);
        assert_eq!(evaluation.best_score, Some(0));
        assert!(!evaluation.fell_back);
    }

    #[test]
    fn spent_budget_falls_back_to_the_first_command() {
        let config = Config::default();
        let evaluation =
            PushAi::new(&config).compute_command_within(&corridor_game().game_state, Deadline::after(Duration::ZERO));

        assert!(evaluation.fell_back);
        assert_eq!(evaluation.command, PushCommand::new(0, Up));
        assert_eq!(evaluation.best_score, None);
        assert!(evaluation.evaluated.is_empty());
    }

    #[test]
    fn expanded_state_graph_gives_the_same_answer() {
        let config = Config::default();
        let game = corridor_game().game_state;
        let mut graph = StateGraph::new();
        graph.upsert_state(game.clone());
        populate_step(&mut graph, config.rules);

        let fresh = PushAi::new(&config).compute_command_within(&game, generous());
        let cached = PushAi::new(&config)
            .with_state_graph(&graph)
            .compute_command_within(&game, generous());

        assert_eq!(cached.command, fresh.command);
        assert_eq!(cached.evaluated, fresh.evaluated);
        assert_eq!(cached.from_state_graph, 28);
        assert_eq!(fresh.from_state_graph, 0);
    }
}
