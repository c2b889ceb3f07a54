
mod test {
    use Direction::*;

    use crate::config::ScoreWeights;
    use crate::core::*;
    use crate::test::test_util::{CLOSED_GRID, OPEN_GRID, GameTestState};

    fn score(game: &GameTestState) -> i32 {
        game.game_state.compute_score(&ScoreWeights::default())
    }

    #[test]
    fn unreachable_item_scores_only_its_centrality() {
        let game = GameTestState::new(CLOSED_GRID).with_quest("apple", 3, 3);
        assert_eq!(score(&game), 6);

        let game = GameTestState::new(CLOSED_GRID).with_quest("apple", 0, 6);
        assert_eq!(score(&game), 0);
    }

    #[test]
    fn item_off_board_scores_the_off_board_bonus() {
        let game = GameTestState::new(CLOSED_GRID).with_quest("apple", -1, -1);
        assert_eq!(score(&game), 1000);
    }

    #[test]
    fn reachable_item_scores_reach_nearness_and_centrality() {
        let game = GameTestState::new(OPEN_GRID).with_quest("apple", 6, 6);
        assert_eq!(score(&game), 2000 + (20 - 12) + (6 - 6));

        let game = GameTestState::new(OPEN_GRID).with_quest("apple", 1, 0);
        assert_eq!(score(&game), 2020);
    }

    #[test]
    fn items_outside_our_quest_do_not_score() {
        let game = GameTestState::new(OPEN_GRID)
            .with_item("apple", MY_ID, 1, 0, false)
            .with_item("bell", ENEMY_ID, 1, 0, true)
            .with_item("crown", MY_ID, -2, -2, true);
        assert_eq!(score(&game), 0);
    }

    #[test]
    fn reachable_always_beats_off_board_and_unreachable() {
        let far_but_reachable = GameTestState::new(OPEN_GRID).with_me_at(0, 0).with_quest("apple", 6, 6);
        let off_board = GameTestState::new(OPEN_GRID).with_quest("apple", -1, -1);
        let unreachable = GameTestState::new(CLOSED_GRID).with_quest("apple", 3, 3);
        assert!(score(&far_but_reachable) > score(&off_board));
        assert!(score(&off_board) > score(&unreachable));
    }

    #[test]
    fn when_walking_over_quest_item_collects_it_and_reveals_next() {
        let game = GameTestState::new(OPEN_GRID)
            .with_quest("apple", 2, 0)
            .with_item("bell", MY_ID, 4, 4, false)
            .with_item("crown", ENEMY_ID, 1, 0, true);

        let GameUpdate::NextState(next) = step(&game.game_state, &[Right, Right]) else {
            panic!("move should be legal");
        };
        assert_eq!(next.me.position, Position::new(2, 0));
        assert_eq!(next.me.quest_cards, 11);
        let names: Vec<&str> = next.items.iter().map(|item| &*item.name).collect();
        assert_eq!(names, vec!["bell", "crown"]);
        assert!(next.items.iter().all(|item| item.in_quest));
    }

    #[test]
    fn walking_through_a_wall_is_an_error() {
        let game = GameTestState::new(CLOSED_GRID);
        assert!(matches!(step(&game.game_state, &[Right]), GameUpdate::Error(_)));
    }

    #[test]
    fn states_differing_only_in_depth_are_equal() {
        let mut game = GameTestState::new(OPEN_GRID);
        let start = game.game_state.clone();
        game.push(0, Left);
        game.push(0, Right);

        assert_eq!(game.game_state.depth, 2);
        assert_eq!(game.game_state, start);
    }
}
