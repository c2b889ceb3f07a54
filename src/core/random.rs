use std::rc::Rc;

use rand::distributions::Standard;
use rand::prelude::*;

use crate::core::{BOARD, ENEMY_ID, GRID_HEIGHT, GRID_WIDTH, GameState, Grid, Item, MY_ID, Player, Position, Tile};

impl Distribution<Tile> for Standard {
    /// Uniform over tiles with at least two openings, the shapes the game deals.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Tile {
        loop {
            let tile = Tile { openings: rng.gen_range(0..16) };
            if tile.open_count() >= 2 {
                return tile;
            }
        }
    }
}

pub fn random_grid<R: Rng + ?Sized>(rng: &mut R) -> Grid {
    let mut grid = Grid::new();
    for position in BOARD.positions() {
        grid.add_tile(position, rng.r#gen());
    }
    grid
}

/// A full board with both players in opposite corners, `items_per_player`
/// items each scattered over distinct cells and the first
/// `quests_per_player` of them revealed.
pub fn random_game_state<R: Rng + ?Sized>(
    rng: &mut R,
    items_per_player: usize,
    quests_per_player: usize,
) -> GameState {
    let grid = random_grid(rng);
    let me = Player {
        id: MY_ID,
        position: Position::new(0, 0),
        tile: rng.r#gen(),
        quest_cards: items_per_player as u32,
    };
    let enemy = Player {
        id: ENEMY_ID,
        position: Position::new(GRID_WIDTH - 1, GRID_HEIGHT - 1),
        tile: rng.r#gen(),
        quest_cards: items_per_player as u32,
    };

    let free_cells: Vec<Position> = BOARD
        .positions()
        .filter(|p| *p != me.position && *p != enemy.position)
        .collect();
    let cells: Vec<Position> = free_cells
        .choose_multiple(rng, items_per_player * 2)
        .copied()
        .collect();

    let items = cells
        .into_iter()
        .enumerate()
        .map(|(k, position)| {
            let owner = k % 2;
            let rank = k / 2;
            Item {
                name: Rc::from(format!("ITEM{rank}")),
                owner,
                position,
                in_quest: rank < quests_per_player,
            }
        })
        .collect();

    GameState::new(grid, me, enemy, items)
}
