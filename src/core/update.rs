use crate::config::ScoreWeights;
use crate::core::grid::{push_item, push_player};
use crate::core::{Direction, GameState, Grid, Item, MY_ID, Player, Position, PushCommand};

pub enum GameUpdate {
    NextState(GameState),
    Error(String),
}

impl GameState {
    pub fn new(grid: Grid, me: Player, enemy: Player, items: Vec<Item>) -> Self {
        GameState {
            grid,
            me,
            enemy,
            items,
            depth: 0,
        }
    }

    /// Our push: inserts our held tile and hands us the ejected one.
    pub fn run_command(&self, command: PushCommand) -> GameState {
        let (grid, ejected) = self.grid.push(command, self.me.tile);
        GameState {
            grid,
            me: push_player(command, &self.me, ejected),
            enemy: push_player(command, &self.enemy, self.enemy.tile),
            items: self.items.iter().map(|item| push_item(command, item)).collect(),
            depth: self.depth + 1,
        }
    }

    pub fn items_of(&self, player_id: usize) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(move |item| item.owner == player_id)
    }

    pub fn my_quest_items(&self) -> impl Iterator<Item = &Item> {
        self.items_of(MY_ID).filter(|item| item.in_quest)
    }

    pub fn compute_score(&self, weights: &ScoreWeights) -> i32 {
        let mut score = 0;
        for item in self.my_quest_items() {
            if item.position.is_on_board() {
                if self.grid.are_positions_connected(self.me.position, item.position) {
                    score += weights.reachable_bonus;
                    score += weights.near_bonus_range - self.me.position.distance_to(&item.position);
                }
                score += weights.center_bonus_range - item.position.distance_to(&Position::CENTER);
            } else if item.position == Position::SENTINEL {
                score += weights.off_board_bonus;
            }
        }
        score
    }
}

/// Walks our player along `directions`, collecting every quest item on a
/// visited cell. Collecting reveals our next hidden item, if any.
pub fn step(game: &GameState, directions: &[Direction]) -> GameUpdate {
    let mut position = game.me.position;
    let mut visited = vec![position];
    for &direction in directions {
        let next = position.sibling(direction);
        if !game.grid.get_connected_neighbors(position).contains(&next) {
            return GameUpdate::Error(format!("cannot move {direction} from {position}"));
        }
        position = next;
        visited.push(position);
    }

    let mut items = game.items.clone();
    let mut collected = 0;
    items.retain(|item| {
        let picked = item.owner == MY_ID && item.in_quest && visited.contains(&item.position);
        if picked {
            collected += 1;
        }
        !picked
    });
    for item in items
        .iter_mut()
        .filter(|item| item.owner == MY_ID && !item.in_quest)
        .take(collected)
    {
        item.in_quest = true;
    }

    let me = Player {
        position,
        quest_cards: game.me.quest_cards.saturating_sub(collected as u32),
        ..game.me.clone()
    };
    GameUpdate::NextState(GameState {
        grid: game.grid.clone(),
        me,
        enemy: game.enemy.clone(),
        items,
        depth: game.depth,
    })
}
