use std::collections::{HashMap, VecDeque};

use log::{debug, info};

use crate::core::{Command, Direction, GameState, Grid, Item, Position};

/// Breadth first search tree over the cells reachable from `origin`.
pub struct BfsTree {
    pub origin: Position,
    came_from: HashMap<Position, Option<Position>>,
    /// Reached cells in visiting order, starting with `origin`.
    pub order: Vec<Position>,
}

impl BfsTree {
    pub fn compute(grid: &Grid, origin: Position) -> Self {
        let mut came_from = HashMap::new();
        let mut order = Vec::new();
        let mut frontier = VecDeque::new();

        came_from.insert(origin, None);
        frontier.push_back(origin);
        while let Some(current) = frontier.pop_front() {
            order.push(current);
            for next in grid.get_connected_neighbors(current) {
                if !came_from.contains_key(&next) {
                    came_from.insert(next, Some(current));
                    frontier.push_back(next);
                }
            }
        }

        BfsTree {
            origin,
            came_from,
            order,
        }
    }

    pub fn reaches(&self, position: &Position) -> bool {
        self.came_from.contains_key(position)
    }

    /// Cells from `origin` to `goal` inclusive, or `None` if `goal` was not reached.
    pub fn path_to(&self, goal: Position) -> Option<Vec<Position>> {
        if !self.reaches(&goal) {
            return None;
        }
        let mut path = vec![goal];
        let mut current = goal;
        while let Some(&Some(previous)) = self.came_from.get(&current) {
            path.push(previous);
            current = previous;
        }
        path.reverse();
        Some(path)
    }
}

/// Direction of a single grid step. Anything else is a broken path.
pub fn direction_between(from: Position, to: Position) -> Direction {
    match (to.x - from.x, to.y - from.y) {
        (1, 0) => Direction::Right,
        (-1, 0) => Direction::Left,
        (0, 1) => Direction::Down,
        (0, -1) => Direction::Up,
        _ => panic!("{from} -> {to} is not a single grid step"),
    }
}

pub fn path_directions(path: &[Position]) -> Vec<Direction> {
    path.windows(2)
        .map(|step| direction_between(step[0], step[1]))
        .collect()
}

/// Plans the move phase: collect every reachable quest item, nearest first,
/// then head for open space far from the center.
pub struct MoveAi {
    max_move_count: usize,
}

impl MoveAi {
    pub fn new(max_move_count: usize) -> Self {
        MoveAi { max_move_count }
    }

    pub fn compute_command(&self, game: &GameState) -> Command {
        let grid = &game.grid;
        let mut directions = Vec::new();

        let position = self.collect_items(game, &mut directions);
        if directions.len() < self.max_move_count {
            self.move_away_from_center(grid, position, &mut directions);
        }

        directions.truncate(self.max_move_count);
        let command = if directions.is_empty() {
            Command::Pass
        } else {
            Command::Move(directions)
        };
        info!("{command}");
        command
    }

    /// Appends paths to connected quest items and returns where the player ends up.
    fn collect_items(&self, game: &GameState, directions: &mut Vec<Direction>) -> Position {
        let grid = &game.grid;
        let mut position = game.me.position;
        let mut remaining: Vec<&Item> = game
            .my_quest_items()
            .filter(|item| grid.are_positions_connected(item.position, position))
            .collect();

        while directions.len() < self.max_move_count && !remaining.is_empty() {
            let tree = BfsTree::compute(grid, position);

            let mut closest: Option<(usize, Vec<Position>)> = None;
            for (k, item) in remaining.iter().enumerate() {
                let Some(path) = tree.path_to(item.position) else {
                    continue;
                };
                if closest.as_ref().is_none_or(|(_, best)| path.len() < best.len()) {
                    closest = Some((k, path));
                }
            }
            let Some((k, path)) = closest else {
                break;
            };

            let item = remaining.remove(k);
            debug!("collecting {} at {} in {} steps", item.name, item.position, path.len() - 1);
            directions.extend(path_directions(&path));
            position = item.position;
        }

        position
    }

    fn move_away_from_center(&self, grid: &Grid, from: Position, directions: &mut Vec<Direction>) {
        let tree = BfsTree::compute(grid, from);
        let mut target = from;
        for &cell in &tree.order {
            if cell.distance_to(&Position::CENTER) > target.distance_to(&Position::CENTER) {
                target = cell;
            }
        }
        if let Some(path) = tree.path_to(target) {
            directions.extend(path_directions(&path));
        }
    }
}
