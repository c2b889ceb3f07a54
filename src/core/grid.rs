use std::hash::{Hash, Hasher};

use petgraph::unionfind::UnionFind;

use crate::core::{BOARD, CELL_COUNT, Direction, Item, Player, Position, PushCommand, Tile};

/// The 7x7 labyrinth. Tracks which cells can reach each other through
/// mutually open tiles.
///
/// A grid is filled once with [`Grid::add_tile`] and never changed after
/// that; a push builds a brand new grid.
#[derive(Clone, Debug)]
pub struct Grid {
    tiles: [Tile; CELL_COUNT],
    placed: u64,
    components: UnionFind<usize>,
}

impl Grid {
    pub fn new() -> Self {
        Grid {
            tiles: [Tile::CLOSED; CELL_COUNT],
            placed: 0,
            components: UnionFind::new(CELL_COUNT),
        }
    }

    /// Builds a grid from tiles listed in raster order.
    pub fn from_tiles(tiles: [Tile; CELL_COUNT]) -> Self {
        let mut grid = Grid::new();
        for (index, tile) in tiles.into_iter().enumerate() {
            grid.add_tile(BOARD.position_of(index), tile);
        }
        grid
    }

    pub fn add_tile(&mut self, position: Position, tile: Tile) {
        assert!(position.is_on_board(), "cannot place a tile at {position}");
        let index = BOARD.index_of(&position);
        let overwrite = self.is_placed(index);

        self.tiles[index] = tile;
        self.placed |= 1u64 << index;

        if overwrite {
            self.rebuild_components();
            return;
        }

        // in raster order only left and top are ever placed yet, the others
        // cover tiles added out of order
        for direction in [Direction::Left, Direction::Up, Direction::Right, Direction::Down] {
            self.merge_if_connected(position, direction);
        }
    }

    fn merge_if_connected(&mut self, position: Position, direction: Direction) {
        let neighbor = position.sibling(direction);
        if !neighbor.is_on_board() {
            return;
        }
        let neighbor_index = BOARD.index_of(&neighbor);
        if !self.is_placed(neighbor_index) {
            return;
        }
        if self.tiles_connect(position, direction) {
            self.components.union(BOARD.index_of(&position), neighbor_index);
        }
    }

    fn rebuild_components(&mut self) {
        self.components = UnionFind::new(CELL_COUNT);
        for position in BOARD.positions() {
            if !self.is_placed(BOARD.index_of(&position)) {
                continue;
            }
            self.merge_if_connected(position, Direction::Left);
            self.merge_if_connected(position, Direction::Up);
        }
    }

    fn is_placed(&self, index: usize) -> bool {
        self.placed & (1u64 << index) != 0
    }

    pub fn is_complete(&self) -> bool {
        self.placed == (1u64 << CELL_COUNT) - 1
    }

    /// Tile at an on-board position.
    pub fn tile(&self, position: Position) -> Tile {
        self.tiles[BOARD.index_of(&position)]
    }

    pub fn tiles(&self) -> &[Tile; CELL_COUNT] {
        &self.tiles
    }

    /// Both sides must be open, a one sided opening is a wall.
    fn tiles_connect(&self, from: Position, direction: Direction) -> bool {
        let to = from.sibling(direction);
        self.tile(from).is_open_to(direction) && self.tile(to).is_open_to(direction.opposite())
    }

    pub fn are_positions_connected(&self, first: Position, second: Position) -> bool {
        if !first.is_on_board() || !second.is_on_board() {
            return false;
        }
        self.components
            .equiv(BOARD.index_of(&first), BOARD.index_of(&second))
    }

    /// Neighbors reachable in one step, in [`Direction::ALL`] order.
    pub fn get_connected_neighbors(&self, from: Position) -> Vec<Position> {
        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                from.sibling(direction).is_on_board() && self.tiles_connect(from, direction)
            })
            .map(|direction| from.sibling(direction))
            .collect()
    }

    pub fn component_size(&self, position: Position) -> usize {
        let root = self.components.find(BOARD.index_of(&position));
        (0..CELL_COUNT)
            .filter(|&cell| self.components.find(cell) == root)
            .count()
    }

    pub fn component_count(&self) -> usize {
        (0..CELL_COUNT)
            .filter(|&cell| self.components.find(cell) == cell)
            .count()
    }

    /// Shifts one row (LEFT/RIGHT) or column (UP/DOWN) by a cell, inserting
    /// `inserted` at the entry edge. Returns the new grid and the tile pushed
    /// out of the far edge.
    pub fn push(&self, command: PushCommand, inserted: Tile) -> (Grid, Tile) {
        assert!(
            command.index < BOARD.width as usize,
            "push index {} is outside the board",
            command.index
        );
        if command.direction.is_horizontal() {
            self.push_horizontal(command, inserted)
        } else {
            self.push_vertical(command, inserted)
        }
    }

    fn push_horizontal(&self, command: PushCommand, inserted: Tile) -> (Grid, Tile) {
        let row = command.index as i32;
        let last = BOARD.width - 1;
        let mut new_grid = Grid::new();
        for position in BOARD.positions() {
            let tile = if position.y != row {
                self.tile(position)
            } else {
                match command.direction {
                    Direction::Left if position.x == last => inserted,
                    Direction::Left => self.tile(position.sibling(Direction::Right)),
                    Direction::Right if position.x == 0 => inserted,
                    Direction::Right => self.tile(position.sibling(Direction::Left)),
                    vertical => panic!("{vertical} cannot shift a row"),
                }
            };
            new_grid.add_tile(position, tile);
        }
        (new_grid, self.tile(command.exit_cell()))
    }

    fn push_vertical(&self, command: PushCommand, inserted: Tile) -> (Grid, Tile) {
        let column = command.index as i32;
        let last = BOARD.height - 1;
        let mut new_grid = Grid::new();
        for position in BOARD.positions() {
            let tile = if position.x != column {
                self.tile(position)
            } else {
                match command.direction {
                    Direction::Down if position.y == 0 => inserted,
                    Direction::Down => self.tile(position.sibling(Direction::Up)),
                    Direction::Up if position.y == last => inserted,
                    Direction::Up => self.tile(position.sibling(Direction::Down)),
                    horizontal => panic!("{horizontal} cannot shift a column"),
                }
            };
            new_grid.add_tile(position, tile);
        }
        (new_grid, self.tile(command.exit_cell()))
    }
}

impl Default for Grid {
    fn default() -> Self {
        Grid::new()
    }
}

impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.placed == other.placed && self.tiles == other.tiles
    }
}

impl Eq for Grid {}

// components are derived from the tiles
impl Hash for Grid {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.placed.hash(state);
        self.tiles.hash(state);
    }
}

/// Moves a player riding on the pushed line. Players wrap around to the
/// opposite edge instead of leaving the board.
///
/// `held` becomes the player's tile whether or not they were on the line:
/// the acting player passes the ejected tile, the other player their own.
pub fn push_player(command: PushCommand, player: &Player, held: Tile) -> Player {
    let mut pushed = Player {
        tile: held,
        ..player.clone()
    };
    if command.shifts(&player.position) {
        let moved = player.position.sibling(command.direction);
        pushed.position = Position {
            x: moved.x.rem_euclid(BOARD.width),
            y: moved.y.rem_euclid(BOARD.height),
        };
    }
    pushed
}

/// Moves an item riding on the pushed line. Items falling off the far edge go
/// to [`Position::SENTINEL`] (they now sit on the ejected tile, which the
/// acting player takes), and an item at the sentinel enters with the
/// inserted tile.
pub fn push_item(command: PushCommand, item: &Item) -> Item {
    let position = if item.position == Position::SENTINEL {
        command.entry_cell()
    } else if item.position.is_on_board() && command.shifts(&item.position) {
        let moved = item.position.sibling(command.direction);
        if moved.is_on_board() {
            moved
        } else {
            Position::SENTINEL
        }
    } else {
        item.position
    };
    Item {
        position,
        ..item.clone()
    }
}
