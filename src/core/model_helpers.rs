use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::config::PushRules;
use crate::core::{
    BOARD, Command, Direction, GRID_HEIGHT, GRID_WIDTH, GameState, Position, PushCommand, Tile,
};
use crate::error::ParseError;

impl Direction {
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    pub fn opposite(self) -> Direction {
        Direction::ALL[(self as usize + 2) % 4]
    }

    pub fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }

    pub fn offset(self) -> Position {
        match self {
            Direction::Up => Position { x: 0, y: -1 },
            Direction::Right => Position { x: 1, y: 0 },
            Direction::Down => Position { x: 0, y: 1 },
            Direction::Left => Position { x: -1, y: 0 },
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Right => "RIGHT",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Direction {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Direction::ALL
            .into_iter()
            .find(|d| d.name() == s)
            .ok_or_else(|| ParseError::InvalidDirection(s.to_string()))
    }
}

impl Position {
    /// Off the board, carried on our own held tile.
    pub const SENTINEL: Position = Position { x: -1, y: -1 };
    /// Off the board, carried on the opponent's held tile.
    pub const ENEMY_HAND: Position = Position { x: -2, y: -2 };
    pub const CENTER: Position = Position {
        x: GRID_WIDTH / 2,
        y: GRID_HEIGHT / 2,
    };

    pub fn new(x: i32, y: i32) -> Position {
        Position { x, y }
    }

    pub fn distance_to(&self, other: &Position) -> i32 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    pub fn sibling(&self, direction: Direction) -> Position {
        *self + direction.offset()
    }

    pub fn is_on_board(&self) -> bool {
        BOARD.contains(self)
    }
}

impl std::ops::Add for Position {
    type Output = Position;

    fn add(self, rhs: Position) -> Position {
        Position {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl Tile {
    pub const CLOSED: Tile = Tile { openings: 0 };
    pub const CROSS: Tile = Tile { openings: 0b1111 };

    pub fn new(up: bool, right: bool, down: bool, left: bool) -> Tile {
        let mut tile = Tile::CLOSED;
        for (direction, open) in Direction::ALL.into_iter().zip([up, right, down, left]) {
            if open {
                tile.openings |= 1 << direction as u8;
            }
        }
        tile
    }

    pub fn is_open_to(&self, direction: Direction) -> bool {
        self.openings & (1 << direction as u8) != 0
    }

    pub fn open_count(&self) -> u32 {
        self.openings.count_ones()
    }
}

impl FromStr for Tile {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(ParseError::InvalidTile(s.to_string()));
        }
        let mut flags = [false; 4];
        for (flag, &b) in flags.iter_mut().zip(bytes) {
            *flag = match b {
                b'0' => false,
                b'1' => true,
                _ => return Err(ParseError::InvalidTile(s.to_string())),
            };
        }
        Ok(Tile::new(flags[0], flags[1], flags[2], flags[3]))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for direction in Direction::ALL {
            f.write_str(if self.is_open_to(direction) { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl fmt::Debug for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tile({self})")
    }
}

impl PushCommand {
    pub fn new(index: usize, direction: Direction) -> PushCommand {
        PushCommand { index, direction }
    }

    /// Every legal push under `rules`, index-major, directions in [`Direction::ALL`] order.
    pub fn all(rules: PushRules) -> Vec<PushCommand> {
        rules
            .line_indices()
            .flat_map(|index| Direction::ALL.into_iter().map(move |d| PushCommand::new(index, d)))
            .collect()
    }

    /// Whether `position` lies on the row or column this push shifts.
    pub fn shifts(&self, position: &Position) -> bool {
        let index = self.index as i32;
        if self.direction.is_horizontal() {
            position.y == index
        } else {
            position.x == index
        }
    }

    /// The cell that receives the inserted tile.
    pub fn entry_cell(&self) -> Position {
        let index = self.index as i32;
        match self.direction {
            Direction::Up => Position::new(index, GRID_HEIGHT - 1),
            Direction::Right => Position::new(0, index),
            Direction::Down => Position::new(index, 0),
            Direction::Left => Position::new(GRID_WIDTH - 1, index),
        }
    }

    /// The cell whose tile is pushed out of the board.
    pub fn exit_cell(&self) -> Position {
        let index = self.index as i32;
        match self.direction {
            Direction::Up => Position::new(index, 0),
            Direction::Right => Position::new(GRID_WIDTH - 1, index),
            Direction::Down => Position::new(index, GRID_HEIGHT - 1),
            Direction::Left => Position::new(0, index),
        }
    }
}

impl fmt::Display for PushCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PUSH {} {}", self.index, self.direction)
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Push(push) => write!(f, "{push}"),
            Command::Move(directions) if directions.is_empty() => f.write_str("PASS"),
            Command::Move(directions) => {
                f.write_str("MOVE")?;
                for direction in directions {
                    write!(f, " {direction}")?;
                }
                Ok(())
            }
            Command::Pass => f.write_str("PASS"),
        }
    }
}

// depth only records how a state was reached, two states with the same
// board and pieces are the same node
impl PartialEq for GameState {
    fn eq(&self, other: &Self) -> bool {
        self.grid == other.grid
            && self.me == other.me
            && self.enemy == other.enemy
            && self.items == other.items
    }
}

impl Eq for GameState {}

impl Hash for GameState {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.grid.hash(state);
        self.me.hash(state);
        self.enemy.hash(state);
        self.items.hash(state);
    }
}
