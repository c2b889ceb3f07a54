use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::core::Grid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

/// Openings of one labyrinth cell, one bit per [`Direction`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    pub(crate) openings: u8,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Player {
    pub id: usize,
    pub position: Position,
    /// The tile this player inserts on their next push.
    pub tile: Tile,
    pub quest_cards: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Item {
    pub name: Rc<str>,
    pub owner: usize,
    pub position: Position,
    pub in_quest: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PushCommand {
    pub index: usize,
    pub direction: Direction,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Push(PushCommand),
    Move(Vec<Direction>),
    Pass,
}

#[derive(Clone, Debug)]
pub struct GameState {
    pub grid: Grid,
    pub me: Player,
    pub enemy: Player,
    pub items: Vec<Item>,
    /// Number of simulated pushes between the observed turn and this state.
    pub depth: u32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnKind {
    Push,
    Move,
}

#[derive(Debug)]
pub struct Turn {
    pub kind: TurnKind,
    pub state: GameState,
}
