mod bounds;
mod consts;
pub mod grid;
mod model_helpers;
mod models;
pub mod random;
mod update;

pub use bounds::BoundsOriginRoot;
pub use consts::*;
pub use grid::Grid;
pub use models::{Command, Direction, GameState, Item, Player, Position, PushCommand, Tile, Turn, TurnKind};
pub use update::{step, GameUpdate};
