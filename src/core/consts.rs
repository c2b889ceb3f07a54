use crate::core::bounds::BoundsOriginRoot;

pub const GRID_WIDTH: i32 = 7;
pub const GRID_HEIGHT: i32 = 7;
pub const CELL_COUNT: usize = (GRID_WIDTH * GRID_HEIGHT) as usize;

pub const BOARD: BoundsOriginRoot = BoundsOriginRoot::new(GRID_WIDTH, GRID_HEIGHT);

/// Player id of the side this engine plays for.
pub const MY_ID: usize = 0;
pub const ENEMY_ID: usize = 1;

/// Upper bound on single-step moves in one `MOVE` command.
pub const MAX_MOVE_COUNT: usize = 20;
