use crate::core::Position;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent
#[derive(Clone, Copy, Debug)]
pub struct BoundsOriginRoot {
    pub width: i32,
    pub height: i32,
}

impl BoundsOriginRoot {
    pub const fn new(width: i32, height: i32) -> BoundsOriginRoot {
        BoundsOriginRoot { width, height }
    }

    pub fn contains(&self, pos: &Position) -> bool {
        pos.x >= 0 && pos.x < self.width && pos.y >= 0 && pos.y < self.height
    }

    /// Raster index of an in-bounds position.
    pub fn index_of(&self, pos: &Position) -> usize {
        debug_assert!(self.contains(pos), "{pos} is outside the board");
        (pos.y * self.width + pos.x) as usize
    }

    pub fn position_of(&self, index: usize) -> Position {
        let index = index as i32;
        Position {
            x: index % self.width,
            y: index / self.width,
        }
    }

    /// Every in-bounds position in raster order (row by row).
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let (width, height) = (self.width, self.height);
        (0..height).flat_map(move |y| (0..width).map(move |x| Position { x, y }))
    }
}
