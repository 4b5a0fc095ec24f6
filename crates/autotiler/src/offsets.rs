//! Neighbor directions and their grid offsets
//!
//! Directions are named from the viewer's point of view. Which way "north"
//! points in grid coordinates depends on the map's [`YAxis`] convention.

use serde::{Deserialize, Serialize};

/// One of the eight cells surrounding a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    NorthWest,
    North,
    NorthEast,
    West,
    East,
    SouthWest,
    South,
    SouthEast,
}

impl Direction {
    /// All eight neighbors, row by row from the north-west corner
    pub const ALL: [Direction; 8] = [
        Direction::NorthWest,
        Direction::North,
        Direction::NorthEast,
        Direction::West,
        Direction::East,
        Direction::SouthWest,
        Direction::South,
        Direction::SouthEast,
    ];

    /// The edge-sharing neighbors, in 4-bit weight order
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::West,
        Direction::East,
        Direction::South,
    ];

    /// Check if this is a corner (diagonal) neighbor
    pub fn is_corner(self) -> bool {
        matches!(
            self,
            Direction::NorthWest
                | Direction::NorthEast
                | Direction::SouthWest
                | Direction::SouthEast
        )
    }

    /// The direction pointing back from the neighbor to us
    pub fn opposite(self) -> Direction {
        match self {
            Direction::NorthWest => Direction::SouthEast,
            Direction::North => Direction::South,
            Direction::NorthEast => Direction::SouthWest,
            Direction::West => Direction::East,
            Direction::East => Direction::West,
            Direction::SouthWest => Direction::NorthEast,
            Direction::South => Direction::North,
            Direction::SouthEast => Direction::NorthWest,
        }
    }

    /// Offset with Y growing downward (screen coordinates)
    fn screen_offset(self) -> (i32, i32) {
        match self {
            Direction::NorthWest => (-1, -1),
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::West => (-1, 0),
            Direction::East => (1, 0),
            Direction::SouthWest => (-1, 1),
            Direction::South => (0, 1),
            Direction::SouthEast => (1, 1),
        }
    }
}

/// Which way the grid's Y axis grows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum YAxis {
    /// Y grows downward: north is `(0, -1)`
    #[default]
    Down,
    /// Y grows upward: north is `(0, 1)`
    Up,
}

/// Offset table resolving directions to grid cells under one [`YAxis`] convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NeighborOffsets {
    y_axis: YAxis,
}

impl NeighborOffsets {
    pub fn new(y_axis: YAxis) -> Self {
        Self { y_axis }
    }

    pub fn y_axis(&self) -> YAxis {
        self.y_axis
    }

    /// Relative `(dx, dy)` of a neighbor
    pub fn offset(&self, direction: Direction) -> (i32, i32) {
        let (dx, dy) = direction.screen_offset();
        match self.y_axis {
            YAxis::Down => (dx, dy),
            YAxis::Up => (dx, -dy),
        }
    }

    /// Absolute position of the neighbor of `(x, y)` in `direction`.
    ///
    /// `None` when the neighbor lies past the `i32` coordinate range; such a
    /// cell is treated as absent.
    pub fn neighbor(&self, direction: Direction, x: i32, y: i32) -> Option<(i32, i32)> {
        let (dx, dy) = self.offset(direction);
        Some((x.checked_add(dx)?, y.checked_add(dy)?))
    }
}
