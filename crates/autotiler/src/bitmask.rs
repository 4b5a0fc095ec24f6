//! The 4-bit and 8-bit bitmask calculators

use autotiler_core::TileGrid;

use crate::identity::same_family;
use crate::offsets::{Direction, NeighborOffsets};

/// Bit weights for the 8-neighbor variant code.
///
/// This layout matches externally authored 47-tile blob sheets and must not
/// be reordered.
pub mod weights {
    pub const NW: u8 = 0b0000_0001; // Northwest (corner)
    pub const N: u8 = 0b0000_0010;  // North
    pub const NE: u8 = 0b0000_0100; // Northeast (corner)
    pub const W: u8 = 0b0000_1000;  // West
    pub const E: u8 = 0b0001_0000;  // East
    pub const SW: u8 = 0b0010_0000; // Southwest (corner)
    pub const S: u8 = 0b0100_0000;  // South
    pub const SE: u8 = 0b1000_0000; // Southeast (corner)
}

/// Computes the variant code of a cell from its same-family neighbors
pub trait Bitmasker: Send + Sync {
    /// Calculate the variant code for `family` at `(x, y)`.
    ///
    /// When `matches` is given, every neighbor that contributed a bit is
    /// appended to it.
    fn calculate(
        &self,
        grid: &dyn TileGrid,
        offsets: &NeighborOffsets,
        family: &str,
        x: i32,
        y: i32,
        matches: Option<&mut Vec<Direction>>,
    ) -> u8;
}

/// Check whether the neighbor of `(x, y)` in `direction` belongs to `family`.
/// Empty cells never match.
fn neighbor_matches(
    grid: &dyn TileGrid,
    offsets: &NeighborOffsets,
    family: &str,
    direction: Direction,
    x: i32,
    y: i32,
) -> bool {
    offsets
        .neighbor(direction, x, y)
        .and_then(|(nx, ny)| grid.get_tile(nx, ny))
        .is_some_and(|name| same_family(family, name))
}

/// 4-bit variant: `1·N + 2·W + 4·E + 8·S`
#[derive(Debug, Clone, Copy, Default)]
pub struct FourNeighbor;

impl Bitmasker for FourNeighbor {
    fn calculate(
        &self,
        grid: &dyn TileGrid,
        offsets: &NeighborOffsets,
        family: &str,
        x: i32,
        y: i32,
        mut matches: Option<&mut Vec<Direction>>,
    ) -> u8 {
        let mut code = 0u8;

        // Direction::CARDINAL is already in weight order
        for (bit, direction) in Direction::CARDINAL.into_iter().enumerate() {
            if neighbor_matches(grid, offsets, family, direction, x, y) {
                code |= 1 << bit;
                if let Some(list) = matches.as_deref_mut() {
                    list.push(direction);
                }
            }
        }

        code
    }
}

/// Check whether an 8-bit code can be produced by [`EightNeighbor`].
///
/// Exactly 47 of the 256 codes are reachable.
pub fn is_reachable_code(code: u8) -> bool {
    use weights::*;

    let has = |bits: u8| code & bits == bits;
    [(NW, N | W), (NE, N | E), (SW, S | W), (SE, S | E)]
        .into_iter()
        .all(|(corner, edges)| !has(corner) || has(edges))
}

/// Weight of a direction in the 8-bit code
pub fn eight_neighbor_weight(direction: Direction) -> u8 {
    use weights::*;

    match direction {
        Direction::NorthWest => NW,
        Direction::North => N,
        Direction::NorthEast => NE,
        Direction::West => W,
        Direction::East => E,
        Direction::SouthWest => SW,
        Direction::South => S,
        Direction::SouthEast => SE,
    }
}

/// 8-bit variant with corner gating: a diagonal only counts when both
/// edges next to it also match
#[derive(Debug, Clone, Copy, Default)]
pub struct EightNeighbor;

impl Bitmasker for EightNeighbor {
    fn calculate(
        &self,
        grid: &dyn TileGrid,
        offsets: &NeighborOffsets,
        family: &str,
        x: i32,
        y: i32,
        matches: Option<&mut Vec<Direction>>,
    ) -> u8 {
        let matches_at = |direction| neighbor_matches(grid, offsets, family, direction, x, y);

        let n = matches_at(Direction::North);
        let w = matches_at(Direction::West);
        let e = matches_at(Direction::East);
        let s = matches_at(Direction::South);

        // A corner is only looked up once both of its edges match
        let nw = n && w && matches_at(Direction::NorthWest);
        let ne = n && e && matches_at(Direction::NorthEast);
        let sw = s && w && matches_at(Direction::SouthWest);
        let se = s && e && matches_at(Direction::SouthEast);

        let code = [nw, n, ne, w, e, sw, s, se]
            .into_iter()
            .zip(Direction::ALL)
            .filter(|&(hit, _)| hit)
            .fold(0u8, |code, (_, direction)| code | eight_neighbor_weight(direction));

        if let Some(list) = matches {
            list.extend(
                Direction::ALL
                    .into_iter()
                    .filter(|&d| code & eight_neighbor_weight(d) != 0),
            );
        }

        code
    }
}
