//! The grid interface consumed by the auto-tile engine

use std::collections::HashMap;

/// Read/write access to a grid of named tiles.
///
/// Coordinates carry no intrinsic bounds. Implementations answer `None` for
/// any cell they don't hold (including out-of-range cells) and must accept
/// any name in `set_tile`, even one with no matching sprite.
pub trait TileGrid {
    /// Name of the tile at `(x, y)`, or `None` if the cell is empty
    fn get_tile(&self, x: i32, y: i32) -> Option<&str>;

    /// Overwrite the tile at `(x, y)`
    fn set_tile(&mut self, name: &str, x: i32, y: i32);
}

/// Unbounded sparse grid keyed by cell position
impl TileGrid for HashMap<(i32, i32), String> {
    fn get_tile(&self, x: i32, y: i32) -> Option<&str> {
        self.get(&(x, y)).map(String::as_str)
    }

    fn set_tile(&mut self, name: &str, x: i32, y: i32) {
        self.insert((x, y), name.to_string());
    }
}
