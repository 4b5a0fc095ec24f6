//! Bounded tile layers

use crate::grid::TileGrid;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single layer of named tiles
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileLayer {
    pub id: Uuid,
    pub name: String,
    pub visible: bool,
    width: u32,
    height: u32,
    /// Row-major tile names - None means empty
    tiles: Vec<Option<String>>,
}

impl TileLayer {
    /// Create a new empty layer
    pub fn new(name: String, width: u32, height: u32) -> Self {
        let size = (width as usize) * (height as usize);
        Self {
            id: Uuid::new_v4(),
            name,
            visible: true,
            width,
            height,
            tiles: vec![None; size],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Check whether a cell lies inside the layer
    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if self.contains(x, y) {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the tile name at a cell
    pub fn get(&self, x: i32, y: i32) -> Option<&str> {
        self.index(x, y).and_then(|idx| self.tiles[idx].as_deref())
    }

    /// Set the tile name at a cell. Writes outside the layer are dropped.
    pub fn set(&mut self, x: i32, y: i32, name: impl Into<String>) {
        if let Some(idx) = self.index(x, y) {
            self.tiles[idx] = Some(name.into());
        }
    }

    /// Empty a cell, returning the previous occupant
    pub fn clear(&mut self, x: i32, y: i32) -> Option<String> {
        self.index(x, y).and_then(|idx| self.tiles[idx].take())
    }

    /// Number of occupied cells
    pub fn tile_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.is_some()).count()
    }

    /// Iterate over occupied cells as `((x, y), name)`
    pub fn iter_tiles(&self) -> impl Iterator<Item = ((i32, i32), &str)> + '_ {
        let width = self.width as usize;
        self.tiles.iter().enumerate().filter_map(move |(idx, tile)| {
            tile.as_deref()
                .map(|name| (((idx % width) as i32, (idx / width) as i32), name))
        })
    }
}

impl TileGrid for TileLayer {
    fn get_tile(&self, x: i32, y: i32) -> Option<&str> {
        self.get(x, y)
    }

    fn set_tile(&mut self, name: &str, x: i32, y: i32) {
        self.set(x, y, name);
    }
}
