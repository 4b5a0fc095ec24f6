//! Grid data structures for the autotiler
//!
//! This crate provides the storage side of auto-tiling:
//! - `TileGrid` - The read/write interface the auto-tile engine works against
//! - `TileLayer` - A bounded, dense layer of tile names
//! - `TileMap` - A stack of layers with one active layer
//!
//! It has no Bevy dependency and knows nothing about bitmasks; tile names are
//! opaque strings here.

mod grid;
mod layer;
mod map;

pub use grid::TileGrid;
pub use layer::TileLayer;
pub use map::{MapError, TileMap};
