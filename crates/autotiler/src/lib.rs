//! Name-based blob autotiling
//!
//! This crate picks which variant of a tile family to show at a cell from
//! the cell's same-family neighbors, and repaints already placed neighbors
//! whose variant changes as a result.
//!
//! # Features
//! - 4-bit (cardinal) and 8-bit (corner-gated, 47-tile blob) bitmasks
//! - Family detection from tile name prefixes (`BW4=`, `BW16=`)
//! - Neighbor fixing when a cell changes family or is erased
//! - Multi-cell brushes and dry-run previews
//! - Configurable Y axis direction
//!
//! # Example
//!
//! ```rust
//! use autotiler::{AutoTiler, TileLayer};
//!
//! let mut layer = TileLayer::new("Ground".to_string(), 8, 8);
//! let tiler = AutoTiler::new();
//!
//! // Tile names are `<family><variant>`; the variant is recomputed on placement
//! assert!(tiler.place_tile(&mut layer, "BW16=grass90", 3, 3));
//! assert!(tiler.place_tile(&mut layer, "BW16=grass90", 4, 3));
//! assert_eq!(layer.get(3, 3), Some("BW16=grass16"));
//! assert_eq!(layer.get(4, 3), Some("BW16=grass8"));
//!
//! // Static tiles are left to the caller
//! assert!(!tiler.place_tile(&mut layer, "tree", 0, 0));
//! ```

pub mod bitmask;
pub mod brush;
pub mod config;
pub mod engine;
pub mod identity;
pub mod kind;
pub mod offsets;
pub mod preview;

// Re-export main types at crate root
pub use bitmask::{is_reachable_code, Bitmasker, EightNeighbor, FourNeighbor};
pub use brush::Brush;
pub use config::{load_config, parse_config, save_config, AutotileConfig, ConfigError};
pub use engine::AutoTiler;
pub use identity::{
    compose_tile_name, same_family, split_tile_name, strip_variant_suffix, variant_code,
};
pub use kind::BitmaskKind;
pub use offsets::{Direction, NeighborOffsets, YAxis};
pub use preview::PreviewGrid;

// Re-export autotiler_core
pub use autotiler_core;
pub use autotiler_core::{TileGrid, TileLayer, TileMap};
