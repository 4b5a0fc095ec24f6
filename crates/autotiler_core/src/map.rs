//! Layered tile maps

use crate::grid::TileGrid;
use crate::layer::TileLayer;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Errors raised when building or editing a [`TileMap`]
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MapError {
    #[error("Layer index {index} out of range (map has {count} layers)")]
    LayerOutOfRange { index: usize, count: usize },
    #[error("Map dimensions must be non-zero, got {width}x{height}")]
    EmptyDimensions { width: u32, height: u32 },
    #[error("A map needs at least one layer")]
    NoLayers,
}

/// A stack of equally sized layers, edited one layer at a time.
///
/// All [`TileGrid`] calls go to the active layer, so an auto-tile engine
/// working against a `TileMap` never sees tiles from other layers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TileMap {
    width: u32,
    height: u32,
    layers: Vec<TileLayer>,
    active_layer: usize,
}

impl TileMap {
    /// Create a map with `layer_count` empty layers named `Layer 0`, `Layer 1`, ...
    pub fn new(width: u32, height: u32, layer_count: usize) -> Result<Self, MapError> {
        if width == 0 || height == 0 {
            return Err(MapError::EmptyDimensions { width, height });
        }
        if layer_count == 0 {
            return Err(MapError::NoLayers);
        }

        let layers = (0..layer_count)
            .map(|i| TileLayer::new(format!("Layer {}", i), width, height))
            .collect();

        Ok(Self {
            width,
            height,
            layers,
            active_layer: 0,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layers(&self) -> &[TileLayer] {
        &self.layers
    }

    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Get a layer by index
    pub fn get_layer(&self, index: usize) -> Option<&TileLayer> {
        self.layers.get(index)
    }

    /// Get a mutable layer by index
    pub fn get_layer_mut(&mut self, index: usize) -> Option<&mut TileLayer> {
        self.layers.get_mut(index)
    }

    /// Find the index of a layer by ID
    pub fn find_layer(&self, id: Uuid) -> Option<usize> {
        self.layers.iter().position(|l| l.id == id)
    }

    /// Append a new empty layer on top and return its index
    pub fn add_layer(&mut self, name: String) -> usize {
        self.layers.push(TileLayer::new(name, self.width, self.height));
        self.layers.len() - 1
    }

    pub fn active_layer_index(&self) -> usize {
        self.active_layer
    }

    /// Select the layer that [`TileGrid`] calls operate on
    pub fn set_active_layer(&mut self, index: usize) -> Result<(), MapError> {
        if index >= self.layers.len() {
            return Err(MapError::LayerOutOfRange {
                index,
                count: self.layers.len(),
            });
        }
        self.active_layer = index;
        Ok(())
    }

    pub fn active_layer(&self) -> &TileLayer {
        &self.layers[self.active_layer]
    }

    pub fn active_layer_mut(&mut self) -> &mut TileLayer {
        &mut self.layers[self.active_layer]
    }
}

impl TileGrid for TileMap {
    fn get_tile(&self, x: i32, y: i32) -> Option<&str> {
        self.active_layer().get(x, y)
    }

    fn set_tile(&mut self, name: &str, x: i32, y: i32) {
        self.active_layer_mut().set(x, y, name);
    }
}
