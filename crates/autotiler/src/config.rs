//! Auto-tiler configuration
//!
//! Settings are plain serde data so a project can keep them next to its
//! map files. Missing fields fall back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::offsets::YAxis;

/// Errors that can occur when loading or saving a configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Engine settings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutotileConfig {
    /// Repaint neighbors of a different family when a cell is replaced or erased
    pub fix_neighbor_tiles: bool,
    /// Which way "north" points in grid coordinates
    pub y_axis: YAxis,
}

impl Default for AutotileConfig {
    fn default() -> Self {
        Self {
            fix_neighbor_tiles: true,
            y_axis: YAxis::Down,
        }
    }
}

/// Parse a configuration from a JSON string
pub fn parse_config(json: &str) -> Result<AutotileConfig, ConfigError> {
    serde_json::from_str(json).map_err(|e| ConfigError::ParseError(e.to_string()))
}

/// Load a configuration from a JSON file
pub fn load_config(path: &Path) -> Result<AutotileConfig, ConfigError> {
    let content =
        std::fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    parse_config(&content)
}

/// Save a configuration to a JSON file
pub fn save_config(config: &AutotileConfig, path: &Path) -> Result<(), ConfigError> {
    let content =
        serde_json::to_string_pretty(config).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    std::fs::write(path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}
