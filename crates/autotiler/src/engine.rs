//! The auto-tile engine
//!
//! [`AutoTiler`] is the entry point for painting and erasing auto-tiles. A
//! placement is a short protocol:
//!
//! 1. Classify the brush name and strip it to its family key
//! 2. (fix enabled) Record neighbors of the cell's *old* family
//! 3. Write the new tile and collect its same-family neighbors
//! 4. Recompute each of those neighbors (one ring, no cascade)
//! 5. (fix enabled) Recompute the recorded old-family neighbors
//!
//! All scratch lists live on the call stack, so the engine itself is
//! immutable during a call.

use autotiler_core::TileGrid;
use tracing::{debug, trace};

use crate::config::AutotileConfig;
use crate::identity::{compose_tile_name, strip_variant_suffix};
use crate::kind::BitmaskKind;
use crate::offsets::{Direction, NeighborOffsets, YAxis};

/// Name-based auto-tiler for 4-bit and 8-bit blob families
#[derive(Debug, Clone)]
pub struct AutoTiler {
    offsets: NeighborOffsets,
    /// Repaint foreign-family neighbors when a cell changes family or is erased
    fix_neighbor_tiles: bool,
}

impl Default for AutoTiler {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoTiler {
    /// Create an engine with neighbor fixing enabled and Y growing downward
    pub fn new() -> Self {
        Self {
            offsets: NeighborOffsets::new(YAxis::Down),
            fix_neighbor_tiles: true,
        }
    }

    pub fn from_config(config: &AutotileConfig) -> Self {
        Self {
            offsets: NeighborOffsets::new(config.y_axis),
            fix_neighbor_tiles: config.fix_neighbor_tiles,
        }
    }

    pub fn fix_neighbor_tiles(&self) -> bool {
        self.fix_neighbor_tiles
    }

    pub fn set_fix_neighbor_tiles(&mut self, enabled: bool) {
        self.fix_neighbor_tiles = enabled;
    }

    pub fn y_axis(&self) -> YAxis {
        self.offsets.y_axis()
    }

    pub fn set_y_axis(&mut self, y_axis: YAxis) {
        self.offsets = NeighborOffsets::new(y_axis);
    }

    pub fn offsets(&self) -> &NeighborOffsets {
        &self.offsets
    }

    /// Auto-tile `name` at `(x, y)` and repaint the affected neighbors.
    ///
    /// Returns `false` without touching the grid when `name` is not an
    /// auto-tile; the caller should then place it verbatim.
    pub fn place_tile(&self, grid: &mut dyn TileGrid, name: &str, x: i32, y: i32) -> bool {
        // Classify on the raw name: the prefix belongs to the family key
        let Some(kind) = BitmaskKind::detect(name) else {
            trace!("'{}' is not an auto-tile, skipping", name);
            return false;
        };

        let family = strip_variant_suffix(name);

        let fix_list = if self.fix_neighbor_tiles {
            self.collect_fix_targets(&*grid, family, x, y)
        } else {
            Vec::new()
        };

        let bitmasker = kind.bitmasker();
        let mut ring = Vec::new();
        let code = bitmasker.calculate(&*grid, &self.offsets, family, x, y, Some(&mut ring));
        grid.set_tile(&compose_tile_name(family, code), x, y);

        // Only the target changed family, so one ring of same-family
        // neighbors is all that needs recomputing
        for &direction in &ring {
            // Matched neighbors always lie inside the coordinate range
            let Some((nx, ny)) = self.offsets.neighbor(direction, x, y) else {
                continue;
            };
            let code = bitmasker.calculate(&*grid, &self.offsets, family, nx, ny, None);
            grid.set_tile(&compose_tile_name(family, code), nx, ny);
            trace!("Propagated {}{} to ({}, {})", family, code, nx, ny);
        }

        if self.fix_neighbor_tiles {
            self.fix_neighbors(grid, &fix_list, x, y);
        }

        debug!(
            "Placed {}{} ({:?}) at ({}, {}): {} same-family, {} to fix",
            family,
            code,
            kind,
            x,
            y,
            ring.len(),
            fix_list.len()
        );

        true
    }

    /// Repaint the neighbors of a cell that has just been emptied.
    ///
    /// The caller clears `(x, y)` first; this never writes the erased cell.
    /// Does nothing while neighbor fixing is disabled.
    pub fn erase_tile(&self, grid: &mut dyn TileGrid, x: i32, y: i32) {
        if !self.fix_neighbor_tiles {
            return;
        }

        let fix_list = self.collect_fix_targets(&*grid, "", x, y);
        self.fix_neighbors(grid, &fix_list, x, y);

        debug!("Erased ({}, {}): {} neighbors fixed", x, y, fix_list.len());
    }

    /// Find the neighbors that may lose a matching edge when `(x, y)` changes
    /// to `incoming`.
    ///
    /// If the cell already holds `incoming`, nothing changes for anyone. If
    /// it holds another family, only neighbors of that family are affected.
    /// If it is empty, every occupied neighbor is recorded.
    fn collect_fix_targets(
        &self,
        grid: &dyn TileGrid,
        incoming: &str,
        x: i32,
        y: i32,
    ) -> Vec<Direction> {
        let previous = grid.get_tile(x, y).map(strip_variant_suffix);
        if previous == Some(incoming) {
            return Vec::new();
        }

        Direction::ALL
            .into_iter()
            .filter(|&direction| {
                let neighbor = self
                    .offsets
                    .neighbor(direction, x, y)
                    .and_then(|(nx, ny)| grid.get_tile(nx, ny));
                match (neighbor, previous) {
                    (None, _) => false,
                    (Some(_), None) => true,
                    (Some(neighbor), Some(previous)) => strip_variant_suffix(neighbor) == previous,
                }
            })
            .collect()
    }

    /// Recompute each recorded neighbor against its own family and the new
    /// surroundings. Static and empty neighbors are skipped.
    fn fix_neighbors(&self, grid: &mut dyn TileGrid, fix_list: &[Direction], x: i32, y: i32) {
        for &direction in fix_list {
            let Some((nx, ny)) = self.offsets.neighbor(direction, x, y) else {
                continue;
            };

            let Some(neighbor) = grid.get_tile(nx, ny) else {
                continue;
            };
            let family = strip_variant_suffix(neighbor).to_string();

            let Some(kind) = BitmaskKind::detect(&family) else {
                trace!("Static tile '{}' at ({}, {}) left as is", family, nx, ny);
                continue;
            };

            let code = kind
                .bitmasker()
                .calculate(&*grid, &self.offsets, &family, nx, ny, None);
            grid.set_tile(&compose_tile_name(&family, code), nx, ny);
            trace!("Fixed {}{} at ({}, {})", family, code, nx, ny);
        }
    }
}
