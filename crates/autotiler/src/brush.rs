//! Multi-cell brushes

use autotiler_core::TileGrid;
use tracing::debug;

use crate::engine::AutoTiler;
use crate::kind::BitmaskKind;
use crate::preview::PreviewGrid;

/// Square stamp painted with a single click
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Brush {
    /// 1x1
    #[default]
    Single,
    /// 2x2
    Double,
    /// 3x3
    Triple,
}

impl Brush {
    pub const ALL: [Brush; 3] = [Brush::Single, Brush::Double, Brush::Triple];

    /// Side length in cells
    pub fn size(self) -> i32 {
        match self {
            Brush::Single => 1,
            Brush::Double => 2,
            Brush::Triple => 3,
        }
    }

    /// Number of cells covered
    pub fn tile_count(self) -> usize {
        (self.size() * self.size()) as usize
    }

    /// Cells covered when anchored at `(x, y)`, column by column.
    /// Cells past the `i32` coordinate range are left out.
    pub fn cells(self, x: i32, y: i32) -> impl Iterator<Item = (i32, i32)> {
        let size = self.size();
        (0..size).flat_map(move |dx| {
            (0..size).filter_map(move |dy| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
        })
    }
}

impl AutoTiler {
    /// Auto-tile every cell under `brush` anchored at `(x, y)`.
    ///
    /// Returns `false` with no writes when `name` is not an auto-tile.
    pub fn place_brush(
        &self,
        grid: &mut dyn TileGrid,
        name: &str,
        brush: Brush,
        x: i32,
        y: i32,
    ) -> bool {
        if BitmaskKind::detect(name).is_none() {
            return false;
        }

        for (cx, cy) in brush.cells(x, y) {
            self.place_tile(grid, name, cx, cy);
        }

        debug!("Stamped {:?} brush '{}' at ({}, {})", brush, name, x, y);
        true
    }

    /// Tiles that [`place_brush`](Self::place_brush) would change, without
    /// modifying `grid`. Empty when `name` is not an auto-tile.
    pub fn preview_brush(
        &self,
        grid: &dyn TileGrid,
        name: &str,
        brush: Brush,
        x: i32,
        y: i32,
    ) -> Vec<((i32, i32), String)> {
        let mut preview = PreviewGrid::new(grid);
        if !self.place_brush(&mut preview, name, brush, x, y) {
            return Vec::new();
        }
        preview.changes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::variant_code;
    use autotiler_core::TileLayer;
    use std::collections::HashMap;

    #[test]
    fn test_brush_cells() {
        assert_eq!(Brush::Single.cells(4, 4).collect::<Vec<_>>(), vec![(4, 4)]);
        assert_eq!(
            Brush::Double.cells(0, 0).collect::<Vec<_>>(),
            vec![(0, 0), (0, 1), (1, 0), (1, 1)]
        );
        for brush in Brush::ALL {
            assert_eq!(brush.cells(0, 0).count(), brush.tile_count());
        }
    }

    #[test]
    fn test_brush_cells_stop_at_coordinate_limit() {
        assert_eq!(
            Brush::Double.cells(i32::MAX, 0).collect::<Vec<_>>(),
            vec![(i32::MAX, 0), (i32::MAX, 1)]
        );
        assert_eq!(Brush::Triple.cells(i32::MAX, i32::MAX).count(), 1);
    }

    #[test]
    fn test_brush_at_coordinate_limit() {
        let mut grid: HashMap<(i32, i32), String> = HashMap::new();
        let tiler = AutoTiler::new();

        assert!(tiler.place_brush(&mut grid, "BW4=fence0", Brush::Triple, i32::MAX - 1, 0));
        assert_eq!(grid.len(), 6);
        assert_eq!(grid.get_tile(i32::MAX, 0), Some("BW4=fence10"));
    }

    #[test]
    fn test_triple_preview_matches_blob_presets() {
        let layer = TileLayer::new("Ground".to_string(), 8, 8);
        let tiler = AutoTiler::new();

        let preview = tiler.preview_brush(&layer, "BW16=grass90", Brush::Triple, 0, 0);
        let codes: Vec<_> = preview
            .iter()
            .map(|(pos, name)| (*pos, variant_code(name).unwrap()))
            .collect();

        assert_eq!(
            codes,
            vec![
                ((0, 0), 208),
                ((0, 1), 214),
                ((0, 2), 22),
                ((1, 0), 248),
                ((1, 1), 255),
                ((1, 2), 31),
                ((2, 0), 104),
                ((2, 1), 107),
                ((2, 2), 11),
            ]
        );
        assert_eq!(layer.tile_count(), 0);
    }

    #[test]
    fn test_double_four_neighbor_brush() {
        let mut layer = TileLayer::new("Ground".to_string(), 4, 4);
        let tiler = AutoTiler::new();

        assert!(tiler.place_brush(&mut layer, "BW4=fence0", Brush::Double, 1, 1));
        // Y-down: (1,1) has East and South, (2,2) has North and West
        assert_eq!(layer.get(1, 1), Some("BW4=fence12"));
        assert_eq!(layer.get(2, 1), Some("BW4=fence10"));
        assert_eq!(layer.get(1, 2), Some("BW4=fence5"));
        assert_eq!(layer.get(2, 2), Some("BW4=fence3"));
    }

    #[test]
    fn test_static_brush_is_rejected() {
        let mut layer = TileLayer::new("Ground".to_string(), 4, 4);
        let tiler = AutoTiler::new();

        assert!(!tiler.place_brush(&mut layer, "tree", Brush::Triple, 0, 0));
        assert_eq!(layer.tile_count(), 0);
        assert!(tiler
            .preview_brush(&layer, "tree", Brush::Triple, 0, 0)
            .is_empty());
    }

    #[test]
    fn test_preview_only_reports_changed_cells() {
        let mut layer = TileLayer::new("Ground".to_string(), 8, 8);
        let tiler = AutoTiler::new();
        tiler.place_brush(&mut layer, "BW16=grass", Brush::Double, 0, 0);

        // Re-stamping the same block changes nothing
        assert!(tiler
            .preview_brush(&layer, "BW16=grass", Brush::Double, 0, 0)
            .is_empty());

        // (1, 1) keeps its code: the new corner lacks its southern edge
        let preview = tiler.preview_brush(&layer, "BW16=grass", Brush::Single, 2, 0);
        let cells: Vec<_> = preview.iter().map(|(pos, _)| *pos).collect();
        assert_eq!(cells, vec![(1, 0), (2, 0)]);
    }
}
