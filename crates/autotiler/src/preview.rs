//! Dry-run grid used to preview edits

use std::collections::BTreeMap;

use autotiler_core::TileGrid;

/// Write overlay on top of a read-only grid.
///
/// Reads see the overlay first, so an engine running against a
/// `PreviewGrid` behaves exactly as it would against the real grid.
pub struct PreviewGrid<'a> {
    base: &'a dyn TileGrid,
    overlay: BTreeMap<(i32, i32), String>,
}

impl<'a> PreviewGrid<'a> {
    pub fn new(base: &'a dyn TileGrid) -> Self {
        Self {
            base,
            overlay: BTreeMap::new(),
        }
    }

    /// Cells whose name differs from the base grid, ordered by `(x, y)`
    pub fn changes(&self) -> Vec<((i32, i32), String)> {
        self.overlay
            .iter()
            .filter(|(pos, name)| self.base.get_tile(pos.0, pos.1) != Some(name.as_str()))
            .map(|(pos, name)| (*pos, name.clone()))
            .collect()
    }
}

impl TileGrid for PreviewGrid<'_> {
    fn get_tile(&self, x: i32, y: i32) -> Option<&str> {
        match self.overlay.get(&(x, y)) {
            Some(name) => Some(name.as_str()),
            None => self.base.get_tile(x, y),
        }
    }

    fn set_tile(&mut self, name: &str, x: i32, y: i32) {
        self.overlay.insert((x, y), name.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autotiler_core::TileLayer;

    #[test]
    fn test_overlay_shadows_base() {
        let mut layer = TileLayer::new("Ground".to_string(), 4, 4);
        layer.set(1, 1, "BW4=fence0");

        let mut preview = PreviewGrid::new(&layer);
        assert_eq!(preview.get_tile(1, 1), Some("BW4=fence0"));

        preview.set_tile("BW4=fence4", 1, 1);
        preview.set_tile("BW4=fence2", 2, 1);
        assert_eq!(preview.get_tile(1, 1), Some("BW4=fence4"));
        assert_eq!(layer.get(1, 1), Some("BW4=fence0"));

        assert_eq!(
            preview.changes(),
            vec![
                ((1, 1), "BW4=fence4".to_string()),
                ((2, 1), "BW4=fence2".to_string()),
            ]
        );
    }

    #[test]
    fn test_rewriting_same_name_is_not_a_change() {
        let mut layer = TileLayer::new("Ground".to_string(), 4, 4);
        layer.set(0, 0, "BW16=grass0");

        let mut preview = PreviewGrid::new(&layer);
        preview.set_tile("BW16=grass0", 0, 0);
        assert!(preview.changes().is_empty());
    }
}
