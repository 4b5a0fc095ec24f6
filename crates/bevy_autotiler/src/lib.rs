//! Bevy integration for the autotiler
//!
//! [`AutotilePlugin`] owns a [`TileMap`] and an [`AutoTiler`] as resources
//! and applies paint/erase requests sent as messages. It does no rendering:
//! a renderer reads [`AutotileMap`] and listens for [`TileEdited`] to know
//! which cells to refresh.
//!
//! ```rust,ignore
//! app.add_plugins(AutotilePlugin::default());
//!
//! fn paint(mut edits: MessageWriter<TileEdit>) {
//!     edits.write(TileEdit::paint("BW16=grass90", 3, 4));
//!     edits.write(TileEdit::erase(5, 4));
//! }
//! ```

use autotiler::{AutoTiler, AutotileConfig, TileGrid, TileMap};
use bevy::prelude::*;

pub use autotiler;

/// The map being edited
#[derive(Resource, Debug, Clone)]
pub struct AutotileMap(pub TileMap);

impl std::ops::Deref for AutotileMap {
    type Target = TileMap;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for AutotileMap {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// The engine; toggle neighbor fixing through this at runtime
#[derive(Resource, Debug, Clone, Default)]
pub struct Autotiler(pub AutoTiler);

impl std::ops::Deref for Autotiler {
    type Target = AutoTiler;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::ops::DerefMut for Autotiler {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

/// Request to edit a tile on the active layer.
///
/// Edits read in one frame are applied in the order they were written.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub enum TileEdit {
    /// Auto-tile names are re-tiled; anything else is placed verbatim
    Paint { name: String, x: i32, y: i32 },
    Erase { x: i32, y: i32 },
}

impl TileEdit {
    pub fn paint(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self::Paint {
            name: name.into(),
            x,
            y,
        }
    }

    pub fn erase(x: i32, y: i32) -> Self {
        Self::Erase { x, y }
    }

    /// The edited cell
    pub fn position(&self) -> (i32, i32) {
        match *self {
            Self::Paint { x, y, .. } | Self::Erase { x, y } => (x, y),
        }
    }
}

/// Request to switch the layer that edits apply to
#[derive(Message, Debug, Clone, Copy)]
pub struct SelectLayer {
    pub index: usize,
}

/// Sent once per applied [`TileEdit`]
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileEdited {
    pub layer: usize,
    pub x: i32,
    pub y: i32,
}

/// Plugin for autotiled map editing
pub struct AutotilePlugin {
    pub config: AutotileConfig,
    pub width: u32,
    pub height: u32,
    pub layers: usize,
}

impl Default for AutotilePlugin {
    fn default() -> Self {
        Self {
            config: AutotileConfig::default(),
            width: 16,
            height: 12,
            layers: 2,
        }
    }
}

impl Plugin for AutotilePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Autotiler(AutoTiler::from_config(&self.config)))
            .add_message::<TileEdit>()
            .add_message::<SelectLayer>()
            .add_message::<TileEdited>();

        // Writers stay valid without a map; the edit systems need one
        let map = match TileMap::new(self.width, self.height, self.layers) {
            Ok(map) => map,
            Err(e) => {
                error!("AutotilePlugin: cannot create map, edits are disabled: {}", e);
                return;
            }
        };

        app.insert_resource(AutotileMap(map))
            .add_systems(Update, (select_layer, apply_tile_edits).chain());
    }
}

/// System to switch the active layer
fn select_layer(mut requests: MessageReader<SelectLayer>, mut map: ResMut<AutotileMap>) {
    for request in requests.read() {
        if let Err(e) = map.set_active_layer(request.index) {
            warn!("Ignoring layer selection: {}", e);
        }
    }
}

/// System to apply tile edits to the active layer
fn apply_tile_edits(
    mut edits: MessageReader<TileEdit>,
    mut edited: MessageWriter<TileEdited>,
    mut map: ResMut<AutotileMap>,
    tiler: Res<Autotiler>,
) {
    let layer = map.active_layer_index();

    for edit in edits.read() {
        match edit {
            TileEdit::Paint { name, x, y } => {
                // Not an auto-tile: place the name as given
                if !tiler.place_tile(&mut map.0, name, *x, *y) {
                    map.set_tile(name, *x, *y);
                }
            }
            TileEdit::Erase { x, y } => {
                // The cell must be empty before the engine repairs its neighbors
                map.active_layer_mut().clear(*x, *y);
                tiler.erase_tile(&mut map.0, *x, *y);
            }
        }

        let (x, y) = edit.position();
        edited.write(TileEdited { layer, x, y });
    }
}
