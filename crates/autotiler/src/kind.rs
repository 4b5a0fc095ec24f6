//! Bitmask family detection from tile name prefixes

use crate::bitmask::{Bitmasker, EightNeighbor, FourNeighbor};

/// The bitmask algorithm an auto-tile family uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitmaskKind {
    /// Cardinal neighbors only, codes 0-15
    FourNeighbor,
    /// Cardinal plus corner-gated diagonal neighbors, codes 0-255
    EightNeighbor,
}

impl BitmaskKind {
    /// Detection order. Neither prefix is a prefix of the other.
    pub const ALL: [BitmaskKind; 2] = [BitmaskKind::FourNeighbor, BitmaskKind::EightNeighbor];

    /// Name prefix marking a family as using this algorithm
    pub const fn prefix(self) -> &'static str {
        match self {
            BitmaskKind::FourNeighbor => "BW4=",
            BitmaskKind::EightNeighbor => "BW16=",
        }
    }

    /// Classify a tile name or family key. `None` means a static tile.
    pub fn detect(name: &str) -> Option<BitmaskKind> {
        Self::ALL
            .into_iter()
            .find(|kind| name.starts_with(kind.prefix()))
    }

    /// Largest code the algorithm can produce
    pub const fn max_code(self) -> u8 {
        match self {
            BitmaskKind::FourNeighbor => 15,
            BitmaskKind::EightNeighbor => 255,
        }
    }

    /// Variant shown when a family is offered in a palette.
    ///
    /// 4-bit families show the isolated tile; 8-bit families show the
    /// four-edge cross (N + W + E + S, no corners).
    pub const fn default_variant(self) -> u8 {
        match self {
            BitmaskKind::FourNeighbor => 0,
            BitmaskKind::EightNeighbor => 90,
        }
    }

    /// The calculator implementing this algorithm
    pub fn bitmasker(self) -> &'static dyn Bitmasker {
        match self {
            BitmaskKind::FourNeighbor => &FourNeighbor,
            BitmaskKind::EightNeighbor => &EightNeighbor,
        }
    }
}
