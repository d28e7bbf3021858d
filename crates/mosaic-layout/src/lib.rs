//! # Mosaic Layout
//!
//! Adaptive grid packing for catalog tiles.
//!
//! The catalog view renders entries in fixed-width rows. Every time the
//! container is resized, the zoom level changes or the entry set is filtered,
//! the view asks this crate two questions:
//!
//! 1. **How many tiles fit in a row?** See [`metrics::capacity`].
//! 2. **In which order should the tiles be laid down?** See [`pack`].
//!
//! Featured entries occupy twice the footprint of a normal entry. When a row
//! has an odd number of slots, laying entries down in input order can leave
//! a single free slot next to a featured entry that cannot use it. The
//! [`packing`] module reorders entries just enough to keep rows full.
//!
//! ## Design Goals
//!
//! 1. **Stateless recomputation**: every pass starts from scratch over the
//!    full entry list, no state survives between passes
//! 2. **Stable order**: entries keep their relative order unless a row would
//!    otherwise be left with an unusable slot
//! 3. **Exact accounting**: row fill is tracked in half units, never floats
//! 4. **Lazy**: packing is a forward iterator, the view can stop pulling at
//!    any point

pub mod axis;
pub mod metrics;
pub mod packing;

pub use axis::{nice_number, nice_ticks};
pub use metrics::{capacity, grid_width_px, overlay_columns, GridMetrics};
pub use packing::{pack, PackedRow, PackedTiles, Slot, Strategy, Units};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur in layout.
#[derive(Error, Debug)]
pub enum LayoutError {
    /// The container has not been measured yet or is too narrow for one tile.
    #[error("No row capacity: container is not measured or too narrow")]
    NoCapacity,

    /// A featured tile needs two slots, the row has fewer.
    #[error("Featured entries need at least 2 slots per row, got {items_per_row}")]
    FeaturedTooWide { items_per_row: usize },

    #[error("Invalid grid metrics: {0}")]
    InvalidMetrics(String),

    #[error("Failed to parse grid metrics: {0}")]
    Config(#[from] serde_json::Error),
}

/// Anything the packer can place.
///
/// The packer only cares whether a tile is featured. Everything else about
/// the entry is opaque to it.
pub trait Tile {
    /// Whether the tile takes a double footprint.
    fn is_featured(&self) -> bool;
}

impl<T: Tile + ?Sized> Tile for &T {
    fn is_featured(&self) -> bool {
        (**self).is_featured()
    }
}

/// Featured marker attached to an entry. Its presence is what matters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Featured {
    /// Optional badge text shown on the tile.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A catalog entry as delivered by the data layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable unique identifier.
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<Featured>,
}

impl Entry {
    /// Create a normal-sized entry.
    pub fn normal(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            featured: None,
        }
    }

    /// Create a featured entry.
    pub fn featured(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            featured: Some(Featured::default()),
        }
    }
}

impl Tile for Entry {
    fn is_featured(&self) -> bool {
        self.featured.is_some()
    }
}
