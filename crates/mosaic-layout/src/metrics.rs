//! Row capacity and block width arithmetic.
//!
//! A catalog row is a flex container of fixed-width tiles separated by a
//! constant gap. The container itself has a border and inner padding, both
//! of which are dropped in the zoom overlay where the grid is nested inside
//! another box.
//!
//! All functions here are total over finite input. A non-positive result
//! from [`capacity`] means the container is not measured yet or is too
//! narrow; callers show a loading state instead of packing.

use serde::{Deserialize, Serialize};

use crate::LayoutError;

/// Border allowance of the category container, in pixels.
pub const CONTAINER_BORDER: f64 = 7.0;
/// Gap between two tiles, in pixels.
pub const GAP: f64 = 5.0;
/// Inner padding of the category container, in pixels.
pub const PADDING: f64 = 24.0;
/// Padding added around a fixed-column block.
pub const OUTER_PADDING: f64 = 24.0;

/// Fixed lengths of the grid chrome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GridMetrics {
    /// Container border allowance.
    pub border: f64,
    /// Gap between tiles.
    pub gap: f64,
    /// Container inner padding.
    pub padding: f64,
    /// Padding around a fixed-column block.
    pub outer_padding: f64,
}

impl Default for GridMetrics {
    fn default() -> Self {
        Self {
            border: CONTAINER_BORDER,
            gap: GAP,
            padding: PADDING,
            outer_padding: OUTER_PADDING,
        }
    }
}

impl GridMetrics {
    /// Parse metrics from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let metrics: Self = serde_json::from_str(json)?;
        metrics.validate()?;
        Ok(metrics)
    }

    /// Check that every length is finite and non-negative.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let fields = [
            ("border", self.border),
            ("gap", self.gap),
            ("padding", self.padding),
            ("outerPadding", self.outer_padding),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidMetrics(format!(
                    "{name} must be a finite, non-negative length, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// Number of tiles of `item_width` that fit in one row.
    ///
    /// # Arguments
    /// * `percentage` - Share of the container (0-100) the row block may use
    /// * `container_width` - Measured container width
    /// * `item_width` - Width of one normal tile
    /// * `no_padding` - Drop the border and padding allowances (zoom view)
    ///
    /// # Returns
    /// The slot count, `0` when nothing fits, the container is unmeasured
    /// or a tile plus its gap has no width.
    pub fn capacity(
        &self,
        percentage: f64,
        container_width: f64,
        item_width: f64,
        no_padding: bool,
    ) -> usize {
        let pitch = item_width + self.gap;
        if pitch <= 0.0 {
            return 0;
        }

        let (border, padding) = if no_padding {
            (0.0, 0.0)
        } else {
            (self.border, self.padding)
        };

        // n tiles take n * (item + gap) - gap, so one gap is added back.
        let available = (container_width - border + self.gap) * (percentage / 100.0) - padding;
        let slots = (available / pitch).floor();

        // Float-to-int casts saturate: negatives and NaN become 0.
        slots as usize
    }

    /// Width in pixels of a block of `columns` tiles.
    pub fn grid_width(&self, columns: usize, item_width: f64) -> f64 {
        columns as f64 * (item_width + self.gap) + self.outer_padding
    }

    /// [`GridMetrics::grid_width`] formatted as a CSS length.
    pub fn grid_width_px(&self, columns: usize, item_width: f64) -> String {
        format!("{}px", self.grid_width(columns, item_width))
    }
}

/// [`GridMetrics::capacity`] with the default metrics.
pub fn capacity(percentage: f64, container_width: f64, item_width: f64, no_padding: bool) -> usize {
    GridMetrics::default().capacity(percentage, container_width, item_width, no_padding)
}

/// [`GridMetrics::grid_width_px`] with the default metrics.
pub fn grid_width_px(columns: usize, item_width: f64) -> String {
    GridMetrics::default().grid_width_px(columns, item_width)
}

/// Column count for the zoom overlay, which is always centered on an odd
/// number of columns.
pub fn overlay_columns(capacity: usize) -> usize {
    if capacity >= 2 && capacity % 2 == 0 {
        capacity - 1
    } else {
        capacity
    }
}
