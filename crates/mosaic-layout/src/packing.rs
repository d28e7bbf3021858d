//! # Featured-Aware Packing
//!
//! Decides the order in which catalog tiles are laid into rows of a fixed
//! slot count.
//!
//! ## Overview
//!
//! A normal tile takes one slot and a featured tile takes two. One of two
//! strategies is chosen per run:
//!
//! - [`Strategy::KeepOrder`] yields entries in input order. It is used when
//!   the row width is even, or when there are no featured tiles, only
//!   featured tiles, or so few that `2 * featured < items_per_row`.
//! - [`Strategy::BestFit`] is used for odd row widths with a non-trivial
//!   share of featured tiles. For every output position it scans forward
//!   from the earliest unplaced entry and takes the first one that fits the
//!   open row. Entries that did not fit are reconsidered in later rows.
//!
//! Under best fit, a featured tile is two rows tall, so normal tiles that
//! share a row with it stack two per slot and cost half a slot each. Fill is
//! tracked in [`Units`] (half slots) so no rounding is involved.
//!
//! When nothing left fits the open row, the row is closed early and the scan
//! resumes on a fresh one. This only happens once every remaining entry is
//! featured, and it guarantees progress as long as rows have two slots.
//!
//! ## Usage
//!
//! ```
//! use mosaic_layout::{pack, Entry};
//!
//! let entries = vec![Entry::normal("a"), Entry::featured("b"), Entry::normal("c")];
//! let ids: Vec<&str> = pack(&entries, 4)
//!     .unwrap()
//!     .map(|entry| entry.id.as_str())
//!     .collect();
//! assert_eq!(ids, ["a", "b", "c"]);
//! ```

use std::fmt;
use std::iter::FusedIterator;
use std::ops::{Add, AddAssign, Sub};

use tracing::{debug, trace, warn};

use crate::{LayoutError, Tile};

// ==================== Units ====================

/// Row capacity counted in half slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Units(usize);

impl Units {
    pub const ZERO: Units = Units(0);
    /// A normal tile next to a featured one.
    pub const HALF: Units = Units(1);
    /// A normal tile.
    pub const ONE: Units = Units(2);
    /// A featured tile.
    pub const FEATURED: Units = Units(4);

    /// `slots` whole slots.
    pub fn slots(slots: usize) -> Self {
        Units(slots.saturating_mul(2))
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 2.0
    }
}

impl Add for Units {
    type Output = Units;

    fn add(self, rhs: Units) -> Units {
        Units(self.0 + rhs.0)
    }
}

impl AddAssign for Units {
    fn add_assign(&mut self, rhs: Units) {
        self.0 += rhs.0;
    }
}

impl Sub for Units {
    type Output = Units;

    fn sub(self, rhs: Units) -> Units {
        Units(self.0.saturating_sub(rhs.0))
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 % 2 == 0 {
            write!(f, "{}", self.0 / 2)
        } else {
            write!(f, "{}.5", self.0 / 2)
        }
    }
}

// ==================== Strategy ====================

/// How a packing run orders its entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Yield entries in input order.
    KeepOrder,
    /// Search for the first entry that fits the open row.
    BestFit,
}

impl Strategy {
    /// Pick the strategy for one run.
    pub fn select<T: Tile>(entries: &[T], items_per_row: usize) -> Self {
        let featured = entries.iter().filter(|entry| entry.is_featured()).count();

        let keep_order = items_per_row % 2 == 0
            || featured * 2 < items_per_row
            || featured == entries.len()
            || featured == 0;

        if keep_order {
            Strategy::KeepOrder
        } else {
            Strategy::BestFit
        }
    }
}

// ==================== Rows ====================

/// One placed entry.
#[derive(Debug)]
pub struct Slot<'a, T> {
    pub entry: &'a T,
    /// Zero-based row the entry landed in.
    pub row: usize,
    /// Capacity the entry consumed in its row.
    pub cost: Units,
}

/// A packed row, as produced by [`PackedTiles::rows`].
#[derive(Debug)]
pub struct PackedRow<'a, T> {
    pub index: usize,
    pub entries: Vec<&'a T>,
    /// Sum of the entries' costs.
    pub filled: Units,
    capacity: Units,
}

impl<T> PackedRow<'_, T> {
    /// Whether the row uses every slot.
    pub fn is_full(&self) -> bool {
        self.filled == self.capacity
    }

    /// Capacity of the row.
    pub fn capacity(&self) -> Units {
        self.capacity
    }

    /// Unused capacity.
    pub fn remaining(&self) -> Units {
        self.capacity - self.filled
    }
}

/// Accumulator for the row currently being filled.
#[derive(Debug, Default, Clone, Copy)]
struct OpenRow {
    index: usize,
    filled: Units,
    has_featured: bool,
}

impl OpenRow {
    fn is_empty(&self) -> bool {
        self.filled == Units::ZERO
    }

    /// Close the row if anything is in it.
    fn close(&mut self) {
        if !self.is_empty() {
            self.index += 1;
            self.filled = Units::ZERO;
            self.has_featured = false;
        }
    }

    /// Cost of an entry in input-order mode, if it fits.
    fn keep_order_cost(&self, featured: bool, capacity: Units) -> Option<Units> {
        let cost = if featured { Units::FEATURED } else { Units::ONE };
        (capacity - self.filled >= cost).then_some(cost)
    }

    /// Cost of an entry in best-fit mode, if it fits.
    fn best_fit_cost(&self, featured: bool, capacity: Units) -> Option<Units> {
        let cost = match (featured, self.has_featured) {
            (true, _) => Units::FEATURED,
            (false, true) => Units::HALF,
            (false, false) => Units::ONE,
        };
        (capacity - self.filled >= cost).then_some(cost)
    }

    fn place<'a, T>(
        &mut self,
        entry: &'a T,
        featured: bool,
        cost: Units,
        capacity: Units,
    ) -> Slot<'a, T> {
        let slot = Slot {
            entry,
            row: self.index,
            cost,
        };

        self.filled += cost;
        self.has_featured |= featured;
        if self.filled >= capacity {
            self.close();
        }

        slot
    }
}

// ==================== Iterator ====================

/// Lazy packing run over a slice of tiles.
///
/// Created by [`pack`]. Each run is independent: to repack after a resize,
/// build a new one from the full entry list.
#[derive(Debug)]
pub struct PackedTiles<'a, T> {
    entries: &'a [T],
    capacity: Units,
    strategy: Strategy,
    /// Best fit only: which entries have been yielded.
    placed: Vec<bool>,
    placed_count: usize,
    /// Earliest entry not yet placed. Every scan starts here.
    resume: usize,
    row: OpenRow,
}

impl<'a, T: Tile> PackedTiles<'a, T> {
    /// Start a packing run.
    ///
    /// An empty entry list is always accepted. Otherwise `items_per_row`
    /// must be at least 1, and at least 2 when any entry is featured.
    pub fn new(entries: &'a [T], items_per_row: usize) -> Result<Self, LayoutError> {
        if !entries.is_empty() {
            if items_per_row == 0 {
                return Err(LayoutError::NoCapacity);
            }
            if items_per_row < 2 && entries.iter().any(|entry| entry.is_featured()) {
                return Err(LayoutError::FeaturedTooWide { items_per_row });
            }
        }

        let strategy = Strategy::select(entries, items_per_row);
        debug!(
            entries = entries.len(),
            items_per_row,
            ?strategy,
            "Packing run"
        );

        let placed = match strategy {
            Strategy::KeepOrder => Vec::new(),
            Strategy::BestFit => vec![false; entries.len()],
        };

        Ok(Self {
            entries,
            capacity: Units::slots(items_per_row),
            strategy,
            placed,
            placed_count: 0,
            resume: 0,
            row: OpenRow::default(),
        })
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Whether every entry has been yielded.
    pub fn is_complete(&self) -> bool {
        self.placed_count == self.entries.len()
    }

    /// Place the next entry and report where it went.
    pub fn next_slot(&mut self) -> Option<Slot<'a, T>> {
        if self.is_complete() {
            return None;
        }

        match self.strategy {
            Strategy::KeepOrder => Some(self.next_in_order()),
            Strategy::BestFit => self.next_best_fit(),
        }
    }

    /// Drain the run into rows.
    pub fn rows(mut self) -> Vec<PackedRow<'a, T>> {
        let capacity = self.capacity;
        let mut rows: Vec<PackedRow<'a, T>> = Vec::new();

        while let Some(slot) = self.next_slot() {
            if let Some(row) = rows.last_mut().filter(|row| row.index == slot.row) {
                row.entries.push(slot.entry);
                row.filled += slot.cost;
                continue;
            }

            rows.push(PackedRow {
                index: slot.row,
                entries: vec![slot.entry],
                filled: slot.cost,
                capacity,
            });
        }

        rows
    }

    fn next_in_order(&mut self) -> Slot<'a, T> {
        let entries = self.entries;
        let entry = &entries[self.resume];
        let featured = entry.is_featured();

        let cost = match self.row.keep_order_cost(featured, self.capacity) {
            Some(cost) => cost,
            None => {
                // Wrap, leaving the short row with a hole.
                self.row.close();
                if featured {
                    Units::FEATURED
                } else {
                    Units::ONE
                }
            }
        };

        self.resume += 1;
        self.placed_count += 1;
        self.row.place(entry, featured, cost, self.capacity)
    }

    fn next_best_fit(&mut self) -> Option<Slot<'a, T>> {
        if let Some(slot) = self.scan() {
            return Some(slot);
        }

        // Nothing left fits the open row: start a fresh one.
        trace!(
            row = self.row.index,
            filled = %self.row.filled,
            "No entry fits, breaking row"
        );
        self.row.close();

        let slot = self.scan();
        if slot.is_none() {
            warn!(
                remaining = self.entries.len() - self.placed_count,
                "No entry fits an empty row"
            );
        }
        slot
    }

    fn scan(&mut self) -> Option<Slot<'a, T>> {
        let entries = self.entries;
        for index in self.resume..entries.len() {
            if self.placed[index] {
                continue;
            }

            let entry = &entries[index];
            let featured = entry.is_featured();
            let Some(cost) = self.row.best_fit_cost(featured, self.capacity) else {
                trace!(index, featured, "Deferring entry to a later row");
                continue;
            };

            self.placed[index] = true;
            self.placed_count += 1;
            while self.resume < entries.len() && self.placed[self.resume] {
                self.resume += 1;
            }

            return Some(self.row.place(entry, featured, cost, self.capacity));
        }

        None
    }
}

impl<'a, T: Tile> Iterator for PackedTiles<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_slot().map(|slot| slot.entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.entries.len() - self.placed_count;
        (remaining, Some(remaining))
    }
}

impl<T: Tile> ExactSizeIterator for PackedTiles<'_, T> {}

impl<T: Tile> FusedIterator for PackedTiles<'_, T> {}

/// Start a packing run over `entries` for rows of `items_per_row` slots.
///
/// See [`PackedTiles::new`] for the accepted configurations.
pub fn pack<T: Tile>(
    entries: &[T],
    items_per_row: usize,
) -> Result<PackedTiles<'_, T>, LayoutError> {
    PackedTiles::new(entries, items_per_row)
}
