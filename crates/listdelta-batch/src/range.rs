//! Coalesced index range types.
//!
//! Ranges use a split index scheme: remove ranges index the original,
//! unmutated source sequence, add ranges index the final destination
//! sequence. Applied removes-first in descending index order, then adds in
//! ascending index order, neither list needs incremental index correction.

use serde::{Deserialize, Serialize};

/// A contiguous run of removed elements.
///
/// `index` addresses the first removed element in the original source
/// sequence; the whole `count` run is contiguous there.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RemoveRange {
    /// Position of the first removed element in the original source.
    pub index: usize,
    /// Number of elements removed.
    pub count: usize,
}

/// A contiguous run of inserted elements.
///
/// `index` addresses the first inserted element in the final destination
/// sequence.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddRange<D> {
    /// Position of the first inserted element in the final destination.
    pub index: usize,
    /// The inserted elements, in destination order.
    pub items: Vec<D>,
}

/// The coalesced form of a diff: batched removes and adds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffRanges<D> {
    /// Remove ranges in ascending index order.
    pub removes: Vec<RemoveRange>,
    /// Add ranges in ascending index order.
    pub adds: Vec<AddRange<D>>,
}

impl<D> DiffRanges<D> {
    /// Returns `true` if there is nothing to remove or add.
    pub fn is_empty(&self) -> bool {
        self.removes.is_empty() && self.adds.is_empty()
    }

    /// Total number of elements removed across all ranges.
    pub fn removed_items(&self) -> usize {
        self.removes.iter().map(|r| r.count).sum()
    }

    /// Total number of elements inserted across all ranges.
    pub fn added_items(&self) -> usize {
        self.adds.iter().map(|a| a.items.len()).sum()
    }
}
