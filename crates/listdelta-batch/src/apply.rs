//! Applying coalesced ranges to a live list.

use crate::error::{BatchError, BatchResult};
use crate::range::DiffRanges;

/// Apply coalesced ranges to a list holding the original source content.
///
/// Removes are applied in descending index order, so earlier removals never
/// shift the indices of later ranges; adds are then applied in ascending
/// index order. On success the list equals the destination the ranges were
/// computed from.
///
/// Fails without touching the remaining ranges if a range does not fit the
/// list, which happens when the ranges were computed from a different
/// sequence than the one passed in.
pub fn apply_ranges<T: Clone>(list: &mut Vec<T>, ranges: &DiffRanges<T>) -> BatchResult<()> {
    for remove in ranges.removes.iter().rev() {
        let end = remove
            .index
            .checked_add(remove.count)
            .filter(|&end| end <= list.len())
            .ok_or(BatchError::RemoveOutOfRange {
                index: remove.index,
                count: remove.count,
                len: list.len(),
            })?;
        list.drain(remove.index..end);
    }

    for add in &ranges.adds {
        if add.index > list.len() {
            return Err(BatchError::AddOutOfRange {
                index: add.index,
                len: list.len(),
            });
        }
        list.splice(add.index..add.index, add.items.iter().cloned());
    }

    Ok(())
}
