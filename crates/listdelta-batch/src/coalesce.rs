//! Single-pass grouping of adjacent actions into ranges.
//!
//! The diff engine's tie-break keeps same-gap runs of Adds and Removes
//! contiguous in the action list, so one forward scan suffices: consecutive
//! Removes extend the open remove range, consecutive Adds extend the open
//! add range, and an Update closes both.

use listdelta_diff::{DiffAction, ListDiff};

use crate::range::{AddRange, DiffRanges, RemoveRange};

/// Group the adjacent Add and Remove runs of an action list into ranges.
///
/// The scan tracks a source cursor (advanced by Remove and Update, since
/// both consume one original-source element) and a destination cursor
/// (advanced by Add and Update, since both consume one destination
/// element). Remove ranges are opened at the source cursor, add ranges at
/// the destination cursor.
pub fn coalesce<S, D: Clone>(actions: &[DiffAction<S, D>]) -> DiffRanges<D> {
    let mut ranges = DiffRanges {
        removes: Vec::new(),
        adds: Vec::new(),
    };

    let mut source_index = 0;
    let mut destination_index = 0;
    let mut open_remove: Option<RemoveRange> = None;
    let mut open_add: Option<AddRange<D>> = None;

    for action in actions {
        match action {
            DiffAction::Remove { .. } => {
                if let Some(open) = open_add.take() {
                    ranges.adds.push(open);
                }
                open_remove = Some(match open_remove.take() {
                    Some(mut open) => {
                        open.count += 1;
                        open
                    }
                    None => RemoveRange {
                        index: source_index,
                        count: 1,
                    },
                });
                source_index += 1;
            }
            DiffAction::Add { destination } => {
                if let Some(open) = open_remove.take() {
                    ranges.removes.push(open);
                }
                open_add = Some(match open_add.take() {
                    Some(mut open) => {
                        open.items.push(destination.clone());
                        open
                    }
                    None => AddRange {
                        index: destination_index,
                        items: vec![destination.clone()],
                    },
                });
                destination_index += 1;
            }
            DiffAction::Update { .. } => {
                // Ranges never straddle an Update.
                if let Some(open) = open_remove.take() {
                    ranges.removes.push(open);
                }
                if let Some(open) = open_add.take() {
                    ranges.adds.push(open);
                }
                source_index += 1;
                destination_index += 1;
            }
        }
    }

    if let Some(open) = open_remove.take() {
        ranges.removes.push(open);
    }
    if let Some(open) = open_add.take() {
        ranges.adds.push(open);
    }

    ranges
}

/// Coalesce a whole diff into batched ranges.
///
/// The batched counterpart of [`coalesce`]; both perform the same grouping.
pub fn batch_ranges<S, D: Clone>(diff: &ListDiff<S, D>) -> DiffRanges<D> {
    coalesce(&diff.actions)
}
