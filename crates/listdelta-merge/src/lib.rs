//! Merge applier for ListDelta.
//!
//! Replays a diff against a live list, mutating it in place until its
//! content and order equal the destination. Matched elements are retained
//! rather than replaced, so any out-of-band state attached to them survives
//! the merge.
//!
//! The caller must have exclusive access to the list for the duration of the
//! call; the exclusive borrow enforces that.

use tracing::debug;

use listdelta_diff::{diff_with, DiffAction, ListDiff};

/// Merge `destination` into `list` in place.
///
/// Computes the diff under `matches` and replays it with a single forward
/// cursor: Add inserts a clone of the destination item at the cursor, Remove
/// deletes the element under the cursor, Update leaves it where it is and
/// advances. Returns the diff that was applied.
pub fn merge_into<T, M>(
    list: &mut Vec<T>,
    destination: impl IntoIterator<Item = T>,
    matches: M,
) -> ListDiff<T, T>
where
    T: Clone,
    M: FnMut(&T, &T) -> bool,
{
    merge_into_with(list, destination, matches, |d| d.clone(), |_, _| {}, |_| {})
}

/// Merge `destination` into `list` in place, with element lifecycle hooks.
///
/// `create` builds a list element for each inserted destination item,
/// `update` runs on each retained element with its matched destination item,
/// and `delete` runs on each element just before it is removed. Use
/// [`merge_into`] when source and destination share a type and no hooks are
/// needed.
pub fn merge_into_with<S, D, M, C, U, X>(
    list: &mut Vec<S>,
    destination: impl IntoIterator<Item = D>,
    matches: M,
    mut create: C,
    mut update: U,
    mut delete: X,
) -> ListDiff<S, D>
where
    S: Clone,
    D: Clone,
    M: FnMut(&S, &D) -> bool,
    C: FnMut(&D) -> S,
    U: FnMut(&mut S, &D),
    X: FnMut(&S),
{
    let diff = diff_with(list.iter().cloned(), destination, matches);

    let mut cursor = 0;
    for action in &diff.actions {
        match action {
            DiffAction::Add { destination } => {
                list.insert(cursor, create(destination));
                cursor += 1;
            }
            DiffAction::Remove { .. } => {
                delete(&list[cursor]);
                list.remove(cursor);
            }
            DiffAction::Update { destination, .. } => {
                update(&mut list[cursor], destination);
                cursor += 1;
            }
        }
    }

    debug!(
        updates = diff.updates(),
        additions = diff.additions(),
        removals = diff.removals(),
        "merged destination into list"
    );

    diff
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn merge_makes_list_equal_destination() {
        let mut list = vec![1, 2, 3, 4];
        let destination = vec![2, 3, 5];

        let diff = merge_into(&mut list, destination.iter().copied(), |s, d| s == d);

        assert_eq!(list, destination);
        assert!(!diff.contains_only_updates);
        assert_eq!(diff.updates(), 2);
        assert_eq!(diff.removals(), 2);
        assert_eq!(diff.additions(), 1);
    }

    #[test]
    fn merge_into_empty_list_builds_destination() {
        let mut list: Vec<u32> = Vec::new();
        merge_into(&mut list, [1, 2, 3], |s, d| s == d);
        assert_eq!(list, vec![1, 2, 3]);
    }

    #[test]
    fn merge_empty_destination_clears_list() {
        let mut list = vec![1, 2, 3];
        let diff = merge_into(&mut list, std::iter::empty(), |s, d| s == d);
        assert!(list.is_empty());
        assert_eq!(diff.removals(), 3);
    }

    #[test]
    fn identical_lists_are_untouched() {
        let mut list = vec![1, 2, 3];
        let diff = merge_into(&mut list, [1, 2, 3], |s, d| s == d);
        assert_eq!(list, vec![1, 2, 3]);
        assert!(diff.contains_only_updates);
    }

    #[test]
    fn retained_elements_keep_identity() {
        let first = Rc::new("a".to_string());
        let second = Rc::new("b".to_string());
        let mut list = vec![first.clone(), second.clone()];
        let destination = vec![Rc::new("b".to_string()), Rc::new("c".to_string())];

        merge_into(&mut list, destination.iter().cloned(), |s, d| {
            s.as_str() == d.as_str()
        });

        assert_eq!(list.len(), 2);
        assert!(
            Rc::ptr_eq(&list[0], &second),
            "matched element must be retained, not replaced"
        );
        assert!(Rc::ptr_eq(&list[1], &destination[1]));
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    struct Widget {
        id: u32,
        hits: u32,
    }

    #[test]
    fn hooks_drive_heterogeneous_merge() {
        let mut list = vec![
            Widget { id: 1, hits: 7 },
            Widget { id: 2, hits: 9 },
            Widget { id: 3, hits: 0 },
        ];
        let destination: Vec<u32> = vec![2, 3, 4];

        let mut deleted = Vec::new();
        let diff = merge_into_with(
            &mut list,
            destination.iter().copied(),
            |w, id| w.id == *id,
            |id| Widget { id: *id, hits: 0 },
            |w, _| w.hits += 1,
            |w| deleted.push(w.id),
        );

        assert_eq!(
            list,
            vec![
                Widget { id: 2, hits: 10 },
                Widget { id: 3, hits: 1 },
                Widget { id: 4, hits: 0 },
            ]
        );
        assert_eq!(deleted, vec![1]);
        assert_eq!(diff.updates(), 2);
        assert_eq!(diff.additions(), 1);
        assert_eq!(diff.removals(), 1);
    }

    #[test]
    fn update_hook_sees_destination_item() {
        let mut list = vec![(1u32, String::new()), (2, String::new())];
        let destination = vec![(1u32, "one".to_string()), (2, "two".to_string())];

        let diff = merge_into_with(
            &mut list,
            destination.iter().cloned(),
            |s, d| s.0 == d.0,
            |d| d.clone(),
            |s, d| s.1 = d.1.clone(),
            |_| {},
        );

        assert_eq!(list, destination);
        assert!(diff.contains_only_updates);
    }
}
