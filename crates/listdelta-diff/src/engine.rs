//! The LCS diff engine.
//!
//! Builds a longest-common-subsequence length table over the two sequences
//! and backtracks it into an ordered action list. Shared prefixes and
//! suffixes are trimmed before the table is built, so the O(m*n) table work
//! is restricted to the region that actually changed.
//!
//! # Invariants
//!
//! - Replaying the actions left to right against the source (Add inserts,
//!   Remove deletes, Update keeps) reconstructs the destination exactly.
//! - When an Add and a Remove contribute equally to the LCS length, the Add
//!   side of the table wins. The choice is deterministic and keeps same-gap
//!   runs of Adds and Removes contiguous in the action list, which is what
//!   range coalescing relies on.
//! - Backtracking is an explicit work-stack walk, never recursion, so stack
//!   use stays flat no matter how long the sequences are.

use tracing::debug;

use crate::action::{DiffAction, ListDiff};

/// Diff two sequences of the same element type, matching by structural
/// equality.
pub fn diff<T>(
    source: impl IntoIterator<Item = T>,
    destination: impl IntoIterator<Item = T>,
) -> ListDiff<T, T>
where
    T: Clone + PartialEq,
{
    diff_with(source, destination, |s, d| s == d)
}

/// Diff two sequences with a caller-supplied match predicate.
///
/// The predicate decides whether a source element "is" a destination
/// element. It is evaluated pairwise only and need not be an equivalence
/// relation; multiple source elements may match one destination element and
/// vice versa.
pub fn diff_with<S, D, M>(
    source: impl IntoIterator<Item = S>,
    destination: impl IntoIterator<Item = D>,
    matches: M,
) -> ListDiff<S, D>
where
    S: Clone,
    D: Clone,
    M: FnMut(&S, &D) -> bool,
{
    let (actions, contains_only_updates) = diff_map(
        source,
        destination,
        matches,
        |s, d| DiffAction::Update {
            source: s.clone(),
            destination: d.clone(),
        },
        |d| DiffAction::Add {
            destination: d.clone(),
        },
        |s| DiffAction::Remove { source: s.clone() },
    );

    ListDiff {
        actions,
        contains_only_updates,
    }
}

/// One step of the backtracking walk. Emit steps are pushed beneath their
/// descend step so actions surface in application order without recursion.
enum Walk {
    Descend(usize, usize),
    EmitUpdate(usize, usize),
    EmitAdd(usize),
    EmitRemove(usize),
}

/// Diff two sequences, mapping each edit directly into a caller-chosen
/// result value.
///
/// This is the engine core: [`diff`] and [`diff_with`] delegate here with
/// mappers that build [`DiffAction`]s. The mappers receive references, so no
/// `Clone` bound is imposed; callers that want lighter results (indices,
/// summary tokens) can build them without copying elements.
///
/// Returns the ordered results together with the contains-only-updates flag,
/// which is `true` iff no Add or Remove was emitted.
pub fn diff_map<S, D, R, M, FU, FA, FR>(
    source: impl IntoIterator<Item = S>,
    destination: impl IntoIterator<Item = D>,
    mut matches: M,
    mut on_update: FU,
    mut on_add: FA,
    mut on_remove: FR,
) -> (Vec<R>, bool)
where
    M: FnMut(&S, &D) -> bool,
    FU: FnMut(&S, &D) -> R,
    FA: FnMut(&D) -> R,
    FR: FnMut(&S) -> R,
{
    // Random access is required throughout; materialize up front.
    let x: Vec<S> = source.into_iter().collect();
    let y: Vec<D> = destination.into_iter().collect();

    let mut m = x.len();
    let mut n = y.len();
    let mut start = 0;

    // Trim the common prefix and suffix so the table only covers the middle.
    while start < m && start < n && matches(&x[start], &y[start]) {
        start += 1;
    }
    while start < m && start < n && matches(&x[m - 1], &y[n - 1]) {
        m -= 1;
        n -= 1;
    }

    debug!(
        prefix = start,
        suffix = x.len() - m,
        source_middle = m - start,
        destination_middle = n - start,
        "trimmed common affixes"
    );

    let table = LcsTable::build(&x, &y, start, m, n, &mut matches);

    let mut actions = Vec::new();
    for i in 0..start {
        actions.push(on_update(&x[i], &y[i]));
    }

    let mut only_updates = true;
    let mut walk = vec![Walk::Descend(m, n)];
    while let Some(step) = walk.pop() {
        match step {
            Walk::Descend(i, j) => {
                if i > start && j > start && matches(&x[i - 1], &y[j - 1]) {
                    walk.push(Walk::EmitUpdate(i, j));
                    walk.push(Walk::Descend(i - 1, j - 1));
                } else if j > start
                    && (i == start
                        || table.get(i - start, j - start - 1)
                            >= table.get(i - start - 1, j - start))
                {
                    walk.push(Walk::EmitAdd(j));
                    walk.push(Walk::Descend(i, j - 1));
                } else if i > start
                    && (j == start
                        || table.get(i - start, j - start - 1)
                            < table.get(i - start - 1, j - start))
                {
                    walk.push(Walk::EmitRemove(i));
                    walk.push(Walk::Descend(i - 1, j));
                }
            }
            Walk::EmitUpdate(i, j) => actions.push(on_update(&x[i - 1], &y[j - 1])),
            Walk::EmitAdd(j) => {
                only_updates = false;
                actions.push(on_add(&y[j - 1]));
            }
            Walk::EmitRemove(i) => {
                only_updates = false;
                actions.push(on_remove(&x[i - 1]));
            }
        }
    }

    for i in 0..(x.len() - m) {
        actions.push(on_update(&x[m + i], &y[n + i]));
    }

    (actions, only_updates)
}

/// The LCS length table over the untrimmed middle region, stored row-major.
///
/// `get(i, j)` is the LCS length of `x[start..start + i]` and
/// `y[start..start + j]`; row 0 and column 0 are zero.
struct LcsTable {
    cols: usize,
    cells: Vec<usize>,
}

impl LcsTable {
    fn build<S, D>(
        x: &[S],
        y: &[D],
        start: usize,
        m: usize,
        n: usize,
        matches: &mut impl FnMut(&S, &D) -> bool,
    ) -> Self {
        let rows = m - start + 1;
        let cols = n - start + 1;
        let mut table = LcsTable {
            cols,
            cells: vec![0; rows * cols],
        };

        for i in 1..rows {
            for j in 1..cols {
                let cell = if matches(&x[start + i - 1], &y[start + j - 1]) {
                    table.get(i - 1, j - 1) + 1
                } else {
                    table.get(i, j - 1).max(table.get(i - 1, j))
                };
                table.cells[i * cols + j] = cell;
            }
        }

        table
    }

    fn get(&self, i: usize, j: usize) -> usize {
        self.cells[i * self.cols + j]
    }
}
