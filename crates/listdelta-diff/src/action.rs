//! The edit action model.
//!
//! A diff is an ordered list of [`DiffAction`]s. Replayed left to right
//! against the source sequence (Add inserts, Remove deletes, Update keeps
//! the element in place), the actions reconstruct the destination exactly,
//! preserving destination order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a [`DiffAction`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActionKind {
    /// Update the source item to make it like the destination item.
    Update,
    /// Add the destination item.
    Add,
    /// Remove the source item.
    Remove,
}

/// A single edit action over possibly different element types.
///
/// `S` is the source element type, `D` the destination element type.
/// Update and Add each produce one element of the merged output in
/// destination order; Remove produces none.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DiffAction<S, D> {
    /// The source item matches the destination item; keep it.
    Update { source: S, destination: D },
    /// Insert the destination item.
    Add { destination: D },
    /// Delete the source item.
    Remove { source: S },
}

impl<S, D> DiffAction<S, D> {
    /// The payload-free kind of this action.
    pub fn kind(&self) -> ActionKind {
        match self {
            DiffAction::Update { .. } => ActionKind::Update,
            DiffAction::Add { .. } => ActionKind::Add,
            DiffAction::Remove { .. } => ActionKind::Remove,
        }
    }
}

impl<S: fmt::Display, D: fmt::Display> fmt::Display for DiffAction<S, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DiffAction::Update { source, .. } => write!(f, "{source}"),
            DiffAction::Add { destination } => write!(f, "+({destination})"),
            DiffAction::Remove { source } => write!(f, "-({source})"),
        }
    }
}

/// The actions needed to transform a source list into a destination list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListDiff<S, D> {
    /// The ordered edit actions.
    pub actions: Vec<DiffAction<S, D>>,
    /// `true` if the actions are all Updates (no Adds or Removes), meaning
    /// the sequences were already aligned one to one under the match
    /// predicate.
    pub contains_only_updates: bool,
}

impl<S, D> ListDiff<S, D> {
    /// Number of actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Returns `true` if there are no actions.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Number of Update actions.
    pub fn updates(&self) -> usize {
        self.count(ActionKind::Update)
    }

    /// Number of Add actions.
    pub fn additions(&self) -> usize {
        self.count(ActionKind::Add)
    }

    /// Number of Remove actions.
    pub fn removals(&self) -> usize {
        self.count(ActionKind::Remove)
    }

    fn count(&self, kind: ActionKind) -> usize {
        self.actions.iter().filter(|a| a.kind() == kind).count()
    }
}

impl<S: fmt::Display, D: fmt::Display> fmt::Display for ListDiff<S, D> {
    /// Renders each action in list order: Update as the source item, Add as
    /// `+(item)`, Remove as `-(item)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for action in &self.actions {
            write!(f, "{action}")?;
        }
        Ok(())
    }
}
