//! LCS diff engine for ListDelta.
//!
//! Computes the minimal edit sequence (updates, insertions, removals) that
//! transforms an ordered source sequence into an ordered destination
//! sequence, using a longest-common-subsequence strategy. Elements are
//! opaque; source and destination may have different types and are compared
//! only through a caller-supplied match predicate.
//!
//! # Key Types
//!
//! - [`ListDiff`] / [`DiffAction`] -- The ordered edit action list
//! - [`ActionKind`] -- Payload-free action discriminant
//! - [`diff`] / [`diff_with`] / [`diff_map`] -- Entry points

pub mod action;
pub mod engine;

pub use action::{ActionKind, DiffAction, ListDiff};
pub use engine::{diff, diff_map, diff_with};
