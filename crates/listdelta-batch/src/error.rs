//! Error types for range application.

use thiserror::Error;

/// Errors produced when applying coalesced ranges to a list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BatchError {
    /// A remove range reached past the end of the list.
    #[error("remove range at {index} (count {count}) out of range for list of length {len}")]
    RemoveOutOfRange {
        index: usize,
        count: usize,
        len: usize,
    },

    /// An add range pointed past the end of the list.
    #[error("add range at {index} out of range for list of length {len}")]
    AddOutOfRange { index: usize, len: usize },
}

/// Convenience alias for batch results.
pub type BatchResult<T> = Result<T, BatchError>;
