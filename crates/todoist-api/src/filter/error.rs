//! Error types for filter construction.

use thiserror::Error;

/// A specialized Result type for filter construction.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while building a filter.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// An `and`/`or` group was built with no children.
    #[error("cannot build an empty '{operator}' filter group")]
    EmptyComposite {
        /// The operator of the empty group.
        operator: &'static str,
    },

    /// A priority outside 1-4 was requested.
    #[error("invalid priority: {value} (expected 1-4)")]
    InvalidPriority {
        /// The invalid priority value.
        value: u8,
    },
}
