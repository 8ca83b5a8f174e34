//! Errors surfaced by [`Tree`][crate::tree::Tree] operations.

use std::io;

use thiserror::Error;

/// Failures that a [`Tree`][crate::tree::Tree] reports to its caller. Absent keys and
/// duplicate inserts aren't errors: they come back as `None`/`false`.
#[derive(Error, Debug)]
pub enum TreeError {
    /// Asked for the minimum or maximum of a tree with no keys.
    #[error("tree is empty")]
    Empty,

    /// The sink handed to a traversal refused a write.
    #[error("failed to write traversal output")]
    Write(#[from] io::Error),
}

/// Shorthand for results carrying a [`TreeError`].
pub type Result<T, E = TreeError> = std::result::Result<T, E>;
