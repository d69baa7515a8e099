//! Error types for building the repository tree.
//!
//! Navigation itself is infallible: stale indices and out-of-range moves
//! degrade to "nothing happens". Only turning a listing into a tree can fail.

use thiserror::Error;

/// Errors raised while parsing a listing or building a [`RepoTree`].
///
/// [`RepoTree`]: super::RepoTree
#[derive(Debug, Error)]
pub enum TreeError {
    /// Path is empty or contains empty segments (`a//b`)
    #[error("invalid path: {0:?}")]
    InvalidPath(String),

    /// The same path was listed twice
    #[error("duplicate path: {0}")]
    DuplicatePath(String),

    /// A file was used as the parent of another entry
    #[error("not a directory: {0}")]
    NotADirectory(String),

    /// A text listing line did not match `<mode> <type> <object>\t<file>`
    #[error("malformed ls-tree line: {0:?}")]
    InvalidLine(String),

    /// JSON listing could not be decoded
    #[error("invalid listing JSON: {0}")]
    Json(#[from] serde_json::Error),
}
