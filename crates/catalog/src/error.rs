//! Error types for the catalog crate.

use thiserror::Error;

/// Errors raised while constructing records or loading source files.
///
/// Construction errors surface immediately to the caller; once a [`TvShow`]
/// exists its invariants hold, so nothing downstream re-raises them.
/// Row-level parse failures never appear here at all: the loaders skip bad
/// rows instead of propagating them.
///
/// [`TvShow`]: crate::show::TvShow
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Rating outside the closed [0, 10] interval
    #[error("rating must be between 0 and 10, got {value}")]
    RatingOutOfRange { value: f64 },

    /// Episode count below zero
    #[error("episode count cannot be negative, got {value}")]
    NegativeEpisodeCount { value: i64 },

    /// Title empty after trimming
    #[error("title must not be empty")]
    EmptyTitle,

    /// Source file could not be found
    #[error("source file not found: {path}")]
    FileNotFound { path: String },

    /// I/O error while reading a source file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
