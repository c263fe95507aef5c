//! Core trait for the recommendation filter pipeline.
//!
//! This module defines the ShowFilter trait that allows composable,
//! extensible filters to be applied to the show collection.

use catalog::TvShow;

/// A single filtering stage over a set of shows.
///
/// All filters must implement this trait to be used in the FilterPipeline.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the `Vec<TvShow>` and return the surviving
///   subset in the same order, which avoids re-cloning between stages
/// - Filters are pure predicates over the records they receive, so applying
///   one cannot fail
pub trait ShowFilter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter, keeping only the matching shows.
    fn apply(&self, shows: Vec<TvShow>) -> Vec<TvShow>;
}
