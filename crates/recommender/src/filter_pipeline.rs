//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::traits::ShowFilter;
use catalog::TvShow;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(GenreFilter::new("Drama"))
///     .add_filter(MinimumRatingFilter::new(8.0));
///
/// let matches = pipeline.apply(shows);
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn ShowFilter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl ShowFilter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Apply all filters in sequence to the shows.
    ///
    /// Each stage receives the previous stage's survivors; input order is
    /// preserved throughout. Per-stage input/output counts are logged at
    /// debug level.
    pub fn apply(&self, shows: Vec<TvShow>) -> Vec<TvShow> {
        let mut current = shows;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
