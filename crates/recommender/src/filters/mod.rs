//! Filter implementations for the recommendation pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod episode_range;
pub mod genre;
pub mod language;
pub mod min_rating;

// Re-export for convenience
pub use episode_range::EpisodeRangeFilter;
pub use genre::GenreFilter;
pub use language::LanguageFilter;
pub use min_rating::MinimumRatingFilter;
