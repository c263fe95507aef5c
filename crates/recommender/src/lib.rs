//! # Recommender Crate
//!
//! Query engine over the TV show catalog.
//!
//! This crate provides:
//! - ShowRecommender, the owner of the show collection and all of its
//!   filter, search, ranking, and statistics operations
//! - ShowFilter trait and implementations for composable filtering
//! - FilterPipeline for chaining filters
//!
//! ## Architecture
//! Recommendations run in stages:
//! 1. The caller's criteria become a FilterPipeline (absent criteria add no
//!    stage)
//! 2. The pipeline narrows the collection one constraint at a time
//! 3. Survivors are stable-sorted by rating, best first, and cut to the
//!    requested limit
//!
//! ## Example Usage
//! ```
//! use catalog::TvShow;
//! use recommender::{RecommendCriteria, ShowRecommender};
//!
//! let mut recommender = ShowRecommender::new();
//! recommender.add(TvShow::new("Dark", "Sci-Fi, Drama", 26, 8.8, "de", Some(2017))?)?;
//!
//! let criteria = RecommendCriteria::new().with_genre("Sci-Fi").with_limit(5);
//! let recs = recommender.recommend(&criteria);
//! assert_eq!(recs[0].title, "Dark");
//! # Ok::<(), catalog::CatalogError>(())
//! ```

pub mod engine;
pub mod filter_pipeline;
pub mod filters;
pub mod traits;

// Re-export main types
pub use engine::{CatalogStats, DEFAULT_LIMIT, RecommendCriteria, ShowRecommender};
pub use filter_pipeline::FilterPipeline;
pub use traits::ShowFilter;
