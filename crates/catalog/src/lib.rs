//! # Catalog Crate
//!
//! Record type and source loaders for the TV show catalog.
//!
//! ## Main Components
//!
//! - **show**: the validated [`TvShow`] record and its matching helpers
//! - **parser**: defensive CSV loaders producing `TvShow` sequences
//! - **error**: error types shared across the workspace
//!
//! ## Example Usage
//!
//! ```
//! use catalog::TvShow;
//!
//! let show = TvShow::new("Dark", "Sci-Fi, Drama", 26, 8.8, "de", Some(2017))?;
//! assert!(show.matches_genre("sci"));
//! assert!(show.is_highly_rated());
//! # Ok::<(), catalog::CatalogError>(())
//! ```
//!
//! Loading a dataset goes through the parser module:
//!
//! ```ignore
//! use catalog::load_shows_from_tmdb_csv;
//! use std::path::Path;
//!
//! let outcome = load_shows_from_tmdb_csv(Path::new("TMDB_tv_dataset_v3.csv"), Some(1000))?;
//! println!("loaded {}, skipped {}", outcome.shows.len(), outcome.skipped_rows);
//! ```

// Public modules
pub mod error;
pub mod parser;
pub mod show;

// Re-export commonly used types for convenience
pub use error::{CatalogError, Result};
pub use parser::{LoadOutcome, load_shows_from_csv, load_shows_from_tmdb_csv};
pub use show::{GenreInput, HIGHLY_RATED_THRESHOLD, TvShow};
