//! Filter matching shows against a genre tag.

use crate::traits::ShowFilter;
use catalog::TvShow;

/// Keeps shows with a genre tag containing the target, case-insensitively.
///
/// Matching is substring-based, so "Sci" keeps shows tagged "Sci-Fi". A
/// blank target keeps nothing rather than passing everything through.
pub struct GenreFilter {
    genre: String,
}

impl GenreFilter {
    pub fn new(genre: impl Into<String>) -> Self {
        Self {
            genre: genre.into(),
        }
    }
}

impl ShowFilter for GenreFilter {
    fn name(&self) -> &str {
        "GenreFilter"
    }

    fn apply(&self, shows: Vec<TvShow>) -> Vec<TvShow> {
        shows
            .into_iter()
            .filter(|show| show.matches_genre(&self.genre))
            .collect()
    }
}
