//! Core domain type for the TV show catalog.
//!
//! This module defines [`TvShow`], the record every other component works
//! with:
//! - Validated construction (rating range, episode count, non-empty title)
//! - Genre normalization from either a delimited string or a list of tags
//! - The matching and comparison helpers used by the query engine

use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Shows rated at or above this threshold count as highly rated.
pub const HIGHLY_RATED_THRESHOLD: f64 = 7.0;

// =============================================================================
// Genre input
// =============================================================================

/// Genre input accepted by [`TvShow::new`].
///
/// Source datasets carry genres either as a single comma-joined string
/// ("Drama, Crime") or as an already-split list. Both normalize to the same
/// stored form at construction time, so nothing past the constructor has to
/// care which shape arrived.
#[derive(Debug, Clone)]
pub enum GenreInput {
    /// A single, possibly comma-delimited, genre string
    Joined(String),
    /// An already-split sequence of genre tags
    List(Vec<String>),
}

impl GenreInput {
    /// Produce the canonical tag list: split (for the joined form), trim each
    /// tag, and drop tags that are empty after trimming. Input order is
    /// preserved; duplicates are kept.
    fn normalize(self) -> Vec<String> {
        match self {
            GenreInput::Joined(joined) => joined
                .split(',')
                .map(str::trim)
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
            GenreInput::List(tags) => tags
                .iter()
                .map(|tag| tag.trim())
                .filter(|tag| !tag.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl From<&str> for GenreInput {
    fn from(joined: &str) -> Self {
        GenreInput::Joined(joined.to_string())
    }
}

impl From<String> for GenreInput {
    fn from(joined: String) -> Self {
        GenreInput::Joined(joined)
    }
}

impl From<Vec<String>> for GenreInput {
    fn from(tags: Vec<String>) -> Self {
        GenreInput::List(tags)
    }
}

impl From<Vec<&str>> for GenreInput {
    fn from(tags: Vec<&str>) -> Self {
        GenreInput::List(tags.into_iter().map(str::to_string).collect())
    }
}

impl From<&[&str]> for GenreInput {
    fn from(tags: &[&str]) -> Self {
        GenreInput::List(tags.iter().map(|tag| tag.to_string()).collect())
    }
}

// =============================================================================
// TvShow
// =============================================================================

/// One show's immutable attribute set.
///
/// Built through [`TvShow::new`], which normalizes the string fields and
/// enforces the rating and episode-count invariants up front, so a value that
/// exists is well-formed.
///
/// Equality is structural on `(title, year)` only: two entries sharing both
/// are the same show even when the other fields differ, which is how remakes
/// and reboots of the same title stay distinguishable by year. Ranking never
/// goes through `==`; sorts use the explicit [`TvShow::cmp_by_rating`]
/// comparator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TvShow {
    pub title: String,
    /// Ordered genre tags; duplicates permitted
    pub genres: Vec<String>,
    pub num_episodes: u64,
    /// Average user rating, always within [0.0, 10.0]
    pub avg_rating: f64,
    /// Language tag, compared case-insensitively
    pub language: String,
    /// First-aired year; `None` when unknown
    pub year: Option<i32>,
}

impl TvShow {
    /// Create a validated show record.
    ///
    /// `title` and `language` are trimmed; `genres` accepts either a
    /// comma-delimited string or a list of tags (see [`GenreInput`]).
    ///
    /// # Errors
    /// * [`CatalogError::RatingOutOfRange`] unless `0 <= avg_rating <= 10`
    /// * [`CatalogError::NegativeEpisodeCount`] if `num_episodes < 0`
    /// * [`CatalogError::EmptyTitle`] if the trimmed title is empty
    pub fn new(
        title: impl Into<String>,
        genres: impl Into<GenreInput>,
        num_episodes: i64,
        avg_rating: f64,
        language: impl Into<String>,
        year: Option<i32>,
    ) -> Result<Self> {
        if !(0.0..=10.0).contains(&avg_rating) {
            return Err(CatalogError::RatingOutOfRange { value: avg_rating });
        }
        if num_episodes < 0 {
            return Err(CatalogError::NegativeEpisodeCount {
                value: num_episodes,
            });
        }
        let title = title.into().trim().to_string();
        if title.is_empty() {
            return Err(CatalogError::EmptyTitle);
        }

        Ok(Self {
            title,
            genres: genres.into().normalize(),
            num_episodes: num_episodes as u64,
            avg_rating,
            language: language.into().trim().to_string(),
            year,
        })
    }

    /// Re-check the construction invariants on an existing value.
    ///
    /// [`TvShow::new`] already guarantees them; this is the admission check
    /// for records assembled through public fields or deserialized from
    /// untrusted data, which never went through the constructor.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=10.0).contains(&self.avg_rating) {
            return Err(CatalogError::RatingOutOfRange {
                value: self.avg_rating,
            });
        }
        if self.title.trim().is_empty() {
            return Err(CatalogError::EmptyTitle);
        }
        Ok(())
    }

    /// Case-insensitive substring match against any genre tag.
    ///
    /// "Sci" matches a show tagged "Sci-Fi". A blank target matches nothing
    /// rather than everything.
    pub fn matches_genre(&self, target: &str) -> bool {
        let target = target.trim().to_lowercase();
        if target.is_empty() {
            return false;
        }
        self.genres
            .iter()
            .any(|tag| tag.to_lowercase().contains(&target))
    }

    /// Case-insensitive match on the whole language tag (not substring).
    pub fn has_language(&self, language: &str) -> bool {
        self.language.to_lowercase() == language.trim().to_lowercase()
    }

    /// Whether the show clears the default quality bar of
    /// [`HIGHLY_RATED_THRESHOLD`].
    pub fn is_highly_rated(&self) -> bool {
        self.is_rated_at_least(HIGHLY_RATED_THRESHOLD)
    }

    /// Whether the show is rated at or above `threshold`.
    pub fn is_rated_at_least(&self, threshold: f64) -> bool {
        self.avg_rating >= threshold
    }

    /// Rating comparator for stable sorts, ascending.
    ///
    /// Kept separate from the equality relation on purpose: `==` identifies
    /// a show by `(title, year)` while ranking depends on the rating alone,
    /// so the two cannot share one `Ord` implementation. Callers must not
    /// use rating order to deduplicate shows.
    pub fn cmp_by_rating(&self, other: &Self) -> Ordering {
        self.avg_rating.total_cmp(&other.avg_rating)
    }
}

impl PartialEq for TvShow {
    /// Two records are the same show when title and year match.
    fn eq(&self, other: &Self) -> bool {
        self.title == other.title && self.year == other.year
    }
}

impl Eq for TvShow {}

impl fmt::Display for TvShow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)?;
        if let Some(year) = self.year {
            write!(f, " ({year})")?;
        }
        writeln!(f)?;
        writeln!(f, "  Genre: {}", self.genres.join(", "))?;
        writeln!(f, "  Episodes: {}", self.num_episodes)?;
        writeln!(f, "  Rating: {}/10", self.avg_rating)?;
        write!(f, "  Language: {}", self.language)
    }
}
