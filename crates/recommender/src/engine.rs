//! The ShowRecommender: owner of the show collection and every
//! filter/rank/aggregate query against it.
//!
//! The collection starts empty, grows through admission, and is never
//! mutated by queries; each query returns a freshly allocated sequence, so
//! no caller ever holds a view into the internal state.

use crate::filter_pipeline::FilterPipeline;
use crate::filters::{EpisodeRangeFilter, GenreFilter, LanguageFilter, MinimumRatingFilter};
use catalog::{Result, TvShow};
use serde::Serialize;
use std::collections::BTreeSet;

/// Default number of results returned by [`ShowRecommender::recommend`].
pub const DEFAULT_LIMIT: usize = 10;

// =============================================================================
// Criteria & statistics types
// =============================================================================

/// Constraints for [`ShowRecommender::recommend`].
///
/// Every field except `limit` is optional; an absent constraint filters
/// nothing. Built fluently:
///
/// ```
/// use recommender::RecommendCriteria;
///
/// let criteria = RecommendCriteria::new()
///     .with_genre("Drama")
///     .with_min_rating(8.0)
///     .with_limit(5);
/// ```
#[derive(Debug, Clone)]
pub struct RecommendCriteria {
    pub genre: Option<String>,
    pub min_rating: Option<f64>,
    pub min_episodes: Option<u64>,
    pub max_episodes: Option<u64>,
    pub language: Option<String>,
    /// Maximum number of results, applied after ranking
    pub limit: usize,
}

impl Default for RecommendCriteria {
    fn default() -> Self {
        Self {
            genre: None,
            min_rating: None,
            min_episodes: None,
            max_episodes: None,
            language: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl RecommendCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = Some(min_rating);
        self
    }

    pub fn with_min_episodes(mut self, min_episodes: u64) -> Self {
        self.min_episodes = Some(min_episodes);
        self
    }

    pub fn with_max_episodes(mut self, max_episodes: u64) -> Self {
        self.max_episodes = Some(max_episodes);
        self
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Aggregate statistics over the whole collection.
///
/// An empty collection reports zeros across the board; the average rating is
/// 0.0 in that case, never NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogStats {
    pub total_shows: usize,
    pub total_episodes: u64,
    /// Mean rating, rounded to two decimal places
    pub avg_rating: f64,
    /// Number of distinct genre tags
    pub total_genres: usize,
}

// =============================================================================
// ShowRecommender
// =============================================================================

/// Owns the show collection and answers every query against it.
///
/// Shows are kept in insertion order and only ever appended; there is no
/// deletion. Admission re-validates each record, so everything inside the
/// collection is known-good and the queries themselves cannot fail: zero
/// matches is an empty result, not an error.
#[derive(Debug, Default)]
pub struct ShowRecommender {
    shows: Vec<TvShow>,
}

impl ShowRecommender {
    /// Create an empty recommender.
    pub fn new() -> Self {
        Self { shows: Vec::new() }
    }

    // Admission - these take `&mut self` and are the only mutations

    /// Add one show to the collection.
    ///
    /// Re-validates the record's invariants before admitting it: a `TvShow`
    /// assembled through its public fields or deserialized from untrusted
    /// data never went through `TvShow::new`, so the boundary checks again.
    ///
    /// # Errors
    /// The validation error for the violated invariant; the show is not
    /// admitted in that case.
    pub fn add(&mut self, show: TvShow) -> Result<()> {
        show.validate()?;
        self.shows.push(show);
        Ok(())
    }

    /// Add shows in order, stopping at the first invalid one.
    ///
    /// Each element is validated independently: every show before the first
    /// failure stays admitted, the rest of the batch is abandoned, and the
    /// failure is returned to the caller. Returns the number admitted when
    /// the whole batch is valid.
    pub fn add_many(&mut self, shows: impl IntoIterator<Item = TvShow>) -> Result<usize> {
        let mut admitted = 0;
        for show in shows {
            self.add(show)?;
            admitted += 1;
        }
        Ok(admitted)
    }

    // Queries - all pure, all return fresh sequences

    /// Number of shows in the collection.
    pub fn count(&self) -> usize {
        self.shows.len()
    }

    /// Shows with a genre tag matching `genre` (case-insensitive substring).
    ///
    /// A blank genre yields an empty result, not the whole collection.
    pub fn filter_by_genre(&self, genre: &str) -> Vec<TvShow> {
        self.shows
            .iter()
            .filter(|show| show.matches_genre(genre))
            .cloned()
            .collect()
    }

    /// Shows rated at or above `min_rating`, in insertion order (not
    /// sorted).
    pub fn filter_by_rating(&self, min_rating: f64) -> Vec<TvShow> {
        self.shows
            .iter()
            .filter(|show| show.is_rated_at_least(min_rating))
            .cloned()
            .collect()
    }

    /// Shows whose episode count lies within the inclusive bounds; an
    /// omitted bound imposes no constraint.
    pub fn filter_by_episode_range(
        &self,
        min_episodes: Option<u64>,
        max_episodes: Option<u64>,
    ) -> Vec<TvShow> {
        self.shows
            .iter()
            .filter(|show| min_episodes.map_or(true, |min| show.num_episodes >= min))
            .filter(|show| max_episodes.map_or(true, |max| show.num_episodes <= max))
            .cloned()
            .collect()
    }

    /// Shows in the given language (case-insensitive, whole tag).
    pub fn filter_by_language(&self, language: &str) -> Vec<TvShow> {
        self.shows
            .iter()
            .filter(|show| show.has_language(language))
            .cloned()
            .collect()
    }

    /// Shows first aired in `year`. Shows with an unknown year never match.
    pub fn filter_by_year(&self, year: i32) -> Vec<TvShow> {
        self.shows
            .iter()
            .filter(|show| show.year == Some(year))
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over titles.
    ///
    /// A blank term yields an empty result.
    pub fn search_by_title(&self, term: &str) -> Vec<TvShow> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return Vec::new();
        }
        self.shows
            .iter()
            .filter(|show| show.title.to_lowercase().contains(&term))
            .cloned()
            .collect()
    }

    /// Rank the shows matching `criteria` by rating, best first.
    ///
    /// The constraints apply in sequence through a [`FilterPipeline`]; the
    /// survivors are stable-sorted descending by rating, so equally rated
    /// shows keep their insertion order (there is no secondary tie-break),
    /// then cut to `criteria.limit`.
    pub fn recommend(&self, criteria: &RecommendCriteria) -> Vec<TvShow> {
        let mut pipeline = FilterPipeline::new();
        if let Some(genre) = &criteria.genre {
            pipeline = pipeline.add_filter(GenreFilter::new(genre.clone()));
        }
        if let Some(min_rating) = criteria.min_rating {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(min_rating));
        }
        if criteria.min_episodes.is_some() || criteria.max_episodes.is_some() {
            pipeline = pipeline.add_filter(EpisodeRangeFilter::new(
                criteria.min_episodes,
                criteria.max_episodes,
            ));
        }
        if let Some(language) = &criteria.language {
            pipeline = pipeline.add_filter(LanguageFilter::new(language.clone()));
        }

        let mut matches = pipeline.apply(self.shows.clone());
        matches.sort_by(|a, b| b.cmp_by_rating(a));
        matches.truncate(criteria.limit);
        matches
    }

    /// The `n` highest rated shows across the whole collection.
    ///
    /// Same ranking rule as [`ShowRecommender::recommend`]: stable
    /// descending sort, ties keep insertion order.
    pub fn top_rated(&self, n: usize) -> Vec<TvShow> {
        let mut ranked = self.shows.clone();
        ranked.sort_by(|a, b| b.cmp_by_rating(a));
        ranked.truncate(n);
        ranked
    }

    /// Every distinct genre tag across the collection, ascending,
    /// case-sensitive.
    pub fn all_genres(&self) -> Vec<String> {
        let genres: BTreeSet<&String> = self.shows.iter().flat_map(|show| &show.genres).collect();
        genres.into_iter().cloned().collect()
    }

    /// Aggregate statistics for the collection.
    pub fn statistics(&self) -> CatalogStats {
        if self.shows.is_empty() {
            return CatalogStats {
                total_shows: 0,
                total_episodes: 0,
                avg_rating: 0.0,
                total_genres: 0,
            };
        }

        let total_episodes = self.shows.iter().map(|show| show.num_episodes).sum();
        let rating_sum: f64 = self.shows.iter().map(|show| show.avg_rating).sum();
        let avg_rating = (rating_sum / self.shows.len() as f64 * 100.0).round() / 100.0;

        CatalogStats {
            total_shows: self.shows.len(),
            total_episodes,
            avg_rating,
            total_genres: self.all_genres().len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::CatalogError;

    /// Recommender populated with three well-known shows, reused across
    /// tests.
    fn sample_recommender() -> ShowRecommender {
        let mut recommender = ShowRecommender::new();
        recommender
            .add_many(vec![
                TvShow::new("Breaking Bad", vec!["Drama", "Crime"], 62, 9.5, "en", Some(2008))
                    .unwrap(),
                TvShow::new("Friends", vec!["Comedy"], 236, 8.9, "en", Some(1994)).unwrap(),
                TvShow::new("Dark", vec!["Sci-Fi", "Drama"], 26, 8.8, "de", Some(2017)).unwrap(),
            ])
            .unwrap();
        recommender
    }

    #[test]
    fn test_add_increases_count() {
        let recommender = sample_recommender();
        assert_eq!(recommender.count(), 3);
    }

    #[test]
    fn test_add_rejects_invalid_record() {
        let mut recommender = ShowRecommender::new();

        // Bypass the constructor the way a bad deserialization would
        let mut rogue = TvShow::new("Rogue", "Drama", 1, 5.0, "en", None).unwrap();
        rogue.avg_rating = 42.0;

        assert!(matches!(
            recommender.add(rogue),
            Err(CatalogError::RatingOutOfRange { .. })
        ));
        assert_eq!(recommender.count(), 0);
    }

    #[test]
    fn test_add_many_admits_valid_prefix_then_aborts() {
        let mut recommender = ShowRecommender::new();

        let good_first = TvShow::new("First", "Drama", 1, 5.0, "en", None).unwrap();
        let mut bad = TvShow::new("Bad", "Drama", 1, 5.0, "en", None).unwrap();
        bad.avg_rating = -3.0;
        let good_last = TvShow::new("Last", "Drama", 1, 5.0, "en", None).unwrap();

        let result = recommender.add_many(vec![good_first, bad, good_last]);
        assert!(result.is_err());

        // The valid prefix stays admitted, nothing after the failure does
        assert_eq!(recommender.count(), 1);
        assert_eq!(recommender.search_by_title("First").len(), 1);
        assert!(recommender.search_by_title("Last").is_empty());
    }

    #[test]
    fn test_filter_by_genre_preserves_order() {
        let recommender = sample_recommender();
        let drama = recommender.filter_by_genre("Drama");
        let titles: Vec<&str> = drama.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Breaking Bad", "Dark"]);
    }

    #[test]
    fn test_filter_by_blank_genre_is_empty() {
        let recommender = sample_recommender();
        assert!(recommender.filter_by_genre("").is_empty());
        assert!(recommender.filter_by_genre("  ").is_empty());
    }

    #[test]
    fn test_filter_by_rating() {
        let recommender = sample_recommender();
        let high = recommender.filter_by_rating(9.0);
        assert_eq!(high.len(), 1);
        assert_eq!(high[0].title, "Breaking Bad");
    }

    #[test]
    fn test_filter_by_rating_is_idempotent() {
        let recommender = sample_recommender();
        let once = recommender.filter_by_rating(8.9);

        let mut again = ShowRecommender::new();
        again.add_many(once.clone()).unwrap();
        assert_eq!(again.filter_by_rating(8.9), once);
    }

    #[test]
    fn test_filter_by_episode_range() {
        let recommender = sample_recommender();

        let titles = |shows: Vec<TvShow>| -> Vec<String> {
            shows.into_iter().map(|s| s.title).collect()
        };

        assert_eq!(
            titles(recommender.filter_by_episode_range(Some(26), Some(62))),
            vec!["Breaking Bad", "Dark"]
        );
        assert_eq!(
            titles(recommender.filter_by_episode_range(Some(100), None)),
            vec!["Friends"]
        );
        assert_eq!(
            titles(recommender.filter_by_episode_range(None, Some(30))),
            vec!["Dark"]
        );
        assert_eq!(recommender.filter_by_episode_range(None, None).len(), 3);
    }

    #[test]
    fn test_filter_by_language_exact_tag() {
        let recommender = sample_recommender();
        let german = recommender.filter_by_language("DE");
        assert_eq!(german.len(), 1);
        assert_eq!(german[0].title, "Dark");
        // Substring of a tag is not a match
        assert!(recommender.filter_by_language("d").is_empty());
    }

    #[test]
    fn test_filter_by_year_ignores_unknown_years() {
        let mut recommender = sample_recommender();
        recommender
            .add(TvShow::new("Undated", "Drama", 8, 7.5, "en", None).unwrap())
            .unwrap();

        let from_2008 = recommender.filter_by_year(2008);
        assert_eq!(from_2008.len(), 1);
        assert_eq!(from_2008[0].title, "Breaking Bad");
        // The unknown-year show matches no concrete year
        assert!(recommender.filter_by_year(0).is_empty());
    }

    #[test]
    fn test_search_by_title() {
        let recommender = sample_recommender();
        let results = recommender.search_by_title("dark");
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "Dark");

        assert!(recommender.search_by_title("").is_empty());
        assert!(recommender.search_by_title("   ").is_empty());
    }

    #[test]
    fn test_recommend_sorts_by_rating_descending() {
        let recommender = sample_recommender();
        let recs = recommender.recommend(&RecommendCriteria::new());
        let titles: Vec<&str> = recs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Breaking Bad", "Friends", "Dark"]);
    }

    #[test]
    fn test_recommend_combined_criteria() {
        let recommender = sample_recommender();
        let criteria = RecommendCriteria::new()
            .with_genre("Drama")
            .with_min_rating(9.0)
            .with_language("en");

        let recs = recommender.recommend(&criteria);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].title, "Breaking Bad");
    }

    #[test]
    fn test_recommend_limit_semantics() {
        let recommender = sample_recommender();

        assert!(recommender
            .recommend(&RecommendCriteria::new().with_limit(0))
            .is_empty());
        assert_eq!(
            recommender
                .recommend(&RecommendCriteria::new().with_limit(2))
                .len(),
            2
        );
        // A limit beyond the survivor count returns all of them
        assert_eq!(
            recommender
                .recommend(&RecommendCriteria::new().with_limit(100))
                .len(),
            3
        );
    }

    #[test]
    fn test_recommend_limit_keeps_the_best_rated() {
        let recommender = sample_recommender();
        let top_two = recommender.recommend(&RecommendCriteria::new().with_limit(2));
        // Everything returned outranks everything excluded by the limit
        let floor = top_two.iter().map(|s| s.avg_rating).fold(f64::MAX, f64::min);
        assert!(floor >= 8.9);
    }

    #[test]
    fn test_recommend_equal_ratings_keep_insertion_order() {
        let mut recommender = ShowRecommender::new();
        recommender
            .add_many(vec![
                TvShow::new("First In", "Drama", 10, 8.0, "en", Some(2001)).unwrap(),
                TvShow::new("Ahead", "Drama", 10, 9.0, "en", Some(2002)).unwrap(),
                TvShow::new("Second In", "Drama", 10, 8.0, "en", Some(2003)).unwrap(),
            ])
            .unwrap();

        let recs = recommender.recommend(&RecommendCriteria::new());
        let titles: Vec<&str> = recs.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["Ahead", "First In", "Second In"]);
    }

    #[test]
    fn test_top_rated() {
        let mut recommender = ShowRecommender::new();
        recommender
            .add_many(vec![
                TvShow::new("Middling", "Drama", 10, 7.5, "en", None).unwrap(),
                TvShow::new("Best", "Drama", 10, 9.5, "en", None).unwrap(),
                TvShow::new("Runner Up", "Drama", 10, 8.5, "en", None).unwrap(),
            ])
            .unwrap();

        let top = recommender.top_rated(2);
        let ratings: Vec<f64> = top.iter().map(|s| s.avg_rating).collect();
        assert_eq!(ratings, vec![9.5, 8.5]);
    }

    #[test]
    fn test_all_genres_sorted_distinct() {
        let mut recommender = ShowRecommender::new();
        recommender
            .add_many(vec![
                TvShow::new("A", vec!["Drama", "Crime"], 1, 5.0, "en", None).unwrap(),
                TvShow::new("B", vec!["Comedy"], 1, 5.0, "en", None).unwrap(),
                TvShow::new("C", vec!["Drama"], 1, 5.0, "en", None).unwrap(),
            ])
            .unwrap();

        assert_eq!(recommender.all_genres(), vec!["Comedy", "Crime", "Drama"]);
    }

    #[test]
    fn test_statistics() {
        let recommender = sample_recommender();
        let stats = recommender.statistics();

        assert_eq!(stats.total_shows, 3);
        assert_eq!(stats.total_episodes, 324);
        assert_eq!(stats.avg_rating, 9.07);
        assert_eq!(stats.total_genres, 4);
    }

    #[test]
    fn test_empty_recommender() {
        let recommender = ShowRecommender::new();

        assert_eq!(
            recommender.statistics(),
            CatalogStats {
                total_shows: 0,
                total_episodes: 0,
                avg_rating: 0.0,
                total_genres: 0,
            }
        );
        assert!(recommender.filter_by_genre("Drama").is_empty());
        assert!(recommender.filter_by_rating(0.0).is_empty());
        assert!(recommender.filter_by_episode_range(None, None).is_empty());
        assert!(recommender.filter_by_language("en").is_empty());
        assert!(recommender.filter_by_year(2020).is_empty());
        assert!(recommender.search_by_title("a").is_empty());
        assert!(recommender.recommend(&RecommendCriteria::new()).is_empty());
        assert!(recommender.top_rated(10).is_empty());
        assert!(recommender.all_genres().is_empty());
    }
}
