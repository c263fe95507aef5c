//! Filter constraining shows to an episode-count range.

use crate::traits::ShowFilter;
use catalog::TvShow;

/// Keeps shows whose episode count lies within the inclusive bounds.
///
/// Either bound may be omitted, in which case that side is unconstrained;
/// with both omitted the filter passes everything through.
pub struct EpisodeRangeFilter {
    min_episodes: Option<u64>,
    max_episodes: Option<u64>,
}

impl EpisodeRangeFilter {
    pub fn new(min_episodes: Option<u64>, max_episodes: Option<u64>) -> Self {
        Self {
            min_episodes,
            max_episodes,
        }
    }
}

impl ShowFilter for EpisodeRangeFilter {
    fn name(&self) -> &str {
        "EpisodeRangeFilter"
    }

    fn apply(&self, shows: Vec<TvShow>) -> Vec<TvShow> {
        shows
            .into_iter()
            .filter(|show| self.min_episodes.map_or(true, |min| show.num_episodes >= min))
            .filter(|show| self.max_episodes.map_or(true, |max| show.num_episodes <= max))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(title: &str, episodes: i64) -> TvShow {
        TvShow::new(title, "Drama", episodes, 8.0, "en", None).unwrap()
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let shows = vec![show("A", 9), show("B", 10), show("C", 50), show("D", 51)];
        let kept = EpisodeRangeFilter::new(Some(10), Some(50)).apply(shows);
        let titles: Vec<&str> = kept.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["B", "C"]);
    }

    #[test]
    fn test_omitted_bounds_do_not_constrain() {
        let shows = vec![show("A", 1), show("B", 500)];
        assert_eq!(EpisodeRangeFilter::new(None, None).apply(shows.clone()).len(), 2);
        assert_eq!(EpisodeRangeFilter::new(Some(2), None).apply(shows.clone()).len(), 1);
        assert_eq!(EpisodeRangeFilter::new(None, Some(2)).apply(shows).len(), 1);
    }
}
