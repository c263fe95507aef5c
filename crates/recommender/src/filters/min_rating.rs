//! Filter enforcing a minimum rating threshold.
//!
//! Removes shows rated below the caller's floor so only quality content
//! survives into the ranked results.

use crate::traits::ShowFilter;
use catalog::TvShow;

/// Removes shows rated below `min_rating` (the bound is inclusive).
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl ShowFilter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, shows: Vec<TvShow>) -> Vec<TvShow> {
        shows
            .into_iter()
            .filter(|show| show.is_rated_at_least(self.min_rating))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_is_inclusive() {
        let shows = vec![
            TvShow::new("At Threshold", "Drama", 10, 8.0, "en", None).unwrap(),
            TvShow::new("Below", "Drama", 10, 7.9, "en", None).unwrap(),
            TvShow::new("Above", "Drama", 10, 9.1, "en", None).unwrap(),
        ];

        let kept = MinimumRatingFilter::new(8.0).apply(shows);
        let titles: Vec<&str> = kept.iter().map(|s| s.title.as_str()).collect();
        assert_eq!(titles, vec!["At Threshold", "Above"]);
    }
}
