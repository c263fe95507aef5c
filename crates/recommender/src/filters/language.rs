//! Filter matching shows by language tag.

use crate::traits::ShowFilter;
use catalog::TvShow;

/// Keeps shows in the given language.
///
/// The match is case-insensitive but covers the whole tag: "en" keeps "EN"
/// but not "en-US".
pub struct LanguageFilter {
    language: String,
}

impl LanguageFilter {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
        }
    }
}

impl ShowFilter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn apply(&self, shows: Vec<TvShow>) -> Vec<TvShow> {
        shows
            .into_iter()
            .filter(|show| show.has_language(&self.language))
            .collect()
    }
}
