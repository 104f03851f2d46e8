//! User-chosen search constraints.

use std::collections::BTreeSet;

use crate::filter_types::{Genre, SortOrder};

/// Lowest release year the year sliders accept.
pub const YEAR_MIN: u16 = 1990;
/// Highest release year the year sliders accept.
pub const YEAR_MAX: u16 = 2023;
/// Lower bound of the rating threshold slider.
pub const RATING_MIN: f32 = 0.0;
/// Upper bound of the rating threshold slider.
pub const RATING_MAX: f32 = 5.0;

/// The combined constraints the search widget applies to the catalog.
///
/// Mutations go through the setters, which clamp out-of-range values
/// instead of failing and keep `year_from <= year_to`. A criteria value is
/// therefore always well-formed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FilterCriteria {
    /// Free-text query, matched case-insensitively against titles.
    pub query: String,
    /// Selected genres. Empty means no genre constraint; otherwise an
    /// entry matches when it shares at least one genre (OR, not AND).
    pub genres: BTreeSet<Genre>,
    /// Inclusive lower bound on release year.
    pub year_from: u16,
    /// Inclusive upper bound on release year.
    pub year_to: u16,
    /// Minimum rating, inclusive.
    pub min_rating: f32,
    /// Ordering applied after filtering.
    pub sort: SortOrder,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            query: String::new(),
            genres: BTreeSet::new(),
            year_from: YEAR_MIN,
            year_to: YEAR_MAX,
            min_rating: RATING_MIN,
            sort: SortOrder::Relevance,
        }
    }
}

impl FilterCriteria {
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Set the lower year bound, clamped into `[YEAR_MIN, year_to]`.
    pub fn set_year_from(&mut self, year: u16) {
        self.year_from = year.clamp(YEAR_MIN, self.year_to);
    }

    /// Set the upper year bound, clamped into `[year_from, YEAR_MAX]`.
    pub fn set_year_to(&mut self, year: u16) {
        self.year_to = year.clamp(self.year_from, YEAR_MAX);
    }

    /// Set the rating floor, clamped into `[RATING_MIN, RATING_MAX]`.
    pub fn set_min_rating(&mut self, rating: f32) {
        self.min_rating = rating.clamp(RATING_MIN, RATING_MAX);
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Select the genre if absent, deselect it if present.
    pub fn toggle_genre(&mut self, genre: Genre) {
        if !self.genres.remove(&genre) {
            self.genres.insert(genre);
        }
    }

    /// Restore every filter to its default. The query is left alone; the
    /// search input has its own clear control.
    pub fn reset_filters(&mut self) {
        self.genres.clear();
        self.year_from = YEAR_MIN;
        self.year_to = YEAR_MAX;
        self.min_rating = RATING_MIN;
        self.sort = SortOrder::Relevance;
    }

    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_the_full_range() {
        let criteria = FilterCriteria::default();
        assert!(criteria.query.is_empty());
        assert!(criteria.genres.is_empty());
        assert_eq!(criteria.year_from, YEAR_MIN);
        assert_eq!(criteria.year_to, YEAR_MAX);
        assert_eq!(criteria.min_rating, RATING_MIN);
        assert_eq!(criteria.sort, SortOrder::Relevance);
    }

    #[test]
    fn year_setters_clamp_to_slider_range() {
        let mut criteria = FilterCriteria::default();
        criteria.set_year_from(1800);
        assert_eq!(criteria.year_from, YEAR_MIN);
        criteria.set_year_to(9999);
        assert_eq!(criteria.year_to, YEAR_MAX);
    }

    #[test]
    fn year_bounds_never_cross() {
        let mut criteria = FilterCriteria::default();
        criteria.set_year_to(2000);
        criteria.set_year_from(2015);
        assert_eq!(criteria.year_from, 2000);

        criteria.set_year_from(1995);
        criteria.set_year_to(1990);
        assert_eq!(criteria.year_to, 1995);
    }

    #[test]
    fn rating_clamps_into_valid_range() {
        let mut criteria = FilterCriteria::default();
        criteria.set_min_rating(7.5);
        assert_eq!(criteria.min_rating, RATING_MAX);
        criteria.set_min_rating(-1.0);
        assert_eq!(criteria.min_rating, RATING_MIN);
    }

    #[test]
    fn toggle_genre_twice_restores_selection() {
        let mut criteria = FilterCriteria::default();
        criteria.toggle_genre(Genre::Horror);
        assert!(criteria.genres.contains(&Genre::Horror));
        criteria.toggle_genre(Genre::Horror);
        assert!(criteria.genres.is_empty());
    }

    #[test]
    fn reset_keeps_the_query() {
        let mut criteria = FilterCriteria::default();
        criteria.set_query("titan");
        criteria.toggle_genre(Genre::Action);
        criteria.set_year_from(2010);
        criteria.set_min_rating(4.5);
        criteria.set_sort(SortOrder::TitleAsc);

        criteria.reset_filters();

        assert_eq!(criteria.query, "titan");
        assert!(criteria.genres.is_empty());
        assert_eq!(criteria.year_from, YEAR_MIN);
        assert_eq!(criteria.sort, SortOrder::Relevance);
    }
}
