use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;

/// Genre labels occurring in the catalog. Closed set: the catalog is a
/// fixed snapshot, so new labels cannot appear at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Genre {
    Action,
    Adventure,
    Comedy,
    Drama,
    Fantasy,
    Historical,
    Horror,
    MartialArts,
    Mystery,
    Psychological,
    SliceOfLife,
    SuperPower,
    Supernatural,
    Thriller,
}

impl Genre {
    /// All genres in ascending label order, as shown in the filter panel.
    pub fn all() -> &'static [Genre] {
        use Genre::*;
        &[
            Action,
            Adventure,
            Comedy,
            Drama,
            Fantasy,
            Historical,
            Horror,
            MartialArts,
            Mystery,
            Psychological,
            SliceOfLife,
            SuperPower,
            Supernatural,
            Thriller,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            Genre::Action => "Action",
            Genre::Adventure => "Adventure",
            Genre::Comedy => "Comedy",
            Genre::Drama => "Drama",
            Genre::Fantasy => "Fantasy",
            Genre::Historical => "Historical",
            Genre::Horror => "Horror",
            Genre::MartialArts => "Martial Arts",
            Genre::Mystery => "Mystery",
            Genre::Psychological => "Psychological",
            Genre::SliceOfLife => "Slice of Life",
            Genre::SuperPower => "Super Power",
            Genre::Supernatural => "Supernatural",
            Genre::Thriller => "Thriller",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Genre {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Genre::all()
            .iter()
            .find(|genre| genre.label() == s)
            .copied()
            .ok_or_else(|| ModelError::UnknownGenre(s.to_string()))
    }
}

/// Orderings the search widget offers.
///
/// `Relevance` is the historical default: it performs no reordering and
/// leaves results in catalog iteration order after filtering. It is not a
/// relevance score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SortOrder {
    #[default]
    Relevance,
    RatingDesc,
    YearDesc,
    YearAsc,
    TitleAsc,
}

impl SortOrder {
    pub fn all() -> &'static [SortOrder] {
        use SortOrder::*;
        &[Relevance, RatingDesc, YearDesc, YearAsc, TitleAsc]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Relevance => "Relevance",
            SortOrder::RatingDesc => "Highest Rating",
            SortOrder::YearDesc => "Newest First",
            SortOrder::YearAsc => "Oldest First",
            SortOrder::TitleAsc => "Title (A-Z)",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for SortOrder {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::all()
            .iter()
            .find(|order| order.label() == s)
            .copied()
            .ok_or_else(|| ModelError::UnknownSortOrder(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn genre_labels_are_sorted() {
        let labels: Vec<&str> =
            Genre::all().iter().map(|g| g.label()).collect();
        let mut sorted = labels.clone();
        sorted.sort_unstable();
        assert_eq!(labels, sorted);
    }

    #[test]
    fn genre_round_trips_through_label() {
        for genre in Genre::all() {
            assert_eq!(genre.label().parse::<Genre>(), Ok(*genre));
        }
    }

    #[test]
    fn unknown_genre_is_rejected() {
        assert_eq!(
            "Isekai".parse::<Genre>(),
            Err(ModelError::UnknownGenre("Isekai".to_string()))
        );
    }

    #[test]
    fn default_sort_is_relevance() {
        assert_eq!(SortOrder::default(), SortOrder::Relevance);
    }
}
