//! Ordering of filtered catalog entries.

use std::cmp::Ordering;

use animewave_model::{AnimeEntry, SortOrder};

/// Compare two entries under the given ordering.
///
/// Returns `Ordering::Equal` for `Relevance`, which combined with a
/// stable sort leaves results in catalog iteration order.
pub fn compare_entries(
    a: &AnimeEntry,
    b: &AnimeEntry,
    sort: SortOrder,
) -> Ordering {
    match sort {
        SortOrder::Relevance => Ordering::Equal,
        SortOrder::RatingDesc => compare_partial(b.rating, a.rating),
        SortOrder::YearDesc => b.year.cmp(&a.year),
        SortOrder::YearAsc => a.year.cmp(&b.year),
        SortOrder::TitleAsc => {
            // Approximates the locale-aware compare of the original UI;
            // good enough for a lowercase Unicode title set.
            a.title.to_lowercase().cmp(&b.title.to_lowercase())
        }
    }
}

/// Sort the slice in place using the given ordering. Stable: ties keep
/// their relative order.
pub fn sort_entries(entries: &mut [AnimeEntry], sort: SortOrder) {
    if sort == SortOrder::Relevance {
        return;
    }
    entries.sort_by(|a, b| compare_entries(a, b, sort));
}

fn compare_partial(a: f32, b: f32) -> Ordering {
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use animewave_model::{AnimeId, Genre};

    fn entry(id: u32, title: &str, year: u16, rating: f32) -> AnimeEntry {
        AnimeEntry {
            id: AnimeId::new(id),
            title: title.to_string(),
            genres: vec![Genre::Action],
            rating,
            year,
            image: String::new(),
        }
    }

    #[test]
    fn relevance_preserves_input_order() {
        let mut entries = vec![
            entry(3, "Charlie", 2010, 3.0),
            entry(1, "Alice", 2020, 5.0),
            entry(2, "Bob", 2015, 4.0),
        ];
        sort_entries(&mut entries, SortOrder::Relevance);
        let ids: Vec<u32> = entries.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn title_sort_ignores_case() {
        let mut entries = vec![
            entry(1, "naruto", 2002, 4.7),
            entry(2, "Attack on Titan", 2013, 4.9),
        ];
        sort_entries(&mut entries, SortOrder::TitleAsc);
        assert_eq!(entries[0].title, "Attack on Titan");
    }

    #[test]
    fn rating_desc_ties_keep_relative_order() {
        let mut entries = vec![
            entry(1, "A", 2010, 4.9),
            entry(2, "B", 2011, 4.9),
            entry(3, "C", 2012, 4.5),
        ];
        sort_entries(&mut entries, SortOrder::RatingDesc);
        let ids: Vec<u32> = entries.iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn year_orderings_are_inverses() {
        let mut asc = vec![
            entry(1, "A", 2019, 4.0),
            entry(2, "B", 1999, 4.0),
            entry(3, "C", 2022, 4.0),
        ];
        let mut desc = asc.clone();

        sort_entries(&mut asc, SortOrder::YearAsc);
        sort_entries(&mut desc, SortOrder::YearDesc);

        let asc_years: Vec<u16> = asc.iter().map(|e| e.year).collect();
        let mut desc_years: Vec<u16> = desc.iter().map(|e| e.year).collect();
        desc_years.reverse();
        assert_eq!(asc_years, desc_years);
    }
}
