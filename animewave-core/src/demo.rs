//! The seeded demo universe.
//!
//! There is no backend: every shelf in the client renders from the fixed
//! data below. The catalog is the search universe; the featured title,
//! trending shelf, and episode list feed the hero banner, carousel, and
//! "Continue Watching" grid.

use animewave_model::{
    AnimeEntry, AnimeId, Catalog, Episode, EpisodeId, FeaturedAnime, Genre,
    TrendingAnime,
};

/// Suggestion chips shown under the search input before any search runs.
pub const POPULAR_SEARCHES: &[&str] = &[
    "Attack on Titan",
    "Demon Slayer",
    "One Piece",
    "Jujutsu Kaisen",
    "My Hero Academia",
    "Chainsaw Man",
];

/// Category chips of the explore row. "All" plus a curated label set;
/// decorative in the original client and kept that way.
pub const EXPLORE_CATEGORIES: &[&str] = &[
    "All",
    "Action",
    "Adventure",
    "Comedy",
    "Drama",
    "Fantasy",
    "Horror",
    "Romance",
    "Sci-Fi",
    "Slice of Life",
];

fn entry(
    id: u32,
    title: &str,
    genres: [Genre; 3],
    rating: f32,
    year: u16,
    image: &str,
) -> AnimeEntry {
    AnimeEntry {
        id: AnimeId::new(id),
        title: title.to_string(),
        genres: genres.to_vec(),
        rating,
        year,
        image: image.to_string(),
    }
}

/// The 12-entry search universe.
pub fn catalog() -> Catalog {
    use Genre::*;

    Catalog::new(vec![
        entry(
            1,
            "Attack on Titan",
            [Action, Drama, Fantasy],
            4.9,
            2013,
            "https://source.unsplash.com/random/300x450/?anime,titan",
        ),
        entry(
            2,
            "My Hero Academia",
            [Action, Comedy, SuperPower],
            4.7,
            2016,
            "https://source.unsplash.com/random/300x450/?anime,hero",
        ),
        entry(
            3,
            "Demon Slayer",
            [Action, Historical, Supernatural],
            4.8,
            2019,
            "https://source.unsplash.com/random/300x450/?anime,demon",
        ),
        entry(
            4,
            "One Piece",
            [Action, Adventure, Comedy],
            4.9,
            1999,
            "https://source.unsplash.com/random/300x450/?anime,pirate",
        ),
        entry(
            5,
            "Jujutsu Kaisen",
            [Action, Horror, Supernatural],
            4.8,
            2020,
            "https://source.unsplash.com/random/300x450/?anime,dark",
        ),
        entry(
            6,
            "Naruto",
            [Action, Adventure, MartialArts],
            4.7,
            2002,
            "https://source.unsplash.com/random/300x450/?anime,ninja",
        ),
        entry(
            7,
            "Fullmetal Alchemist: Brotherhood",
            [Action, Adventure, Drama],
            4.9,
            2009,
            "https://source.unsplash.com/random/300x450/?anime,alchemy",
        ),
        entry(
            8,
            "Death Note",
            [Mystery, Psychological, Thriller],
            4.8,
            2006,
            "https://source.unsplash.com/random/300x450/?anime,dark",
        ),
        entry(
            9,
            "Hunter x Hunter",
            [Action, Adventure, Fantasy],
            4.9,
            2011,
            "https://source.unsplash.com/random/300x450/?anime,adventure",
        ),
        entry(
            10,
            "Spy x Family",
            [Action, Comedy, SliceOfLife],
            4.7,
            2022,
            "https://source.unsplash.com/random/300x450/?anime,family",
        ),
        entry(
            11,
            "Chainsaw Man",
            [Action, Horror, Supernatural],
            4.6,
            2022,
            "https://source.unsplash.com/random/300x450/?anime,horror",
        ),
        entry(
            12,
            "Tokyo Ghoul",
            [Action, Horror, Supernatural],
            4.5,
            2014,
            "https://source.unsplash.com/random/300x450/?anime,dark",
        ),
    ])
}

/// The hero-banner title. Shares the catalog id of its Demon Slayer
/// entry so "Add to List" lands on the right favorite.
pub fn featured() -> FeaturedAnime {
    FeaturedAnime {
        id: AnimeId::new(3),
        title: "Demon Slayer: Kimetsu no Yaiba".to_string(),
        description: "Tanjiro Kamado's peaceful life is shattered when his \
                      family is slaughtered by a demon. His sister Nezuko is \
                      the sole survivor, but she has been transformed into a \
                      demon herself. Together, they embark on a journey to \
                      find a cure and avenge their family."
            .to_string(),
        cover_image:
            "https://source.unsplash.com/random/1200x600/?anime,samurai"
                .to_string(),
        rating: 4.8,
        genres: vec![Genre::Action, Genre::Fantasy, Genre::Historical],
        release_year: 2019,
        episodes: 26,
    }
}

fn trending_item(
    id: u32,
    title: &str,
    thumbnail: &str,
    episode_count: u32,
    rating: f32,
) -> TrendingAnime {
    TrendingAnime {
        id: AnimeId::new(id),
        title: title.to_string(),
        thumbnail: thumbnail.to_string(),
        episode_count,
        rating,
    }
}

/// The "Trending Now" carousel shelf. Ids reference catalog entries so
/// the heart control marks the right favorite.
pub fn trending() -> Vec<TrendingAnime> {
    vec![
        trending_item(
            1,
            "Attack on Titan",
            "https://source.unsplash.com/random/300x450/?anime,titan",
            87,
            4.9,
        ),
        trending_item(
            2,
            "My Hero Academia",
            "https://source.unsplash.com/random/300x450/?anime,hero",
            113,
            4.7,
        ),
        trending_item(
            5,
            "Jujutsu Kaisen",
            "https://source.unsplash.com/random/300x450/?anime,dark",
            24,
            4.8,
        ),
        trending_item(
            4,
            "One Piece",
            "https://source.unsplash.com/random/300x450/?anime,pirate",
            1000,
            4.9,
        ),
        trending_item(
            11,
            "Chainsaw Man",
            "https://source.unsplash.com/random/300x450/?anime,horror",
            12,
            4.6,
        ),
        trending_item(
            10,
            "Spy x Family",
            "https://source.unsplash.com/random/300x450/?anime,family",
            25,
            4.7,
        ),
    ]
}

fn episode(
    id: u32,
    number: u32,
    title: &str,
    thumbnail: &str,
    duration: &str,
    resume_progress: f32,
) -> Episode {
    Episode {
        id: EpisodeId::new(id),
        number,
        title: title.to_string(),
        thumbnail: thumbnail.to_string(),
        duration: duration.to_string(),
        resume_progress,
    }
}

/// The "Continue Watching" grid. Resume positions are fixed stand-ins for
/// watch progress that is never persisted.
pub fn episodes() -> Vec<Episode> {
    vec![
        episode(
            1,
            1,
            "Cruelty",
            "https://source.unsplash.com/random/400x225/?anime,forest",
            "24:15",
            0.85,
        ),
        episode(
            2,
            2,
            "Trainer Sakonji Urokodaki",
            "https://source.unsplash.com/random/400x225/?anime,training",
            "23:40",
            0.40,
        ),
        episode(
            3,
            3,
            "Sabito and Makomo",
            "https://source.unsplash.com/random/400x225/?anime,mask",
            "24:10",
            0.62,
        ),
        episode(
            4,
            4,
            "Final Selection",
            "https://source.unsplash.com/random/400x225/?anime,night",
            "23:55",
            0.15,
        ),
        episode(
            5,
            5,
            "My Own Steel",
            "https://source.unsplash.com/random/400x225/?anime,sword",
            "24:05",
            0.30,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_ids_are_unique() {
        let catalog = catalog();
        let mut ids: Vec<u32> =
            catalog.iter().map(|entry| entry.id.get()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
    }

    #[test]
    fn every_entry_is_well_formed() {
        for entry in catalog().iter() {
            assert!(!entry.title.is_empty());
            assert_eq!(entry.genres.len(), 3);
            assert!((0.0..=5.0).contains(&entry.rating));
            assert!((1990..=2023).contains(&entry.year));
        }
    }

    #[test]
    fn lookup_by_id_matches_seed_order() {
        let catalog = catalog();
        let first = catalog.get(AnimeId::new(1)).expect("seeded entry");
        assert_eq!(first.title, "Attack on Titan");
        assert!(catalog.get(AnimeId::new(99)).is_none());
    }

    #[test]
    fn episode_resume_progress_is_a_fraction() {
        for ep in episodes() {
            assert!((0.0..=1.0).contains(&ep.resume_progress));
        }
    }
}
