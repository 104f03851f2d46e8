//! Catalog records. All of these are seeded once and never mutated.

use crate::filter_types::Genre;
use crate::ids::{AnimeId, EpisodeId};

/// A single searchable catalog entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnimeEntry {
    pub id: AnimeId,
    pub title: String,
    pub genres: Vec<Genre>,
    /// Viewer rating in `[0.0, 5.0]`.
    pub rating: f32,
    /// First release year.
    pub year: u16,
    /// Poster image reference. Never fetched; the client renders a
    /// placeholder card for it.
    pub image: String,
}

impl AnimeEntry {
    pub fn has_genre(&self, genre: Genre) -> bool {
        self.genres.contains(&genre)
    }
}

/// The hero-banner title, with the copy the banner renders.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FeaturedAnime {
    pub id: AnimeId,
    pub title: String,
    pub description: String,
    pub cover_image: String,
    pub rating: f32,
    pub genres: Vec<Genre>,
    pub release_year: u16,
    pub episodes: u32,
}

/// An item on the trending shelf.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrendingAnime {
    pub id: AnimeId,
    pub title: String,
    pub thumbnail: String,
    pub episode_count: u32,
    pub rating: f32,
}

/// An episode card in the "Continue Watching" grid.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Episode {
    pub id: EpisodeId,
    pub number: u32,
    pub title: String,
    pub thumbnail: String,
    /// Display duration, e.g. "24:15".
    pub duration: String,
    /// Resume position as a fraction of the episode, in `[0.0, 1.0]`.
    pub resume_progress: f32,
}
