//! Core data model definitions shared across AnimeWave crates.
#![allow(missing_docs)]

pub mod catalog;
pub mod criteria;
pub mod error;
pub mod filter_types;
pub mod ids;
pub mod media;

// Intentionally curated re-exports for downstream consumers.
pub use catalog::Catalog;
pub use criteria::{
    FilterCriteria, RATING_MAX, RATING_MIN, YEAR_MAX, YEAR_MIN,
};
pub use error::ModelError;
pub use filter_types::{Genre, SortOrder};
pub use ids::{AnimeId, EpisodeId};
pub use media::{AnimeEntry, Episode, FeaturedAnime, TrendingAnime};
