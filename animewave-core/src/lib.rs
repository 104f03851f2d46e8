//! Core logic for the AnimeWave client.
//!
//! This crate owns everything behind the interactive surface: the
//! search/filter/sort pipeline over the catalog snapshot, the in-memory
//! favorites set, and the seeded demo universe the client renders. It has
//! no UI dependency; the player crate drives it from its reducers.

pub mod demo;
pub mod favorites;
pub mod query;

pub use favorites::Favorites;
pub use query::search;
