//! AnimeWave desktop client library.
//!
//! This crate contains the client's application glue: Elm-architecture
//! state, messages, reducers, views, and the theme. It is exposed as a
//! library mainly so the reducers can be exercised by tests; most
//! consumers should use the `animewave-player` binary.

pub mod app;
pub mod carousel;
pub mod message;
pub mod state;
pub mod subscriptions;
pub mod theme;
pub mod update;
pub mod view;
pub mod views;
