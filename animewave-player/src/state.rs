//! Application state.
//!
//! All state is owned by the single interactive session. The catalog and
//! the shelf data are seeded once and never mutated; everything else is
//! driven by the reducers in `update`.

use std::fmt;

use animewave_core::{Favorites, demo, search};
use animewave_model::{
    AnimeEntry, Catalog, Episode, FeaturedAnime, FilterCriteria,
    TrendingAnime,
};

use crate::carousel::CarouselState;

pub struct State {
    /// The fixed search universe.
    pub catalog: Catalog,
    pub featured: FeaturedAnime,
    pub trending: Vec<TrendingAnime>,
    pub episodes: Vec<Episode>,
    pub search: SearchState,
    pub favorites: Favorites,
    pub playback: PlaybackState,
    pub carousel: CarouselState,
    pub explore: ExploreState,
}

impl Default for State {
    fn default() -> Self {
        Self {
            catalog: demo::catalog(),
            featured: demo::featured(),
            trending: demo::trending(),
            episodes: demo::episodes(),
            search: SearchState::default(),
            favorites: Favorites::new(),
            playback: PlaybackState::default(),
            carousel: CarouselState::new(),
            explore: ExploreState::default(),
        }
    }
}

impl fmt::Debug for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("State")
            .field("catalog_len", &self.catalog.len())
            .field("search", &self.search)
            .field("favorites", &self.favorites.len())
            .field("playback", &self.playback)
            .finish_non_exhaustive()
    }
}

/// Search widget state.
///
/// `results` carries the tri-state the UI must render distinctly:
/// `None` means no search has been performed, `Some` with an empty vec
/// means a search ran and matched nothing.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    pub criteria: FilterCriteria,
    pub results: Option<Vec<AnimeEntry>>,
    pub show_filters: bool,
}

impl SearchState {
    /// Re-run the search for the current criteria. Invoked only while
    /// the query is non-empty; an emptied query clears the displayed
    /// result set instead of hitting the pipeline.
    pub fn refresh(&mut self, catalog: &Catalog) {
        if self.criteria.has_query() {
            self.results = Some(search(catalog, &self.criteria));
        } else {
            self.results = None;
        }
    }

    pub fn close_results(&mut self) {
        self.results = None;
    }

    pub fn has_searched(&self) -> bool {
        self.results.is_some()
    }
}

/// The hero banner's fake playback. Purely decorative: a timer advances
/// `progress` and nothing else in the application observes it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlaybackState {
    pub playing: bool,
    pub muted: bool,
    /// Displayed progress in `[0.0, 100.0]`.
    pub progress: f32,
}

impl PlaybackState {
    pub fn toggle(&mut self) {
        self.playing = !self.playing;
    }

    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Advance one animation tick: +0.5 per tick, reset and pause once
    /// the bar has filled.
    pub fn tick(&mut self) {
        if !self.playing {
            return;
        }
        if self.progress >= 100.0 {
            self.progress = 0.0;
            self.playing = false;
        } else {
            self.progress += 0.5;
        }
    }

    /// The "2:00 / 24:00" style timestamp under the progress bar.
    pub fn timestamp(&self) -> String {
        let minutes = (self.progress / 100.0 * 24.0).floor() as u32;
        format!("{minutes}:00 / 24:00")
    }
}

/// Sort options of the explore shelf's selector. Stored but, as in the
/// original client, not wired to any reordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExploreSort {
    #[default]
    Popularity,
    Newest,
    Rating,
}

impl ExploreSort {
    pub fn all() -> &'static [ExploreSort] {
        use ExploreSort::*;
        &[Popularity, Newest, Rating]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExploreSort::Popularity => "Sort by: Popularity",
            ExploreSort::Newest => "Sort by: Newest",
            ExploreSort::Rating => "Sort by: Rating",
        }
    }
}

impl fmt::Display for ExploreSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Explore shelf state: the active category chip and the sort selection.
#[derive(Debug, Clone)]
pub struct ExploreState {
    pub active_category: &'static str,
    pub sort: ExploreSort,
}

impl Default for ExploreState {
    fn default() -> Self {
        Self {
            active_category: demo::EXPLORE_CATEGORIES[0],
            sort: ExploreSort::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_only_while_playing() {
        let mut playback = PlaybackState::default();
        playback.tick();
        assert_eq!(playback.progress, 0.0);

        playback.toggle();
        playback.tick();
        assert_eq!(playback.progress, 0.5);
    }

    #[test]
    fn full_bar_resets_and_pauses() {
        let mut playback = PlaybackState {
            playing: true,
            muted: false,
            progress: 100.0,
        };
        playback.tick();
        assert_eq!(playback.progress, 0.0);
        assert!(!playback.playing);
    }

    #[test]
    fn timestamp_tracks_progress() {
        let mut playback = PlaybackState::default();
        assert_eq!(playback.timestamp(), "0:00 / 24:00");
        playback.progress = 50.0;
        assert_eq!(playback.timestamp(), "12:00 / 24:00");
    }

    #[test]
    fn refresh_with_empty_query_clears_results() {
        let catalog = demo::catalog();
        let mut search_state = SearchState::default();

        search_state.criteria.set_query("titan");
        search_state.refresh(&catalog);
        assert!(search_state.has_searched());

        search_state.criteria.clear_query();
        search_state.refresh(&catalog);
        assert!(!search_state.has_searched());
    }

    #[test]
    fn zero_results_is_distinct_from_not_searched() {
        let catalog = demo::catalog();
        let mut search_state = SearchState::default();
        search_state.criteria.set_query("nonexistent-xyz");
        search_state.refresh(&catalog);

        assert_eq!(search_state.results.as_deref(), Some(&[] as &[_]));
        assert!(search_state.has_searched());
    }
}
