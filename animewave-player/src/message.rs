//! Messages produced by the interactive surface, grouped per domain.

use animewave_model::{AnimeId, Genre, SortOrder};
use iced::widget::scrollable;

use crate::state::ExploreSort;

#[derive(Debug, Clone)]
pub enum Message {
    /// Search widget interactions.
    Search(SearchMessage),
    /// Hero-banner playback simulation controls.
    Playback(PlaybackMessage),
    /// Trending carousel scroll controls.
    Carousel(CarouselMessage),
    /// Heart control on any card.
    FavoriteToggled(AnimeId),
    /// Explore category chip selected.
    CategorySelected(&'static str),
    /// Explore sort selector changed (decorative, state only).
    ExploreSortSelected(ExploreSort),
}

#[derive(Debug, Clone)]
pub enum SearchMessage {
    /// A keystroke in the query input.
    QueryChanged(String),
    /// The clear control next to the query input.
    QueryCleared,
    /// The filter-panel toggle button.
    FiltersToggled,
    GenreToggled(Genre),
    YearFromChanged(u16),
    YearToChanged(u16),
    MinRatingChanged(f32),
    SortSelected(SortOrder),
    /// The explicit "Apply Filters" button.
    FiltersApplied,
    /// The "Reset" button in the filter panel.
    FiltersReset,
    /// The close control on the result panel.
    ResultsClosed,
    /// A popular-search suggestion chip.
    SuggestionPicked(&'static str),
}

#[derive(Debug, Clone)]
pub enum PlaybackMessage {
    /// Play/pause pressed.
    Toggled,
    MuteToggled,
    /// Periodic animation tick while playing.
    Ticked,
}

#[derive(Debug, Clone)]
pub enum CarouselMessage {
    ScrolledLeft,
    ScrolledRight,
    /// The scrollable reported a new viewport (user drag or programmatic).
    Scrolled(scrollable::Viewport),
}
