//! Reducers. Every handler takes the state and a message and runs to
//! completion; the only task ever returned is the programmatic carousel
//! scroll.

use iced::Task;
use iced::widget::scrollable;

use crate::message::{
    CarouselMessage, Message, PlaybackMessage, SearchMessage,
};
use crate::state::State;

pub fn update(state: &mut State, message: Message) -> Task<Message> {
    match message {
        Message::Search(message) => {
            update_search(state, message);
            Task::none()
        }
        Message::Playback(message) => {
            update_playback(state, message);
            Task::none()
        }
        Message::Carousel(message) => update_carousel(state, message),
        Message::FavoriteToggled(id) => {
            let marked = state.favorites.toggle(id);
            log::debug!("favorite {id}: {}", if marked { "on" } else { "off" });
            Task::none()
        }
        Message::CategorySelected(category) => {
            state.explore.active_category = category;
            Task::none()
        }
        Message::ExploreSortSelected(sort) => {
            state.explore.sort = sort;
            Task::none()
        }
    }
}

fn update_search(state: &mut State, message: SearchMessage) {
    let search = &mut state.search;
    match message {
        SearchMessage::QueryChanged(query) => {
            search.criteria.set_query(query);
            search.refresh(&state.catalog);
        }
        SearchMessage::QueryCleared => {
            search.criteria.clear_query();
            search.close_results();
        }
        SearchMessage::FiltersToggled => {
            search.show_filters = !search.show_filters;
        }
        SearchMessage::GenreToggled(genre) => {
            search.criteria.toggle_genre(genre);
            refresh_if_searching(state);
        }
        SearchMessage::YearFromChanged(year) => {
            search.criteria.set_year_from(year);
            refresh_if_searching(state);
        }
        SearchMessage::YearToChanged(year) => {
            search.criteria.set_year_to(year);
            refresh_if_searching(state);
        }
        SearchMessage::MinRatingChanged(rating) => {
            search.criteria.set_min_rating(rating);
            refresh_if_searching(state);
        }
        SearchMessage::SortSelected(sort) => {
            search.criteria.set_sort(sort);
            refresh_if_searching(state);
        }
        SearchMessage::FiltersApplied => {
            refresh_if_searching(state);
        }
        SearchMessage::FiltersReset => {
            search.criteria.reset_filters();
            refresh_if_searching(state);
        }
        SearchMessage::ResultsClosed => {
            search.close_results();
        }
        SearchMessage::SuggestionPicked(suggestion) => {
            search.criteria.set_query(suggestion);
            search.refresh(&state.catalog);
        }
    }
}

/// Filter mutations re-run an active search immediately, so the result
/// panel always reflects the criteria on screen. With no live query the
/// new criteria simply wait for the next keystroke.
fn refresh_if_searching(state: &mut State) {
    if state.search.criteria.has_query() {
        state.search.refresh(&state.catalog);
    }
}

fn update_playback(state: &mut State, message: PlaybackMessage) {
    match message {
        PlaybackMessage::Toggled => state.playback.toggle(),
        PlaybackMessage::MuteToggled => state.playback.toggle_mute(),
        PlaybackMessage::Ticked => state.playback.tick(),
    }
}

fn update_carousel(state: &mut State, message: CarouselMessage) -> Task<Message> {
    match message {
        CarouselMessage::ScrolledLeft => {
            state.carousel.go_left();
            scrollable::scroll_to(
                state.carousel.scrollable_id.clone(),
                state.carousel.offset(),
            )
        }
        CarouselMessage::ScrolledRight => {
            state.carousel.go_right();
            scrollable::scroll_to(
                state.carousel.scrollable_id.clone(),
                state.carousel.offset(),
            )
        }
        CarouselMessage::Scrolled(viewport) => {
            state.carousel.synced(&viewport);
            Task::none()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use animewave_model::{AnimeId, Genre, SortOrder, YEAR_MAX, YEAR_MIN};

    fn dispatch(state: &mut State, message: Message) {
        let _ = update(state, message);
    }

    fn type_query(state: &mut State, query: &str) {
        dispatch(
            state,
            Message::Search(SearchMessage::QueryChanged(query.to_string())),
        );
    }

    #[test]
    fn keystrokes_drive_the_result_tristate() {
        let mut state = State::default();
        assert!(!state.search.has_searched());

        type_query(&mut state, "titan");
        let results = state.search.results.as_ref().expect("searched");
        assert_eq!(results.len(), 1);

        // Emptying the input clears the panel rather than showing a
        // match-everything result.
        type_query(&mut state, "");
        assert!(!state.search.has_searched());
    }

    #[test]
    fn zero_match_query_shows_an_empty_panel() {
        let mut state = State::default();
        type_query(&mut state, "nonexistent-xyz");
        assert_eq!(state.search.results.as_deref(), Some(&[] as &[_]));
    }

    #[test]
    fn filter_changes_rerun_an_active_search() {
        let mut state = State::default();
        type_query(&mut state, "an");
        let unfiltered = state.search.results.clone().expect("searched");

        dispatch(
            &mut state,
            Message::Search(SearchMessage::GenreToggled(Genre::Horror)),
        );
        let filtered = state.search.results.clone().expect("still searched");
        assert!(filtered.len() < unfiltered.len());
        assert!(filtered.iter().all(|e| e.has_genre(Genre::Horror)));
    }

    #[test]
    fn filter_changes_without_a_query_do_not_search() {
        let mut state = State::default();
        dispatch(
            &mut state,
            Message::Search(SearchMessage::MinRatingChanged(4.8)),
        );
        assert!(!state.search.has_searched());
    }

    #[test]
    fn slider_input_is_clamped_through_messages() {
        let mut state = State::default();
        dispatch(
            &mut state,
            Message::Search(SearchMessage::MinRatingChanged(42.0)),
        );
        assert_eq!(state.search.criteria.min_rating, 5.0);

        dispatch(
            &mut state,
            Message::Search(SearchMessage::YearFromChanged(1700)),
        );
        assert_eq!(state.search.criteria.year_from, YEAR_MIN);
    }

    #[test]
    fn reset_restores_filters_but_keeps_results_live() {
        let mut state = State::default();
        type_query(&mut state, "a");
        dispatch(
            &mut state,
            Message::Search(SearchMessage::GenreToggled(Genre::Horror)),
        );
        dispatch(&mut state, Message::Search(SearchMessage::SortSelected(
            SortOrder::RatingDesc,
        )));

        dispatch(&mut state, Message::Search(SearchMessage::FiltersReset));

        assert!(state.search.criteria.genres.is_empty());
        assert_eq!(state.search.criteria.sort, SortOrder::Relevance);
        assert_eq!(state.search.criteria.year_to, YEAR_MAX);
        assert!(state.search.has_searched(), "query survives a reset");
    }

    #[test]
    fn favorite_toggle_leaves_results_untouched() {
        let mut state = State::default();
        type_query(&mut state, "man");
        let before = state.search.results.clone();

        dispatch(&mut state, Message::FavoriteToggled(AnimeId::new(11)));
        dispatch(&mut state, Message::FavoriteToggled(AnimeId::new(1)));

        assert_eq!(state.search.results, before);
        assert!(state.favorites.contains(AnimeId::new(11)));
    }

    #[test]
    fn playback_tick_is_isolated_from_search() {
        let mut state = State::default();
        type_query(&mut state, "titan");
        let before = state.search.results.clone();

        dispatch(&mut state, Message::Playback(PlaybackMessage::Toggled));
        for _ in 0..10 {
            dispatch(&mut state, Message::Playback(PlaybackMessage::Ticked));
        }

        assert_eq!(state.playback.progress, 5.0);
        assert_eq!(state.search.results, before);
    }

    #[test]
    fn carousel_arrows_move_by_one_step() {
        let mut state = State::default();
        state.carousel.max_scroll = 1000.0;

        dispatch(
            &mut state,
            Message::Carousel(CarouselMessage::ScrolledRight),
        );
        assert_eq!(state.carousel.scroll_position, 400.0);

        dispatch(&mut state, Message::Carousel(CarouselMessage::ScrolledLeft));
        assert_eq!(state.carousel.scroll_position, 0.0);
    }
}
