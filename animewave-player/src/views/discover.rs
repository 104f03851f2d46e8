//! Search section: query input, filter panel, and the result grid.
//!
//! The result area renders one of three distinct states: suggestion
//! chips before any search, a "no results" panel for a search that
//! matched nothing, and the card grid otherwise.

use iced::widget::{
    button, column, container, horizontal_space, pick_list, row, slider,
    text, text_input,
};
use iced::{Alignment, Element, Length};

use animewave_core::demo;
use animewave_model::{
    AnimeEntry, Genre, RATING_MAX, RATING_MIN, SortOrder, YEAR_MAX, YEAR_MIN,
};

use crate::message::{Message, PlaybackMessage, SearchMessage};
use crate::state::State;
use crate::theme::{self, AnimeWaveTheme};

/// Cards per result-grid row.
const GRID_COLUMNS: usize = 4;

pub fn view(state: &State) -> Element<'_, Message> {
    let search = &state.search;

    let input = text_input("Search anime titles...", &search.criteria.query)
        .on_input(|query| {
            Message::Search(SearchMessage::QueryChanged(query))
        })
        .size(16)
        .padding(12);

    let clear = button(text("✕").size(14))
        .style(theme::surface_button)
        .padding([10.0, 14.0])
        .on_press_maybe(
            search
                .criteria
                .has_query()
                .then_some(Message::Search(SearchMessage::QueryCleared)),
        );

    let filters_toggle = button(text("⚙ Filters").size(14))
        .style(theme::chip_button(search.show_filters))
        .padding([10.0, 16.0])
        .on_press(Message::Search(SearchMessage::FiltersToggled));

    let mut section = column![
        text("Discover Anime").size(26),
        row![input, clear, filters_toggle]
            .spacing(8)
            .align_y(Alignment::Center),
    ]
    .spacing(16);

    if search.show_filters {
        section = section.push(filter_panel(state));
    }

    section = section.push(match &search.results {
        None => suggestions(),
        Some(results) if results.is_empty() => no_results(state),
        Some(results) => result_grid(state, results),
    });

    section.into()
}

fn filter_panel(state: &State) -> Element<'_, Message> {
    let criteria = &state.search.criteria;

    let genre_rows = column(Genre::all().chunks(7).map(|chunk| {
        row(chunk.iter().map(|&genre| {
            button(text(genre.label()).size(13))
                .style(theme::chip_button(criteria.genres.contains(&genre)))
                .padding([6.0, 12.0])
                .on_press(Message::Search(SearchMessage::GenreToggled(genre)))
                .into()
        }))
        .spacing(8)
        .into()
    }))
    .spacing(8);

    let year_range = row![
        column![
            dim_label(format!("From: {}", criteria.year_from)),
            slider(YEAR_MIN..=YEAR_MAX, criteria.year_from, |year| {
                Message::Search(SearchMessage::YearFromChanged(year))
            }),
        ]
        .spacing(6)
        .width(Length::FillPortion(1)),
        column![
            dim_label(format!("To: {}", criteria.year_to)),
            slider(YEAR_MIN..=YEAR_MAX, criteria.year_to, |year| {
                Message::Search(SearchMessage::YearToChanged(year))
            }),
        ]
        .spacing(6)
        .width(Length::FillPortion(1)),
    ]
    .spacing(24);

    let rating = column![
        dim_label(format!("Minimum rating: {:.1}+", criteria.min_rating)),
        slider(RATING_MIN..=RATING_MAX, criteria.min_rating, |rating| {
            Message::Search(SearchMessage::MinRatingChanged(rating))
        })
        .step(0.1),
    ]
    .spacing(6);

    let sort = pick_list(SortOrder::all(), Some(criteria.sort), |sort| {
        Message::Search(SearchMessage::SortSelected(sort))
    })
    .text_size(14)
    .padding([8.0, 12.0]);

    let actions = row![
        button(text("Reset").size(14))
            .style(theme::surface_button)
            .padding([8.0, 18.0])
            .on_press(Message::Search(SearchMessage::FiltersReset)),
        button(text("Apply Filters").size(14))
            .style(theme::primary_button)
            .padding([8.0, 18.0])
            .on_press(Message::Search(SearchMessage::FiltersApplied)),
    ]
    .spacing(8);

    container(
        column![
            dim_label("Genres".to_string()),
            genre_rows,
            year_range,
            rating,
            row![dim_label("Sort by".to_string()), sort]
                .spacing(12)
                .align_y(Alignment::Center),
            actions,
        ]
        .spacing(14),
    )
    .style(theme::panel)
    .padding(20)
    .width(Length::Fill)
    .into()
}

fn suggestions<'a>() -> Element<'a, Message> {
    let chips = row(demo::POPULAR_SEARCHES.iter().map(|&suggestion| {
        button(text(suggestion).size(13))
            .style(theme::chip_button(false))
            .padding([6.0, 14.0])
            .on_press(Message::Search(SearchMessage::SuggestionPicked(
                suggestion,
            )))
            .into()
    }))
    .spacing(8);

    column![dim_label("Popular searches:".to_string()), chips]
        .spacing(10)
        .into()
}

fn no_results(state: &State) -> Element<'_, Message> {
    let criteria = &state.search.criteria;

    let mut body = column![
        text(format!("No results found for \"{}\"", criteria.query)).size(18),
        dim_label(
            "Try a different title, or loosen the active filters."
                .to_string(),
        ),
    ]
    .spacing(8);

    if !criteria.genres.is_empty() {
        body = body.push(
            button(text("Clear filters").size(14))
                .style(theme::surface_button)
                .padding([8.0, 18.0])
                .on_press(Message::Search(SearchMessage::FiltersReset)),
        );
    }

    container(body)
        .style(theme::panel)
        .padding(28)
        .width(Length::Fill)
        .into()
}

fn result_grid<'a>(
    state: &'a State,
    results: &'a [AnimeEntry],
) -> Element<'a, Message> {
    let plural = if results.len() == 1 { "result" } else { "results" };
    let header = row![
        text(format!("Found {} {plural}", results.len())).size(18),
        horizontal_space(),
        button(text("✕ Close").size(13))
            .style(theme::surface_button)
            .padding([6.0, 14.0])
            .on_press(Message::Search(SearchMessage::ResultsClosed)),
    ]
    .align_y(Alignment::Center);

    let rows = column(results.chunks(GRID_COLUMNS).map(|chunk| {
        row(chunk.iter().map(|entry| {
            container(result_card(state, entry))
                .width(Length::FillPortion(1))
                .into()
        }))
        .spacing(16)
        .into()
    }))
    .spacing(16);

    column![header, rows].spacing(16).into()
}

fn result_card<'a>(
    state: &'a State,
    entry: &'a AnimeEntry,
) -> Element<'a, Message> {
    let favorited = state.favorites.contains(entry.id);

    let poster = container(text("▶").size(30))
        .style(theme::poster)
        .center_x(Length::Fill)
        .center_y(220);

    let heart = button(text(if favorited { "♥" } else { "♡" }).size(15))
        .style(theme::heart_button(favorited))
        .padding([4.0, 10.0])
        .on_press(Message::FavoriteToggled(entry.id));

    let genres = entry
        .genres
        .iter()
        .map(|genre| genre.label())
        .collect::<Vec<_>>()
        .join(" · ");

    let watch = button(text("Watch").size(13))
        .style(theme::primary_button)
        .padding([6.0, 14.0])
        .on_press(Message::Playback(PlaybackMessage::Toggled));

    container(
        column![
            poster,
            row![
                text(format!("★ {:.1}", entry.rating))
                    .size(13)
                    .color(AnimeWaveTheme::STAR),
                horizontal_space(),
                heart,
            ]
            .align_y(Alignment::Center),
            text(entry.title.as_str()).size(16),
            dim_label(genres),
            row![
                container(dim_label(entry.year.to_string()))
                    .style(theme::badge)
                    .padding([3.0, 8.0]),
                horizontal_space(),
                watch,
            ]
            .align_y(Alignment::Center),
        ]
        .spacing(8),
    )
    .style(theme::card)
    .padding(12)
    .into()
}

fn dim_label<'a>(label: String) -> Element<'a, Message> {
    text(label)
        .size(13)
        .color(AnimeWaveTheme::TEXT_SECONDARY)
        .into()
}
