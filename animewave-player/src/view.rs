//! Top-level page composition.

use iced::widget::{column, container, horizontal_rule, scrollable, text};
use iced::{Element, Length};

use crate::message::Message;
use crate::state::State;
use crate::theme::AnimeWaveTheme;
use crate::views;

pub fn view(state: &State) -> Element<'_, Message> {
    let page = column![
        views::header::view(state),
        views::hero::view(state),
        views::discover::view(state),
        views::trending::view(state),
        views::explore::view(state),
        views::episodes::view(state),
        footer(),
    ]
    .spacing(40)
    .padding(24);

    scrollable(
        container(container(page).max_width(1280.0))
            .center_x(Length::Fill)
            .width(Length::Fill),
    )
    .into()
}

fn footer<'a>() -> Element<'a, Message> {
    column![
        horizontal_rule(1),
        text("AnimeWave").size(20).color(AnimeWaveTheme::ACCENT),
        text("Your premium anime streaming destination")
            .size(14)
            .color(AnimeWaveTheme::TEXT_SECONDARY),
        text("© 2026 AnimeWave. All rights reserved.")
            .size(12)
            .color(AnimeWaveTheme::TEXT_DIMMED),
    ]
    .spacing(8)
    .into()
}
