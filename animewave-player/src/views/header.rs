//! Top navigation bar.

use iced::widget::{container, horizontal_space, row, text};
use iced::Element;

use crate::message::Message;
use crate::state::State;
use crate::theme::{self, AnimeWaveTheme};

pub fn view(state: &State) -> Element<'_, Message> {
    let brand = text("AnimeWave").size(26).color(AnimeWaveTheme::ACCENT);

    // Navigation labels are decorative; the whole client is one page.
    let nav = row![
        nav_label("Home"),
        nav_label("Trending"),
        nav_label("Genres"),
        nav_label("My List"),
    ]
    .spacing(24);

    let favorites = container(
        text(format!("♥ {}", state.favorites.len()))
            .size(14)
            .color(AnimeWaveTheme::TEXT_SECONDARY),
    )
    .style(theme::badge)
    .padding([6.0, 12.0]);

    row![brand, horizontal_space(), nav, horizontal_space(), favorites]
        .spacing(16)
        .align_y(iced::Alignment::Center)
        .into()
}

fn nav_label<'a>(label: &'a str) -> Element<'a, Message> {
    text(label)
        .size(15)
        .color(AnimeWaveTheme::TEXT_SECONDARY)
        .into()
}
