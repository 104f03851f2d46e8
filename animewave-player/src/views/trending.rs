//! Horizontally scrolling "Trending Now" shelf.

use iced::widget::{
    button, column, container, horizontal_space, row, scrollable, text,
};
use iced::{Alignment, Element, Length};

use animewave_model::TrendingAnime;

use crate::message::{CarouselMessage, Message};
use crate::state::State;
use crate::theme::{self, AnimeWaveTheme};

pub fn view(state: &State) -> Element<'_, Message> {
    let carousel = &state.carousel;

    let header = row![
        text("Trending Now").size(26),
        horizontal_space(),
        arrow("‹", carousel.can_go_left(), CarouselMessage::ScrolledLeft),
        arrow("›", carousel.can_go_right(), CarouselMessage::ScrolledRight),
    ]
    .spacing(8)
    .align_y(Alignment::Center);

    let shelf = scrollable(
        row(state
            .trending
            .iter()
            .map(|item| trending_card(state, item)))
        .spacing(16)
        .padding(iced::Padding {
            bottom: 12.0,
            ..iced::Padding::ZERO
        }),
    )
    .id(carousel.scrollable_id.clone())
    .direction(scrollable::Direction::Horizontal(
        scrollable::Scrollbar::new(),
    ))
    .on_scroll(|viewport| {
        Message::Carousel(CarouselMessage::Scrolled(viewport))
    })
    .width(Length::Fill);

    column![header, shelf].spacing(16).into()
}

fn arrow(
    glyph: &str,
    enabled: bool,
    message: CarouselMessage,
) -> Element<'_, Message> {
    button(text(glyph).size(18))
        .style(theme::surface_button)
        .padding([4.0, 14.0])
        .on_press_maybe(enabled.then_some(Message::Carousel(message)))
        .into()
}

fn trending_card<'a>(
    state: &'a State,
    item: &'a TrendingAnime,
) -> Element<'a, Message> {
    let favorited = state.favorites.contains(item.id);

    let heart = button(text(if favorited { "♥" } else { "♡" }).size(14))
        .style(theme::heart_button(favorited))
        .padding([3.0, 9.0])
        .on_press(Message::FavoriteToggled(item.id));

    container(
        column![
            container(text("▶").size(26))
                .style(theme::poster)
                .center_x(Length::Fill)
                .center_y(160),
            text(item.title.as_str()).size(15),
            row![
                container(
                    text(format!("{} eps", item.episode_count))
                        .size(12)
                        .color(AnimeWaveTheme::TEXT_SECONDARY),
                )
                .style(theme::badge)
                .padding([3.0, 8.0]),
                text(format!("★ {:.1}", item.rating))
                    .size(12)
                    .color(AnimeWaveTheme::STAR),
                horizontal_space(),
                heart,
            ]
            .spacing(8)
            .align_y(Alignment::Center),
        ]
        .spacing(8),
    )
    .style(theme::card)
    .padding(12)
    .width(220)
    .into()
}
