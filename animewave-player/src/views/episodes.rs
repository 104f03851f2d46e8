//! "Continue Watching" episode grid with resume bars.

use iced::widget::{
    button, column, container, horizontal_space, progress_bar, row, text,
};
use iced::{Alignment, Element, Length};

use animewave_model::Episode;

use crate::message::{Message, PlaybackMessage};
use crate::state::State;
use crate::theme::{self, AnimeWaveTheme};

/// Cards per grid row.
const GRID_COLUMNS: usize = 3;

pub fn view(state: &State) -> Element<'_, Message> {
    let rows = column(state.episodes.chunks(GRID_COLUMNS).map(|chunk| {
        row(chunk.iter().map(|episode| {
            container(episode_card(episode))
                .width(Length::FillPortion(1))
                .into()
        }))
        .spacing(16)
        .into()
    }))
    .spacing(16);

    column![text("Continue Watching").size(26), rows]
        .spacing(16)
        .into()
}

fn episode_card(episode: &Episode) -> Element<'_, Message> {
    let thumbnail = container(
        button(text("▶").size(22))
            .style(theme::primary_button)
            .padding([8.0, 16.0])
            .on_press(Message::Playback(PlaybackMessage::Toggled)),
    )
    .style(theme::poster)
    .center_x(Length::Fill)
    .center_y(140);

    container(
        column![
            thumbnail,
            row![
                text(format!("Episode {}", episode.number))
                    .size(13)
                    .color(AnimeWaveTheme::TEXT_SECONDARY),
                horizontal_space(),
                container(
                    text(episode.duration.as_str())
                        .size(12)
                        .color(AnimeWaveTheme::TEXT_SECONDARY),
                )
                .style(theme::badge)
                .padding([3.0, 8.0]),
            ]
            .align_y(Alignment::Center),
            text(episode.title.as_str()).size(15),
            progress_bar(0.0..=100.0, episode.resume_progress * 100.0)
                .height(4)
                .style(theme::progress),
        ]
        .spacing(8),
    )
    .style(theme::card)
    .padding(12)
    .into()
}
