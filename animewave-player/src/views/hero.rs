//! Hero banner with the featured title and its cosmetic player.

use iced::widget::{button, column, container, progress_bar, row, text};
use iced::{Alignment, Element, Length};

use crate::message::{Message, PlaybackMessage};
use crate::state::State;
use crate::theme::{self, AnimeWaveTheme};

pub fn view(state: &State) -> Element<'_, Message> {
    let featured = &state.featured;
    let playback = &state.playback;

    let badges = row![
        badge(format!("★ {:.1}", featured.rating), AnimeWaveTheme::STAR),
        badge(
            featured.release_year.to_string(),
            AnimeWaveTheme::TEXT_SECONDARY,
        ),
        badge(
            format!("{} Episodes", featured.episodes),
            AnimeWaveTheme::TEXT_SECONDARY,
        ),
    ]
    .spacing(8);

    let genres = row(featured.genres.iter().map(|genre| {
        container(text(genre.label()).size(13))
            .style(theme::badge)
            .padding([4.0, 10.0])
            .into()
    }))
    .spacing(8);

    let play_label = if playback.playing { "⏸ Pause" } else { "▶ Watch Now" };
    let mute_label = if playback.muted { "🔇 Unmute" } else { "🔊 Mute" };
    let list_label = if state.favorites.contains(featured.id) {
        "✓ In My List"
    } else {
        "+ Add to List"
    };

    let controls = row![
        button(text(play_label).size(15))
            .style(theme::primary_button)
            .padding([10.0, 22.0])
            .on_press(Message::Playback(PlaybackMessage::Toggled)),
        button(text(list_label).size(15))
            .style(theme::surface_button)
            .padding([10.0, 22.0])
            .on_press(Message::FavoriteToggled(featured.id)),
        button(text(mute_label).size(15))
            .style(theme::surface_button)
            .padding([10.0, 22.0])
            .on_press(Message::Playback(PlaybackMessage::MuteToggled)),
    ]
    .spacing(12);

    let mut banner = column![
        text("FEATURED").size(12).color(AnimeWaveTheme::ACCENT),
        text(featured.title.as_str()).size(38),
        badges,
        genres,
        text(featured.description.as_str())
            .size(15)
            .color(AnimeWaveTheme::TEXT_SECONDARY),
        controls,
    ]
    .spacing(14)
    .max_width(720.0);

    // The fake player surfaces only while "playing": a bar that fills on
    // a timer and a timestamp derived from it.
    if playback.playing || playback.progress > 0.0 {
        banner = banner
            .push(
                progress_bar(0.0..=100.0, playback.progress)
                    .height(6)
                    .style(theme::progress),
            )
            .push(
                text(playback.timestamp())
                    .size(13)
                    .color(AnimeWaveTheme::TEXT_SECONDARY),
            );
    }

    container(banner)
        .style(theme::panel)
        .padding(32)
        .width(Length::Fill)
        .into()
}

fn badge<'a>(label: String, color: iced::Color) -> Element<'a, Message> {
    container(
        row![text(label).size(13).color(color)].align_y(Alignment::Center),
    )
    .style(theme::badge)
    .padding([4.0, 10.0])
    .into()
}
