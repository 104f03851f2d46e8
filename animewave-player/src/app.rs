//! Application wiring.

use iced::{Font, Settings, Size};

use crate::{subscriptions, theme, update, view};

/// Build and run the AnimeWave client.
pub fn run() -> iced::Result {
    iced::application("AnimeWave", update::update, view::view)
        .settings(default_settings())
        .subscription(subscriptions::subscription)
        .theme(|_state| theme::AnimeWaveTheme::theme())
        .window(iced::window::Settings {
            size: Size::new(1280.0, 800.0),
            resizable: true,
            ..Default::default()
        })
        .run()
}

fn default_settings() -> Settings {
    Settings {
        id: Some("animewave".to_string()),
        antialiasing: true,
        default_font: Font::DEFAULT,
        ..Default::default()
    }
}
