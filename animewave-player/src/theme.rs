//! Dark theme and widget styles.

use iced::widget::{button, container, progress_bar};
use iced::{Background, Border, Color, Shadow, Theme, theme};

/// Dark surface palette with an indigo accent, transposed from the web
/// client's styling.
#[derive(Debug, Clone, Copy)]
pub struct AnimeWaveTheme;

impl AnimeWaveTheme {
    // Core colors
    pub const ACCENT: Color = Color::from_rgb(0.388, 0.4, 0.945); // #6366F1
    pub const ACCENT_HOVER: Color = Color::from_rgb(0.31, 0.27, 0.9); // #4F46E5
    pub const ACCENT_SOFT: Color = Color::from_rgba(0.388, 0.4, 0.945, 0.2);

    // Surfaces
    pub const BACKGROUND: Color = Color::from_rgb(0.06, 0.09, 0.16); // #0F172A
    pub const SURFACE: Color = Color::from_rgb(0.12, 0.16, 0.23); // #1E293B
    pub const SURFACE_LIGHT: Color = Color::from_rgb(0.2, 0.25, 0.33); // #334155
    pub const BORDER_COLOR: Color = Color::from_rgb(0.2, 0.25, 0.33);

    // Text colors
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.97, 0.98, 0.99);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.58, 0.64, 0.72); // #94A3B8
    pub const TEXT_DIMMED: Color = Color::from_rgb(0.4, 0.45, 0.55);

    // Status colors
    pub const SUCCESS: Color = Color::from_rgb(0.13, 0.77, 0.37);
    pub const DANGER: Color = Color::from_rgb(0.94, 0.27, 0.27);
    pub const STAR: Color = Color::from_rgb(0.98, 0.75, 0.14); // rating badge

    pub fn theme() -> Theme {
        let palette = theme::Palette {
            background: Self::BACKGROUND,
            text: Self::TEXT_PRIMARY,
            primary: Self::ACCENT,
            success: Self::SUCCESS,
            danger: Self::DANGER,
        };

        Theme::custom("AnimeWave Dark".to_string(), palette)
    }
}

fn rounded(radius: f32) -> Border {
    Border {
        color: Color::TRANSPARENT,
        width: 0.0,
        radius: radius.into(),
    }
}

/// Panel surface: filter panel, result panel, search section.
pub fn panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(AnimeWaveTheme::SURFACE)),
        border: Border {
            color: AnimeWaveTheme::BORDER_COLOR,
            width: 1.0,
            radius: 12.0.into(),
        },
        ..container::Style::default()
    }
}

/// Card surface for result, trending, and episode cards.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(AnimeWaveTheme::SURFACE_LIGHT)),
        border: rounded(12.0),
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: iced::Vector::new(0.0, 2.0),
            blur_radius: 8.0,
        },
        ..container::Style::default()
    }
}

/// Poster stand-in: a flat accent-tinted block (images are never fetched).
pub fn poster(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(AnimeWaveTheme::ACCENT_SOFT)),
        text_color: Some(AnimeWaveTheme::TEXT_SECONDARY),
        border: rounded(8.0),
        ..container::Style::default()
    }
}

/// Small rounded badge (rating, year, episode count).
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(AnimeWaveTheme::SURFACE)),
        text_color: Some(AnimeWaveTheme::TEXT_SECONDARY),
        border: rounded(999.0),
        ..container::Style::default()
    }
}

/// Primary action button ("Watch Now", "Apply Filters").
pub fn primary_button(
    _theme: &Theme,
    status: button::Status,
) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            AnimeWaveTheme::ACCENT_HOVER
        }
        _ => AnimeWaveTheme::ACCENT,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: AnimeWaveTheme::TEXT_PRIMARY,
        border: rounded(20.0),
        ..button::Style::default()
    }
}

/// Muted surface button ("Reset", close controls, carousel arrows).
pub fn surface_button(
    _theme: &Theme,
    status: button::Status,
) -> button::Style {
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => {
            AnimeWaveTheme::SURFACE_LIGHT
        }
        button::Status::Disabled => AnimeWaveTheme::BACKGROUND,
        _ => AnimeWaveTheme::SURFACE,
    };
    let text_color = if status == button::Status::Disabled {
        AnimeWaveTheme::TEXT_DIMMED
    } else {
        AnimeWaveTheme::TEXT_PRIMARY
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        border: rounded(20.0),
        ..button::Style::default()
    }
}

/// Pill chip that highlights while selected (genres, categories,
/// suggestions, filter toggle).
pub fn chip_button(
    selected: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = if selected {
            AnimeWaveTheme::ACCENT
        } else {
            match status {
                button::Status::Hovered | button::Status::Pressed => {
                    AnimeWaveTheme::SURFACE_LIGHT
                }
                _ => AnimeWaveTheme::SURFACE,
            }
        };
        let text_color = if selected {
            AnimeWaveTheme::TEXT_PRIMARY
        } else {
            AnimeWaveTheme::TEXT_SECONDARY
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: rounded(999.0),
            ..button::Style::default()
        }
    }
}

/// Heart control; accent-filled while the entry is favorited.
pub fn heart_button(
    favorited: bool,
) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme, status| {
        let background = if favorited {
            AnimeWaveTheme::ACCENT_SOFT
        } else {
            AnimeWaveTheme::SURFACE
        };
        let text_color = match (favorited, status) {
            (true, _) => AnimeWaveTheme::ACCENT,
            (false, button::Status::Hovered) => AnimeWaveTheme::TEXT_PRIMARY,
            _ => AnimeWaveTheme::TEXT_SECONDARY,
        };
        button::Style {
            background: Some(Background::Color(background)),
            text_color,
            border: rounded(999.0),
            ..button::Style::default()
        }
    }
}

/// Accent-filled progress bar for playback and episode resume bars.
pub fn progress(_theme: &Theme) -> progress_bar::Style {
    progress_bar::Style {
        background: Background::Color(AnimeWaveTheme::SURFACE_LIGHT),
        bar: Background::Color(AnimeWaveTheme::ACCENT),
        border: rounded(4.0),
    }
}
