//! Explore row: category chips and the (decorative) sort selector.

use iced::widget::{button, horizontal_space, pick_list, row, text};
use iced::{Alignment, Element};

use animewave_core::demo;

use crate::message::Message;
use crate::state::{ExploreSort, State};
use crate::theme;

pub fn view(state: &State) -> Element<'_, Message> {
    let sort = pick_list(
        ExploreSort::all(),
        Some(state.explore.sort),
        Message::ExploreSortSelected,
    )
    .text_size(14)
    .padding([8.0, 12.0]);

    let chips = row(demo::EXPLORE_CATEGORIES.iter().map(|&category| {
        let active = state.explore.active_category == category;
        button(text(category).size(13))
            .style(theme::chip_button(active))
            .padding([6.0, 14.0])
            .on_press(Message::CategorySelected(category))
            .into()
    }))
    .spacing(8);

    iced::widget::column![
        row![text("Explore").size(26), horizontal_space(), sort]
            .align_y(Alignment::Center),
        chips,
    ]
    .spacing(16)
    .into()
}
