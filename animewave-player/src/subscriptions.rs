//! Root-level subscription composition.

use std::time::Duration;

use iced::Subscription;

use crate::message::{Message, PlaybackMessage};
use crate::state::State;

/// Milliseconds between playback animation ticks.
const TICK_INTERVAL_MS: u64 = 100;

/// The only time-based behavior in the client: the cosmetic playback
/// tick, active while the hero banner "plays".
pub fn subscription(state: &State) -> Subscription<Message> {
    if state.playback.playing {
        iced::time::every(Duration::from_millis(TICK_INTERVAL_MS))
            .map(|_| Message::Playback(PlaybackMessage::Ticked))
    } else {
        Subscription::none()
    }
}
