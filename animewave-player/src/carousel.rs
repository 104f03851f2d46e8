//! Scroll-position bookkeeping for the trending carousel.

use iced::widget::scrollable::{self, AbsoluteOffset};

/// Pixels one arrow press moves the shelf.
pub const SCROLL_STEP: f32 = 400.0;

/// State for the trending shelf's horizontal scrollable.
#[derive(Debug, Clone)]
pub struct CarouselState {
    /// Scrollable widget ID for programmatic scrolling.
    pub scrollable_id: scrollable::Id,
    /// Current scroll position in pixels.
    pub scroll_position: f32,
    /// Maximum scroll position (content width - viewport width). Learned
    /// from the first viewport report; effectively unbounded before that.
    pub max_scroll: f32,
}

impl CarouselState {
    pub fn new() -> Self {
        Self {
            scrollable_id: scrollable::Id::new("trending-carousel"),
            scroll_position: 0.0,
            max_scroll: f32::MAX,
        }
    }

    pub fn can_go_left(&self) -> bool {
        self.scroll_position > 0.0
    }

    pub fn can_go_right(&self) -> bool {
        self.scroll_position < self.max_scroll
    }

    pub fn go_left(&mut self) {
        self.scroll_position = (self.scroll_position - SCROLL_STEP).max(0.0);
    }

    pub fn go_right(&mut self) {
        self.scroll_position =
            (self.scroll_position + SCROLL_STEP).min(self.max_scroll);
    }

    /// Record what the scrollable actually shows, keeping arrow presses
    /// and user drags consistent.
    pub fn synced(&mut self, viewport: &scrollable::Viewport) {
        self.scroll_position = viewport.absolute_offset().x;
        let overflow = viewport.content_bounds().width - viewport.bounds().width;
        self.max_scroll = overflow.max(0.0);
    }

    pub fn offset(&self) -> AbsoluteOffset {
        AbsoluteOffset {
            x: self.scroll_position,
            y: 0.0,
        }
    }
}

impl Default for CarouselState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn left_scroll_clamps_at_zero() {
        let mut carousel = CarouselState::new();
        carousel.scroll_position = 150.0;
        carousel.go_left();
        assert_eq!(carousel.scroll_position, 0.0);
        assert!(!carousel.can_go_left());
    }

    #[test]
    fn right_scroll_clamps_at_max() {
        let mut carousel = CarouselState::new();
        carousel.max_scroll = 500.0;
        carousel.go_right();
        carousel.go_right();
        assert_eq!(carousel.scroll_position, 500.0);
        assert!(!carousel.can_go_right());
    }
}
