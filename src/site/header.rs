//! Header hide-on-scroll behavior

use crate::timing::{SharedScheduler, Throttler};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Scroll offset below which the header never hides, in pixels
pub const HIDE_THRESHOLD_PX: u32 = 100;

/// Tracks scroll direction to hide the header while scrolling down
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HeaderScroll {
    last_scroll_top: u32,
    hidden: bool,
}

impl HeaderScroll {
    /// Header visible at the top of the page
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the header is translated out of view
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Handle a scroll event at offset `scroll_top`
    pub fn on_scroll(&mut self, scroll_top: u32) {
        self.hidden = scroll_top > self.last_scroll_top && scroll_top > HIDE_THRESHOLD_PX;
        self.last_scroll_top = scroll_top;
    }

    /// CSS transform for the header
    pub fn transform(&self) -> &'static str {
        if self.hidden {
            "translateY(-100%)"
        } else {
            "translateY(0)"
        }
    }
}

/// [`HeaderScroll`] fed through a throttle
///
/// A zero window handles every event.
#[derive(Clone)]
pub struct ThrottledHeader {
    state: Arc<Mutex<HeaderScroll>>,
    throttle: Throttler<u32>,
}

impl ThrottledHeader {
    /// Handle at most one scroll event per `window`
    pub fn new(scheduler: SharedScheduler, window: Duration) -> Self {
        let state = Arc::new(Mutex::new(HeaderScroll::new()));
        let sink = Arc::clone(&state);
        let throttle = Throttler::new(scheduler, window, move |top: u32| sink.lock().on_scroll(top));
        Self { state, throttle }
    }

    /// Report a scroll event; returns `true` if it was handled
    pub fn on_scroll(&self, scroll_top: u32) -> bool {
        self.throttle.call(scroll_top)
    }

    /// Current header state
    pub fn state(&self) -> HeaderScroll {
        *self.state.lock()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::SimulatedScheduler;

    #[test]
    fn hides_when_scrolling_down_past_threshold() {
        let mut header = HeaderScroll::new();
        header.on_scroll(50);
        assert!(!header.is_hidden(), "below threshold");
        header.on_scroll(150);
        assert!(header.is_hidden());
        assert_eq!(header.transform(), "translateY(-100%)");
    }

    #[test]
    fn shows_when_scrolling_up() {
        let mut header = HeaderScroll::new();
        header.on_scroll(400);
        header.on_scroll(300);
        assert!(!header.is_hidden());
        assert_eq!(header.transform(), "translateY(0)");
    }

    #[test]
    fn throttled_header_drops_events_in_window() {
        let scheduler = SimulatedScheduler::shared();
        let header = ThrottledHeader::new(scheduler.clone(), Duration::from_millis(100));

        assert!(header.on_scroll(200));
        assert!(!header.on_scroll(100));
        assert!(header.state().is_hidden());

        scheduler.advance(Duration::from_millis(100));
        assert!(header.on_scroll(100));
        assert!(!header.state().is_hidden());
    }

    #[test]
    fn zero_window_handles_every_event() {
        let scheduler = SimulatedScheduler::shared();
        let header = ThrottledHeader::new(scheduler, Duration::ZERO);

        assert!(header.on_scroll(200));
        assert!(header.on_scroll(100));
        assert!(!header.state().is_hidden());
    }
}
