//! Interactive star rating

use crate::analytics::{Analytics, AnalyticsEvent};
use tracing::info;

/// Stars per rating widget
pub const STAR_COUNT: usize = 5;

/// Visual state of one star
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StarState {
    /// Under the pointer's hover range
    pub highlighted: bool,
    /// Within the current rating
    pub active: bool,
}

/// Star rating for one product
#[derive(Debug, Clone)]
pub struct RatingWidget {
    product_id: String,
    current: u8,
    stars: [StarState; STAR_COUNT],
    analytics: Analytics,
}

impl RatingWidget {
    /// Unrated widget for `product_id`
    pub fn new(product_id: impl Into<String>, analytics: Analytics) -> Self {
        Self {
            product_id: product_id.into(),
            current: 0,
            stars: [StarState::default(); STAR_COUNT],
            analytics,
        }
    }

    /// Current rating, 0 if unrated
    pub fn rating(&self) -> u8 {
        self.current
    }

    /// State of each star, left to right
    pub fn stars(&self) -> &[StarState; STAR_COUNT] {
        &self.stars
    }

    /// Pointer entered star `index`: highlight it and every star before it
    pub fn hover(&mut self, index: usize) {
        for (i, star) in self.stars.iter_mut().enumerate() {
            star.highlighted = i <= index;
        }
    }

    /// Pointer left the widget: drop highlights and show the current rating
    pub fn leave(&mut self) {
        self.reset_highlight();
    }

    /// Star `index` clicked: rate `index + 1` and report it
    ///
    /// Returns the new rating, or `None` for an index outside the widget.
    pub fn click(&mut self, index: usize) -> Option<u8> {
        if index >= STAR_COUNT {
            return None;
        }
        let rating = u8::try_from(index + 1).ok()?;
        self.current = rating;
        self.reset_highlight();

        info!("Rating submitted: product {}, rating {}", self.product_id, rating);
        self.analytics.report(
            &AnalyticsEvent::new("product_rating")
                .with("product_id", self.product_id.as_str())
                .with("rating", rating),
        );
        Some(rating)
    }

    fn reset_highlight(&mut self) {
        let current = usize::from(self.current);
        for (i, star) in self.stars.iter_mut().enumerate() {
            star.highlighted = false;
            star.active = i < current;
        }
    }
}
