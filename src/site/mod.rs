//! Page widgets and their wiring
//!
//! `Site` builds every widget from one [`SiteConfig`], sharing a single
//! scheduler, notification surface and analytics front between them.

pub mod affiliate;
pub mod header;
pub mod nav;
pub mod rating;
pub mod search;

pub use affiliate::{AffiliateCatalog, AffiliateLink};
pub use header::{HeaderScroll, ThrottledHeader};
pub use nav::MobileNav;
pub use rating::{RatingWidget, StarState};
pub use search::{PlaceholderIndex, SearchController, SearchIndex, SearchPanel, SearchResult};

use crate::analytics::Analytics;
use crate::config::SiteConfig;
use crate::notifications::{NotificationSurface, Presenter};
use crate::signup::{SignupController, SimulatedSubscription};
use crate::timing::SharedScheduler;
use std::sync::Arc;
use tracing::info;

/// All interactive parts of a page
pub struct Site {
    /// Notification presenter
    pub presenter: Presenter,
    /// Newsletter signup form
    pub signup: SignupController,
    /// Search box
    pub search: SearchController,
    /// Affiliate link table
    pub affiliates: AffiliateCatalog,
    /// Header hide-on-scroll
    pub header: ThrottledHeader,
    /// Mobile menu
    pub nav: MobileNav,
    analytics: Analytics,
}

impl Site {
    /// Wire up a page from `config`
    pub fn new(config: &SiteConfig, scheduler: SharedScheduler, analytics: Analytics) -> Self {
        let timings = &config.timings;
        let presenter = Presenter::new(
            NotificationSurface::shared(),
            Arc::clone(&scheduler),
            timings.into(),
        );
        let subscription =
            SimulatedSubscription::new(Arc::clone(&scheduler), timings.subscribe_latency());
        let signup = SignupController::new(
            presenter.clone(),
            Arc::new(subscription),
            analytics.clone(),
            config.messages.clone(),
        );
        let search = SearchController::new(
            Arc::clone(&scheduler),
            Arc::new(PlaceholderIndex),
            timings.search_debounce(),
            config.search.min_query_chars,
        );
        let affiliates = AffiliateCatalog::new(config.affiliate_urls.clone(), analytics.clone());
        let header = ThrottledHeader::new(scheduler, timings.scroll_throttle());

        info!(
            "Site ready: {} affiliate link(s), analytics {}",
            config.affiliate_urls.len(),
            if analytics.is_enabled() { "on" } else { "off" }
        );

        Self {
            presenter,
            signup,
            search,
            affiliates,
            header,
            nav: MobileNav::new(),
            analytics,
        }
    }

    /// A rating widget for `product_id` reporting to this site's analytics
    pub fn rating_widget(&self, product_id: &str) -> RatingWidget {
        RatingWidget::new(product_id, self.analytics.clone())
    }
}
