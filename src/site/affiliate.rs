//! Affiliate link decoration and click tracking

use crate::analytics::{Analytics, AnalyticsEvent};
use std::collections::BTreeMap;
use tracing::debug;

/// Attributes applied to a decorated affiliate link
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffiliateLink {
    /// Product the link points to
    pub product_id: String,
    /// Affiliate URL
    pub href: String,
    /// Link target
    pub target: &'static str,
    /// Link relationship
    pub rel: &'static str,
}

/// Product id to affiliate URL table
#[derive(Debug, Clone)]
pub struct AffiliateCatalog {
    urls: BTreeMap<String, String>,
    analytics: Analytics,
}

impl AffiliateCatalog {
    /// Catalog over `urls`, reporting clicks to `analytics`
    pub fn new(urls: BTreeMap<String, String>, analytics: Analytics) -> Self {
        Self { urls, analytics }
    }

    /// Link attributes for `product_id`, if the product has an affiliate URL
    pub fn decorate(&self, product_id: &str) -> Option<AffiliateLink> {
        let href = self.urls.get(product_id)?;
        Some(AffiliateLink {
            product_id: product_id.to_string(),
            href: href.clone(),
            target: "_blank",
            rel: "noopener noreferrer sponsored",
        })
    }

    /// Report a click on an affiliate link
    pub fn track_click(&self, product_name: &str, product_id: &str, link_url: &str) {
        debug!("Affiliate click on {}", product_id);
        self.analytics.report(
            &AnalyticsEvent::new("affiliate_click")
                .with("product_name", product_name)
                .with("product_id", product_id)
                .with("link_url", link_url),
        );
    }

    /// Disclosure shown before leaving for the partner site
    pub fn confirmation_prompt(product_name: &str) -> String {
        format!(
            "You're about to visit our affiliate partner to view \"{product_name}\". \
             We may earn a commission from qualifying purchases at no extra cost to you. Continue?"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::MemoryAnalytics;
    use crate::config::SiteConfig;
    use std::sync::Arc;

    #[test]
    fn decorates_known_products() {
        let catalog =
            AffiliateCatalog::new(SiteConfig::default().affiliate_urls, Analytics::disabled());

        let link = catalog.decorate("echo-dot").unwrap();
        assert_eq!(link.href, "https://amzn.to/3example1");
        assert_eq!(link.target, "_blank");
        assert_eq!(link.rel, "noopener noreferrer sponsored");
        assert!(catalog.decorate("unknown").is_none());
    }

    #[test]
    fn click_reports_event() {
        let sink = Arc::new(MemoryAnalytics::new());
        let catalog = AffiliateCatalog::new(BTreeMap::new(), Analytics::new(sink.clone()));

        catalog.track_click("Echo Dot", "echo-dot", "https://amzn.to/3example1");

        let events = sink.named("affiliate_click");
        assert_eq!(events.len(), 1);
        assert_eq!(
            events[0].property("product_name").and_then(|v| v.as_str()),
            Some("Echo Dot")
        );
        assert_eq!(
            events[0].property("link_url").and_then(|v| v.as_str()),
            Some("https://amzn.to/3example1")
        );
    }

    #[test]
    fn prompt_names_product() {
        let prompt = AffiliateCatalog::confirmation_prompt("AirPods Pro");
        assert!(prompt.starts_with("You're about to visit our affiliate partner to view \"AirPods Pro\"."));
        assert!(prompt.ends_with("Continue?"));
    }
}
