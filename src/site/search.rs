//! Debounced site search box

use crate::timing::{Debouncer, SharedScheduler};
use parking_lot::Mutex;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

/// Text shown when a search yields nothing
pub const NO_RESULTS: &str = "No results found.";

/// Kind of page a result links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    /// Product review
    Review,
    /// Blog article
    Blog,
}

/// One search hit
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchResult {
    /// Page title
    pub title: String,
    /// Relative URL
    pub url: String,
    /// Page kind
    pub kind: ResultKind,
}

/// Source of search results
pub trait SearchIndex: Send + Sync {
    /// Results for `query`
    fn search(&self, query: &str) -> Vec<SearchResult>;
}

/// Fixed results until a real index exists
#[derive(Debug, Clone, Copy, Default)]
pub struct PlaceholderIndex;

impl SearchIndex for PlaceholderIndex {
    fn search(&self, _query: &str) -> Vec<SearchResult> {
        vec![
            SearchResult {
                title: "Amazon Echo Dot Review".to_string(),
                url: "review-echo-dot.html".to_string(),
                kind: ResultKind::Review,
            },
            SearchResult {
                title: "Smart Home Setup Guide".to_string(),
                url: "blog-smart-home-setup.html".to_string(),
                kind: ResultKind::Blog,
            },
        ]
    }
}

/// The results dropdown under the search box
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPanel {
    visible: bool,
    results: Vec<SearchResult>,
    query: Option<String>,
}

impl SearchPanel {
    /// Whether the panel is shown
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Results currently listed
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    /// Query the listed results answer
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// Placeholder text, shown when visible with no results
    pub fn message(&self) -> Option<&'static str> {
        (self.visible && self.results.is_empty()).then_some(NO_RESULTS)
    }

    fn show(&mut self, query: String, results: Vec<SearchResult>) {
        self.query = Some(query);
        self.results = results;
        self.visible = true;
    }

    fn hide(&mut self) {
        self.query = None;
        self.results.clear();
        self.visible = false;
    }
}

/// Search box handler
///
/// Input is debounced; queries shorter than the minimum cancel any pending
/// search and hide the panel.
#[derive(Clone)]
pub struct SearchController {
    panel: Arc<Mutex<SearchPanel>>,
    debouncer: Debouncer<String>,
    min_chars: usize,
}

impl SearchController {
    /// Search `index` after `debounce` of typing inactivity
    pub fn new(
        scheduler: SharedScheduler,
        index: Arc<dyn SearchIndex>,
        debounce: Duration,
        min_chars: usize,
    ) -> Self {
        let panel = Arc::new(Mutex::new(SearchPanel::default()));
        let target = Arc::clone(&panel);
        let debouncer = Debouncer::new(scheduler, debounce, move |query: String| {
            info!("Searching for: {}", query);
            let results = index.search(&query);
            target.lock().show(query, results);
        });
        Self {
            panel,
            debouncer,
            min_chars,
        }
    }

    /// The search box text changed to `text`
    pub fn on_input(&self, text: &str) {
        let query = text.trim();
        if query.chars().count() < self.min_chars {
            self.debouncer.cancel();
            self.panel.lock().hide();
            return;
        }
        self.debouncer.call(query.to_string());
    }

    /// Whether a search is waiting for the debounce window
    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Snapshot of the results panel
    pub fn panel(&self) -> SearchPanel {
        self.panel.lock().clone()
    }
}
