use crate::dummyjson::models::{CatalogFetchResult, Product};
use crate::pagination::Pager;
use log::{debug, error};
use std::ops::RangeInclusive;
use time::OffsetDateTime;

/// The only fetch failure text ever shown to the user. The underlying
/// cause goes to the log instead.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching products.";

/// Catalog load lifecycle. Starts as `Loading` and transitions exactly
/// once to `Failed` or `Ready`; it never reverts.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready(CatalogFetchResult),
}

/// Session-scoped state: the load lifecycle plus the pagination cursor.
///
/// Holds everything the rendering surface needs, so the view logic is
/// testable without any surface attached. All projections are recomputed
/// from (LoadState, Pager) on demand; nothing is cached.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    load_state: LoadState,
    pager: Pager,
    active: bool,
}

impl CatalogSession {
    pub fn new() -> Self {
        Self {
            load_state: LoadState::Loading,
            pager: Pager::default(),
            active: true,
        }
    }

    /// Deliver the fetch outcome into the session. Applied at most once:
    /// results arriving after a transition, or after the session ended,
    /// are discarded. The error side carries the stringified cause, which
    /// is logged here and never shown to the user.
    pub fn apply_fetch_result(&mut self, result: Result<CatalogFetchResult, String>) {
        if !self.active {
            debug!("discarding catalog fetch result for ended session");
            return;
        }
        if !matches!(self.load_state, LoadState::Loading) {
            debug!("discarding duplicate catalog fetch result");
            return;
        }

        match result {
            Ok(fetch) => {
                debug!(
                    "catalog loaded: {} products ({} available on server)",
                    fetch.products.len(),
                    fetch.total_available
                );
                self.load_state = LoadState::Ready(fetch);
            }
            Err(cause) => {
                error!("Error fetching products: {}", cause);
                self.load_state = LoadState::Failed(FETCH_ERROR_MESSAGE.to_string());
            }
        }
    }

    /// Mark the session over. Late fetch results are dropped from here on.
    pub fn end(&mut self) {
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.load_state, LoadState::Loading)
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// The full catalog; empty unless the load succeeded.
    pub fn products(&self) -> &[Product] {
        match &self.load_state {
            LoadState::Ready(fetch) => &fetch.products,
            _ => &[],
        }
    }

    pub fn total_available(&self) -> Option<usize> {
        match &self.load_state {
            LoadState::Ready(fetch) => Some(fetch.total_available),
            _ => None,
        }
    }

    pub fn fetched_at(&self) -> Option<OffsetDateTime> {
        match &self.load_state {
            LoadState::Ready(fetch) => Some(fetch.fetched_at),
            _ => None,
        }
    }

    pub fn visible_products(&self) -> &[Product] {
        self.pager.current_slice(self.products())
    }

    pub fn current_page(&self) -> usize {
        self.pager.current_page
    }

    pub fn page_count(&self) -> usize {
        self.pager.page_count(self.products().len())
    }

    pub fn page_numbers(&self) -> RangeInclusive<usize> {
        self.pager.page_numbers(self.products().len())
    }

    pub fn can_go_prev(&self) -> bool {
        self.pager.can_go_prev()
    }

    pub fn can_go_next(&self) -> bool {
        self.pager.can_go_next(self.products().len())
    }

    pub fn next_page(&mut self) {
        self.pager.next();
    }

    pub fn prev_page(&mut self) {
        self.pager.prev();
    }

    pub fn jump_to_page(&mut self, page: usize) {
        self.pager.jump(page);
    }
}

impl Default for CatalogSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product {
            id,
            title: format!("Product {}", id),
            price: id as f64 + 0.99,
            images: Vec::new(),
        }
    }

    fn fetch_result(count: u64) -> CatalogFetchResult {
        CatalogFetchResult {
            products: (1..=count).map(product).collect(),
            total_available: count as usize,
            fetched_at: OffsetDateTime::now_utc(),
        }
    }

    fn network_error() -> String {
        "simulated network error".to_string()
    }

    fn ready_session(count: u64) -> CatalogSession {
        let mut session = CatalogSession::new();
        session.apply_fetch_result(Ok(fetch_result(count)));
        session
    }

    #[test]
    fn test_starts_loading_with_nothing_visible() {
        let session = CatalogSession::new();
        assert!(session.is_loading());
        assert!(session.error_message().is_none());
        assert!(session.visible_products().is_empty());
        assert_eq!(session.current_page(), 1);
    }

    #[test]
    fn test_failed_fetch_shows_only_static_message() {
        let mut session = CatalogSession::new();
        session.apply_fetch_result(Err(network_error()));

        assert!(!session.is_loading());
        assert_eq!(session.error_message(), Some(FETCH_ERROR_MESSAGE));
        assert!(session.products().is_empty());
        assert!(session.visible_products().is_empty());
        assert_eq!(session.page_numbers().count(), 0);
    }

    #[test]
    fn test_empty_catalog_is_ready_with_navigation_disabled() {
        let session = ready_session(0);
        assert!(!session.is_loading());
        assert!(session.error_message().is_none());
        assert!(session.visible_products().is_empty());
        assert!(!session.can_go_prev());
        assert!(!session.can_go_next());
        assert_eq!(session.page_numbers().count(), 0);
    }

    #[test]
    fn test_exactly_one_full_page() {
        let session = ready_session(5);
        assert_eq!(session.visible_products().len(), 5);
        assert_eq!(session.page_count(), 1);
        assert!(!session.can_go_prev());
        assert!(!session.can_go_next());
    }

    #[test]
    fn test_twelve_products_navigate_to_partial_last_page() {
        let mut session = ready_session(12);
        assert_eq!(session.page_count(), 3);
        assert_eq!(session.visible_products().len(), 5);

        session.next_page();
        assert_eq!(session.visible_products().len(), 5);
        session.next_page();
        assert_eq!(session.current_page(), 3);
        assert_eq!(session.visible_products().len(), 2);
        assert!(!session.can_go_next());
        assert!(session.can_go_prev());
    }

    #[test]
    fn test_jump_between_pages() {
        let mut session = ready_session(12);
        session.jump_to_page(3);
        assert_eq!(session.visible_products().len(), 2);
        session.jump_to_page(1);
        assert_eq!(session.visible_products()[0].id, 1);
    }

    #[test]
    fn test_transition_happens_at_most_once() {
        let mut session = ready_session(12);
        assert_eq!(session.products().len(), 12);

        // A second result must not revert or replace the catalog.
        session.apply_fetch_result(Err(network_error()));
        assert!(session.error_message().is_none());
        assert_eq!(session.products().len(), 12);

        session.apply_fetch_result(Ok(fetch_result(3)));
        assert_eq!(session.products().len(), 12);
    }

    #[test]
    fn test_late_result_after_end_is_discarded() {
        let mut session = CatalogSession::new();
        session.end();
        session.apply_fetch_result(Ok(fetch_result(4)));
        assert!(session.is_loading());
        assert!(session.products().is_empty());
    }

    #[test]
    fn test_fetch_metadata_exposed_when_ready() {
        let session = ready_session(2);
        assert_eq!(session.total_available(), Some(2));
        assert!(session.fetched_at().is_some());

        let loading = CatalogSession::new();
        assert_eq!(loading.total_available(), None);
        assert!(loading.fetched_at().is_none());
    }
}
