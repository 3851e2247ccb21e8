//! Pagination controller
//!
//! Drives the search lifecycle: validate the query, reset the session, fetch
//! a page, and toggle the gallery's loading / no-results / end-of-results /
//! load-more state.
//!
//! ```text
//! Idle ──submit──▶ Loading ──▶ Results | NoResults | Error
//!                     ▲                 │
//!                     └──load more──────┘──▶ MoreResults | EndOfResults | Error
//! ```
//!
//! `submit` and `load_more` run a whole cycle. Callers that need to issue
//! the fetch themselves use `begin_search` / `begin_load_more` followed by
//! `complete`; completions for anything but the latest ticket are dropped.

mod view;

pub use view::GalleryView;

use crate::client::SearchClient;
use crate::error::Result;
use crate::pagination::{normalize_query, PageOutcome, RequestTicket, Session};
use crate::types::{Notification, SearchPage};
use tracing::{debug, info, warn};

/// Multiple of the first item's height scrolled after a load-more append
const SCROLL_ITEMS: f64 = 2.0;

/// Transition taken by a controller handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Empty query, nothing was fetched
    Rejected,
    /// First page was empty
    NoResults,
    /// Hits appended, load-more shown
    MoreAvailable,
    /// Hits appended (or an empty load-more page), collection exhausted
    EndOfResults,
    /// The fetch failed
    Failed,
    /// A newer request superseded this one; nothing changed
    Stale,
    /// Load-more while nothing more can be loaded
    Ignored,
}

impl From<PageOutcome> for SearchOutcome {
    fn from(outcome: PageOutcome) -> Self {
        match outcome {
            PageOutcome::NoResults => Self::NoResults,
            PageOutcome::MoreAvailable => Self::MoreAvailable,
            PageOutcome::EndOfResults => Self::EndOfResults,
        }
    }
}

/// Search controller over a client and a view
pub struct SearchController<C, V> {
    client: C,
    view: V,
    session: Session,
}

impl<C: SearchClient, V: GalleryView> SearchController<C, V> {
    /// Create a controller; the load-more control starts hidden
    pub fn new(client: C, mut view: V) -> Self {
        view.set_load_more_visible(false);
        Self {
            client,
            view,
            session: Session::new(),
        }
    }

    /// Get the session state
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Get the search client
    pub fn client(&self) -> &C {
        &self.client
    }

    /// Get the view
    pub fn view(&self) -> &V {
        &self.view
    }

    /// Get the view mutably
    pub fn view_mut(&mut self) -> &mut V {
        &mut self.view
    }

    /// Split into client and view
    pub fn into_parts(self) -> (C, V) {
        (self.client, self.view)
    }

    /// Submit a query and fetch its first page
    pub async fn submit(&mut self, raw_query: &str) -> SearchOutcome {
        let Ok(ticket) = self.begin_search(raw_query) else {
            return SearchOutcome::Rejected;
        };
        let result = self.client.fetch_page(&ticket.query, ticket.page).await;
        self.complete(&ticket, result)
    }

    /// Fetch and append the next page for the active query
    pub async fn load_more(&mut self) -> SearchOutcome {
        let Some(ticket) = self.begin_load_more() else {
            return SearchOutcome::Ignored;
        };
        let result = self.client.fetch_page(&ticket.query, ticket.page).await;
        self.complete(&ticket, result)
    }

    /// Validate and reset for a new query, returning the ticket to fetch
    ///
    /// An empty query shows the validation notification and leaves the
    /// session untouched.
    pub fn begin_search(&mut self, raw_query: &str) -> Result<RequestTicket> {
        let query = match normalize_query(raw_query) {
            Ok(query) => query,
            Err(e) => {
                debug!("Rejected search: {e}");
                self.view.notify(Notification::empty_query());
                return Err(e);
            }
        };

        let ticket = self.session.start(query);
        info!(query = %ticket.query, seq = ticket.seq, "Starting search");

        self.view.set_no_results(false);
        self.view.set_end_of_results(false);
        self.view.clear();
        self.view.set_load_more_visible(false);
        self.view.set_loading(true);

        Ok(ticket)
    }

    /// Advance to the next page, returning the ticket to fetch
    ///
    /// `None` while a fetch is pending, before the first page arrives, and
    /// after no-results or end-of-results.
    pub fn begin_load_more(&mut self) -> Option<RequestTicket> {
        let Some(ticket) = self.session.advance() else {
            debug!("Load more ignored, nothing to load");
            return None;
        };
        debug!(query = %ticket.query, page = ticket.page, seq = ticket.seq, "Loading more");

        self.view.set_load_more_visible(false);
        self.view.set_loading(true);

        Some(ticket)
    }

    /// Apply a settled fetch to the session and the view
    ///
    /// The loader is hidden for every current ticket, whichever branch runs.
    pub fn complete(&mut self, ticket: &RequestTicket, result: Result<SearchPage>) -> SearchOutcome {
        if !self.session.is_current(ticket) {
            debug!(seq = ticket.seq, page = ticket.page, "Dropping stale response");
            return SearchOutcome::Stale;
        }

        let outcome = self.apply(ticket, result);
        self.view.set_loading(false);
        outcome
    }

    fn apply(&mut self, ticket: &RequestTicket, result: Result<SearchPage>) -> SearchOutcome {
        let page = match result {
            Ok(page) => page,
            Err(e) => {
                warn!(query = %ticket.query, page = ticket.page, "Search failed: {e}");
                self.session.settle(ticket, None);
                self.view.notify(Notification::fetch_failed());
                return SearchOutcome::Failed;
            }
        };

        self.session.record_total(ticket, page.total_hits);
        let outcome = self.session.evaluate(ticket, page.hits.len());
        self.session.settle(ticket, Some(outcome));

        if outcome == PageOutcome::NoResults {
            self.view.set_no_results(true);
            self.view.set_load_more_visible(false);
            return outcome.into();
        }

        if !page.hits.is_empty() {
            self.view.render_results(&page.hits);
            if ticket.is_load_more() {
                self.reveal_appended();
            }
        }

        match outcome {
            PageOutcome::EndOfResults => {
                info!(
                    query = %ticket.query,
                    total_hits = self.session.total_hits(),
                    "Reached end of results"
                );
                self.view.set_load_more_visible(false);
                self.view.set_end_of_results(true);
            }
            PageOutcome::MoreAvailable => self.view.set_load_more_visible(true),
            PageOutcome::NoResults => {}
        }

        outcome.into()
    }

    fn reveal_appended(&mut self) {
        if let Some(height) = self.view.first_item_height() {
            self.view.scroll_by(height * SCROLL_ITEMS);
        }
    }
}

impl<C, V> std::fmt::Debug for SearchController<C, V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchController")
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
