//! Search session state
//!
//! Transitions here are pure: they never touch a view or the network.

use super::types::{PageOutcome, RequestKind, RequestTicket};
use crate::error::{Error, Result};
use crate::types::PAGE_SIZE;

/// Trim a raw query, rejecting empty and whitespace-only input
pub fn normalize_query(raw: &str) -> Result<String> {
    let query = raw.trim();
    if query.is_empty() {
        return Err(Error::EmptyQuery);
    }
    Ok(query.to_string())
}

/// Mutable state for one search session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    query: String,
    page: u32,
    total_hits: u64,
    page_size: u32,
    last_seq: u64,
    load_more_ready: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Create an idle session with the default page size
    pub fn new() -> Self {
        Self::with_page_size(PAGE_SIZE)
    }

    /// Create an idle session with a custom page size
    pub fn with_page_size(page_size: u32) -> Self {
        Self {
            query: String::new(),
            page: 1,
            total_hits: 0,
            page_size: page_size.max(1),
            last_seq: 0,
            load_more_ready: false,
        }
    }

    /// Active query, empty before the first submit
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Current page (1-based)
    pub fn page(&self) -> u32 {
        self.page
    }

    /// Total hits reported for the active query
    pub fn total_hits(&self) -> u64 {
        self.total_hits
    }

    /// Page size used for the exhaustion check
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Whether a query has been submitted
    pub fn has_query(&self) -> bool {
        !self.query.is_empty()
    }

    /// Whether a load-more may be issued now
    ///
    /// True only once the latest fetch has settled on a page that left more
    /// to load, or on a failed load-more (which may be retried).
    pub fn can_load_more(&self) -> bool {
        self.load_more_ready
    }

    /// Number of items covered by the pages requested so far
    pub fn loaded(&self) -> u64 {
        u64::from(self.page) * u64::from(self.page_size)
    }

    /// Whether the requested pages cover every hit
    pub fn is_exhausted(&self) -> bool {
        self.loaded() >= self.total_hits
    }

    /// Reset for a new query and issue the ticket for page 1
    pub fn start(&mut self, query: impl Into<String>) -> RequestTicket {
        self.query = query.into();
        self.page = 1;
        self.total_hits = 0;
        self.load_more_ready = false;
        self.issue(RequestKind::Search)
    }

    /// Move to the next page, or `None` unless [`Session::can_load_more`]
    ///
    /// The page stays advanced even if the fetch later fails.
    pub fn advance(&mut self) -> Option<RequestTicket> {
        if !self.can_load_more() {
            return None;
        }
        self.load_more_ready = false;
        self.page += 1;
        Some(self.issue(RequestKind::LoadMore))
    }

    /// Whether `ticket` is the most recently issued one
    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        ticket.seq == self.last_seq
    }

    /// Record the total reported for a page; only page 1 of a search counts
    pub fn record_total(&mut self, ticket: &RequestTicket, total_hits: u64) {
        if ticket.kind == RequestKind::Search {
            self.total_hits = total_hits;
        }
    }

    /// Record how the fetch for `ticket` settled; `None` means it failed
    pub fn settle(&mut self, ticket: &RequestTicket, outcome: Option<PageOutcome>) {
        if !self.is_current(ticket) {
            return;
        }
        self.load_more_ready = match outcome {
            Some(outcome) => outcome.shows_load_more(),
            None => ticket.is_load_more(),
        };
    }

    /// Decide what a page with `hit_count` hits means for the gallery
    pub fn evaluate(&self, ticket: &RequestTicket, hit_count: usize) -> PageOutcome {
        if hit_count == 0 {
            return match ticket.kind {
                RequestKind::Search => PageOutcome::NoResults,
                RequestKind::LoadMore => PageOutcome::EndOfResults,
            };
        }

        if self.is_exhausted() {
            PageOutcome::EndOfResults
        } else {
            PageOutcome::MoreAvailable
        }
    }

    fn issue(&mut self, kind: RequestKind) -> RequestTicket {
        self.last_seq += 1;
        RequestTicket {
            seq: self.last_seq,
            query: self.query.clone(),
            page: self.page,
            kind,
        }
    }
}
