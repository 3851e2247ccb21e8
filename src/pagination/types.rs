//! Pagination types
//!
//! Tickets identify issued fetches; outcomes describe what a page means for
//! the gallery.

/// Why a fetch was issued
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    /// First page of a freshly submitted query
    Search,
    /// A subsequent page for the active query
    LoadMore,
}

/// Identifies one issued fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestTicket {
    /// Monotonic sequence number, unique per session
    pub seq: u64,
    /// Query the fetch was issued for
    pub query: String,
    /// Page requested (1-based)
    pub page: u32,
    /// Submit or load-more
    pub kind: RequestKind,
}

impl RequestTicket {
    /// Check if this ticket belongs to a load-more fetch
    pub fn is_load_more(&self) -> bool {
        self.kind == RequestKind::LoadMore
    }
}

/// What a successfully fetched page means for the gallery
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The first page came back empty
    NoResults,
    /// Hits were appended and more pages remain
    MoreAvailable,
    /// Hits (possibly none) were appended and the collection is exhausted
    EndOfResults,
}

impl PageOutcome {
    /// Whether the load-more control should be visible
    pub fn shows_load_more(&self) -> bool {
        matches!(self, Self::MoreAvailable)
    }
}
