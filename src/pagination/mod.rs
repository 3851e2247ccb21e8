//! Pagination module
//!
//! Session bookkeeping for page-number pagination against a total-hit count.
//!
//! # Overview
//!
//! A `Session` holds the active query, the current page and the total hit
//! count reported for the first page. Every fetch is issued under a
//! `RequestTicket`; only the most recently issued ticket may update the
//! session. `PageOutcome` is the decision taken after a page arrives:
//! `page * page_size >= total_hits` is the only exhaustion signal.

mod session;
mod types;

pub use session::{normalize_query, Session};
pub use types::{PageOutcome, RequestKind, RequestTicket};

#[cfg(test)]
mod tests;
