//! Tests for pagination module

use super::*;
use crate::error::Error;
use test_case::test_case;

/// Settle `ticket` on a page that leaves more to load
fn settle_more(session: &mut Session, ticket: &RequestTicket) {
    session.settle(ticket, Some(PageOutcome::MoreAvailable));
}

// ============================================================================
// Query Normalization
// ============================================================================

#[test_case("" ; "empty")]
#[test_case("   " ; "spaces")]
#[test_case("\t\n " ; "mixed whitespace")]
fn test_normalize_query_rejects_blank(raw: &str) {
    assert!(matches!(normalize_query(raw), Err(Error::EmptyQuery)));
}

#[test]
fn test_normalize_query_trims() {
    assert_eq!(normalize_query("  red cats ").unwrap(), "red cats");
}

// ============================================================================
// Session Tests
// ============================================================================

#[test]
fn test_session_default() {
    let session = Session::new();
    assert_eq!(session.query(), "");
    assert_eq!(session.page(), 1);
    assert_eq!(session.total_hits(), 0);
    assert_eq!(session.page_size(), 15);
    assert!(!session.has_query());
}

#[test]
fn test_session_start_resets() {
    let mut session = Session::new();
    let first = session.start("dogs");
    session.record_total(&first, 100);
    settle_more(&mut session, &first);
    let second = session.advance().unwrap();
    settle_more(&mut session, &second);
    session.advance().unwrap();
    assert_eq!(session.page(), 3);

    let ticket = session.start("cats");
    assert_eq!(session.query(), "cats");
    assert_eq!(session.page(), 1);
    assert_eq!(session.total_hits(), 0);
    assert!(!session.can_load_more());
    assert_eq!(ticket.page, 1);
    assert_eq!(ticket.kind, RequestKind::Search);
    assert_eq!(ticket.query, "cats");
}

#[test]
fn test_advance_without_query() {
    let mut session = Session::new();
    assert!(session.advance().is_none());
    assert_eq!(session.page(), 1);
}

#[test]
fn test_advance_increments_page() {
    let mut session = Session::new();
    let first = session.start("cats");
    settle_more(&mut session, &first);
    let ticket = session.advance().unwrap();
    assert_eq!(ticket.page, 2);
    assert!(ticket.is_load_more());
    assert_eq!(session.page(), 2);
}

#[test]
fn test_tickets_are_monotonic_and_only_latest_is_current() {
    let mut session = Session::new();
    let a = session.start("cats");
    settle_more(&mut session, &a);
    let b = session.advance().unwrap();
    let c = session.start("dogs");

    assert!(a.seq < b.seq && b.seq < c.seq);
    assert!(!session.is_current(&a));
    assert!(!session.is_current(&b));
    assert!(session.is_current(&c));
}

#[test]
fn test_record_total_only_from_search() {
    let mut session = Session::new();
    let first = session.start("cats");
    session.record_total(&first, 40);
    settle_more(&mut session, &first);

    let more = session.advance().unwrap();
    session.record_total(&more, 9999);
    assert_eq!(session.total_hits(), 40);
}

// ============================================================================
// Outcome Tests
// ============================================================================

#[test]
fn test_empty_first_page_is_no_results() {
    let mut session = Session::new();
    let ticket = session.start("zzzznonexistent");
    session.record_total(&ticket, 0);
    assert_eq!(session.evaluate(&ticket, 0), PageOutcome::NoResults);
}

#[test]
fn test_empty_load_more_is_end_of_results() {
    let mut session = Session::new();
    let first = session.start("cats");
    session.record_total(&first, 1000);
    settle_more(&mut session, &first);
    let ticket = session.advance().unwrap();
    assert_eq!(session.evaluate(&ticket, 0), PageOutcome::EndOfResults);
}

#[test_case(40, 15, PageOutcome::MoreAvailable ; "more pages remain")]
#[test_case(15, 15, PageOutcome::EndOfResults ; "exactly one page")]
#[test_case(7, 7, PageOutcome::EndOfResults ; "partial page")]
fn test_first_page_outcome(total_hits: u64, hits: usize, expected: PageOutcome) {
    let mut session = Session::new();
    let ticket = session.start("cats");
    session.record_total(&ticket, total_hits);
    assert_eq!(session.evaluate(&ticket, hits), expected);
}

#[test]
fn test_cats_scenario() {
    let mut session = Session::new();

    let first = session.start("cats");
    session.record_total(&first, 40);
    let outcome = session.evaluate(&first, 15);
    assert_eq!(outcome, PageOutcome::MoreAvailable);
    assert!(outcome.shows_load_more());
    session.settle(&first, Some(outcome));

    let second = session.advance().unwrap();
    assert_eq!(session.loaded(), 30);
    let outcome = session.evaluate(&second, 15);
    assert_eq!(outcome, PageOutcome::MoreAvailable);
    session.settle(&second, Some(outcome));

    let third = session.advance().unwrap();
    assert_eq!(session.loaded(), 45);
    assert!(session.is_exhausted());
    let outcome = session.evaluate(&third, 10);
    assert_eq!(outcome, PageOutcome::EndOfResults);
    assert!(!outcome.shows_load_more());
    session.settle(&third, Some(outcome));
    assert!(session.advance().is_none());
}

// ============================================================================
// Load-More Readiness
// ============================================================================

#[test]
fn test_no_load_more_while_first_page_pending() {
    let mut session = Session::new();
    session.start("cats");
    assert!(!session.can_load_more());
    assert!(session.advance().is_none());
    assert_eq!(session.page(), 1);
}

#[test]
fn test_no_load_more_while_load_more_pending() {
    let mut session = Session::new();
    let first = session.start("cats");
    settle_more(&mut session, &first);
    session.advance().unwrap();
    assert!(session.advance().is_none());
    assert_eq!(session.page(), 2);
}

#[test_case(PageOutcome::NoResults ; "no results")]
#[test_case(PageOutcome::EndOfResults ; "end of results")]
fn test_no_load_more_after_terminal_outcome(outcome: PageOutcome) {
    let mut session = Session::new();
    let first = session.start("cats");
    session.settle(&first, Some(outcome));
    assert!(session.advance().is_none());
}

#[test]
fn test_failed_search_blocks_load_more() {
    let mut session = Session::new();
    let first = session.start("cats");
    session.settle(&first, None);
    assert!(!session.can_load_more());
}

#[test]
fn test_failed_load_more_can_be_retried() {
    let mut session = Session::new();
    let first = session.start("cats");
    settle_more(&mut session, &first);
    let second = session.advance().unwrap();
    session.settle(&second, None);

    let retry = session.advance().unwrap();
    assert_eq!(retry.page, 3);
}

#[test]
fn test_stale_settle_is_ignored() {
    let mut session = Session::new();
    let old = session.start("cats");
    session.start("dogs");
    settle_more(&mut session, &old);
    assert!(!session.can_load_more());
}

#[test]
fn test_zero_page_size_clamped() {
    let session = Session::with_page_size(0);
    assert_eq!(session.page_size(), 1);
}
