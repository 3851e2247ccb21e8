//! # pixsearch
//!
//! Paginated stock-photo search with incremental "load more", backed by the
//! Pixabay REST API.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pixsearch::{PixabayClient, SearchConfig, SearchController};
//!
//! #[tokio::main]
//! async fn main() -> pixsearch::Result<()> {
//!     let config = SearchConfig::default().with_env();
//!     let client = PixabayClient::from_config(&config)?;
//!     let mut controller = SearchController::new(client, my_view);
//!
//!     controller.submit("cats").await;
//!     controller.load_more().await;
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  SearchController                    │
//! │   submit(query) / load_more() / begin_* + complete   │
//! └──────────────┬──────────────────────────┬────────────┘
//!                │                          │
//! ┌──────────────┴───────────┐   ┌──────────┴────────────┐
//! │ SearchClient             │   │ GalleryView           │
//! │  PixabayClient           │   │  TerminalView (cli)   │
//! │   HttpClient + governor  │   │  your UI binding      │
//! └──────────────────────────┘   └───────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and constants
pub mod types;

/// Configuration loading
pub mod config;

/// HTTP client with rate limiting
pub mod http;

/// Search client trait and Pixabay implementation
pub mod client;

/// Session state and page decisions
pub mod pagination;

/// Search lifecycle controller and view seam
pub mod controller;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{PixabayClient, SearchClient};
pub use config::SearchConfig;
pub use controller::{GalleryView, SearchController, SearchOutcome};
pub use error::{Error, Result};
pub use pagination::Session;
pub use types::*;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
