//! Search client module
//!
//! A `SearchClient` fetches one page of results for a query. The controller
//! only depends on the trait, so tests can drive it with a scripted client.

mod pixabay;

pub use pixabay::{PixabayClient, SearchFilters};

use crate::error::Result;
use crate::types::SearchPage;
use async_trait::async_trait;

/// Fetches a single page of image results
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Fetch `page` (1-based) of results for a non-empty `query`
    async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchPage>;
}

#[async_trait]
impl<T: SearchClient + ?Sized> SearchClient for std::sync::Arc<T> {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchPage> {
        (**self).fetch_page(query, page).await
    }
}
