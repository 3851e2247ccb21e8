//! Pixabay search client
//!
//! Issues `GET {base_url}?key=..&q=..&image_type=photo&orientation=horizontal
//! &safesearch=true&page=N&per_page=15` and decodes the JSON page.

use super::SearchClient;
use crate::config::SearchConfig;
use crate::error::{Error, Result};
use crate::http::{HttpClient, RequestConfig};
use crate::types::{ImageType, Orientation, SearchPage, PAGE_SIZE};
use async_trait::async_trait;
use tracing::debug;

/// Fixed filters sent with every search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchFilters {
    pub image_type: ImageType,
    pub orientation: Orientation,
    pub safe_search: bool,
    pub per_page: u32,
}

impl Default for SearchFilters {
    fn default() -> Self {
        Self {
            image_type: ImageType::Photo,
            orientation: Orientation::Horizontal,
            safe_search: true,
            per_page: PAGE_SIZE,
        }
    }
}

/// Search client backed by the Pixabay REST API
#[derive(Debug)]
pub struct PixabayClient {
    http: HttpClient,
    base_url: String,
    api_key: String,
    filters: SearchFilters,
}

impl PixabayClient {
    /// Create a client from validated config
    pub fn from_config(config: &SearchConfig) -> Result<Self> {
        let api_key = config.validate()?.to_string();
        let http = HttpClient::with_config(config.http_config())?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            api_key,
            filters: SearchFilters::default(),
        })
    }

    /// Create a client around an existing HTTP client
    pub fn with_http(http: HttpClient, base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
            api_key: api_key.into(),
            filters: SearchFilters::default(),
        }
    }

    /// Get the filters sent with every request
    pub fn filters(&self) -> &SearchFilters {
        &self.filters
    }

    /// Build the request parameters for a page
    pub fn request_config(&self, query: &str, page: u32) -> RequestConfig {
        RequestConfig::new()
            .query("key", &self.api_key)
            .query("q", query)
            .query("image_type", self.filters.image_type.as_str())
            .query("orientation", self.filters.orientation.as_str())
            .query("safesearch", self.filters.safe_search)
            .query("page", page)
            .query("per_page", self.filters.per_page)
    }
}

#[async_trait]
impl SearchClient for PixabayClient {
    async fn fetch_page(&self, query: &str, page: u32) -> Result<SearchPage> {
        if page == 0 {
            return Err(Error::InvalidPage { page });
        }

        debug!(query, page, "Fetching search page");
        let config = self.request_config(query, page);
        let result: SearchPage = self.http.get_json_with_config(&self.base_url, config).await?;
        debug!(
            query,
            page,
            hits = result.hits.len(),
            total_hits = result.total_hits,
            "Fetched search page"
        );
        Ok(result)
    }
}
