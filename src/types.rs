//! Common types used throughout pixsearch
//!
//! Wire types for the Pixabay search response, the fixed request filters,
//! and the notification payload handed to views.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

// ============================================================================
// Constants
// ============================================================================

/// Number of hits requested per page
pub const PAGE_SIZE: u32 = 15;

/// Default Pixabay endpoint
pub const DEFAULT_BASE_URL: &str = "https://pixabay.com/api/";

/// Shown when a search is submitted with an empty query
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter a search query.";

/// Shown for any failed fetch
pub const FETCH_FAILED_MESSAGE: &str = "Something went wrong. Please try again later.";

// ============================================================================
// Request Filters
// ============================================================================

/// Kind of image to search for (`image_type`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageType {
    All,
    #[default]
    Photo,
    Illustration,
    Vector,
}

impl ImageType {
    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Photo => "photo",
            Self::Illustration => "illustration",
            Self::Vector => "vector",
        }
    }
}

/// Image orientation filter (`orientation`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    All,
    #[default]
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Query parameter value
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

// ============================================================================
// Response Types
// ============================================================================

/// A single image record from the search API
///
/// The controller never looks inside; renderers use whichever fields they need.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    #[serde(default)]
    pub id: u64,
    #[serde(rename = "pageURL", default)]
    pub page_url: String,
    #[serde(default)]
    pub tags: String,
    #[serde(rename = "previewURL", default)]
    pub preview_url: String,
    #[serde(rename = "webformatURL", default)]
    pub webformat_url: String,
    #[serde(default)]
    pub webformat_width: u32,
    #[serde(default)]
    pub webformat_height: u32,
    #[serde(rename = "largeImageURL", default)]
    pub large_image_url: String,
    #[serde(default)]
    pub image_width: u32,
    #[serde(default)]
    pub image_height: u32,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub downloads: u64,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: u64,
    #[serde(default)]
    pub user: String,
}

impl Image {
    /// Comma separated tags, trimmed
    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .collect()
    }
}

/// One page of search results
///
/// A missing or null `hits` array decodes as empty; `totalHits` is required.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchPage {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub hits: Vec<Image>,
    pub total_hits: u64,
    /// Total matches before the API's access cap
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
}

impl SearchPage {
    /// Create a page from hits and a total
    pub fn new(hits: Vec<Image>, total_hits: u64) -> Self {
        Self {
            hits,
            total_hits,
            total: None,
        }
    }

    /// Check if the page has no hits
    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<Vec<Image>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Image>>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// Notifications
// ============================================================================

/// Severity of a transient notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Error,
    Info,
}

/// A transient, toast-style message for the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub message: String,
}

impl Notification {
    /// Create an error notification
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            message: message.into(),
        }
    }

    /// Create an info notification
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            message: message.into(),
        }
    }

    /// Validation notification for an empty query
    pub fn empty_query() -> Self {
        Self::error(EMPTY_QUERY_MESSAGE)
    }

    /// Generic notification for a failed fetch
    pub fn fetch_failed() -> Self {
        Self::error(FETCH_FAILED_MESSAGE)
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
