//! News data structures shared across the newsdesk workspace

use serde::{Deserialize, Serialize};

/// A single normalized news article.
///
/// Both upstream sources are flattened into this shape by their normalizers.
/// `pub_date` keeps the upstream's native date string (RFC-822-like on both
/// feeds); only the ranking step parses it into a comparable instant.
///
/// Items have no identity beyond their `link` and are never deduplicated
/// across sources. They live for one search cycle and are immutable once
/// constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    /// Article title, markup stripped
    pub title: String,
    /// Article excerpt, markup stripped (may be empty)
    pub description: String,
    /// Article URL
    pub link: String,
    /// Publisher display name, resolved or defaulted per source
    pub source: String,
    /// Publication date string in the upstream's native format
    #[serde(rename = "pubDate")]
    pub pub_date: String,
}

/// Ranked search response handed to the render surface
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResults {
    /// Final ranked items: title matches first, then description-only
    /// matches, each newest-first, at most 50 in total
    pub items: Vec<NewsItem>,
    /// Number of items returned
    pub total_count: usize,
}
