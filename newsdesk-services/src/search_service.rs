//! Keyword search across every configured news source
//!
//! Fans a query out to the source normalizers concurrently and ranks the
//! pooled articles. A failed source only shrinks the pool; the other source
//! still answers.

use tracing::{debug, info, instrument, warn};

use newsdesk_core::{NewsItem, SearchResults};
use newsdesk_sources::{GoogleNewsClient, MediaCatalog, NaverNewsClient, SourceError};

use crate::ranking::rank_news;

/// Service that aggregates and ranks keyword searches
pub struct SearchService {
    google: GoogleNewsClient,
    naver: NaverNewsClient,
}

impl SearchService {
    /// Create a search service whose sources fetch through the given
    /// gateway base URL
    pub fn new(gateway_url: &str, catalog: MediaCatalog) -> Self {
        Self {
            google: GoogleNewsClient::new(gateway_url),
            naver: NaverNewsClient::new(gateway_url, catalog),
        }
    }

    /// Search every source for a keyword and rank the pooled articles.
    ///
    /// The keyword must be non-empty after trimming. XML items enter the
    /// pool ahead of JSON items, so date ties inside a ranking tier keep
    /// that source order.
    #[instrument(skip(self))]
    pub async fn search(&self, keyword: &str) -> Result<SearchResults, SearchError> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            return Err(SearchError::EmptyKeyword);
        }

        info!("Searching news sources for '{}'", keyword);

        // Fetch from both sources concurrently
        let google_future = self.google.search(keyword);
        let naver_future = self.naver.search(keyword);

        let (google_result, naver_result) = tokio::join!(google_future, naver_future);

        let pool = join_source_results(google_result, naver_result);
        let items = rank_news(keyword, pool);
        info!("Ranked {} articles for '{}'", items.len(), keyword);

        Ok(SearchResults {
            total_count: items.len(),
            items,
        })
    }
}

/// Join the two source results into one pool, XML items first.
///
/// A failed source contributes nothing beyond a warning log; it never
/// blocks the other source.
fn join_source_results(
    xml: Result<Vec<NewsItem>, SourceError>,
    json: Result<Vec<NewsItem>, SourceError>,
) -> Vec<NewsItem> {
    let mut pool = Vec::new();

    match xml {
        Ok(items) => {
            debug!("Got {} items from the XML source", items.len());
            pool.extend(items);
        }
        Err(e) => {
            warn!("Failed to fetch from the XML source: {}", e);
        }
    }

    match json {
        Ok(items) => {
            debug!("Got {} items from the JSON source", items.len());
            pool.extend(items);
        }
        Err(e) => {
            warn!("Failed to fetch from the JSON source: {}", e);
        }
    }

    pool
}

/// Errors that can occur in SearchService
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    #[error("Search keyword must not be empty")]
    EmptyKeyword,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(title: &str) -> NewsItem {
        NewsItem {
            title: title.to_string(),
            description: String::new(),
            link: "https://news.example.com/a".to_string(),
            source: "예시일보".to_string(),
            pub_date: "Fri, 22 Aug 2025 12:00:00 +0900".to_string(),
        }
    }

    fn service() -> SearchService {
        // Port 9 (discard) is never bound locally, so any fetch attempt
        // fails fast with a connection error
        SearchService::new("http://127.0.0.1:9", MediaCatalog::new())
    }

    #[tokio::test]
    async fn empty_keyword_is_rejected_before_any_fetch() {
        let result = service().search("").await;
        assert!(matches!(result, Err(SearchError::EmptyKeyword)));
    }

    #[tokio::test]
    async fn whitespace_keyword_is_rejected() {
        let result = service().search("   ").await;
        assert!(matches!(result, Err(SearchError::EmptyKeyword)));
    }

    #[tokio::test]
    async fn unreachable_sources_degrade_to_empty_results() {
        let results = service().search("태풍").await.unwrap();
        assert!(results.items.is_empty());
        assert_eq!(results.total_count, 0);
    }

    #[test]
    fn a_failed_source_never_blocks_the_other() {
        let pool = join_source_results(
            Err(SourceError::RequestFailed("connection refused".to_string())),
            Ok(vec![item("태풍 특보")]),
        );

        assert_eq!(pool.len(), 1);
        assert_eq!(pool[0].title, "태풍 특보");
    }

    #[test]
    fn xml_items_enter_the_pool_before_json_items() {
        let pool = join_source_results(
            Ok(vec![item("구글 기사")]),
            Ok(vec![item("네이버 기사")]),
        );

        let titles: Vec<&str> = pool.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["구글 기사", "네이버 기사"]);
    }
}
