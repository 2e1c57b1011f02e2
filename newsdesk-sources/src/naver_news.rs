//! Naver news source normalizer
//!
//! Fetches the Naver news-search payload through the gateway's JSON
//! passthrough endpoint and flattens its `items` array into `NewsItem`s.
//! Title and description arrive with embedded markup (`<b>` keyword
//! highlights); markup is stripped here while entity references are left
//! intact for the presentation layer to decode.

use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use newsdesk_core::NewsItem;

use crate::error::SourceError;
use crate::media_catalog::MediaCatalog;

/// Publisher label when an item carries no `originallink`
const NAVER_FALLBACK_SOURCE: &str = "네이버뉴스";

/// Publisher label when `originallink` is present but not a usable URL
const UNKNOWN_PUBLISHER: &str = "언론사 미확인";

/// Page size requested through the gateway
const DISPLAY_COUNT: u32 = 100;

/// Wire shape of the search payload
#[derive(Debug, Deserialize)]
struct NaverNewsResponse {
    #[serde(default)]
    items: Vec<NaverNewsItem>,
}

/// Wire shape of one article in the search payload
#[derive(Debug, Deserialize)]
struct NaverNewsItem {
    title: String,
    #[serde(default)]
    description: String,
    link: String,
    originallink: Option<String>,
    #[serde(rename = "pubDate", default)]
    pub_date: String,
}

/// Client for the gateway's JSON passthrough endpoint
pub struct NaverNewsClient {
    client: Client,
    base_url: String,
    catalog: MediaCatalog,
    tag_pattern: Regex,
}

impl NaverNewsClient {
    /// Create a client against the given gateway base URL, resolving
    /// publishers through the injected catalog
    pub fn new(gateway_url: impl Into<String>, catalog: MediaCatalog) -> Self {
        Self {
            client: Client::new(),
            base_url: gateway_url.into(),
            catalog,
            tag_pattern: Regex::new(r"<[^>]+>").expect("tag pattern is valid"),
        }
    }

    /// Fetch and normalize articles for a keyword.
    ///
    /// The payload is requested with `display=100`, so the item count is
    /// bounded upstream and no truncation happens here.
    pub async fn search(&self, keyword: &str) -> Result<Vec<NewsItem>, SourceError> {
        let url = format!(
            "{}/news/json-source?q={}&display={}",
            self.base_url,
            urlencoding::encode(keyword),
            DISPLAY_COUNT
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            return Err(SourceError::ApiError {
                status: response.status().as_u16(),
                message: format!("JSON source returned status {}", response.status()),
            });
        }

        let payload: NaverNewsResponse = response
            .json()
            .await
            .map_err(|e| SourceError::ParseError(e.to_string()))?;

        let items = self.normalize(payload);
        debug!("Normalized {} items from the JSON source", items.len());
        Ok(items)
    }

    /// Flatten the wire payload in input order
    fn normalize(&self, payload: NaverNewsResponse) -> Vec<NewsItem> {
        payload
            .items
            .into_iter()
            .map(|item| NewsItem {
                title: self.strip_tags(&item.title),
                description: self.strip_tags(&item.description),
                link: item.link,
                source: self.resolve_source(item.originallink.as_deref()),
                pub_date: item.pub_date,
            })
            .collect()
    }

    /// Remove markup tags, leaving text and entity references in place
    fn strip_tags(&self, text: &str) -> String {
        self.tag_pattern.replace_all(text, "").into_owned()
    }

    /// Resolve the publisher display name from an article's origin link.
    ///
    /// A parsable link has one leading `www.` stripped from its host, which
    /// is then looked up in the catalog, falling back to the bare domain. A
    /// malformed link maps to a fixed unknown-publisher label; a missing or
    /// empty one maps to the Naver label.
    fn resolve_source(&self, originallink: Option<&str>) -> String {
        let Some(raw) = originallink.filter(|raw| !raw.is_empty()) else {
            return NAVER_FALLBACK_SOURCE.to_string();
        };

        match Url::parse(raw) {
            Ok(url) => match url.host_str() {
                Some(host) => {
                    let domain = host.strip_prefix("www.").unwrap_or(host);
                    self.catalog.resolve(domain).unwrap_or(domain).to_string()
                }
                None => UNKNOWN_PUBLISHER.to_string(),
            },
            Err(_) => UNKNOWN_PUBLISHER.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEARCH_JSON: &str = r#"{
        "lastBuildDate": "Fri, 22 Aug 2025 16:30:00 +0900",
        "total": 3,
        "start": 1,
        "display": 3,
        "items": [
            {
                "title": "<b>태풍</b> 북상 중",
                "originallink": "https://www.hani.co.kr/arti/society/area/1.html",
                "link": "https://n.news.naver.com/mnews/article/028/0002612345",
                "description": "남해안에 <b>태풍</b> 경보 &amp; 호우주의보",
                "pubDate": "Fri, 22 Aug 2025 15:10:00 +0900"
            },
            {
                "title": "증시 마감",
                "link": "https://n.news.naver.com/mnews/article/001/0014812345",
                "description": "",
                "pubDate": "Fri, 22 Aug 2025 14:00:00 +0900"
            },
            {
                "title": "단신",
                "originallink": "not a url",
                "link": "https://n.news.naver.com/mnews/article/052/0002612346",
                "description": "짧은 소식",
                "pubDate": "Fri, 22 Aug 2025 13:00:00 +0900"
            }
        ]
    }"#;

    fn parse(payload: &str) -> Vec<NewsItem> {
        let client = NaverNewsClient::new("http://127.0.0.1:3000", MediaCatalog::new());
        let response: NaverNewsResponse = serde_json::from_str(payload).unwrap();
        client.normalize(response)
    }

    #[test]
    fn strips_markup_but_keeps_entities() {
        let items = parse(SEARCH_JSON);
        assert_eq!(items[0].title, "태풍 북상 중");
        assert_eq!(items[0].description, "남해안에 태풍 경보 &amp; 호우주의보");
    }

    #[test]
    fn resolves_known_domain_through_catalog() {
        let items = parse(SEARCH_JSON);
        assert_eq!(items[0].source, "한겨레");
    }

    #[test]
    fn missing_originallink_falls_back_to_naver_label() {
        let items = parse(SEARCH_JSON);
        assert_eq!(items[1].source, NAVER_FALLBACK_SOURCE);
    }

    #[test]
    fn empty_originallink_falls_back_to_naver_label() {
        let json = r#"{"items":[{"title":"단신","originallink":"","link":"https://example.com/1","description":"","pubDate":""}]}"#;
        let items = parse(json);
        assert_eq!(items[0].source, NAVER_FALLBACK_SOURCE);
    }

    #[test]
    fn malformed_originallink_is_unknown_publisher() {
        let items = parse(SEARCH_JSON);
        assert_eq!(items[2].source, UNKNOWN_PUBLISHER);
    }

    #[test]
    fn unknown_domain_falls_back_to_bare_hostname() {
        let json = r#"{"items":[{"title":"지역 소식","originallink":"https://www.smallpress.co.kr/a/1","link":"https://example.com/1","description":"","pubDate":""}]}"#;
        let items = parse(json);
        assert_eq!(items[0].source, "smallpress.co.kr");
    }

    #[test]
    fn missing_items_array_normalizes_to_empty() {
        let items = parse(r#"{"total": 0, "start": 1, "display": 0}"#);
        assert!(items.is_empty());
    }

    #[test]
    fn payload_order_is_preserved() {
        let items = parse(SEARCH_JSON);
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, ["태풍 북상 중", "증시 마감", "단신"]);
    }
}
