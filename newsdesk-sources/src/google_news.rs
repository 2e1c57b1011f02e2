//! Google News source normalizer
//!
//! Fetches the Google News RSS feed through the gateway's XML passthrough
//! endpoint and flattens its `item` elements into `NewsItem`s. Google News
//! suffixes every title with ` - <publisher>`, so the publisher is recovered
//! by splitting on the first occurrence of the separator.

use reqwest::Client;
use tracing::debug;

use newsdesk_core::NewsItem;

use crate::error::SourceError;

/// Publisher label when the feed carries no `<source>` element and the title
/// has no publisher suffix
const FEED_FALLBACK_SOURCE: &str = "구글뉴스";

/// At most this many feed items are normalized, in document order
const FEED_ITEM_LIMIT: usize = 100;

/// Client for the gateway's XML passthrough endpoint
pub struct GoogleNewsClient {
    client: Client,
    base_url: String,
}

impl GoogleNewsClient {
    /// Create a client against the given gateway base URL
    pub fn new(gateway_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: gateway_url.into(),
        }
    }

    /// Fetch and normalize the feed for a keyword.
    ///
    /// Returns up to 100 items in feed order; ordering and relevance are the
    /// ranking engine's job, not this adapter's.
    pub async fn search(&self, keyword: &str) -> Result<Vec<NewsItem>, SourceError> {
        let url = format!(
            "{}/news/xml-source?q={}",
            self.base_url,
            urlencoding::encode(keyword)
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
                message: format!("XML source returned status {}", response.status()),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SourceError::RequestFailed(e.to_string()))?;

        let items = parse_feed(&body)?;
        debug!("Normalized {} items from the XML source", items.len());
        Ok(items)
    }
}

/// Parse raw feed XML into normalized items
fn parse_feed(xml: &str) -> Result<Vec<NewsItem>, SourceError> {
    let channel = rss::Channel::read_from(xml.as_bytes())
        .map_err(|e| SourceError::ParseError(format!("Failed to parse feed XML: {}", e)))?;

    let items = channel
        .items()
        .iter()
        .take(FEED_ITEM_LIMIT)
        .map(|item| {
            let raw_title = item.title().unwrap_or_default();
            let feed_source = item
                .source()
                .and_then(|s| s.title())
                .unwrap_or(FEED_FALLBACK_SOURCE);
            let (title, source) = split_title_source(raw_title, feed_source);

            NewsItem {
                title,
                description: item.description().unwrap_or_default().to_string(),
                link: item.link().unwrap_or_default().to_string(),
                source,
                pub_date: item.pub_date().unwrap_or_default().to_string(),
            }
        })
        .collect();

    Ok(items)
}

/// Split a feed title on the first ` - ` separator.
///
/// The left side becomes the title and everything after the separator
/// becomes the publisher, overriding `fallback`. Titles that themselves
/// contain ` - ` lose their tail to the publisher field; the feed format
/// gives no way to tell the two apart.
fn split_title_source(raw_title: &str, fallback: &str) -> (String, String) {
    match raw_title.split_once(" - ") {
        Some((title, source)) => (title.trim().to_string(), source.trim().to_string()),
        None => (raw_title.to_string(), fallback.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FEED_XML: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
<channel>
<title>"태풍" - Google 뉴스</title>
<link>https://news.google.com/search</link>
<description>Google 뉴스</description>
<item>
  <title>Storm warns coast - Daily Times</title>
  <link>https://news.example.com/storm</link>
  <pubDate>Fri, 22 Aug 2025 07:30:00 GMT</pubDate>
  <description>Heavy rain expected through the weekend.</description>
</item>
<item>
  <title>태풍 경보 발령</title>
  <link>https://news.example.com/typhoon</link>
  <pubDate>Fri, 22 Aug 2025 06:00:00 GMT</pubDate>
  <source url="https://www.example.co.kr">예시일보</source>
</item>
<item>
  <title>제목만 있는 기사</title>
  <link>https://news.example.com/bare</link>
</item>
</channel>
</rss>"#;

    #[test]
    fn splits_publisher_suffix_on_first_separator() {
        let items = parse_feed(FEED_XML).unwrap();
        assert_eq!(items[0].title, "Storm warns coast");
        assert_eq!(items[0].source, "Daily Times");
    }

    #[test]
    fn keeps_source_element_when_title_has_no_suffix() {
        let items = parse_feed(FEED_XML).unwrap();
        assert_eq!(items[1].title, "태풍 경보 발령");
        assert_eq!(items[1].source, "예시일보");
    }

    #[test]
    fn missing_fields_default_to_empty_strings() {
        let items = parse_feed(FEED_XML).unwrap();
        assert_eq!(items[2].description, "");
        assert_eq!(items[2].pub_date, "");
        assert_eq!(items[2].source, FEED_FALLBACK_SOURCE);
    }

    #[test]
    fn title_with_several_separators_splits_once() {
        let (title, source) = split_title_source("속보 - 업데이트 - 한겨레", FEED_FALLBACK_SOURCE);
        assert_eq!(title, "속보");
        assert_eq!(source, "업데이트 - 한겨레");
    }

    #[test]
    fn feed_order_is_preserved_and_capped() {
        let mut xml = String::from(
            r#"<?xml version="1.0"?><rss version="2.0"><channel><title>t</title><link>l</link><description>d</description>"#,
        );
        for i in 0..(FEED_ITEM_LIMIT + 20) {
            xml.push_str(&format!(
                "<item><title>기사 {}</title><link>https://example.com/{}</link></item>",
                i, i
            ));
        }
        xml.push_str("</channel></rss>");

        let items = parse_feed(&xml).unwrap();
        assert_eq!(items.len(), FEED_ITEM_LIMIT);
        assert_eq!(items[0].title, "기사 0");
        assert_eq!(items[FEED_ITEM_LIMIT - 1].title, "기사 99");
    }

    #[test]
    fn malformed_xml_is_a_parse_error() {
        let err = parse_feed("definitely not xml").unwrap_err();
        assert!(matches!(err, SourceError::ParseError(_)));
    }
}
