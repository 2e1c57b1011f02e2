//! Upstream proxy client
//!
//! Forwards keyword queries to the two external news services, attaching
//! the Naver credential headers server-side so browser and normalizer
//! callers never handle them. Response bodies are returned unchanged.

use reqwest::Client;
use serde_json::Value;
use tracing::{debug, instrument};

use newsdesk_core::{NewsdeskError, NewsdeskResult};

/// Base URL for the Naver news search API
const NAVER_API_BASE: &str = "https://openapi.naver.com/v1/search/news.json";

/// Base URL for the Google News RSS search feed
const GOOGLE_RSS_BASE: &str = "https://news.google.com/rss/search";

/// Page size forwarded to the Naver API when the caller omits one
pub const DEFAULT_DISPLAY: u32 = 50;

/// Naver API credentials, loaded from the environment
#[derive(Clone)]
pub struct NaverCredentials {
    pub client_id: String,
    pub client_secret: String,
}

impl NaverCredentials {
    /// Load credentials from `NAVER_CLIENT_ID` and `NAVER_CLIENT_SECRET`.
    ///
    /// Both variables are required; there is no baked-in default.
    pub fn from_env() -> NewsdeskResult<Self> {
        let client_id = std::env::var("NAVER_CLIENT_ID")
            .map_err(|_| NewsdeskError::config("NAVER_CLIENT_ID is not set"))?;
        let client_secret = std::env::var("NAVER_CLIENT_SECRET")
            .map_err(|_| NewsdeskError::config("NAVER_CLIENT_SECRET is not set"))?;

        Ok(Self {
            client_id,
            client_secret,
        })
    }
}

impl std::fmt::Debug for NaverCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaverCredentials")
            .field("client_id", &"***")
            .field("client_secret", &"***")
            .finish()
    }
}

/// Client that fronts both upstream news services
pub struct UpstreamClient {
    client: Client,
    naver_api_base: String,
    google_rss_base: String,
    credentials: NaverCredentials,
}

impl UpstreamClient {
    /// Create an upstream client with the given credentials
    pub fn new(credentials: NaverCredentials) -> Self {
        Self {
            client: Client::new(),
            naver_api_base: NAVER_API_BASE.to_string(),
            google_rss_base: GOOGLE_RSS_BASE.to_string(),
            credentials,
        }
    }

    /// Fetch the Naver news-search payload for a keyword, newest first.
    ///
    /// One best-effort call with no retry and no timeout; the decoded JSON
    /// body is returned unchanged.
    #[instrument(skip(self))]
    pub async fn fetch_json_news(
        &self,
        keyword: &str,
        display_count: u32,
    ) -> NewsdeskResult<Value> {
        let url = build_json_news_url(&self.naver_api_base, keyword, display_count);
        debug!("Fetching Naver news from: {}", url);

        let response = self
            .client
            .get(&url)
            .header("X-Naver-Client-Id", &self.credentials.client_id)
            .header("X-Naver-Client-Secret", &self.credentials.client_secret)
            .send()
            .await
            .map_err(|e| {
                NewsdeskError::network(format!("Failed to reach Naver news API: {}", e))
            })?;

        if !response.status().is_success() {
            return Err(NewsdeskError::Api {
                status: response.status().as_u16(),
                message: "Naver news API returned an error response".to_string(),
            });
        }

        response.json().await.map_err(|e| {
            NewsdeskError::parse(format!("Failed to decode Naver news payload: {}", e))
        })
    }

    /// Fetch the Google News RSS feed for a keyword as raw XML text
    #[instrument(skip(self))]
    pub async fn fetch_xml_news(&self, keyword: &str) -> NewsdeskResult<String> {
        let url = build_xml_news_url(&self.google_rss_base, keyword);
        debug!("Fetching Google News feed from: {}", url);

        let response = self.client.get(&url).send().await.map_err(|e| {
            NewsdeskError::network(format!("Failed to reach Google News feed: {}", e))
        })?;

        if !response.status().is_success() {
            return Err(NewsdeskError::Api {
                status: response.status().as_u16(),
                message: "Google News feed returned an error response".to_string(),
            });
        }

        response.text().await.map_err(|e| {
            NewsdeskError::network(format!("Failed to read Google News feed body: {}", e))
        })
    }
}

/// Build the Naver news-search URL for a keyword, sorted newest first
fn build_json_news_url(base: &str, keyword: &str, display_count: u32) -> String {
    format!(
        "{}?query={}&display={}&sort=date",
        base,
        urlencoding::encode(keyword),
        display_count
    )
}

/// Build the Google News RSS search URL, pinned to the Korean edition
fn build_xml_news_url(base: &str, keyword: &str) -> String {
    format!(
        "{}?q={}&hl=ko&gl=KR&ceid=KR:ko",
        base,
        urlencoding::encode(keyword)
    )
}
