//! Domain-to-publisher lookup for the JSON source
//!
//! The Naver search payload reports article origins as raw `originallink`
//! URLs. This table maps the well-known Korean outlet domains to their
//! display names and is injected into the JSON normalizer, so deployments
//! can extend or replace it without touching normalizer code.

use std::collections::HashMap;

/// Built-in table of well-known outlets, keyed by origin domain with any
/// leading `www.` already stripped
const BUILTIN_PUBLISHERS: &[(&str, &str)] = &[
    ("chosun.com", "조선일보"),
    ("joongang.co.kr", "중앙일보"),
    ("donga.com", "동아일보"),
    ("hani.co.kr", "한겨레"),
    ("kyunghyang.com", "경향신문"),
    ("kbs.co.kr", "KBS"),
    ("sbs.co.kr", "SBS"),
    ("imbc.com", "MBC"),
    ("ytn.co.kr", "YTN"),
    ("yna.co.kr", "연합뉴스"),
    ("news.mt.co.kr", "머니투데이"),
    ("hankookilbo.com", "한국일보"),
    ("dt.co.kr", "디지털타임즈"),
    ("kmib.co.kr", "국민일보"),
    ("v.daum.net", "다음 뉴스"),
];

/// Publisher display names keyed by origin domain
#[derive(Debug, Clone)]
pub struct MediaCatalog {
    entries: HashMap<String, String>,
}

impl MediaCatalog {
    /// Catalog seeded with the built-in publisher table
    pub fn new() -> Self {
        let entries = BUILTIN_PUBLISHERS
            .iter()
            .map(|(domain, publisher)| (domain.to_string(), publisher.to_string()))
            .collect();
        Self { entries }
    }

    /// Add or override a domain mapping
    pub fn insert(&mut self, domain: impl Into<String>, publisher: impl Into<String>) {
        self.entries.insert(domain.into(), publisher.into());
    }

    /// Look up the display name for a domain
    pub fn resolve(&self, domain: &str) -> Option<&str> {
        self.entries.get(domain).map(String::as_str)
    }
}

impl Default for MediaCatalog {
    fn default() -> Self {
        Self::new()
    }
}
