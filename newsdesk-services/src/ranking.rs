//! Keyword ranking for pooled news articles
//!
//! Articles from every source are pooled and ranked into two tiers: title
//! matches first, then description-only matches, each tier newest-first.
//! Articles that mention the keyword nowhere are dropped.

use std::cmp::Reverse;

use chrono::{DateTime, Utc};

use newsdesk_core::NewsItem;

/// Upper bound on ranked results returned to callers
pub const RESULT_LIMIT: usize = 50;

/// Rank a pooled list of articles against a keyword.
///
/// Title matches outrank description-only matches regardless of age. Within
/// a tier articles are ordered newest-first by publication date; articles
/// whose date cannot be parsed order after every dated article. At most
/// [`RESULT_LIMIT`] articles survive.
pub fn rank_news(keyword: &str, pool: Vec<NewsItem>) -> Vec<NewsItem> {
    let keyword_lower = keyword.to_lowercase();

    let mut title_matches = Vec::new();
    let mut description_matches = Vec::new();

    for item in pool {
        if item.title.to_lowercase().contains(&keyword_lower) {
            title_matches.push(item);
        } else if item.description.to_lowercase().contains(&keyword_lower) {
            description_matches.push(item);
        }
    }

    sort_newest_first(&mut title_matches);
    sort_newest_first(&mut description_matches);

    let mut ranked = title_matches;
    ranked.append(&mut description_matches);
    ranked.truncate(RESULT_LIMIT);
    ranked
}

/// Sort articles newest-first, keeping pool order for equal dates
fn sort_newest_first(items: &mut [NewsItem]) {
    items.sort_by_cached_key(|item| Reverse(parse_pub_date(&item.pub_date)));
}

/// Parse an RFC 2822 or RFC 3339 publication date
fn parse_pub_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc2822(raw)
        .or_else(|_| DateTime::parse_from_rfc3339(raw))
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
