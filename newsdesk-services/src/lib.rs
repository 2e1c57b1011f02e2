//! Search orchestration for the newsdesk gateway
//!
//! This crate provides the service layer that fans keyword queries out to
//! the source normalizers and ranks the pooled articles for the API.

pub mod ranking;
pub mod search_service;

pub use ranking::{rank_news, RESULT_LIMIT};
pub use search_service::{SearchError, SearchService};
