//! Core types for the newsdesk aggregation service
//!
//! This crate defines the shared data structures used across the workspace:
//! the normalized news item, the ranked search response handed to the render
//! surface, and the workspace-wide error taxonomy.

pub mod error;
pub mod news;

pub use error::{NewsdeskError, NewsdeskResult};
pub use news::{NewsItem, SearchResults};
