//! Source normalizers for the newsdesk gateway
//!
//! Each upstream has its own adapter that fetches through the gateway's
//! passthrough endpoints and flattens the native payload into the shared
//! `NewsItem` shape:
//! - Google News RSS: XML feed with publisher-suffixed titles
//! - Naver news search: JSON payload with markup-laden text fields
//!
//! The adapters keep their domain-specific parsing shortcuts (title/source
//! splitting, tag stripping, publisher lookup) behind this crate boundary so
//! the ranking engine only ever sees normalized items.

pub mod error;
pub mod google_news;
pub mod media_catalog;
pub mod naver_news;

pub use error::SourceError;
pub use google_news::GoogleNewsClient;
pub use media_catalog::MediaCatalog;
pub use naver_news::NaverNewsClient;
