//! Batch fetching for lurk.
//!
//! [`Listings`] plans multi-identifier requests, hands them to a
//! [`lurk_core::fetch::Fetch`] collaborator, and assembles the decoded
//! listings into typed, order-preserving buckets. [`http::HttpFetcher`] is a
//! ready-made collaborator for the public API.
//!
//! # Example
//!
//! ```rust,ignore
//! let listings = Listings::new(HttpFetcher::new(HttpConfig::default())?, BatchConfig::default());
//! let ids = ["t5_2qh23", "t3_i2gvg4"].map(|s| s.parse().unwrap());
//! let buckets = listings.get(&ids).await?;
//! ```

pub mod assemble;
pub mod config;
pub mod http;
pub mod listings;
pub mod planner;

pub use config::{BatchConfig, HttpConfig, OrderMode};
pub use http::HttpFetcher;
pub use listings::Listings;
