//! Listing codec for lurk.
//!
//! Turns raw listing bytes into typed, per-kind collections. Pure and
//! synchronous; no HTTP dependencies.
//!
//! # Quick start
//!
//! ```no_run
//! use lurk_core::Kind;
//! use lurk_listing::{decode_listing, split};
//!
//! let body = br#"{"kind":"Listing","data":{"after":null,"before":null,"children":[]}}"#;
//! let listing = decode_listing(body).unwrap();
//! let buckets = split(listing, &[Kind::Link, Kind::Comment]);
//! println!("{} posts, {} warnings", buckets.posts.len(), buckets.warnings.len());
//! ```

pub mod decode;
pub mod envelope;
pub mod error;
pub mod listing;
pub mod registry;
pub mod split;

pub use envelope::{decode_slice, decode_thing};
pub use error::DecodeError;
pub use listing::{DecodedListing, decode_listing};
pub use split::{Buckets, EntityRef, Warning, split};

#[cfg(test)]
mod tests;
