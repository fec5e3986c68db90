//! Core types for the lurk listing engine.
//!
//! Entities, identifiers, normalised field values, and the [`fetch::Fetch`]
//! seam through which raw response bytes arrive. This crate is free of HTTP
//! dependencies; every other crate in the workspace builds on it.

pub mod entity;
pub mod error;
pub mod fetch;
pub mod fullname;
pub mod normalize;
pub mod pagination;
pub mod timestamp;
pub mod vote;

pub use entity::{Comment, Entity, More, Post, Subreddit};
pub use error::{Error, FieldError, Result};
pub use fullname::{Fullname, Kind};
pub use pagination::Pagination;
pub use timestamp::Timestamp;
pub use vote::Vote;
