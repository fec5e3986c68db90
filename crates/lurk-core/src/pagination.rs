//! Listing cursor metadata.

use serde::Serialize;

/// The `before` / `after` cursors and modhash of a listing.
///
/// All three are opaque. An empty cursor means there is no further page in
/// that direction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Pagination {
  pub before:  String,
  pub after:   String,
  pub modhash: String,
}

impl Pagination {
  pub fn is_exhausted(&self) -> bool { self.before.is_empty() && self.after.is_empty() }
}
