//! The caller's vote on a post or comment.

use serde::{Serialize, Serializer};

/// Three distinct states; the wire sends `null`, `true` or `false`.
///
/// `Absent` covers both "not voted" and "vote withheld" (anonymous requests).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Vote {
  #[default]
  Absent,
  Upvoted,
  Downvoted,
}

impl Vote {
  /// The wire representation.
  pub fn as_wire(self) -> Option<bool> {
    match self {
      Self::Absent => None,
      Self::Upvoted => Some(true),
      Self::Downvoted => Some(false),
    }
  }
}

impl Serialize for Vote {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.as_wire().serialize(serializer)
  }
}
