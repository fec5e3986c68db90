//! Per-entity decode failures.
//!
//! None of these are terminal for a listing: the splitter records them as
//! [`crate::Warning`]s and keeps going.

use lurk_core::{FieldError, Kind};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
  /// The envelope's kind code has no registered decoder.
  #[error("unknown kind {0:?}")]
  UnknownKind(String),

  /// A field of a recognised entity could not be normalised.
  #[error("malformed field `{field}` on {kind}: {reason}")]
  MalformedField {
    kind:   Kind,
    field:  &'static str,
    reason: FieldError,
  },

  /// Not a `{kind, data}` object at all.
  #[error("malformed envelope: {0}")]
  MalformedEnvelope(String),
}

pub type Result<T, E = DecodeError> = std::result::Result<T, E>;
