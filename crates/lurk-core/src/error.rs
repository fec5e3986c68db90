//! Error types for `lurk-core`.

use thiserror::Error;

use crate::fullname::{Fullname, Kind};

/// Terminal failures. Any of these aborts the whole fetch it occurred in.
#[derive(Debug, Error)]
pub enum Error {
  /// The network collaborator failed to deliver bytes.
  #[error("transport failure: {0}")]
  Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

  /// The top-level body is not JSON or not a listing envelope.
  #[error("malformed response: {0}")]
  MalformedResponse(String),

  #[error("no identifiers supplied")]
  EmptyRequest,

  #[error("invalid fullname: {0:?}")]
  InvalidFullname(String),

  #[error("expected a {expected} fullname, found {found}")]
  UnexpectedKind { expected: Kind, found: Fullname },

  #[error("invalid configuration: {0}")]
  InvalidConfig(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Why a single wire value could not be normalised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
  #[error("expected {expected}, found {found}")]
  WrongType {
    expected: &'static str,
    found:    &'static str,
  },

  #[error("value {0} is out of range")]
  OutOfRange(String),

  #[error("invalid value {0:?}")]
  Invalid(String),
}
