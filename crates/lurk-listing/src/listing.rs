//! Decoding a whole `Listing` response.

use lurk_core::{Entity, Error, Pagination};
use serde::Deserialize;
use serde_json::Value;

use crate::{DecodeError, envelope};

#[derive(Deserialize)]
struct ListingEnvelope {
  kind: String,
  data: ListingData,
}

#[derive(Deserialize)]
struct ListingData {
  #[serde(default)]
  before:   Option<String>,
  #[serde(default)]
  after:    Option<String>,
  #[serde(default)]
  modhash:  Option<String>,
  children: Vec<Value>,
}

/// A listing whose children have each been run through the envelope decoder.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedListing {
  pub pagination: Pagination,
  /// One entry per wire child, in wire order.
  pub children:   Vec<Result<Entity, DecodeError>>,
}

/// Decode a response body of the form
/// `{"kind": "Listing", "data": {"before", "after", "modhash", "children"}}`.
///
/// Only a body that is not JSON, or not shaped like a listing, fails; bad
/// children are carried through as per-child errors.
pub fn decode_listing(bytes: &[u8]) -> lurk_core::Result<DecodedListing> {
  let envelope: ListingEnvelope =
    serde_json::from_slice(bytes).map_err(|e| Error::MalformedResponse(e.to_string()))?;
  if envelope.kind != "Listing" {
    return Err(Error::MalformedResponse(format!(
      "expected a Listing, found kind {:?}",
      envelope.kind
    )));
  }

  let data = envelope.data;
  Ok(DecodedListing {
    pagination: Pagination {
      before:  data.before.unwrap_or_default(),
      after:   data.after.unwrap_or_default(),
      modhash: data.modhash.unwrap_or_default(),
    },
    children:   data.children.iter().map(envelope::decode_thing).collect(),
  })
}
