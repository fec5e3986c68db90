//! The `Fetch` trait and the wire request it receives.
//!
//! The engine never talks to the network itself. It plans [`WireRequest`]s and
//! hands them to a [`Fetch`] implementation, which returns raw body bytes.

use std::future::Future;

use bytes::Bytes;

/// Which endpoint a request is aimed at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
  /// `GET /api/info?id=<fullnames>`: any mix of kinds.
  Info,
  /// `GET /by_id/<fullnames>`: posts only.
  ById,
}

/// One planned request: an endpoint and its comma-joined fullnames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireRequest {
  pub endpoint: Endpoint,
  pub ids:      String,
}

impl WireRequest {
  pub fn path(&self) -> String {
    match self.endpoint {
      Endpoint::Info => "/api/info".to_owned(),
      Endpoint::ById => format!("/by_id/{}", self.ids),
    }
  }

  pub fn query(&self) -> Vec<(&'static str, String)> {
    match self.endpoint {
      Endpoint::Info => vec![("id", self.ids.clone())],
      Endpoint::ById => Vec::new(),
    }
  }
}

/// Abstraction over the network collaborator.
///
/// Implementations perform exactly one request and report transport-level
/// failures (connection, timeout, non-2xx status) as `Self::Error`. Retry
/// policy, if any, belongs here too, not in the engine.
pub trait Fetch: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  fn fetch<'a>(
    &'a self,
    request: &'a WireRequest,
  ) -> impl Future<Output = Result<Bytes, Self::Error>> + Send + 'a;
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn info_sends_ids_as_query() {
    let req = WireRequest {
      endpoint: Endpoint::Info,
      ids:      "t5_2qh23,t3_i2gvg4,t1_g05v931".into(),
    };
    assert_eq!(req.path(), "/api/info");
    assert_eq!(
      req.query(),
      vec![("id", "t5_2qh23,t3_i2gvg4,t1_g05v931".to_string())]
    );
  }

  #[test]
  fn by_id_sends_ids_in_path() {
    let req = WireRequest {
      endpoint: Endpoint::ById,
      ids:      "t3_i2gvg4,t3_i2gwgz".into(),
    };
    assert_eq!(req.path(), "/by_id/t3_i2gvg4,t3_i2gwgz");
    assert!(req.query().is_empty());
  }
}
