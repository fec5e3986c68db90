//! Default network collaborator: plain HTTP GET via `reqwest`.
//!
//! One attempt per request. Retries, backoff and authentication are left to
//! callers that wrap or replace this fetcher.

use std::{future::Future, time::Duration};

use bytes::Bytes;
use lurk_core::fetch::{Fetch, WireRequest};
use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::config::HttpConfig;

#[derive(Debug, Error)]
pub enum HttpError {
  #[error("failed to build HTTP client: {0}")]
  Build(#[source] reqwest::Error),

  #[error("GET {path} failed: {source}")]
  Request {
    path:   String,
    #[source]
    source: reqwest::Error,
  },

  #[error("GET {path} → {status}")]
  Status { path: String, status: StatusCode },
}

/// [`Fetch`] over HTTP.
///
/// Cheap to clone; the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct HttpFetcher {
  client: Client,
  config: HttpConfig,
}

impl HttpFetcher {
  pub fn new(config: HttpConfig) -> Result<Self, HttpError> {
    let client = Client::builder()
      .timeout(Duration::from_secs(config.timeout_secs))
      .user_agent(config.user_agent.clone())
      .build()
      .map_err(HttpError::Build)?;
    Ok(Self { client, config })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
  }
}

impl Fetch for HttpFetcher {
  type Error = HttpError;

  fn fetch<'a>(
    &'a self,
    request: &'a WireRequest,
  ) -> impl Future<Output = Result<Bytes, Self::Error>> + Send + 'a {
    async move {
      let path = request.path();
      debug!(%path, "GET");

      let resp = self
        .client
        .get(self.url(&path))
        .query(&request.query())
        .send()
        .await
        .map_err(|source| HttpError::Request {
          path: path.clone(),
          source,
        })?;

      let status = resp.status();
      if !status.is_success() {
        return Err(HttpError::Status { path, status });
      }
      resp
        .bytes()
        .await
        .map_err(|source| HttpError::Request { path, source })
    }
  }
}
