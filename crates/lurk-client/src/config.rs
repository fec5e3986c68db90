//! Client configuration. Passed in explicitly; nothing here is global.

use lurk_core::{Error, Result};
use serde::Deserialize;

/// The API caps identifier lists at this many per request.
pub const DEFAULT_MAX_IDS_PER_REQUEST: usize = 100;

/// How assembled buckets are ordered when a batch spans several requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderMode {
  /// Response order, partitions concatenated in issue order.
  #[default]
  Grouped,
  /// Each bucket re-sorted to follow the caller's identifier order.
  RequestOrder,
}

/// Settings for the batch request planner and result assembler.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
  pub max_ids_per_request: usize,
  pub ordering:            OrderMode,
  /// Issue the partitions of a large batch concurrently.
  pub concurrent:          bool,
}

impl Default for BatchConfig {
  fn default() -> Self {
    Self {
      max_ids_per_request: DEFAULT_MAX_IDS_PER_REQUEST,
      ordering:            OrderMode::default(),
      concurrent:          true,
    }
  }
}

impl BatchConfig {
  pub fn validate(&self) -> Result<()> {
    if self.max_ids_per_request == 0 {
      return Err(Error::InvalidConfig(
        "max_ids_per_request must be at least 1".into(),
      ));
    }
    Ok(())
  }
}

/// Connection settings for [`crate::http::HttpFetcher`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
  pub base_url:     String,
  pub user_agent:   String,
  pub timeout_secs: u64,
}

impl Default for HttpConfig {
  fn default() -> Self {
    Self {
      base_url:     "https://www.reddit.com".into(),
      user_agent:   concat!("lurk/", env!("CARGO_PKG_VERSION")).into(),
      timeout_secs: 30,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn partial_config_keeps_defaults() {
    let cfg: BatchConfig =
      serde_json::from_str(r#"{ "ordering": "request_order" }"#).unwrap();
    assert_eq!(cfg.max_ids_per_request, DEFAULT_MAX_IDS_PER_REQUEST);
    assert_eq!(cfg.ordering, OrderMode::RequestOrder);
    assert!(cfg.concurrent);
  }

  #[test]
  fn zero_ceiling_is_rejected() {
    let cfg = BatchConfig {
      max_ids_per_request: 0,
      ..BatchConfig::default()
    };
    assert!(matches!(cfg.validate(), Err(Error::InvalidConfig(_))));
  }
}
