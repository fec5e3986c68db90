//! Batch request planner.
//!
//! Splits a caller's fullnames into contiguous partitions no larger than the
//! configured ceiling and encodes each one as a [`WireRequest`]. All
//! validation happens here, before anything reaches the network.

use lurk_core::{
  Error, Fullname, Kind, Result,
  fetch::{Endpoint, WireRequest},
};

use crate::config::BatchConfig;

/// One planned request, tagged with its position in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition {
  pub index:   usize,
  pub request: WireRequest,
  /// Number of identifiers in this partition.
  pub len:     usize,
}

/// Contiguous chunks of at most `size` items: the first `size`, the next
/// `size`, and so on. `size` must be non-zero.
pub fn partition<T>(items: &[T], size: usize) -> Vec<&[T]> { items.chunks(size).collect() }

/// Plan the requests needed to fetch `ids` from `endpoint`.
///
/// Fails with [`Error::EmptyRequest`] for an empty batch and, for
/// [`Endpoint::ById`], with [`Error::UnexpectedKind`] if any fullname is not a
/// post.
pub fn plan(ids: &[Fullname], endpoint: Endpoint, config: &BatchConfig) -> Result<Vec<Partition>> {
  if ids.is_empty() {
    return Err(Error::EmptyRequest);
  }
  config.validate()?;

  if endpoint == Endpoint::ById {
    if let Some(found) = ids.iter().find(|id| id.kind() != Kind::Link) {
      return Err(Error::UnexpectedKind {
        expected: Kind::Link,
        found:    found.clone(),
      });
    }
  }

  Ok(
    partition(ids, config.max_ids_per_request)
      .into_iter()
      .enumerate()
      .map(|(index, chunk)| Partition {
        index,
        len: chunk.len(),
        request: WireRequest {
          endpoint,
          ids: join(chunk),
        },
      })
      .collect(),
  )
}

fn join(ids: &[Fullname]) -> String {
  ids.iter().map(Fullname::as_str).collect::<Vec<_>>().join(",")
}
