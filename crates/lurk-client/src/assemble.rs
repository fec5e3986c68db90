//! Result assembler: merges per-partition buckets back into one result.

use std::collections::HashMap;

use lurk_core::Fullname;
use lurk_listing::Buckets;

use crate::config::OrderMode;

/// Merge `parts`, each tagged with the index of the partition it answers.
///
/// Parts are concatenated by index, never by arrival order, so the result is
/// the same however concurrent fetches completed. The last partition's
/// pagination handle is kept. With [`OrderMode::RequestOrder`] every bucket is
/// then stably re-sorted to follow `requested`.
pub fn assemble(mut parts: Vec<(usize, Buckets)>, mode: OrderMode, requested: &[Fullname]) -> Buckets {
  parts.sort_by_key(|(index, _)| *index);

  let mut merged = Buckets::default();
  for (_, buckets) in parts {
    merged.append(buckets);
  }

  if mode == OrderMode::RequestOrder {
    reorder(&mut merged, requested);
  }
  merged
}

/// Entities whose fullname was not requested keep their relative order
/// behind the requested ones.
fn reorder(buckets: &mut Buckets, requested: &[Fullname]) {
  let mut ranks: HashMap<&Fullname, usize> = HashMap::with_capacity(requested.len());
  for (rank, name) in requested.iter().enumerate() {
    ranks.entry(name).or_insert(rank);
  }
  let rank = |name: &Fullname| ranks.get(name).copied().unwrap_or(usize::MAX);

  // Rank the interleaving before the buckets move; ties keep listing order.
  let mut order: Vec<_> = buckets
    .interleaved()
    .iter()
    .enumerate()
    .map(|(position, e)| (rank(e.fullname()), position, e.kind()))
    .collect();
  order.sort_by_key(|(rank, position, _)| (*rank, *position));
  buckets.order = order.into_iter().map(|(_, _, kind)| kind).collect();

  // Stable sorts by the same rank keep each bucket in step with `order`.
  buckets.posts.sort_by_key(|p| rank(&p.full_id));
  buckets.comments.sort_by_key(|c| rank(&c.full_id));
  buckets.subreddits.sort_by_key(|s| rank(&s.name));
  buckets.mores.sort_by_key(|m| rank(&m.full_id));
}
