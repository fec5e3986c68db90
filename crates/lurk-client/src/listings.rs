//! The listings service: plan, fetch, decode, split, assemble.

use std::sync::Arc;

use bytes::Bytes;
use lurk_core::{
  Error, Fullname, Kind, Result,
  fetch::{Endpoint, Fetch},
};
use lurk_listing::{Buckets, decode_listing, split};
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use crate::{
  assemble::assemble,
  config::BatchConfig,
  planner::{Partition, plan},
};

/// Kinds collected by [`Listings::get`].
pub const MIXED_KINDS: [Kind; 3] = [Kind::Link, Kind::Comment, Kind::Subreddit];

/// Fetches objects by fullname through a [`Fetch`] collaborator.
///
/// Cheap to clone; the fetcher is shared behind an `Arc`.
pub struct Listings<F> {
  fetcher: Arc<F>,
  config:  BatchConfig,
}

impl<F> Clone for Listings<F> {
  fn clone(&self) -> Self {
    Self {
      fetcher: Arc::clone(&self.fetcher),
      config:  self.config.clone(),
    }
  }
}

impl<F> Listings<F>
where
  F: Fetch + 'static,
{
  pub fn new(fetcher: F, config: BatchConfig) -> Self { Self::shared(Arc::new(fetcher), config) }

  pub fn shared(fetcher: Arc<F>, config: BatchConfig) -> Self { Self { fetcher, config } }

  pub fn config(&self) -> &BatchConfig { &self.config }

  pub fn fetcher(&self) -> &F { &self.fetcher }

  /// `GET /api/info?id=<ids>`: posts, comments and subreddits in one go.
  pub async fn get(&self, ids: &[Fullname]) -> Result<Buckets> {
    self.run(ids, Endpoint::Info, &MIXED_KINDS).await
  }

  /// Like [`Listings::get`], collecting only `kinds`.
  pub async fn get_with_kinds(&self, ids: &[Fullname], kinds: &[Kind]) -> Result<Buckets> {
    self.run(ids, Endpoint::Info, kinds).await
  }

  /// `GET /by_id/<ids>`: posts only. Every id must be a `t3` fullname.
  pub async fn get_posts(&self, ids: &[Fullname]) -> Result<Buckets> {
    self.run(ids, Endpoint::ById, &[Kind::Link]).await
  }

  async fn run(&self, ids: &[Fullname], endpoint: Endpoint, kinds: &[Kind]) -> Result<Buckets> {
    let partitions = plan(ids, endpoint, &self.config)?;
    debug!(ids = ids.len(), partitions = partitions.len(), ?endpoint, "planned batch");

    let bodies = if self.config.concurrent && partitions.len() > 1 {
      self.fetch_concurrent(partitions).await?
    } else {
      self.fetch_sequential(partitions).await?
    };

    let mut parts = Vec::with_capacity(bodies.len());
    for (index, body) in bodies {
      let listing = decode_listing(&body)?;
      parts.push((index, split(listing, kinds)));
    }

    let buckets = assemble(parts, self.config.ordering, ids);
    if !buckets.warnings.is_empty() {
      warn!(count = buckets.warnings.len(), "some listing children were skipped");
    }
    info!(
      posts = buckets.posts.len(),
      comments = buckets.comments.len(),
      subreddits = buckets.subreddits.len(),
      "fetched batch"
    );
    Ok(buckets)
  }

  async fn fetch_sequential(&self, partitions: Vec<Partition>) -> Result<Vec<(usize, Bytes)>> {
    let mut bodies = Vec::with_capacity(partitions.len());
    for partition in partitions {
      debug!(index = partition.index, ids = partition.len, "fetching partition");
      let body = self
        .fetcher
        .fetch(&partition.request)
        .await
        .map_err(|e| Error::Transport(Box::new(e)))?;
      bodies.push((partition.index, body));
    }
    Ok(bodies)
  }

  /// Every partition runs as its own task, tagged with its index; results
  /// come back in completion order and are put right by the assembler.
  async fn fetch_concurrent(&self, partitions: Vec<Partition>) -> Result<Vec<(usize, Bytes)>> {
    let mut tasks = JoinSet::new();
    for partition in partitions {
      let fetcher = Arc::clone(&self.fetcher);
      tasks.spawn(async move {
        debug!(index = partition.index, ids = partition.len, "fetching partition");
        let body = fetcher.fetch(&partition.request).await;
        (partition.index, body)
      });
    }

    let mut bodies = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
      let (index, body) = joined.map_err(|e| Error::Transport(Box::new(e)))?;
      bodies.push((index, body.map_err(|e| Error::Transport(Box::new(e)))?));
    }
    Ok(bodies)
  }
}
