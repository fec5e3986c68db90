//! Demultiplexing a decoded listing into per-kind buckets.

use lurk_core::{Comment, Entity, Fullname, Kind, More, Pagination, Post, Subreddit};
use serde::{Serialize, Serializer};
use tracing::{debug, warn};

use crate::{DecodeError, listing::DecodedListing};

// ─── Warning ─────────────────────────────────────────────────────────────────

/// A child that could not be classified. Non-fatal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Warning {
  /// Index of the child in the listing it came from.
  pub position: usize,
  #[serde(serialize_with = "as_display")]
  pub error:    DecodeError,
}

fn as_display<S: Serializer>(error: &DecodeError, serializer: S) -> Result<S::Ok, S::Error> {
  serializer.collect_str(error)
}

// ─── Buckets ─────────────────────────────────────────────────────────────────

/// Typed, order-preserving collections for one or more listings.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Buckets {
  pub posts:      Vec<Post>,
  pub comments:   Vec<Comment>,
  pub subreddits: Vec<Subreddit>,
  pub mores:      Vec<More>,
  pub pagination: Pagination,
  pub warnings:   Vec<Warning>,
  /// The kind of every bucketed entity, in listing order. Together with the
  /// buckets this reproduces the original interleaving.
  #[serde(skip)]
  pub order:      Vec<Kind>,
  /// How many wire children the buckets were built from.
  #[serde(skip)]
  pub children:   usize,
}

/// A borrowed view of one bucketed entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntityRef<'a> {
  Post(&'a Post),
  Comment(&'a Comment),
  Subreddit(&'a Subreddit),
  More(&'a More),
}

impl EntityRef<'_> {
  pub fn kind(&self) -> Kind {
    match self {
      Self::Post(_) => Kind::Link,
      Self::Comment(_) => Kind::Comment,
      Self::Subreddit(_) => Kind::Subreddit,
      Self::More(_) => Kind::More,
    }
  }

  pub fn fullname(&self) -> &Fullname {
    match self {
      Self::Post(p) => &p.full_id,
      Self::Comment(c) => &c.full_id,
      Self::Subreddit(s) => &s.name,
      Self::More(m) => &m.full_id,
    }
  }
}

impl Buckets {
  /// File `entity` under the bucket for its kind.
  pub fn push(&mut self, entity: Entity) {
    self.order.push(entity.kind());
    match entity {
      Entity::Post(p) => self.posts.push(p),
      Entity::Comment(c) => self.comments.push(c),
      Entity::Subreddit(s) => self.subreddits.push(s),
      Entity::More(m) => self.mores.push(m),
    }
  }

  /// Number of bucketed entities.
  pub fn len(&self) -> usize { self.order.len() }

  pub fn is_empty(&self) -> bool { self.order.is_empty() }

  /// Every bucketed entity in its original relative order.
  pub fn interleaved(&self) -> Vec<EntityRef<'_>> {
    let (mut p, mut c, mut s, mut m) = (
      self.posts.iter(),
      self.comments.iter(),
      self.subreddits.iter(),
      self.mores.iter(),
    );
    self
      .order
      .iter()
      .filter_map(|kind| match kind {
        Kind::Link => p.next().map(EntityRef::Post),
        Kind::Comment => c.next().map(EntityRef::Comment),
        Kind::Subreddit => s.next().map(EntityRef::Subreddit),
        Kind::More => m.next().map(EntityRef::More),
        _ => None,
      })
      .collect()
  }

  /// Append `later` after `self`: buckets are concatenated, warning
  /// positions are shifted past this side's children, and `later`'s
  /// pagination wins.
  pub fn append(&mut self, later: Buckets) {
    let offset = self.children;
    self.posts.extend(later.posts);
    self.comments.extend(later.comments);
    self.subreddits.extend(later.subreddits);
    self.mores.extend(later.mores);
    self.order.extend(later.order);
    self.warnings.extend(later.warnings.into_iter().map(|w| Warning {
      position: w.position + offset,
      error:    w.error,
    }));
    self.children += later.children;
    self.pagination = later.pagination;
  }
}

// ─── Splitter ────────────────────────────────────────────────────────────────

/// Split `listing` into buckets for the requested `kinds`.
///
/// Entities of other kinds are dropped silently. Children that failed to
/// decode become [`Warning`]s. The pagination handle is carried over as-is.
pub fn split(listing: DecodedListing, kinds: &[Kind]) -> Buckets {
  let mut buckets = Buckets {
    pagination: listing.pagination,
    children: listing.children.len(),
    ..Buckets::default()
  };

  for (position, child) in listing.children.into_iter().enumerate() {
    match child {
      Ok(entity) if kinds.contains(&entity.kind()) => buckets.push(entity),
      Ok(entity) => {
        debug!(position, kind = %entity.kind(), "omitting entity of unrequested kind");
      }
      Err(error) => {
        warn!(position, %error, "skipping listing child");
        buckets.warnings.push(Warning { position, error });
      }
    }
  }

  buckets
}
