//! Static dispatch table from kind code to decoder.
//!
//! Adding a kind means adding an entry here and a decoder in
//! [`crate::decode`]; nothing else in the engine branches on kind codes.

use lurk_core::{Entity, Kind};

use crate::{
  decode::{self, Fields},
  error::Result,
};

pub type DecodeFn = fn(&Fields<'_>) -> Result<Entity>;

/// One registry entry. `kind` is also the bucket the splitter files the
/// decoded entity under.
#[derive(Debug, Clone, Copy)]
pub struct Registration {
  pub kind:   Kind,
  pub decode: DecodeFn,
}

static REGISTRY: [Registration; 4] = [
  Registration { kind: Kind::Comment, decode: decode::comment },
  Registration { kind: Kind::Link, decode: decode::post },
  Registration { kind: Kind::Subreddit, decode: decode::subreddit },
  Registration { kind: Kind::More, decode: decode::more },
];

/// Exact-match lookup by wire code.
pub fn lookup(code: &str) -> Option<&'static Registration> {
  REGISTRY.iter().find(|r| r.kind.code() == code)
}

/// Kinds that have a decoder, in registry order.
pub fn registered_kinds() -> impl Iterator<Item = Kind> {
  REGISTRY.iter().map(|r| r.kind)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn looks_up_registered_codes() {
    assert_eq!(lookup("t1").map(|r| r.kind), Some(Kind::Comment));
    assert_eq!(lookup("t3").map(|r| r.kind), Some(Kind::Link));
    assert_eq!(lookup("t5").map(|r| r.kind), Some(Kind::Subreddit));
    assert_eq!(lookup("more").map(|r| r.kind), Some(Kind::More));
  }

  #[test]
  fn unregistered_and_near_miss_codes_fail() {
    for code in ["t2", "t4", "t6", "T3", "t3 ", "Listing", ""] {
      assert!(lookup(code).is_none(), "{code:?} should not resolve");
    }
  }

  #[test]
  fn registry_has_no_duplicates() {
    let kinds: Vec<_> = registered_kinds().collect();
    let mut deduped = kinds.clone();
    deduped.sort();
    deduped.dedup();
    assert_eq!(kinds.len(), deduped.len());
  }
}
