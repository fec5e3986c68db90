//! Kind codes and kind-prefixed identifiers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Error;

// ─── Kind ────────────────────────────────────────────────────────────────────

/// The short type code carried by every wire envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Kind {
  Comment,
  Account,
  /// A post. The API calls these links whether or not they carry a URL.
  Link,
  Message,
  Subreddit,
  Award,
  /// "Load more comments" placeholder.
  More,
}

impl Kind {
  /// Every kind, in code order.
  pub const ALL: [Kind; 7] = [
    Kind::Comment,
    Kind::Account,
    Kind::Link,
    Kind::Message,
    Kind::Subreddit,
    Kind::Award,
    Kind::More,
  ];

  pub fn code(self) -> &'static str {
    match self {
      Self::Comment => "t1",
      Self::Account => "t2",
      Self::Link => "t3",
      Self::Message => "t4",
      Self::Subreddit => "t5",
      Self::Award => "t6",
      Self::More => "more",
    }
  }

  pub fn from_code(code: &str) -> Option<Self> {
    Self::ALL.into_iter().find(|k| k.code() == code)
  }

  /// Whether this kind may appear as the prefix of a [`Fullname`].
  pub fn is_fullname_prefix(self) -> bool { !matches!(self, Self::More) }

  /// The prefix carried by the fullname of an object of this kind. `more`
  /// placeholders are named after the comment they stand in for.
  pub fn fullname_kind(self) -> Self {
    match self {
      Self::More => Self::Comment,
      other => other,
    }
  }
}

impl fmt::Display for Kind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

impl Serialize for Kind {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.code())
  }
}

// ─── Fullname ────────────────────────────────────────────────────────────────

/// A kind-prefixed global identifier such as `t3_i2gvg4`.
///
/// Always holds a `t1`..`t6` prefix and a non-empty local id that contains no
/// comma, so a list of fullnames can be comma-joined without escaping.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fullname {
  raw:  String,
  kind: Kind,
}

impl Fullname {
  /// Build a fullname from a kind and a local identifier.
  pub fn new(kind: Kind, id: &str) -> Result<Self, Error> {
    format!("{}_{id}", kind.code()).parse()
  }

  pub fn kind(&self) -> Kind { self.kind }

  /// The local identifier, without the kind prefix.
  pub fn id(&self) -> &str { &self.raw[3..] }

  pub fn as_str(&self) -> &str { &self.raw }
}

impl FromStr for Fullname {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let invalid = || Error::InvalidFullname(s.to_owned());
    let (prefix, id) = s.split_once('_').ok_or_else(invalid)?;
    let kind = Kind::from_code(prefix)
      .filter(|k| k.is_fullname_prefix())
      .ok_or_else(invalid)?;
    if id.is_empty() || id.contains(',') || id.contains(char::is_whitespace) {
      return Err(invalid());
    }
    Ok(Self { raw: s.to_owned(), kind })
  }
}

impl fmt::Display for Fullname {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.raw)
  }
}

impl Serialize for Fullname {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&self.raw)
  }
}

impl<'de> Deserialize<'de> for Fullname {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.parse().map_err(serde::de::Error::custom)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_every_prefix() {
    for (raw, kind) in [
      ("t1_g05v931", Kind::Comment),
      ("t2_164ab8", Kind::Account),
      ("t3_i2gvg4", Kind::Link),
      ("t4_abc", Kind::Message),
      ("t5_2qh23", Kind::Subreddit),
      ("t6_xyz", Kind::Award),
    ] {
      let name: Fullname = raw.parse().unwrap();
      assert_eq!(name.kind(), kind);
      assert_eq!(name.as_str(), raw);
    }
  }

  #[test]
  fn splits_local_id() {
    let name: Fullname = "t3_i2gvg4".parse().unwrap();
    assert_eq!(name.id(), "i2gvg4");
    assert_eq!(Fullname::new(Kind::Link, "i2gvg4").unwrap(), name);
  }

  #[test]
  fn rejects_bad_shapes() {
    for raw in ["", "t3", "t3_", "t9_abc", "more_abc", "x_abc", "t3_a,b", "t3_a b"] {
      assert!(
        matches!(raw.parse::<Fullname>(), Err(Error::InvalidFullname(_))),
        "{raw:?} should be rejected"
      );
    }
  }

  #[test]
  fn kind_codes_round_trip() {
    for kind in Kind::ALL {
      assert_eq!(Kind::from_code(kind.code()), Some(kind));
    }
    assert_eq!(Kind::from_code("Listing"), None);
  }
}
