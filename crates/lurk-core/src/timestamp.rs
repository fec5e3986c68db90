//! Second-precision UTC timestamps with a "not applicable" sentinel.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

/// An absolute UTC instant, truncated to whole seconds.
///
/// [`Timestamp::ZERO`] stands for "unknown" or "never happened" (e.g. a post
/// that was never edited). It sits at chrono's minimum instant, so it never
/// collides with a real timestamp from this API, all of which are after 1970.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
  pub const ZERO: Self = Self(DateTime::<Utc>::MIN_UTC);

  /// `None` if `secs` is outside chrono's representable range.
  pub fn from_unix(secs: i64) -> Option<Self> {
    DateTime::from_timestamp(secs, 0).map(Self)
  }

  pub fn is_zero(&self) -> bool { *self == Self::ZERO }

  /// The underlying instant, or `None` for the sentinel.
  pub fn as_datetime(&self) -> Option<DateTime<Utc>> {
    (!self.is_zero()).then_some(self.0)
  }
}

impl Default for Timestamp {
  fn default() -> Self { Self::ZERO }
}

/// The sentinel serialises as `null`, everything else as RFC 3339.
impl Serialize for Timestamp {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    self.as_datetime().serialize(serializer)
  }
}

#[cfg(test)]
mod tests {
  use chrono::TimeZone;

  use super::*;

  #[test]
  fn zero_is_distinct_from_epoch() {
    let epoch = Timestamp::from_unix(0).unwrap();
    assert!(!epoch.is_zero());
    assert_ne!(epoch, Timestamp::ZERO);
    assert!(Timestamp::ZERO < epoch);
    assert_eq!(Timestamp::default(), Timestamp::ZERO);
  }

  #[test]
  fn as_datetime_hides_sentinel() {
    assert_eq!(Timestamp::ZERO.as_datetime(), None);
    let ts = Timestamp::from_unix(1_596_392_588).unwrap();
    assert_eq!(
      ts.as_datetime(),
      Some(Utc.with_ymd_and_hms(2020, 8, 2, 18, 23, 8).unwrap())
    );
  }

  #[test]
  fn serialises_sentinel_as_null() {
    assert_eq!(serde_json::to_string(&Timestamp::ZERO).unwrap(), "null");
    let ts = Timestamp::from_unix(1_201_237_888).unwrap();
    assert_eq!(
      serde_json::to_string(&ts).unwrap(),
      "\"2008-01-25T05:11:28Z\""
    );
  }
}
