//! Field normalizers: ambiguous wire values in, unambiguous typed values out.
//!
//! Every function takes `Option<&Value>` so that a missing key and an explicit
//! `null` go through the same path. Where a missing value has a default (zero
//! for counts, empty for strings, `false` for flags) that default is
//! indistinguishable from a genuine zero in the output.

use serde_json::{Number, Value};

use crate::{FieldError, Fullname, Timestamp, Vote};

type Result<T> = std::result::Result<T, FieldError>;

fn type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(true) => "true",
    Value::Bool(false) => "false",
    Value::Number(_) => "number",
    Value::String(_) => "string",
    Value::Array(_) => "array",
    Value::Object(_) => "object",
  }
}

fn wrong(expected: &'static str, found: &Value) -> FieldError {
  FieldError::WrongType {
    expected,
    found: type_name(found),
  }
}

fn out_of_range(n: &Number) -> FieldError { FieldError::OutOfRange(n.to_string()) }

/// A finite float that is a whole number within `[min, max)`.
fn whole(n: &Number, min: f64, max: f64) -> Option<f64> {
  n.as_f64()
    .filter(|f| f.is_finite() && f.fract() == 0.0 && *f >= min && *f < max)
}

fn seconds(n: &Number) -> Result<Timestamp> {
  let secs = match n.as_i64() {
    Some(secs) => secs,
    None => {
      let f = n
        .as_f64()
        .filter(|f| f.is_finite())
        .map(f64::trunc)
        .filter(|f| *f >= i64::MIN as f64 && *f < i64::MAX as f64)
        .ok_or_else(|| out_of_range(n))?;
      f as i64
    }
  };
  Timestamp::from_unix(secs).ok_or_else(|| out_of_range(n))
}

// ─── Time ────────────────────────────────────────────────────────────────────

/// Epoch seconds (fraction truncated) to a UTC timestamp. Missing or `null`
/// yields [`Timestamp::ZERO`].
pub fn epoch(value: Option<&Value>) -> Result<Timestamp> {
  match value {
    None | Some(Value::Null) => Ok(Timestamp::ZERO),
    Some(Value::Number(n)) => seconds(n),
    Some(other) => Err(wrong("number", other)),
  }
}

/// The `edited` marker: `false` for never edited, otherwise epoch seconds.
///
/// Never-edited maps to [`Timestamp::ZERO`], so callers test
/// `edited.is_zero()` rather than checking for absence.
pub fn edited(value: Option<&Value>) -> Result<Timestamp> {
  match value {
    None | Some(Value::Null) | Some(Value::Bool(false)) => Ok(Timestamp::ZERO),
    Some(Value::Number(n)) => seconds(n),
    Some(other) => Err(wrong("false or number", other)),
  }
}

// ─── Vote ────────────────────────────────────────────────────────────────────

pub fn vote(value: Option<&Value>) -> Result<Vote> {
  match value {
    None | Some(Value::Null) => Ok(Vote::Absent),
    Some(Value::Bool(true)) => Ok(Vote::Upvoted),
    Some(Value::Bool(false)) => Ok(Vote::Downvoted),
    Some(other) => Err(wrong("boolean or null", other)),
  }
}

// ─── Numbers ─────────────────────────────────────────────────────────────────

/// A non-negative count. Missing or `null` is 0.
pub fn count(value: Option<&Value>) -> Result<u64> {
  match value {
    None | Some(Value::Null) => Ok(0),
    Some(Value::Number(n)) => match n.as_u64() {
      Some(v) => Ok(v),
      None => whole(n, 0.0, u64::MAX as f64)
        .map(|f| f as u64)
        .ok_or_else(|| out_of_range(n)),
    },
    Some(other) => Err(wrong("number", other)),
  }
}

/// A signed integer such as a score, which goes negative when downvoted.
/// Missing or `null` is 0.
pub fn signed(value: Option<&Value>) -> Result<i64> {
  match value {
    None | Some(Value::Null) => Ok(0),
    Some(Value::Number(n)) => match n.as_i64() {
      Some(v) => Ok(v),
      None => whole(n, i64::MIN as f64, i64::MAX as f64)
        .map(|f| f as i64)
        .ok_or_else(|| out_of_range(n)),
    },
    Some(other) => Err(wrong("number", other)),
  }
}

/// A ratio in `[0, 1]`. Missing or `null` is 0.0.
pub fn ratio(value: Option<&Value>) -> Result<f64> {
  match value {
    None | Some(Value::Null) => Ok(0.0),
    Some(Value::Number(n)) => n
      .as_f64()
      .filter(|f| (0.0..=1.0).contains(f))
      .ok_or_else(|| out_of_range(n)),
    Some(other) => Err(wrong("number", other)),
  }
}

// ─── Scalars ─────────────────────────────────────────────────────────────────

/// Missing or `null` is the empty string.
pub fn string(value: Option<&Value>) -> Result<String> {
  Ok(opt_string(value)?.unwrap_or_default())
}

pub fn opt_string(value: Option<&Value>) -> Result<Option<String>> {
  match value {
    None | Some(Value::Null) => Ok(None),
    Some(Value::String(s)) => Ok(Some(s.clone())),
    Some(other) => Err(wrong("string", other)),
  }
}

/// Missing or `null` is `false`.
pub fn flag(value: Option<&Value>) -> Result<bool> {
  match value {
    None | Some(Value::Null) => Ok(false),
    Some(Value::Bool(b)) => Ok(*b),
    Some(other) => Err(wrong("boolean", other)),
  }
}

/// A fullname-valued field. Unlike plain strings, missing is an error.
pub fn fullname(value: Option<&Value>) -> Result<Fullname> {
  match value {
    Some(Value::String(s)) => s.parse().map_err(|_| FieldError::Invalid(s.clone())),
    Some(other) => Err(wrong("fullname string", other)),
    None => Err(wrong("fullname string", &Value::Null)),
  }
}

// ─── Arrays ──────────────────────────────────────────────────────────────────

/// An array of strings. Missing or `null` is empty.
pub fn strings(value: Option<&Value>) -> Result<Vec<String>> {
  raw_array(value)?
    .into_iter()
    .map(|v| match v {
      Value::String(s) => Ok(s),
      other => Err(wrong("string", &other)),
    })
    .collect()
}

/// An array passed through as raw JSON. Missing or `null` is empty.
pub fn raw_array(value: Option<&Value>) -> Result<Vec<Value>> {
  match value {
    None | Some(Value::Null) => Ok(Vec::new()),
    Some(Value::Array(items)) => Ok(items.clone()),
    Some(other) => Err(wrong("array", other)),
  }
}
