//! Decoding a single `{kind, data}` envelope.

use lurk_core::{Entity, FieldError, Kind};
use serde_json::{Map, Value};

use crate::{DecodeError, decode::Fields, error::Result, registry};

/// The raw wire wrapper. Lives only for the duration of one decode.
struct Thing<'a> {
  code: &'a str,
  data: Option<&'a Map<String, Value>>,
}

impl<'a> Thing<'a> {
  fn from_value(value: &'a Value) -> Result<Self> {
    let object = value.as_object().ok_or_else(|| {
      DecodeError::MalformedEnvelope(format!("expected an object, found {value}"))
    })?;
    let code = object
      .get("kind")
      .and_then(Value::as_str)
      .ok_or_else(|| DecodeError::MalformedEnvelope("missing string `kind`".into()))?;
    Ok(Self {
      code,
      data: object.get("data").and_then(Value::as_object),
    })
  }
}

/// Decode one envelope into a typed entity.
///
/// An unregistered kind is reported as [`DecodeError::UnknownKind`] whatever
/// its payload looks like.
pub fn decode_thing(value: &Value) -> Result<Entity> {
  let thing = Thing::from_value(value)?;
  let registration = registry::lookup(thing.code)
    .ok_or_else(|| DecodeError::UnknownKind(thing.code.to_owned()))?;
  let data = thing.data.ok_or_else(|| {
    DecodeError::MalformedEnvelope(format!("{} envelope has no `data` object", thing.code))
  })?;
  let entity = (registration.decode)(&Fields::new(registration.kind, data))?;
  check_identity(registration.kind, &entity)?;
  Ok(entity)
}

/// The fullname must carry the envelope's prefix and end in the entity's id.
fn check_identity(kind: Kind, entity: &Entity) -> Result<()> {
  let name = entity.fullname();
  let malformed = |field: &'static str, reason: String| DecodeError::MalformedField {
    kind,
    field,
    reason: FieldError::Invalid(reason),
  };
  if name.kind() != kind.fullname_kind() {
    return Err(malformed(
      "name",
      format!("{name} is not a {} fullname", kind.fullname_kind()),
    ));
  }
  if entity.id() != name.id() {
    return Err(malformed(
      "id",
      format!("{:?} does not match {name}", entity.id()),
    ));
  }
  Ok(())
}

/// Parse and decode one envelope from raw bytes.
pub fn decode_slice(bytes: &[u8]) -> Result<Entity> {
  let value: Value = serde_json::from_slice(bytes)
    .map_err(|e| DecodeError::MalformedEnvelope(e.to_string()))?;
  decode_thing(&value)
}
