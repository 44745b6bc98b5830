//! Self-describing wrapped values.
//!
//! ```text
//! { "swe_": 1, "type": <int tag>, "hint"?: <string>, "v": <payload> }
//! ```
//!
//! An object is a wrapped value iff it has the marker key, whatever its
//! other members look like.

use serde_json::Value;

use crate::error::ArgsError;
use crate::type_tag::TypeTag;

/// Member whose presence marks an object as a wrapped value.
pub const MARKER_KEY: &str = "swe_";
pub const TYPE_KEY: &str = "type";
pub const HINT_KEY: &str = "hint";
pub const PAYLOAD_KEY: &str = "v";

/// True for objects carrying the [`MARKER_KEY`] member.
pub fn is_wrapped(node: &Value) -> bool {
    node.as_object().is_some_and(|obj| obj.contains_key(MARKER_KEY))
}

/// Borrowed view over the members of a wrapped value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WrappedValue<'a> {
    pub raw_type: i64,
    pub hint: Option<&'a str>,
    pub payload: &'a Value,
}

impl<'a> WrappedValue<'a> {
    /// Reads the type metadata of `node` without decoding its payload.
    /// Returns `Ok(None)` when `node` is not a wrapped value.
    pub fn inspect(node: &'a Value) -> Result<Option<Self>, ArgsError> {
        let Some(obj) = node.as_object().filter(|obj| obj.contains_key(MARKER_KEY)) else {
            return Ok(None);
        };
        let raw_type = obj
            .get(TYPE_KEY)
            .and_then(Value::as_i64)
            .ok_or(ArgsError::MalformedWrapped("`type` must be an integer"))?;
        let hint = match obj.get(HINT_KEY) {
            None => None,
            Some(Value::String(s)) => Some(s.as_str()),
            Some(_) => return Err(ArgsError::MalformedWrapped("`hint` must be a string")),
        };
        let payload = obj.get(PAYLOAD_KEY).ok_or(ArgsError::MissingPayload)?;
        Ok(Some(Self {
            raw_type,
            hint,
            payload,
        }))
    }

    /// Base tag of [`WrappedValue::raw_type`].
    pub fn tag(&self) -> Result<TypeTag, ArgsError> {
        TypeTag::from_raw(self.raw_type)
    }
}
