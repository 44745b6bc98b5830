//! Wrapped-value construction: native argument → value-tree node.

use serde_json::{Map, Value};

use crate::error::ArgsError;
use crate::type_tag::TypeTag;
use crate::value::ArgValue;
use crate::wrapped::{HINT_KEY, MARKER_KEY, PAYLOAD_KEY, TYPE_KEY};

/// Builds `{ swe_: 1, type, hint?, v }` for `value`.
pub fn encode_wrapped(hint: Option<&str>, value: &ArgValue) -> Value {
    let mut obj = Map::new();
    obj.insert(MARKER_KEY.to_string(), Value::from(1));
    obj.insert(TYPE_KEY.to_string(), Value::from(value.tag().code()));
    if let Some(hint) = hint {
        obj.insert(HINT_KEY.to_string(), Value::from(hint));
    }
    obj.insert(PAYLOAD_KEY.to_string(), encode_payload(value));
    Value::Object(obj)
}

/// Like [`encode_wrapped`], checking `value` against the tag the call site
/// declared.
pub fn encode_wrapped_as(
    tag: TypeTag,
    hint: Option<&str>,
    value: &ArgValue,
) -> Result<Value, ArgsError> {
    if value.tag() != tag {
        return Err(ArgsError::ValueMismatch {
            expected: tag.name(),
            found: value.tag().name(),
        });
    }
    Ok(encode_wrapped(hint, value))
}

/// The `v` member alone.
pub fn encode_payload(value: &ArgValue) -> Value {
    match value {
        ArgValue::Bool(b) => Value::Bool(*b),
        ArgValue::Int(i) => Value::from(*i),
        ArgValue::Float(f) => encode_float(*f),
        ArgValue::Vec2(v) => encode_components(v),
        ArgValue::Vec3(v) => encode_components(v),
        ArgValue::Vec4(v) => encode_components(v),
        ArgValue::Pointer(h) => Value::from(h.0),
        ArgValue::String(s) => Value::String(s.clone()),
    }
}

/// NaN has no JSON number form and becomes `null`; infinities become the
/// strings `"inf"` and `"-inf"`.
pub fn encode_float(f: f64) -> Value {
    if f.is_nan() {
        Value::Null
    } else if f.is_infinite() {
        Value::String(f.to_string())
    } else {
        Value::from(f)
    }
}

// Each component follows the scalar float rules.
fn encode_components(v: &[f64]) -> Value {
    Value::Array(v.iter().map(|&c| encode_float(c)).collect())
}
