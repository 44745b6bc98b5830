//! Leaf decoding: value-tree node → native argument.
//!
//! | tag | node | result |
//! |---|---|---|
//! | bool | boolean | `Bool` |
//! | int | integer | `Int` |
//! | float | double or integer | `Float` (integers widened) |
//! | pointer | non-negative integer | `Pointer` |
//! | string | string | owned `String` |
//! | vec2/3/4 | array of 2/3/4 | each element resolved and decoded as float |
//!
//! Nothing else is coerced. A mismatch is reported before any output is
//! produced.

use serde_json::Value;

use crate::config::{ArgsConfig, NonFinitePolicy};
use crate::error::ArgsError;
use crate::handle::Handle;
use crate::resolve::{resolve_with_limit, Locator};
use crate::type_tag::TypeTag;
use crate::value::ArgValue;

/// Shape of a node as named in error messages.
pub fn shape_name(node: &Value) -> &'static str {
    match node {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "double",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn mismatch(tag: TypeTag, expected: &'static str, node: &Value) -> ArgsError {
    ArgsError::ShapeMismatch {
        tag: tag.name(),
        expected,
        found: shape_name(node),
    }
}

/// Decodes an already resolved leaf as `tag`.
pub fn decode_leaf(
    leaf: &Value,
    tag: TypeTag,
    config: &ArgsConfig,
) -> Result<ArgValue, ArgsError> {
    match tag {
        TypeTag::Bool => leaf
            .as_bool()
            .map(ArgValue::Bool)
            .ok_or_else(|| mismatch(tag, "boolean", leaf)),
        TypeTag::Int => match leaf {
            Value::Number(n) if n.is_i64() => n
                .as_i64()
                .map(ArgValue::Int)
                .ok_or_else(|| mismatch(tag, "integer", leaf)),
            Value::Number(n) if n.is_u64() => {
                Err(ArgsError::IntOutOfRange(n.as_u64().unwrap_or(u64::MAX)))
            }
            _ => Err(mismatch(tag, "integer", leaf)),
        },
        TypeTag::Float => decode_float(leaf, config).map(ArgValue::Float),
        TypeTag::Pointer => match leaf {
            Value::Number(n) if !n.is_f64() => n
                .as_u64()
                .map(|addr| ArgValue::Pointer(Handle(addr)))
                .ok_or_else(|| mismatch(tag, "non-negative integer", leaf)),
            _ => Err(mismatch(tag, "integer", leaf)),
        },
        TypeTag::String => leaf
            .as_str()
            .map(|s| ArgValue::String(s.to_string()))
            .ok_or_else(|| mismatch(tag, "string", leaf)),
        TypeTag::Vec2 => decode_vec::<2>(leaf, tag, config).map(ArgValue::Vec2),
        TypeTag::Vec3 => decode_vec::<3>(leaf, tag, config).map(ArgValue::Vec3),
        TypeTag::Vec4 => decode_vec::<4>(leaf, tag, config).map(ArgValue::Vec4),
    }
}

fn decode_float(leaf: &Value, config: &ArgsConfig) -> Result<f64, ArgsError> {
    match (leaf, config.non_finite) {
        (Value::Number(n), _) => n
            .as_f64()
            .ok_or_else(|| mismatch(TypeTag::Float, "number", leaf)),
        (Value::Null, NonFinitePolicy::Lenient) => Ok(f64::NAN),
        (Value::String(s), NonFinitePolicy::Lenient) => {
            parse_infinity(s).ok_or_else(|| mismatch(TypeTag::Float, "number", leaf))
        }
        _ => Err(mismatch(TypeTag::Float, "number", leaf)),
    }
}

/// Accepts the strings the encoder writes for infinite floats, and their
/// spelled-out forms. Overflowing literals such as `"1e999"` are not numbers
/// here.
fn parse_infinity(s: &str) -> Option<f64> {
    match s {
        "inf" | "+inf" | "infinity" | "+infinity" => Some(f64::INFINITY),
        "-inf" | "-infinity" => Some(f64::NEG_INFINITY),
        _ => None,
    }
}

fn decode_vec<const N: usize>(
    leaf: &Value,
    tag: TypeTag,
    config: &ArgsConfig,
) -> Result<[f64; N], ArgsError> {
    let items = leaf.as_array().ok_or_else(|| mismatch(tag, "array", leaf))?;
    if items.len() != N {
        return Err(ArgsError::ArityMismatch {
            tag: tag.name(),
            expected: N,
            found: items.len(),
        });
    }
    let mut out = [0.0; N];
    for (slot, item) in out.iter_mut().zip(items) {
        // An empty locator never reports "not found".
        let item = resolve_with_limit(item, Locator::LEAF, config.max_depth)?.unwrap_or(item);
        *slot = decode_float(item, config)?;
    }
    Ok(out)
}
