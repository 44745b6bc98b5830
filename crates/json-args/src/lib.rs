//! json-args - typed call arguments over JSON value trees.
//!
//! A callee receives its arguments as one [`serde_json::Value`]: an array of
//! positional arguments, an object of named ones, or a single wrapped value
//! that carries its own type tag. [`ArgsCodec`] locates an argument in that
//! tree ([`Locator`]) and decodes it under a [`TypeTag`]; the encoder builds
//! wrapped values from native [`ArgValue`]s.
//!
//! ```
//! use json_args::{ArgValue, Locator, TypeTag};
//! use serde_json::json;
//!
//! let args = json!({"x": 5, "y": 7});
//! let y = json_args::get(&args, Locator::named("y"), TypeTag::Int).unwrap();
//! assert_eq!(y, Some(ArgValue::Int(7)));
//!
//! let wrapped = json_args::encode(Some("ra"), &ArgValue::Float(f64::INFINITY));
//! assert_eq!(wrapped, json!({"swe_": 1, "type": 3, "hint": "ra", "v": "inf"}));
//! ```

mod args;
mod codec;
mod config;
mod decode;
mod encode;
mod error;
mod handle;
mod resolve;
mod type_tag;
mod value;
mod wrapped;

pub use args::ArgList;
pub use codec::ArgsCodec;
pub use config::{ArgsConfig, ConfigError, NonFinitePolicy, DEFAULT_MAX_DEPTH};
pub use decode::shape_name;
pub use encode::{encode_float, encode_payload};
pub use error::ArgsError;
pub use handle::{Handle, HandleRegistry};
pub use resolve::Locator;
pub use type_tag::{type_name, TypeTag, TYPE_BASE_MODULUS};
pub use value::{ArgType, ArgValue};
pub use wrapped::{is_wrapped, WrappedValue, HINT_KEY, MARKER_KEY, PAYLOAD_KEY, TYPE_KEY};

use serde_json::Value;

/// Locates an argument with the default configuration.
pub fn resolve<'a>(
    node: &'a Value,
    locator: Locator<'_>,
) -> Result<Option<&'a Value>, ArgsError> {
    ArgsCodec::DEFAULT.resolve(node, locator)
}

/// Resolves and decodes an argument with the default configuration.
pub fn get(
    node: &Value,
    locator: Locator<'_>,
    tag: TypeTag,
) -> Result<Option<ArgValue>, ArgsError> {
    ArgsCodec::DEFAULT.get(node, locator, tag)
}

/// Decodes a resolved leaf with the default configuration.
pub fn decode(leaf: &Value, tag: TypeTag) -> Result<ArgValue, ArgsError> {
    ArgsCodec::DEFAULT.decode(leaf, tag)
}

/// Builds a wrapped value for `value`.
pub fn encode(hint: Option<&str>, value: &ArgValue) -> Value {
    ArgsCodec::DEFAULT.encode(hint, value)
}
