//! Call-site surface tying the resolver and the codec together.

use serde_json::Value;
use tracing::error;

use crate::config::ArgsConfig;
use crate::decode::decode_leaf;
use crate::encode::{encode_wrapped, encode_wrapped_as};
use crate::error::ArgsError;
use crate::resolve::{resolve_with_limit, Locator};
use crate::type_tag::{type_name, TypeTag};
use crate::value::{ArgType, ArgValue};
use crate::wrapped::WrappedValue;

/// Resolves, decodes and encodes arguments under one [`ArgsConfig`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ArgsCodec {
    config: ArgsConfig,
}

impl ArgsCodec {
    /// Codec over [`ArgsConfig::DEFAULT`].
    pub const DEFAULT: ArgsCodec = ArgsCodec {
        config: ArgsConfig::DEFAULT,
    };

    /// Codec using `config` for every call.
    pub fn new(config: ArgsConfig) -> Self {
        Self { config }
    }

    /// Configuration this codec was built with.
    pub fn config(&self) -> &ArgsConfig {
        &self.config
    }

    /// Locates the node an argument lives at. `Ok(None)` means absent.
    pub fn resolve<'a>(
        &self,
        node: &'a Value,
        locator: Locator<'_>,
    ) -> Result<Option<&'a Value>, ArgsError> {
        resolve_with_limit(node, locator, self.config.max_depth)
    }

    /// Decodes a leaf that has already been resolved.
    pub fn decode(&self, leaf: &Value, tag: TypeTag) -> Result<ArgValue, ArgsError> {
        decode_leaf(leaf, tag, &self.config)
    }

    /// Resolves then decodes one argument.
    pub fn get(
        &self,
        node: &Value,
        locator: Locator<'_>,
        tag: TypeTag,
    ) -> Result<Option<ArgValue>, ArgsError> {
        match self.resolve(node, locator)? {
            Some(leaf) => self.decode(leaf, tag).map(Some),
            None => Ok(None),
        }
    }

    /// [`ArgsCodec::get`] with a raw numeric type; semantic flag bits are
    /// ignored.
    pub fn get_raw(
        &self,
        node: &Value,
        locator: Locator<'_>,
        raw_type: i64,
    ) -> Result<Option<ArgValue>, ArgsError> {
        let tag = TypeTag::from_raw(raw_type).inspect_err(|_| {
            error!("Unknown type '{}' ({raw_type})", type_name(raw_type));
        })?;
        self.get(node, locator, tag)
    }

    /// Typed form of [`ArgsCodec::get`]; the tag comes from `T`.
    pub fn get_as<T: ArgType>(
        &self,
        node: &Value,
        locator: Locator<'_>,
    ) -> Result<Option<T>, ArgsError> {
        self.get(node, locator, T::TAG)?
            .map(|value| {
                let found = value.tag().name();
                T::from_arg(value).ok_or(ArgsError::ValueMismatch {
                    expected: T::TAG.name(),
                    found,
                })
            })
            .transpose()
    }

    /// Output-slot form of [`ArgsCodec::get_as`]. Returns `false` and leaves
    /// `out` untouched when the argument is absent.
    pub fn get_into<T: ArgType>(
        &self,
        node: &Value,
        locator: Locator<'_>,
        out: &mut T,
    ) -> Result<bool, ArgsError> {
        match self.get_as::<T>(node, locator)? {
            Some(value) => {
                *out = value;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Decodes a wrapped value with the tag it carries.
    pub fn decode_wrapped(&self, node: &Value) -> Result<ArgValue, ArgsError> {
        let wrapped = WrappedValue::inspect(node)?
            .ok_or(ArgsError::MalformedWrapped("missing `swe_` marker"))?;
        let tag = wrapped.tag().inspect_err(|_| {
            error!("Unknown type '{}' ({})", type_name(wrapped.raw_type), wrapped.raw_type);
        })?;
        match self.resolve(wrapped.payload, Locator::LEAF)? {
            Some(leaf) => self.decode(leaf, tag),
            None => Err(ArgsError::MissingPayload),
        }
    }

    /// Wraps `value` under its own tag.
    pub fn encode(&self, hint: Option<&str>, value: &ArgValue) -> Value {
        encode_wrapped(hint, value)
    }

    /// Wraps `value`, failing when it does not carry `tag`.
    pub fn encode_as(
        &self,
        tag: TypeTag,
        hint: Option<&str>,
        value: &ArgValue,
    ) -> Result<Value, ArgsError> {
        encode_wrapped_as(tag, hint, value)
    }

    /// Encodes under a raw numeric type. The wrapper records the base tag.
    pub fn encode_raw(
        &self,
        raw_type: i64,
        hint: Option<&str>,
        value: &ArgValue,
    ) -> Result<Value, ArgsError> {
        let tag = TypeTag::from_raw(raw_type).inspect_err(|_| {
            error!("Unknown type '{}' ({raw_type})", type_name(raw_type));
        })?;
        encode_wrapped_as(tag, hint, value)
    }
}
