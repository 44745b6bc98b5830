//! Native argument values.

use serde::Serialize;

use crate::handle::Handle;
use crate::type_tag::TypeTag;

/// One native argument, tagged with its shape.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ArgValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Vec2([f64; 2]),
    Vec3([f64; 3]),
    Vec4([f64; 4]),
    Pointer(Handle),
    String(String),
}

impl ArgValue {
    /// Tag of the variant.
    pub fn tag(&self) -> TypeTag {
        match self {
            ArgValue::Bool(_) => TypeTag::Bool,
            ArgValue::Int(_) => TypeTag::Int,
            ArgValue::Float(_) => TypeTag::Float,
            ArgValue::Vec2(_) => TypeTag::Vec2,
            ArgValue::Vec3(_) => TypeTag::Vec3,
            ArgValue::Vec4(_) => TypeTag::Vec4,
            ArgValue::Pointer(_) => TypeTag::Pointer,
            ArgValue::String(_) => TypeTag::String,
        }
    }
}

/// Native types that travel as a single argument.
pub trait ArgType: Sized {
    const TAG: TypeTag;

    /// Extracts `Self` when `value` carries [`Self::TAG`].
    fn from_arg(value: ArgValue) -> Option<Self>;

    fn into_arg(self) -> ArgValue;
}

macro_rules! arg_type {
    ($ty:ty, $variant:ident) => {
        impl ArgType for $ty {
            const TAG: TypeTag = TypeTag::$variant;

            fn from_arg(value: ArgValue) -> Option<Self> {
                match value {
                    ArgValue::$variant(v) => Some(v),
                    _ => None,
                }
            }

            fn into_arg(self) -> ArgValue {
                ArgValue::$variant(self)
            }
        }

        impl From<$ty> for ArgValue {
            fn from(v: $ty) -> Self {
                ArgValue::$variant(v)
            }
        }
    };
}

arg_type!(bool, Bool);
arg_type!(i64, Int);
arg_type!(f64, Float);
arg_type!([f64; 2], Vec2);
arg_type!([f64; 3], Vec3);
arg_type!([f64; 4], Vec4);
arg_type!(Handle, Pointer);
arg_type!(String, String);

impl From<&str> for ArgValue {
    fn from(v: &str) -> Self {
        ArgValue::String(v.to_string())
    }
}

/// An absent string is passed as the empty string.
impl From<Option<&str>> for ArgValue {
    fn from(v: Option<&str>) -> Self {
        ArgValue::String(v.unwrap_or_default().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn tags_follow_variants() {
        assert_eq!(ArgValue::from(true).tag(), TypeTag::Bool);
        assert_eq!(ArgValue::from([1.0, 2.0, 3.0]).tag(), TypeTag::Vec3);
        assert_eq!(ArgValue::from(Handle(3)).tag(), TypeTag::Pointer);
    }

    #[test]
    fn arg_type_extracts_matching_variant_only() {
        assert_eq!(i64::from_arg(ArgValue::Int(4)), Some(4));
        assert_eq!(i64::from_arg(ArgValue::Float(4.0)), None);
        assert_eq!(<[f64; 2]>::from_arg(ArgValue::Vec2([0.5, 1.5])), Some([0.5, 1.5]));
        assert_eq!(true.into_arg(), ArgValue::Bool(true));
        assert_eq!(String::from("a").into_arg(), ArgValue::from("a"));
    }

    #[test]
    fn absent_string_is_empty() {
        assert_eq!(ArgValue::from(None::<&str>), ArgValue::String(String::new()));
    }

    #[test]
    fn serializes_with_type_name() {
        let v = serde_json::to_value(ArgValue::Vec2([1.0, 2.0])).unwrap();
        assert_eq!(v, json!({"type": "vec2", "value": [1.0, 2.0]}));
        let p = serde_json::to_value(ArgValue::Pointer(Handle(9))).unwrap();
        assert_eq!(p, json!({"type": "pointer", "value": 9}));
    }
}
