//! Type tags shared by the decoder and the encoder.
//!
//! A tag travels out of band: the call site names the shape it expects and
//! the codec checks the node against it. Raw numeric types may carry
//! semantic flag bits above the low four bits (an angle is `16 + Float`, a
//! color `16 + Vec4`); only the base selects the tag.

use std::fmt;
use std::str::FromStr;

use crate::error::ArgsError;

/// Raw type codes are reduced modulo this before looking up the base tag.
pub const TYPE_BASE_MODULUS: i64 = 16;

/// Native shape transferred through an argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeTag {
    Bool,
    Int,
    Float,
    Vec2,
    Vec3,
    Vec4,
    Pointer,
    String,
}

impl TypeTag {
    /// Every tag, in code order.
    pub const ALL: [TypeTag; 8] = [
        TypeTag::Bool,
        TypeTag::Int,
        TypeTag::Float,
        TypeTag::Vec2,
        TypeTag::Vec3,
        TypeTag::Vec4,
        TypeTag::Pointer,
        TypeTag::String,
    ];

    /// Numeric code written to the `type` member of a wrapped value.
    pub fn code(self) -> i64 {
        match self {
            TypeTag::Bool => 1,
            TypeTag::Int => 2,
            TypeTag::Float => 3,
            TypeTag::Vec2 => 4,
            TypeTag::Vec3 => 5,
            TypeTag::Vec4 => 6,
            TypeTag::Pointer => 7,
            TypeTag::String => 8,
        }
    }

    /// Exact inverse of [`TypeTag::code`]; flag bits are not stripped.
    pub fn from_code(code: i64) -> Option<TypeTag> {
        TypeTag::ALL.into_iter().find(|tag| tag.code() == code)
    }

    /// Looks up the base tag of a raw type, ignoring semantic flag bits.
    pub fn from_raw(raw: i64) -> Result<TypeTag, ArgsError> {
        TypeTag::from_code(raw.rem_euclid(TYPE_BASE_MODULUS)).ok_or(ArgsError::UnknownType(raw))
    }

    /// Lowercase name used in diagnostics and on the command line.
    pub fn name(self) -> &'static str {
        match self {
            TypeTag::Bool => "bool",
            TypeTag::Int => "int",
            TypeTag::Float => "float",
            TypeTag::Vec2 => "vec2",
            TypeTag::Vec3 => "vec3",
            TypeTag::Vec4 => "vec4",
            TypeTag::Pointer => "pointer",
            TypeTag::String => "string",
        }
    }

    /// Component count for vector tags.
    pub fn arity(self) -> Option<usize> {
        match self {
            TypeTag::Vec2 => Some(2),
            TypeTag::Vec3 => Some(3),
            TypeTag::Vec4 => Some(4),
            _ => None,
        }
    }
}

/// Human-readable name of a raw type code, for diagnostics.
pub fn type_name(raw: i64) -> &'static str {
    TypeTag::from_raw(raw).map_or("unknown", TypeTag::name)
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TypeTag {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeTag::ALL
            .into_iter()
            .find(|tag| tag.name() == s)
            .ok_or_else(|| ArgsError::UnknownTypeName(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable_and_invertible() {
        let codes: Vec<i64> = TypeTag::ALL.iter().map(|t| t.code()).collect();
        assert_eq!(codes, vec![1, 2, 3, 4, 5, 6, 7, 8]);
        for tag in TypeTag::ALL {
            assert_eq!(TypeTag::from_code(tag.code()), Some(tag));
        }
        assert_eq!(TypeTag::from_code(0), None);
        assert_eq!(TypeTag::from_code(9), None);
    }

    #[test]
    fn from_raw_strips_flag_bits() {
        assert_eq!(TypeTag::from_raw(3).unwrap(), TypeTag::Float);
        assert_eq!(TypeTag::from_raw(16 + 3).unwrap(), TypeTag::Float);
        assert_eq!(TypeTag::from_raw(32 + 6).unwrap(), TypeTag::Vec4);
        assert_eq!(TypeTag::from_raw(16), Err(ArgsError::UnknownType(16)));
        assert_eq!(TypeTag::from_raw(-1), Err(ArgsError::UnknownType(-1)));
    }

    #[test]
    fn names_parse_back() {
        for tag in TypeTag::ALL {
            assert_eq!(tag.name().parse::<TypeTag>().unwrap(), tag);
            assert_eq!(tag.to_string(), tag.name());
        }
        assert!("vec5".parse::<TypeTag>().is_err());
        assert_eq!(type_name(5), "vec3");
        assert_eq!(type_name(0), "unknown");
    }

    #[test]
    fn only_vectors_have_arity() {
        assert_eq!(TypeTag::Vec2.arity(), Some(2));
        assert_eq!(TypeTag::Vec4.arity(), Some(4));
        assert_eq!(TypeTag::Float.arity(), None);
    }
}
