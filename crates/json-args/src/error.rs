//! Argument marshalling error type.
//!
//! An absent positional argument is not an error; resolution reports it as
//! `Ok(None)`. Everything here means the call site and the argument tree
//! disagree about the shape of the call.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("named argument `{0}` is missing")]
    MissingMember(String),
    #[error("wrapped value has no `v` payload")]
    MissingPayload,
    #[error("malformed wrapped value: {0}")]
    MalformedWrapped(&'static str),
    #[error("`{tag}` argument expects {expected}, found {found}")]
    ShapeMismatch {
        tag: &'static str,
        expected: &'static str,
        found: &'static str,
    },
    #[error("`{tag}` argument expects {expected} elements, found {found}")]
    ArityMismatch {
        tag: &'static str,
        expected: usize,
        found: usize,
    },
    #[error("integer {0} does not fit a signed 64-bit argument")]
    IntOutOfRange(u64),
    #[error("unknown type code {0}")]
    UnknownType(i64),
    #[error("unknown type name `{0}`")]
    UnknownTypeName(String),
    #[error("`{found}` value cannot be used as `{expected}`")]
    ValueMismatch {
        expected: &'static str,
        found: &'static str,
    },
    #[error("argument resolution exceeded depth limit of {0}")]
    DepthExceeded(usize),
    #[error("argument {0} has no name")]
    UnnamedArgument(usize),
    #[error("argument name `{0}` is used twice")]
    DuplicateName(String),
    #[error("handle {0} is not registered")]
    UnknownHandle(u64),
}

impl ArgsError {
    /// True for errors caused by a call site misreading its argument tree.
    pub fn is_contract_violation(&self) -> bool {
        !matches!(
            self,
            ArgsError::UnnamedArgument(_)
                | ArgsError::DuplicateName(_)
                | ArgsError::UnknownHandle(_)
                | ArgsError::UnknownTypeName(_)
        )
    }
}
