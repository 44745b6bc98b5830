//! Building argument trees from native values.

use serde_json::{Map, Value};

use crate::encode::encode_wrapped;
use crate::error::ArgsError;
use crate::value::ArgValue;

#[derive(Debug, Clone, PartialEq)]
struct ArgEntry {
    name: Option<String>,
    hint: Option<String>,
    value: ArgValue,
}

/// Ordered list of arguments, each encoded as a wrapped value.
///
/// ```
/// use json_args::{ArgList, ArgsCodec, Locator, TypeTag};
///
/// let mut args = ArgList::new();
/// args.push(2_i64).push_hinted([1.0, 0.0, 0.0], "axis");
/// let tree = args.to_positional();
///
/// let codec = ArgsCodec::default();
/// let axis = codec.get_as::<[f64; 3]>(&tree, Locator::at(2)).unwrap();
/// assert_eq!(axis, Some([1.0, 0.0, 0.0]));
/// assert_eq!(codec.get(&tree, Locator::at(3), TypeTag::Int).unwrap(), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArgList {
    entries: Vec<ArgEntry>,
}

impl ArgList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an unnamed argument without a hint.
    pub fn push(&mut self, value: impl Into<ArgValue>) -> &mut Self {
        self.push_entry(None, None, value.into())
    }

    /// Appends an unnamed argument whose wrapper carries `hint`.
    pub fn push_hinted(&mut self, value: impl Into<ArgValue>, hint: &str) -> &mut Self {
        self.push_entry(None, Some(hint.to_string()), value.into())
    }

    /// Appends an argument that [`ArgList::to_named`] keys by `name`.
    pub fn push_named(&mut self, name: &str, value: impl Into<ArgValue>) -> &mut Self {
        self.push_entry(Some(name.to_string()), None, value.into())
    }

    fn push_entry(
        &mut self,
        name: Option<String>,
        hint: Option<String>,
        value: ArgValue,
    ) -> &mut Self {
        self.entries.push(ArgEntry { name, hint, value });
        self
    }

    /// Number of arguments pushed so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when nothing has been pushed.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Argument values in push order.
    pub fn values(&self) -> impl Iterator<Item = &ArgValue> {
        self.entries.iter().map(|e| &e.value)
    }

    /// Array of wrapped values; entry `i` sits at position `i + 1`. Names are
    /// dropped.
    pub fn to_positional(&self) -> Value {
        Value::Array(
            self.entries
                .iter()
                .map(|e| encode_wrapped(e.hint.as_deref(), &e.value))
                .collect(),
        )
    }

    /// Object of wrapped values keyed by name, in push order.
    pub fn to_named(&self) -> Result<Value, ArgsError> {
        let mut obj = Map::with_capacity(self.entries.len());
        for (i, e) in self.entries.iter().enumerate() {
            let name = e.name.as_ref().ok_or(ArgsError::UnnamedArgument(i + 1))?;
            if obj.contains_key(name) {
                return Err(ArgsError::DuplicateName(name.clone()));
            }
            obj.insert(name.clone(), encode_wrapped(e.hint.as_deref(), &e.value));
        }
        Ok(Value::Object(obj))
    }
}

impl<V: Into<ArgValue>> FromIterator<V> for ArgList {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        let mut list = ArgList::new();
        for v in iter {
            list.push(v);
        }
        list
    }
}
