//! Locating an argument inside a value tree.
//!
//! Rules, first match wins; every match continues from the sub-node with an
//! empty locator:
//!
//! 1. an array with a non-zero position selects element `pos - 1`;
//! 2. a wrapped value selects its `v` payload;
//! 3. a named lookup on any other object selects that member, which must exist;
//! 4. otherwise a non-zero position means "not found" and an empty locator
//!    means the node itself is the leaf.
//!
//! Rule 2 runs before rule 3 so a wrapper is never read as a record.

use serde_json::Value;
use tracing::{debug, trace};

use crate::error::ArgsError;
use crate::wrapped::{MARKER_KEY, PAYLOAD_KEY};

/// Where an argument sits: an optional member name and an optional 1-based
/// position, `0` meaning none.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Locator<'n> {
    pub name: Option<&'n str>,
    pub pos: usize,
}

impl<'n> Locator<'n> {
    /// Treat the node itself as the argument.
    pub const LEAF: Locator<'static> = Locator { name: None, pos: 0 };

    /// Locator from both parts; `pos` of `0` means no position.
    pub fn new(name: Option<&'n str>, pos: usize) -> Self {
        Self { name, pos }
    }

    /// Member `name` of an object node.
    pub fn named(name: &'n str) -> Self {
        Self {
            name: Some(name),
            pos: 0,
        }
    }

    /// Element `pos` (1-based) of an array node.
    pub fn at(pos: usize) -> Self {
        Self { name: None, pos }
    }
}

/// Resolves `locator` against `node`, re-entering at most `max_depth` times.
///
/// `Ok(None)` is the soft "argument absent" outcome used for optional
/// trailing arguments. Errors are contract violations.
pub fn resolve_with_limit<'a>(
    node: &'a Value,
    locator: Locator<'_>,
    max_depth: usize,
) -> Result<Option<&'a Value>, ArgsError> {
    let mut node = node;
    let mut locator = locator;
    let mut depth = 0;
    loop {
        let next = match (node, locator.name) {
            (Value::Array(items), _) if locator.pos != 0 && locator.pos <= items.len() => {
                trace!(pos = locator.pos, "argument: array element");
                &items[locator.pos - 1]
            }
            (Value::Object(obj), _) if obj.contains_key(MARKER_KEY) => {
                trace!("argument: wrapped value");
                obj.get(PAYLOAD_KEY).ok_or(ArgsError::MissingPayload)?
            }
            (Value::Object(obj), Some(name)) => {
                trace!(name, "argument: named member");
                obj.get(name)
                    .ok_or_else(|| ArgsError::MissingMember(name.to_string()))?
            }
            _ if locator.pos != 0 => {
                debug!(pos = locator.pos, "argument not found");
                return Ok(None);
            }
            _ => return Ok(Some(node)),
        };
        depth += 1;
        if depth > max_depth {
            return Err(ArgsError::DepthExceeded(max_depth));
        }
        node = next;
        locator = Locator::LEAF;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn resolve<'a>(node: &'a Value, locator: Locator<'_>) -> Result<Option<&'a Value>, ArgsError> {
        resolve_with_limit(node, locator, 16)
    }

    #[test]
    fn leaf_is_itself() {
        let v = json!(3);
        assert_eq!(resolve(&v, Locator::LEAF).unwrap(), Some(&v));
        let obj = json!({"a": 1});
        assert_eq!(resolve(&obj, Locator::LEAF).unwrap(), Some(&obj));
    }

    #[test]
    fn positions_are_one_based() {
        let arr = json!(["a", "b", "c"]);
        assert_eq!(resolve(&arr, Locator::at(1)).unwrap(), Some(&json!("a")));
        assert_eq!(resolve(&arr, Locator::at(3)).unwrap(), Some(&json!("c")));
        assert_eq!(resolve(&arr, Locator::at(4)).unwrap(), None);
    }

    #[test]
    fn position_on_scalar_is_not_found() {
        assert_eq!(resolve(&json!(true), Locator::at(1)).unwrap(), None);
    }

    #[test]
    fn nested_wrappers_unwrap_repeatedly() {
        let v = json!({"swe_": 1, "type": 2, "v": {"swe_": 1, "type": 2, "v": 7}});
        assert_eq!(resolve(&v, Locator::LEAF).unwrap(), Some(&json!(7)));
    }

    #[test]
    fn depth_limit_fails_closed() {
        let mut v = json!(1);
        for _ in 0..5 {
            v = json!({"swe_": 1, "type": 2, "v": v});
        }
        assert_eq!(resolve_with_limit(&v, Locator::LEAF, 5).unwrap(), Some(&json!(1)));
        assert_eq!(
            resolve_with_limit(&v, Locator::LEAF, 4),
            Err(ArgsError::DepthExceeded(4))
        );
    }

    #[test]
    fn wrapper_without_payload_is_an_error() {
        let v = json!({"swe_": 1, "type": 2});
        assert_eq!(resolve(&v, Locator::LEAF), Err(ArgsError::MissingPayload));
    }
}
