//! Opaque handles standing in for native addresses.
//!
//! A `Pointer` argument carries a [`Handle`], an integer key issued by a
//! [`HandleRegistry`]. The callee redeems it against the same registry.

use std::collections::HashMap;

use serde::Serialize;

use crate::error::ArgsError;

/// Integer key for a registered resource. Zero is the null handle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Handle(pub u64);

impl Handle {
    /// Never issued by a registry.
    pub const NULL: Handle = Handle(0);

    /// Whether this is [`Handle::NULL`].
    pub fn is_null(self) -> bool {
        self.0 == 0
    }
}

/// Table of resources addressed by handle. Handles start at 1 and are not
/// reused within one registry.
#[derive(Debug)]
pub struct HandleRegistry<T> {
    next: u64,
    entries: HashMap<u64, T>,
}

impl<T> HandleRegistry<T> {
    /// Empty registry; the first handle issued is 1.
    pub fn new() -> Self {
        Self {
            next: 1,
            entries: HashMap::new(),
        }
    }

    /// Stores `resource` under a fresh handle.
    pub fn insert(&mut self, resource: T) -> Handle {
        let id = self.next;
        self.next += 1;
        self.entries.insert(id, resource);
        Handle(id)
    }

    /// Borrows the resource behind `handle`, if it is still registered.
    pub fn get(&self, handle: Handle) -> Option<&T> {
        self.entries.get(&handle.0)
    }

    /// Mutable counterpart of [`HandleRegistry::get`].
    pub fn get_mut(&mut self, handle: Handle) -> Option<&mut T> {
        self.entries.get_mut(&handle.0)
    }

    /// Like [`HandleRegistry::get`], with an error for stale or forged handles.
    pub fn redeem(&self, handle: Handle) -> Result<&T, ArgsError> {
        self.get(handle).ok_or(ArgsError::UnknownHandle(handle.0))
    }

    /// Unregisters `handle`; it never redeems again.
    pub fn remove(&mut self, handle: Handle) -> Option<T> {
        self.entries.remove(&handle.0)
    }

    /// Number of live handles.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no handle is live.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for HandleRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issues_distinct_non_null_handles() {
        let mut reg = HandleRegistry::new();
        let a = reg.insert("a");
        let b = reg.insert("b");
        assert!(!a.is_null());
        assert_ne!(a, b);
        assert_eq!(reg.get(a), Some(&"a"));
        assert_eq!(reg.redeem(b), Ok(&"b"));
        assert_eq!(reg.len(), 2);
    }

    #[test]
    fn removed_handles_are_not_reissued() {
        let mut reg = HandleRegistry::new();
        let a = reg.insert(1);
        assert_eq!(reg.remove(a), Some(1));
        assert!(reg.is_empty());
        assert_eq!(reg.redeem(a), Err(ArgsError::UnknownHandle(a.0)));
        let b = reg.insert(2);
        assert_ne!(a, b);
    }

    #[test]
    fn null_handle_never_redeems() {
        let mut reg = HandleRegistry::new();
        reg.insert(());
        assert_eq!(reg.redeem(Handle::NULL), Err(ArgsError::UnknownHandle(0)));
    }

    #[test]
    fn get_mut_updates_in_place() {
        let mut reg = HandleRegistry::new();
        let h = reg.insert(vec![1]);
        reg.get_mut(h).unwrap().push(2);
        assert_eq!(reg.get(h), Some(&vec![1, 2]));
    }
}
