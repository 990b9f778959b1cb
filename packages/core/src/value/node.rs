//! Shared container handles
//!
//! A [`Node`] is a reference-counted handle to one sequence or mapping. The
//! kind of a node is fixed when it is created; only its members change.
//!
//! Cycles built from nodes keep each other alive. Break a cycle by removing
//! one of its members when the graph is no longer needed.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;

use super::{Value, ValueKind};
use crate::error::{RefError, RefResult};
use crate::path::Key;

pub(crate) enum Container {
    Sequence(Vec<Value>),
    Mapping(IndexMap<String, Value>),
}

/// Shared handle to a sequence or mapping
#[derive(Clone)]
pub struct Node(Rc<RefCell<Container>>);

impl Node {
    fn wrap(container: Container) -> Self {
        Node(Rc::new(RefCell::new(container)))
    }

    /// New empty sequence
    #[must_use]
    pub fn sequence() -> Self {
        Self::wrap(Container::Sequence(Vec::new()))
    }

    /// New empty mapping
    #[must_use]
    pub fn mapping() -> Self {
        Self::wrap(Container::Mapping(IndexMap::new()))
    }

    /// New sequence holding `values`
    #[must_use]
    pub fn sequence_from(values: Vec<Value>) -> Self {
        Self::wrap(Container::Sequence(values))
    }

    /// New mapping holding `members` in iteration order
    pub fn mapping_from<K, I>(members: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Value)>,
    {
        Self::wrap(Container::Mapping(
            members.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        ))
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match &*self.0.borrow() {
            Container::Sequence(_) => ValueKind::Sequence,
            Container::Mapping(_) => ValueKind::Mapping,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        match &*self.0.borrow() {
            Container::Sequence(items) => items.len(),
            Container::Mapping(members) => members.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether two handles point at the same container
    #[inline]
    #[must_use]
    pub fn ptr_eq(&self, other: &Node) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Rewrite `key` into the form this container stores
    ///
    /// Sequences take indices (names only in canonical decimal form), mappings
    /// take names (indices by their decimal form).
    #[must_use]
    pub fn normalize(&self, key: &Key) -> Option<Key> {
        match self.kind() {
            ValueKind::Sequence => key.as_index().map(Key::Index),
            _ => Some(Key::Name(key.to_name())),
        }
    }

    /// Whether a member is present at `key` (null members count as present)
    #[must_use]
    pub fn has(&self, key: &Key) -> bool {
        match &*self.0.borrow() {
            Container::Sequence(items) => key.as_index().is_some_and(|i| i < items.len()),
            Container::Mapping(members) => match key {
                Key::Name(name) => members.contains_key(name),
                Key::Index(_) => members.contains_key(&key.to_name()),
            },
        }
    }

    /// Current member at `key`
    #[must_use]
    pub fn get(&self, key: &Key) -> Option<Value> {
        match &*self.0.borrow() {
            Container::Sequence(items) => key.as_index().and_then(|i| items.get(i)).cloned(),
            Container::Mapping(members) => match key {
                Key::Name(name) => members.get(name).cloned(),
                Key::Index(_) => members.get(&key.to_name()).cloned(),
            },
        }
    }

    /// Write `value` at `key`, returning the previous member
    ///
    /// Writing past the end of a sequence pads the gap with [`Value::Null`].
    /// If the padded sequence cannot be allocated, nothing is written and
    /// `Ok(None)` is returned.
    ///
    /// # Errors
    ///
    /// Returns [`RefError::KeyMismatch`] when `key` is a name that is not a
    /// canonical index and this node is a sequence.
    pub fn set(&self, key: impl Into<Key>, value: Value) -> RefResult<Option<Value>> {
        let key = key.into();
        match self.normalize(&key) {
            Some(normalized) => Ok(self.store(&normalized, value)),
            None => Err(RefError::KeyMismatch {
                key: key.to_name(),
            }),
        }
    }

    /// Write through an already normalized key
    ///
    /// A sequence write whose padding cannot be allocated is dropped.
    pub(crate) fn store(&self, key: &Key, value: Value) -> Option<Value> {
        match &mut *self.0.borrow_mut() {
            Container::Sequence(items) => {
                let index = key.as_index()?;
                if index < items.len() {
                    Some(std::mem::replace(&mut items[index], value))
                } else {
                    let reserved = (index - items.len())
                        .checked_add(1)
                        .is_some_and(|additional| items.try_reserve(additional).is_ok());
                    if !reserved {
                        log::warn!(
                            "Dropped write at index {index}: cannot grow sequence of length {}",
                            items.len()
                        );
                        return None;
                    }
                    items.resize(index, Value::Null);
                    items.push(value);
                    None
                }
            }
            Container::Mapping(members) => members.insert(key.to_name(), value),
        }
    }

    /// Remove the member at `key`
    ///
    /// Later sequence items shift down by one; mapping members keep their
    /// relative order.
    pub fn remove(&self, key: &Key) -> Option<Value> {
        match &mut *self.0.borrow_mut() {
            Container::Sequence(items) => {
                let index = key.as_index().filter(|i| *i < items.len())?;
                Some(items.remove(index))
            }
            Container::Mapping(members) => members.shift_remove(&key.to_name()),
        }
    }

    /// Every current key in enumeration order
    ///
    /// Ascending positions for sequences, insertion order for mappings.
    #[must_use]
    pub fn ordered_keys(&self) -> Vec<Key> {
        match &*self.0.borrow() {
            Container::Sequence(items) => (0..items.len()).map(Key::Index).collect(),
            Container::Mapping(members) => members.keys().cloned().map(Key::Name).collect(),
        }
    }

    /// Snapshot of every (key, member) pair in enumeration order
    pub(crate) fn entries(&self) -> Vec<(Key, Value)> {
        match &*self.0.borrow() {
            Container::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(i, v)| (Key::Index(i), v.clone()))
                .collect(),
            Container::Mapping(members) => members
                .iter()
                .map(|(k, v)| (Key::Name(k.clone()), v.clone()))
                .collect(),
        }
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Node {}

// Shallow: members may lead back to this node.
impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut debug = f.debug_struct("Node");
        match self.0.try_borrow() {
            Ok(container) => {
                let (kind, len) = match &*container {
                    Container::Sequence(items) => ("sequence", items.len()),
                    Container::Mapping(members) => ("mapping", members.len()),
                };
                debug.field("kind", &kind).field("len", &len);
            }
            Err(_) => {
                debug.field("kind", &"<borrowed>");
            }
        }
        debug.field("ptr", &Rc::as_ptr(&self.0)).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_keeps_insertion_order() {
        let node = Node::mapping();
        node.set("web", Value::from("a")).ok();
        node.set("music", Value::from("b")).ok();
        node.set("sport", Value::from("c")).ok();
        node.set("web", Value::from("A")).ok();
        assert_eq!(
            node.ordered_keys(),
            vec![Key::from("web"), Key::from("music"), Key::from("sport")]
        );
        assert_eq!(node.get(&Key::from("web")), Some(Value::from("A")));
    }

    #[test]
    fn test_sequence_set_pads_with_null() {
        let node = Node::sequence_from(vec![Value::from(1)]);
        assert_eq!(node.set(3usize, Value::from(4)), Ok(None));
        assert_eq!(node.len(), 4);
        assert_eq!(node.get(&Key::Index(1)), Some(Value::Null));
        assert_eq!(node.get(&Key::Index(3)), Some(Value::from(4)));
    }

    #[test]
    fn test_sequence_set_beyond_allocatable_length_is_dropped() {
        let node = Node::sequence_from(vec![Value::from(1)]);
        assert_eq!(node.set(usize::MAX, Value::from(2)), Ok(None));
        assert_eq!(node.set(1usize << 60, Value::from(2)), Ok(None));
        assert_eq!(node.len(), 1);
        assert_eq!(node.get(&Key::Index(0)), Some(Value::from(1)));
    }

    #[test]
    fn test_sequence_rejects_plain_names() {
        let node = Node::sequence();
        assert_eq!(
            node.set("length", Value::from(1)),
            Err(RefError::KeyMismatch { key: "length".into() })
        );
        assert_eq!(node.set("0", Value::from(1)), Ok(None));
        assert!(node.has(&Key::Index(0)));
    }

    #[test]
    fn test_index_key_on_mapping_uses_decimal_name() {
        let node = Node::mapping_from([("0", Value::from("zero"))]);
        assert!(node.has(&Key::Index(0)));
        assert_eq!(node.get(&Key::Index(0)), Some(Value::from("zero")));
    }

    #[test]
    fn test_remove_shifts_sequence() {
        let node = Node::sequence_from(vec![Value::from("a"), Value::from("b")]);
        assert_eq!(node.remove(&Key::Index(0)), Some(Value::from("a")));
        assert_eq!(node.get(&Key::Index(0)), Some(Value::from("b")));
        assert_eq!(node.remove(&Key::Index(5)), None);
    }

    #[test]
    fn test_debug_on_self_cycle_terminates() {
        let node = Node::mapping();
        node.set("me", Value::Container(node.clone())).ok();
        let rendered = format!("{node:?}");
        assert!(rendered.contains("mapping"));
        node.remove(&Key::from("me"));
    }
}
