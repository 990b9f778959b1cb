//! Live read/write handles over one container member
//!
//! A [`Binding`] pairs a container handle with a key. It never snapshots the
//! member: [`Binding::get`] reads whatever is stored now and [`Binding::set`]
//! writes straight into the shared container, so every other binding over the
//! same member (and every other path into the graph) observes the change.

use crate::error::{RefError, RefResult};
use crate::path::{Key, Location};
use crate::value::{Node, Value};

/// Handle to the member at `key` inside `container`
///
/// A binding holds a strong handle to its container and keeps it alive for as
/// long as the binding exists. It never owns or copies the member itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    container: Node,
    key: Key,
    location: Location,
}

impl Binding {
    /// Bind the member at `key` inside `container`
    ///
    /// The key is normalized for the container: sequences store indices and
    /// mappings store names. The member does not need to exist yet.
    ///
    /// # Errors
    ///
    /// Returns [`RefError::KeyMismatch`] when `container` is a sequence and
    /// `key` is a name that is not a canonical index.
    pub fn new(container: Node, key: impl Into<Key>) -> RefResult<Self> {
        let key = key.into();
        let Some(normalized) = container.normalize(&key) else {
            return Err(RefError::KeyMismatch {
                key: key.to_name(),
            });
        };
        let location = Location::root().child(normalized.clone());
        Ok(Self {
            container,
            key: normalized,
            location,
        })
    }

    /// Bind with a key already normalized by the resolver
    pub(crate) fn resolved(container: Node, key: Key, location: Location) -> Self {
        Self {
            container,
            key,
            location,
        }
    }

    /// Current member, or `None` once it has been removed
    #[must_use]
    pub fn get(&self) -> Option<Value> {
        self.container.get(&self.key)
    }

    /// Overwrite the member, returning the previous one
    ///
    /// Never fails. A sequence write that would need an unallocatable amount
    /// of padding is dropped and returns `None`.
    pub fn set(&self, value: Value) -> Option<Value> {
        self.container.store(&self.key, value)
    }

    /// Whether the member is still present
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.container.has(&self.key)
    }

    #[inline]
    #[must_use]
    pub fn container(&self) -> &Node {
        &self.container
    }

    #[inline]
    #[must_use]
    pub fn key(&self) -> &Key {
        &self.key
    }

    /// Concrete trail from the resolution root to this member
    ///
    /// For bindings built with [`Binding::new`] the root is the container.
    #[inline]
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }
}
