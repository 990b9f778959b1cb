//! Normalized member locations
//!
//! A location is the trail of concrete keys from the resolution root to one
//! bound member, rendered in normalized bracket notation (`$['a'][0]`).

use std::fmt;

use super::segment::Key;

/// Concrete trail of keys from the root to a member
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Location {
    keys: Vec<Key>,
}

impl Location {
    /// The root location (`$`)
    #[inline]
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    /// Extend this location by one key
    #[must_use]
    pub fn child(mut self, key: Key) -> Self {
        self.keys.push(key);
        self
    }

    pub(crate) fn push(&mut self, key: Key) {
        self.keys.push(key);
    }

    pub(crate) fn pop(&mut self) {
        self.keys.pop();
    }

    #[inline]
    #[must_use]
    pub fn keys(&self) -> &[Key] {
        &self.keys
    }

    /// Number of keys below the root
    #[inline]
    #[must_use]
    pub fn depth(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.keys.is_empty()
    }

    /// The key of the member this location ends at
    #[must_use]
    pub fn last(&self) -> Option<&Key> {
        self.keys.last()
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for key in &self.keys {
            match key {
                Key::Index(index) => write!(f, "[{index}]")?,
                Key::Name(name) => {
                    write!(f, "['")?;
                    for ch in name.chars() {
                        match ch {
                            '\'' => write!(f, "\\'")?,
                            '\\' => write!(f, "\\\\")?,
                            other => write!(f, "{other}")?,
                        }
                    }
                    write!(f, "']")?;
                }
            }
        }
        Ok(())
    }
}

impl FromIterator<Key> for Location {
    fn from_iter<I: IntoIterator<Item = Key>>(iter: I) -> Self {
        Self {
            keys: iter.into_iter().collect(),
        }
    }
}
