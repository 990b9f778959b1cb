//! Segment and key types

use std::fmt;

/// Default wildcard marker
pub const WILDCARD: &str = "*";

/// One element of a path
///
/// Converting text into a segment treats [`WILDCARD`] as the wildcard. There is
/// no escape: a member literally named `"*"` cannot be addressed by text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    /// Member name of a mapping (or the decimal index of a sequence)
    Key(String),
    /// Position in a sequence (or the decimal name of a mapping member)
    Index(usize),
    /// Matches every current member of a container
    Wildcard,
}

impl Segment {
    /// Whether this segment expands, given the active wildcard `marker`
    ///
    /// A key spelled like the marker expands too.
    #[must_use]
    pub fn is_wildcard(&self, marker: &str) -> bool {
        match self {
            Segment::Wildcard => true,
            Segment::Key(name) => name == marker,
            Segment::Index(_) => false,
        }
    }

    /// Concrete key of this segment, `None` for [`Segment::Wildcard`]
    #[must_use]
    pub fn to_key(&self) -> Option<Key> {
        match self {
            Segment::Key(name) => Some(Key::Name(name.clone())),
            Segment::Index(index) => Some(Key::Index(*index)),
            Segment::Wildcard => None,
        }
    }

    /// Convert text into a segment, treating `wildcard` as the marker
    #[must_use]
    pub fn parse_with(text: &str, wildcard: &str) -> Self {
        if text == wildcard {
            Segment::Wildcard
        } else {
            Segment::Key(text.to_owned())
        }
    }
}

impl From<&str> for Segment {
    fn from(text: &str) -> Self {
        Segment::parse_with(text, WILDCARD)
    }
}

impl From<String> for Segment {
    fn from(text: String) -> Self {
        if text == WILDCARD {
            Segment::Wildcard
        } else {
            Segment::Key(text)
        }
    }
}

impl From<usize> for Segment {
    fn from(index: usize) -> Self {
        Segment::Index(index)
    }
}

impl From<Key> for Segment {
    fn from(key: Key) -> Self {
        match key {
            Key::Name(name) => Segment::Key(name),
            Key::Index(index) => Segment::Index(index),
        }
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(name) => write!(f, "{name}"),
            Segment::Index(index) => write!(f, "{index}"),
            Segment::Wildcard => write!(f, "{WILDCARD}"),
        }
    }
}

/// Concrete address of one member inside a container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Name(String),
    Index(usize),
}

impl Key {
    /// Interpret this key as a sequence position
    ///
    /// Names only qualify in canonical decimal form: `"3"` is index 3, while
    /// `"03"`, `"+3"` and `"length"` address nothing.
    #[must_use]
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(name) => parse_canonical_index(name),
        }
    }

    /// Interpret this key as a mapping member name
    #[must_use]
    pub fn to_name(&self) -> String {
        match self {
            Key::Name(name) => name.clone(),
            Key::Index(index) => index.to_string(),
        }
    }
}

fn parse_canonical_index(name: &str) -> Option<usize> {
    let canonical = name == "0"
        || (!name.is_empty()
            && !name.starts_with('0')
            && name.bytes().all(|b| b.is_ascii_digit()));
    if canonical { name.parse().ok() } else { None }
}

impl From<&str> for Key {
    fn from(name: &str) -> Self {
        Key::Name(name.to_owned())
    }
}

impl From<String> for Key {
    fn from(name: String) -> Self {
        Key::Name(name)
    }
}

impl From<usize> for Key {
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Name(name) => write!(f, "{name}"),
            Key::Index(index) => write!(f, "{index}"),
        }
    }
}
