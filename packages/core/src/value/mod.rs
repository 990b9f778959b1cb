//! Shared value graph
//!
//! Values are scalars or handles to containers. Container handles are shared:
//! cloning a [`Value::Container`] clones the handle, never the members, so a
//! graph may reference one container from many places and may contain cycles.

mod conversions;
mod node;

pub use node::Node;

/// Dispatch tag used by the resolver
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Indexed by position
    Sequence,
    /// Indexed by member name, enumerated in insertion order
    Mapping,
    /// Anything without members
    Scalar,
}

/// A value in the graph
///
/// Scalars compare by value. Containers compare by identity, so comparing two
/// cyclic graphs always terminates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
    /// The "no value" sentinel
    #[default]
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Container(Node),
}

impl Value {
    /// New empty sequence
    #[must_use]
    pub fn array() -> Self {
        Value::Container(Node::sequence())
    }

    /// New empty mapping
    #[must_use]
    pub fn object() -> Self {
        Value::Container(Node::mapping())
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Container(node) => node.kind(),
            _ => ValueKind::Scalar,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    #[must_use]
    pub fn as_node(&self) -> Option<&Node> {
        match self {
            Value::Container(node) => Some(node),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(number) => number.as_f64(),
            _ => None,
        }
    }
}
