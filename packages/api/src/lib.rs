//! refpath public API
//!
//! Find every member of a value graph matched by a wildcard path and get back
//! live bindings to read and overwrite them in place.
//!
//! ```rust
//! use refpath::Value;
//! use serde_json::json;
//!
//! let root = Value::from(json!({"events": [{"topics": {"web": "a", "music": "b"}}]}));
//!
//! let topics = refpath::on(&root)
//!     .field("events")
//!     .each()
//!     .field("topics")
//!     .each()
//!     .values()
//!     .unwrap();
//! assert_eq!(topics, vec![Value::from("a"), Value::from("b")]);
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

pub use builder::PathBuilder;
pub use refpath_core::{
    Binding, ErrorKind, Key, Location, Node, RefError, RefResult, ResolveStats, Resolver,
    ResolverConfig, Segment, Value, ValueKind, WILDCARD,
};

/// Resolve `path` against `root` with the default configuration
///
/// Returns one live [`Binding`] per matched member, in traversal order. A path
/// that matches nothing returns an empty list.
///
/// # Errors
///
/// Returns [`RefError::EmptyPath`] if `path` has no segments.
pub fn find_references(root: &Value, path: &[Segment]) -> RefResult<Vec<Binding>> {
    refpath_core::resolve(root, path)
}

/// Start building a path rooted at `root`
#[must_use]
pub fn on(root: &Value) -> PathBuilder<'_> {
    PathBuilder::new(root)
}
