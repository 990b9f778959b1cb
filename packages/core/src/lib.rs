//! # refpath core
//!
//! Resolves wildcard paths against shared, possibly cyclic value graphs and
//! hands back live read/write [`Binding`]s to every matched member.
//!
//! ## Features
//!
//! - **Live bindings**: reads and writes go straight to the shared container
//! - **Wildcards** over sequences (ascending index) and mappings (insertion order)
//! - **Cycle tolerant**: recursion is bounded by path length, not graph depth
//! - **Speculative probing**: missing members and scalars resolve to nothing
//!
//! ## Usage
//!
//! ```rust
//! use refpath_core::{resolve, Segment, Value};
//! use serde_json::json;
//!
//! let root = Value::from(json!({"address": {"lines": ["L1", "L2"]}}));
//! let path = [Segment::from("address"), Segment::from("lines"), Segment::Wildcard];
//!
//! let bindings = resolve(&root, &path).unwrap();
//! assert_eq!(bindings.len(), 2);
//!
//! bindings[0].set(Value::from("Line 1"));
//! assert_eq!(
//!     root.to_json().unwrap(),
//!     json!({"address": {"lines": ["Line 1", "L2"]}})
//! );
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod binding;
pub mod config;
pub mod error;
pub mod path;
pub mod resolver;
pub mod stats;
pub mod value;

pub use binding::Binding;
pub use config::ResolverConfig;
pub use error::{ErrorKind, RefError, RefResult};
pub use path::{Key, Location, Segment, WILDCARD};
pub use resolver::{Resolver, resolve};
pub use stats::ResolveStats;
pub use value::{Node, Value, ValueKind};
