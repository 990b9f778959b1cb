//! Path segments and concrete member locations
//!
//! Paths are supplied pre-split: a slice of [`Segment`]s, each either a
//! concrete key or the wildcard. Every binding the resolver produces records
//! the concrete [`Location`] it was reached through.

mod location;
mod segment;

pub use location::Location;
pub use segment::{Key, Segment, WILDCARD};
