//! Fluent path builder
//!
//! Segments are appended one call at a time and the path is resolved by one of
//! the execution methods.

pub mod core;
pub mod execution;
pub mod segments;

pub use self::core::PathBuilder;
