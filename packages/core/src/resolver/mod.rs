//! Path resolution
//!
//! [`Resolver`] walks a path of [`Segment`]s through a value graph and returns
//! one [`Binding`] per matched member. A path that matches nothing resolves to
//! an empty list; only an empty path is rejected.
//!
//! Recursion depth is bounded by the path length, never by the shape of the
//! graph, so cyclic graphs need no visited-set bookkeeping: each hop through a
//! cycle consumes one segment.

mod walk;

use crate::binding::Binding;
use crate::config::ResolverConfig;
use crate::error::{RefError, RefResult};
use crate::path::Segment;
use crate::stats::ResolveStats;
use crate::value::Value;

use self::walk::Walk;

/// Resolve `path` against `root` with the default configuration
///
/// # Errors
///
/// Returns [`RefError::EmptyPath`] if `path` has no segments.
pub fn resolve(root: &Value, path: &[Segment]) -> RefResult<Vec<Binding>> {
    Resolver::new().resolve(root, path)
}

/// Path resolver with a fixed configuration
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a resolver after validating `config`
    ///
    /// # Errors
    ///
    /// Returns [`RefError::InvalidConfig`] if the configuration is invalid.
    pub fn with_config(config: ResolverConfig) -> RefResult<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Collect a binding for every member `path` matches under `root`
    ///
    /// Bindings come back in traversal order: depth first, sequences by
    /// ascending index, mappings in insertion order. Nothing is reordered or
    /// deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`RefError::EmptyPath`] if `path` has no segments.
    pub fn resolve(&self, root: &Value, path: &[Segment]) -> RefResult<Vec<Binding>> {
        self.resolve_with_stats(root, path).map(|(bindings, _)| bindings)
    }

    /// Like [`Resolver::resolve`], also returning traversal counters
    ///
    /// # Errors
    ///
    /// Returns [`RefError::EmptyPath`] if `path` has no segments.
    pub fn resolve_with_stats(
        &self,
        root: &Value,
        path: &[Segment],
    ) -> RefResult<(Vec<Binding>, ResolveStats)> {
        if path.is_empty() {
            return Err(RefError::EmptyPath);
        }

        log::debug!("Resolving path of {} segment(s)", path.len());

        let mut walk = Walk::new(&self.config);
        walk.descend(root, path);
        let (bindings, stats, truncated) = walk.finish();

        if truncated {
            log::warn!(
                "Path resolution stopped at the configured limit of {} binding(s)",
                bindings.len()
            );
        }
        log::debug!(
            "Resolved {} binding(s) from {} branch(es), {} miss(es)",
            stats.bindings,
            stats.branches_visited,
            stats.misses
        );

        Ok((bindings, stats))
    }

    /// Resolve a path given as text segments
    ///
    /// Each segment equal to the configured wildcard marker becomes the
    /// wildcard; every other segment is a member name.
    ///
    /// # Errors
    ///
    /// Returns [`RefError::EmptyPath`] if `path` has no segments.
    pub fn resolve_strs(&self, root: &Value, path: &[&str]) -> RefResult<Vec<Binding>> {
        let segments: Vec<Segment> = path
            .iter()
            .map(|text| Segment::parse_with(text, &self.config.wildcard))
            .collect();
        self.resolve(root, &segments)
    }
}
