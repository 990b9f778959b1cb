//! Core `PathBuilder` state

use refpath_core::{ResolverConfig, Segment, Value};

/// Path under construction, bound to the root it will be resolved against
#[derive(Debug, Clone)]
pub struct PathBuilder<'r> {
    pub(crate) root: &'r Value,
    pub(crate) segments: Vec<Segment>,
    pub(crate) config: ResolverConfig,
}

impl<'r> PathBuilder<'r> {
    #[must_use]
    pub fn new(root: &'r Value) -> Self {
        Self {
            root,
            segments: Vec::new(),
            config: ResolverConfig::default(),
        }
    }

    /// Replace the resolver configuration
    #[must_use]
    pub fn config(mut self, config: ResolverConfig) -> Self {
        self.config = config;
        self
    }

    /// Segments appended so far
    #[must_use]
    pub fn path(&self) -> &[Segment] {
        &self.segments
    }

    #[must_use]
    pub fn root(&self) -> &'r Value {
        self.root
    }
}
