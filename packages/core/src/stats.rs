//! Per-call resolution statistics

/// Counters gathered while resolving one path
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolveStats {
    /// Concrete (container, key) steps taken
    pub branches_visited: usize,
    /// Wildcard segments expanded
    pub wildcard_expansions: usize,
    /// Branches that matched nothing
    pub misses: usize,
    /// Bindings produced
    pub bindings: usize,
}

impl ResolveStats {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_branch(&mut self) {
        self.branches_visited += 1;
    }

    pub fn record_expansion(&mut self) {
        self.wildcard_expansions += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_binding(&mut self) {
        self.bindings += 1;
    }
}
