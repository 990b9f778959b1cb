//! Recursive descent over the value graph

use crate::binding::Binding;
use crate::config::ResolverConfig;
use crate::path::{Key, Location, Segment};
use crate::stats::ResolveStats;
use crate::value::{Node, Value};

/// State of one resolution call
pub(super) struct Walk<'c> {
    config: &'c ResolverConfig,
    location: Location,
    bindings: Vec<Binding>,
    stats: ResolveStats,
    truncated: bool,
}

impl<'c> Walk<'c> {
    pub(super) fn new(config: &'c ResolverConfig) -> Self {
        Self {
            config,
            location: Location::root(),
            bindings: Vec::new(),
            stats: ResolveStats::new(),
            truncated: false,
        }
    }

    pub(super) fn finish(self) -> (Vec<Binding>, ResolveStats, bool) {
        (self.bindings, self.stats, self.truncated)
    }

    /// Consume the first segment of `path` against `value`
    pub(super) fn descend(&mut self, value: &Value, path: &[Segment]) {
        let Some((segment, rest)) = path.split_first() else {
            return;
        };

        // Scalars have no members: every segment misses.
        let Some(node) = value.as_node() else {
            self.miss(segment);
            return;
        };

        match self.concrete_key(segment) {
            None => {
                self.stats.record_expansion();
                for key in node.ordered_keys() {
                    if self.truncated {
                        break;
                    }
                    self.step(node, key, rest);
                }
            }
            Some(key) => match node.normalize(&key) {
                Some(key) => self.step(node, key, rest),
                None => self.miss(segment),
            },
        }
    }

    /// `None` for the wildcard, including a key spelled like the marker
    fn concrete_key(&self, segment: &Segment) -> Option<Key> {
        if segment.is_wildcard(&self.config.wildcard) {
            None
        } else {
            segment.to_key()
        }
    }

    /// Take the member at `key`: bind it if `rest` is empty, else recurse
    fn step(&mut self, node: &Node, key: Key, rest: &[Segment]) {
        if self.is_full() {
            self.truncated = true;
            return;
        }
        self.stats.record_branch();

        let member = match node.get(&key) {
            Some(member) if !member.is_null() => member,
            _ => {
                self.miss(&key);
                return;
            }
        };

        if rest.is_empty() {
            let location = self.location.clone().child(key.clone());
            self.bindings.push(Binding::resolved(node.clone(), key, location));
            self.stats.record_binding();
            return;
        }

        self.location.push(key);
        self.descend(&member, rest);
        self.location.pop();
    }

    fn is_full(&self) -> bool {
        self.config
            .max_bindings
            .is_some_and(|max| self.bindings.len() >= max)
    }

    fn miss(&mut self, at: &dyn std::fmt::Display) {
        self.stats.record_miss();
        if self.config.log_misses {
            log::trace!("No match for '{}' under {}", at, self.location);
        }
    }
}
