//! Resolver configuration
//!
//! Plain data with public fields. Start from [`ResolverConfig::default`] or
//! one of the presets and adjust fields directly.

use crate::error::{RefError, RefResult};
use crate::path::WILDCARD;

/// Runtime resolver configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    /// Text treated as the wildcard, both in text segments and in
    /// [`Segment::Key`](crate::path::Segment::Key) segments
    pub wildcard: String,
    /// Stop collecting once this many bindings were produced
    pub max_bindings: Option<usize>,
    /// Log every branch that matched nothing at trace level
    pub log_misses: bool,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            wildcard: WILDCARD.to_owned(),
            max_bindings: None,
            log_misses: false,
        }
    }
}

impl ResolverConfig {
    /// Default configuration capped at `max_bindings` results
    #[must_use]
    pub fn bounded(max_bindings: usize) -> Self {
        Self {
            max_bindings: Some(max_bindings),
            ..Self::default()
        }
    }

    /// Default configuration with a different wildcard marker
    #[must_use]
    pub fn with_wildcard(wildcard: impl Into<String>) -> Self {
        Self {
            wildcard: wildcard.into(),
            ..Self::default()
        }
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the wildcard marker is empty
    /// - `max_bindings` is `Some(0)`
    pub fn validate(&self) -> RefResult<()> {
        if self.wildcard.is_empty() {
            return Err(RefError::invalid_config("wildcard marker cannot be empty"));
        }
        if self.max_bindings == Some(0) {
            return Err(RefError::invalid_config("max_bindings must be at least 1"));
        }
        Ok(())
    }
}
