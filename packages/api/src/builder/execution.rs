//! Resolution and bulk read/write through the built path

use refpath_core::{Binding, RefResult, ResolveStats, Resolver, Value};

use super::core::PathBuilder;

impl PathBuilder<'_> {
    fn resolver(&self) -> RefResult<Resolver> {
        Resolver::with_config(self.config.clone())
    }

    /// Bindings to every matched member
    ///
    /// # Errors
    ///
    /// Returns an error if no segment was added or the configuration is invalid.
    pub fn resolve(&self) -> RefResult<Vec<Binding>> {
        self.resolver()?.resolve(self.root, &self.segments)
    }

    /// Bindings plus traversal counters
    ///
    /// # Errors
    ///
    /// Returns an error if no segment was added or the configuration is invalid.
    pub fn resolve_with_stats(&self) -> RefResult<(Vec<Binding>, ResolveStats)> {
        self.resolver()?.resolve_with_stats(self.root, &self.segments)
    }

    /// Binding to the first matched member
    ///
    /// # Errors
    ///
    /// Returns an error if no segment was added or the configuration is invalid.
    pub fn first(&self) -> RefResult<Option<Binding>> {
        Ok(self.resolve()?.into_iter().next())
    }

    /// Current values of every matched member
    ///
    /// # Errors
    ///
    /// Returns an error if no segment was added or the configuration is invalid.
    pub fn values(&self) -> RefResult<Vec<Value>> {
        Ok(self.resolve()?.iter().filter_map(Binding::get).collect())
    }

    /// Overwrite every matched member with `value`, returning how many
    ///
    /// # Errors
    ///
    /// Returns an error if no segment was added or the configuration is invalid.
    pub fn set_all(&self, value: &Value) -> RefResult<usize> {
        let bindings = self.resolve()?;
        for binding in &bindings {
            binding.set(value.clone());
        }
        log::debug!("Wrote {} member(s)", bindings.len());
        Ok(bindings.len())
    }

    /// Rewrite every matched member from its current value
    ///
    /// Members are visited in traversal order. A member removed by an earlier
    /// rewrite is skipped and not counted.
    ///
    /// # Errors
    ///
    /// Returns an error if no segment was added or the configuration is invalid.
    pub fn update_all<F>(&self, mut rewrite: F) -> RefResult<usize>
    where
        F: FnMut(Value) -> Value,
    {
        let mut updated = 0;
        for binding in self.resolve()? {
            if let Some(current) = binding.get() {
                binding.set(rewrite(current));
                updated += 1;
            }
        }
        log::debug!("Rewrote {updated} member(s)");
        Ok(updated)
    }
}
