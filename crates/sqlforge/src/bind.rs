//! Placeholder allocation for one statement build.
//!
//! A [`Bind`] is mutable state scoped to exactly one build cycle. Every
//! bound literal goes through [`Bind::prepare`], which hands back the
//! placeholder token to splice into the SQL text and records the value
//! against that token. Iterating [`Bind::bindings`] yields tokens in
//! allocation order, so a caller doing positional parameter binding gets
//! correct ordinal alignment.

use crate::value::Value;

/// Allocator of `:db_prep_<n>` placeholder tokens and the ordered mapping
/// from token to bound value.
#[derive(Clone, Debug, Default)]
pub struct Bind {
    counter: usize,
    bindings: Vec<(String, Value)>,
}

impl Bind {
    /// Create a fresh allocator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next placeholder token and record `value` against it.
    ///
    /// The token is unique within the current build cycle and safe to
    /// interpolate directly into SQL text. The value is never inspected;
    /// any coercion is the caller's responsibility and happens before this
    /// call.
    pub fn prepare(&mut self, value: impl Into<Value>) -> String {
        self.counter += 1;
        let token = format!(":db_prep_{}", self.counter);
        self.bindings.push((token.clone(), value.into()));
        token
    }

    /// Bound `(token, value)` pairs in allocation order.
    pub fn bindings(&self) -> &[(String, Value)] {
        &self.bindings
    }

    /// Consume the allocator, yielding the ordered bindings.
    pub fn into_bindings(self) -> Vec<(String, Value)> {
        self.bindings
    }

    /// Look up the value bound to a token.
    pub fn get(&self, token: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|(t, _)| t == token)
            .map(|(_, v)| v)
    }

    /// Number of values bound so far.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if nothing has been bound.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Clear counter and bindings for an independent build.
    ///
    /// Must not be called mid-build: placeholders already emitted into SQL
    /// text would lose their entries.
    pub fn reset(&mut self) {
        self.counter = 0;
        self.bindings.clear();
    }
}
