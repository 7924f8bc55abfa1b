//! Parameter sequence and the ordered parameter map.

use crate::error::{RenderError, RenderResult};
use crate::value::Value;
use indexmap::IndexMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio_postgres::types::ToSql;

/// A monotonically increasing counter minting unique suffixes for synthetic
/// parameter names.
///
/// One sequence is shared across an entire statement render, including every
/// nested query expression, so no two fragments can mint the same name. The
/// counter is atomic: fragments rendered from the same sequence never repeat
/// a value, sequentially or concurrently. It is always passed down by
/// reference into nested rendering calls, never held as a global.
///
/// The first call to [`next`](Self::next) on a fresh sequence returns 1.
#[derive(Debug)]
pub struct ParameterSequence(AtomicUsize);

impl ParameterSequence {
    /// Create a sequence whose first `next()` returns 1.
    pub fn new() -> Self {
        Self(AtomicUsize::new(1))
    }

    /// Create a sequence whose first `next()` returns `start`.
    ///
    /// Used to continue numbering across composed renders, e.g. a sub-select
    /// embedded in a larger statement that already consumed names.
    pub fn starting_at(start: usize) -> Self {
        Self(AtomicUsize::new(start))
    }

    /// Return the next value, advancing the counter.
    pub fn next(&self) -> usize {
        self.0.fetch_add(1, Ordering::Relaxed)
    }

    /// Mint the next synthetic parameter name (`p1`, `p2`, ...).
    pub fn next_name(&self) -> String {
        format!("p{}", self.next())
    }
}

impl Default for ParameterSequence {
    fn default() -> Self {
        Self::new()
    }
}

/// An insertion-ordered map from parameter name to bound value.
///
/// Keys are unique by construction: [`insert_unique`](Self::insert_unique)
/// fails fast on a duplicate rather than overwriting, surfacing a broken
/// sequence-sharing invariant immediately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    entries: IndexMap<String, Value>,
}

impl Parameters {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a parameter, failing on a duplicate name.
    pub fn insert_unique(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Value>,
    ) -> RenderResult<()> {
        let name = name.into();
        if self.entries.contains_key(&name) {
            return Err(RenderError::duplicate_parameter(name));
        }
        self.entries.insert(name, value.into());
        Ok(())
    }

    /// Merge another map into this one, failing on any duplicate name.
    pub fn merge(&mut self, other: Parameters) -> RenderResult<()> {
        for (name, value) in other.entries {
            self.insert_unique(name, value)?;
        }
        Ok(())
    }

    /// Look up a parameter by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// Returns `true` if a parameter with this name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate over parameter names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// All values as `ToSql` references, in insertion order.
    ///
    /// Suitable for positional execution APIs when the statement was
    /// rendered with a positional placeholder strategy.
    pub fn as_refs(&self) -> Vec<&(dyn ToSql + Sync)> {
        self.entries
            .values()
            .map(|v| v as &(dyn ToSql + Sync))
            .collect()
    }
}
