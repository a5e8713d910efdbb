//! Trace variant grouping.

use super::VariantKey;
use std::collections::HashMap;

/// Separator used in variant display names.
pub const VARIANT_SEPARATOR: &str = " -> ";

/// Format a variant as `"A -> B -> C"`.
pub fn variant_name<S: AsRef<str>>(variant: &[S]) -> String {
    variant
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(VARIANT_SEPARATOR)
}

/// Mapping from variant to the positions of the traces exhibiting it.
///
/// Variants keep the order in which they were first encountered while
/// scanning the log. Every trace of the source log belongs to exactly one
/// variant.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariantMap {
    entries: Vec<(VariantKey, Vec<usize>)>,
    index: HashMap<VariantKey, usize>,
}

impl VariantMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that the trace at `trace_index` follows `variant`.
    pub fn insert(&mut self, variant: VariantKey, trace_index: usize) {
        if let Some(&idx) = self.index.get(&variant) {
            self.entries[idx].1.push(trace_index);
        } else {
            self.index.insert(variant.clone(), self.entries.len());
            self.entries.push((variant, vec![trace_index]));
        }
    }

    /// Trace positions for a variant.
    pub fn get<S: AsRef<str>>(&self, variant: &[S]) -> Option<&[usize]> {
        let key: VariantKey = variant.iter().map(|s| s.as_ref().to_string()).collect();
        self.index
            .get(&key)
            .map(|&idx| self.entries[idx].1.as_slice())
    }

    /// Find a variant by its `"A -> B"` display name.
    pub fn find_by_name(&self, name: &str) -> Option<(&VariantKey, &[usize])> {
        self.iter()
            .find(|(key, _)| variant_name(key.as_slice()) == name)
    }

    /// Check whether a variant is present.
    pub fn contains<S: AsRef<str>>(&self, variant: &[S]) -> bool {
        self.get(variant).is_some()
    }

    /// Iterate variants in first-encountered order.
    pub fn iter(&self) -> impl Iterator<Item = (&VariantKey, &[usize])> + '_ {
        self.entries.iter().map(|(k, t)| (k, t.as_slice()))
    }

    /// Variant keys in first-encountered order.
    pub fn keys(&self) -> impl Iterator<Item = &VariantKey> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Number of traces for a variant; 0 if absent.
    pub fn count<S: AsRef<str>>(&self, variant: &[S]) -> usize {
        self.get(variant).map_or(0, <[usize]>::len)
    }

    /// Number of distinct variants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total traces across all variants.
    pub fn total_traces(&self) -> usize {
        self.entries.iter().map(|(_, t)| t.len()).sum()
    }

    /// Create a new map with the variants satisfying `predicate`.
    pub fn retain_variants(&self, mut predicate: impl FnMut(&VariantKey) -> bool) -> VariantMap {
        let mut filtered = VariantMap::new();
        for (key, traces) in self.iter().filter(|(k, _)| predicate(k)) {
            for &trace in traces {
                filtered.insert(key.clone(), trace);
            }
        }
        filtered
    }

    /// All trace positions, sorted.
    pub fn trace_indices(&self) -> Vec<usize> {
        let mut indices: Vec<usize> = self
            .entries
            .iter()
            .flat_map(|(_, t)| t.iter().copied())
            .collect();
        indices.sort_unstable();
        indices
    }
}
