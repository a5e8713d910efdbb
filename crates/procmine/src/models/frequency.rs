//! Insertion-ordered frequency counting.

use std::collections::HashMap;
use std::hash::Hash;

/// Frequency counter that remembers first-seen key order.
///
/// Merging two tables is associative and only adds counts, so partial
/// tables computed over batches of a log always combine to the same
/// totals. Equality compares counts only, not key order.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    entries: Vec<(K, u64)>,
    index: HashMap<K, usize>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<K: Clone + Eq + Hash> FrequencyTable<K> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `count` occurrences of `key`.
    pub fn add(&mut self, key: K, count: u64) {
        if let Some(&idx) = self.index.get(&key) {
            self.entries[idx].1 += count;
        } else {
            self.index.insert(key.clone(), self.entries.len());
            self.entries.push((key, count));
        }
    }

    /// Add one occurrence of `key`.
    pub fn increment(&mut self, key: K) {
        self.add(key, 1);
    }

    /// Merge another table into this one.
    pub fn merge(&mut self, other: &FrequencyTable<K>) {
        for (key, count) in &other.entries {
            self.add(key.clone(), *count);
        }
    }

    /// Count for `key`; 0 if absent.
    pub fn get(&self, key: &K) -> u64 {
        self.index
            .get(key)
            .map(|&idx| self.entries[idx].1)
            .unwrap_or(0)
    }

    /// Check whether `key` was counted.
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Entry with the highest count; the first-seen key wins ties.
    pub fn most_common(&self) -> Option<(&K, u64)> {
        let mut best: Option<(&K, u64)> = None;
        for (key, count) in &self.entries {
            match best {
                Some((_, c)) if *count <= c => {}
                _ => best = Some((key, *count)),
            }
        }
        best
    }

    /// Entries sorted by descending count; equal counts keep first-seen order.
    pub fn sorted_desc(&self) -> Vec<(&K, u64)> {
        let mut sorted: Vec<(&K, u64)> = self.entries.iter().map(|(k, c)| (k, *c)).collect();
        sorted.sort_by_key(|&(_, c)| std::cmp::Reverse(c));
        sorted
    }

    /// Iterate in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, u64)> + '_ {
        self.entries.iter().map(|(k, c)| (k, *c))
    }

    /// Keys in first-seen order.
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries.iter().map(|(k, _)| k)
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| c).sum()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Clone + Eq + Hash> PartialEq for FrequencyTable<K> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|(k, c)| other.get(k) == c)
    }
}

impl<K: Clone + Eq + Hash> Eq for FrequencyTable<K> {}

impl<K: Clone + Eq + Hash> FromIterator<K> for FrequencyTable<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut table = Self::new();
        for key in iter {
            table.increment(key);
        }
        table
    }
}
