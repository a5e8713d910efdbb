//! Directly-Follows Graph (DFG) structures.

use super::FrequencyTable;
use std::collections::{BTreeMap, BTreeSet};

/// Directly-follows edge with its observed frequency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DfgEdge {
    /// Source activity.
    pub source: String,
    /// Target activity.
    pub target: String,
    /// Number of times `target` immediately followed `source`.
    pub frequency: u64,
}

impl DfgEdge {
    /// Check if this is a self-loop (same source and target).
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

/// Directly-Follows Graph.
///
/// Every edge present has frequency >= 1; absent pairs were never observed
/// in direct succession. Edges iterate in first-observed order. Start and
/// end activity counts record how many traces begin and finish with each
/// activity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dfg {
    edges: FrequencyTable<(String, String)>,
    start_activities: FrequencyTable<String>,
    end_activities: FrequencyTable<String>,
}

impl Dfg {
    /// Create a new empty DFG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `count` observations of `source` directly followed by `target`.
    pub fn add_edge(&mut self, source: &str, target: &str, count: u64) {
        if count > 0 {
            self.edges
                .add((source.to_string(), target.to_string()), count);
        }
    }

    /// Record a trace starting with `activity`.
    pub fn add_start(&mut self, activity: &str) {
        self.start_activities.increment(activity.to_string());
    }

    /// Record a trace ending with `activity`.
    pub fn add_end(&mut self, activity: &str) {
        self.end_activities.increment(activity.to_string());
    }

    /// Merge another DFG into this one (counter sum).
    pub fn merge(&mut self, other: &Dfg) {
        self.edges.merge(&other.edges);
        self.start_activities.merge(&other.start_activities);
        self.end_activities.merge(&other.end_activities);
    }

    /// Frequency of an edge; 0 if never observed.
    pub fn frequency(&self, source: &str, target: &str) -> u64 {
        self.edges
            .get(&(source.to_string(), target.to_string()))
    }

    /// Check whether `source` was ever directly followed by `target`.
    pub fn follows(&self, source: &str, target: &str) -> bool {
        self.frequency(source, target) > 0
    }

    /// Edges in first-observed order.
    pub fn edges(&self) -> impl Iterator<Item = DfgEdge> + '_ {
        self.edges.iter().map(|((s, t), frequency)| DfgEdge {
            source: s.clone(),
            target: t.clone(),
            frequency,
        })
    }

    /// Raw edge frequency table.
    pub fn edge_table(&self) -> &FrequencyTable<(String, String)> {
        &self.edges
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Check if the graph has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Sum of all edge frequencies.
    pub fn total_frequency(&self) -> u64 {
        self.edges.total()
    }

    /// Start activities with the number of traces starting there.
    pub fn start_activities(&self) -> &FrequencyTable<String> {
        &self.start_activities
    }

    /// End activities with the number of traces ending there.
    pub fn end_activities(&self) -> &FrequencyTable<String> {
        &self.end_activities
    }

    /// Activities appearing as an edge endpoint or start/end, sorted.
    pub fn activities(&self) -> BTreeSet<String> {
        let mut activities = BTreeSet::new();
        for (s, t) in self.edges.keys() {
            activities.insert(s.clone());
            activities.insert(t.clone());
        }
        activities.extend(self.start_activities.keys().cloned());
        activities.extend(self.end_activities.keys().cloned());
        activities
    }

    /// Edges with outgoing source `activity`.
    pub fn outgoing(&self, activity: &str) -> Vec<DfgEdge> {
        self.edges().filter(|e| e.source == activity).collect()
    }

    /// Edges with target `activity`.
    pub fn incoming(&self, activity: &str) -> Vec<DfgEdge> {
        self.edges().filter(|e| e.target == activity).collect()
    }

    /// Edge frequencies keyed by `"source -> target"`.
    pub fn to_string_keys(&self) -> BTreeMap<String, u64> {
        self.edges
            .iter()
            .map(|((s, t), c)| (format!("{} -> {}", s, t), c))
            .collect()
    }
}
