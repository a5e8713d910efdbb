//! DFG construction.
//!
//! Builds a Directly-Follows Graph from the traces of an event log.

use crate::models::{Dfg, EventLog, Trace};

/// Incremental DFG builder.
///
/// Partial builders over disjoint batches of traces can be merged with
/// [`Dfg::merge`]; counts only accumulate, so the result does not depend on
/// trace order or batch boundaries.
#[derive(Debug, Default)]
pub struct DfgBuilder {
    dfg: Dfg,
}

impl DfgBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the edges of one trace.
    pub fn add_trace(&mut self, trace: &Trace) {
        let (Some(first), Some(last)) = (trace.events().first(), trace.events().last()) else {
            return;
        };
        self.dfg.add_start(first.activity());
        self.dfg.add_end(last.activity());
        for (source, target) in trace.edges() {
            self.dfg.add_edge(source, target, 1);
        }
    }

    /// Add every trace of an iterator.
    pub fn add_traces<'a>(&mut self, traces: impl IntoIterator<Item = &'a Trace>) {
        for trace in traces {
            self.add_trace(trace);
        }
    }

    /// Finish building.
    pub fn build(self) -> Dfg {
        self.dfg
    }
}

/// Build the DFG of a log.
///
/// Traces of length 0 or 1 contribute no edges.
pub fn build_dfg(log: &EventLog) -> Dfg {
    let mut builder = DfgBuilder::new();
    builder.add_traces(log);
    let dfg = builder.build();
    log::debug!(
        "Built DFG: {} traces -> {} edges (total frequency {})",
        log.len(),
        dfg.edge_count(),
        dfg.total_frequency()
    );
    dfg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_log() -> EventLog {
        let mut sequences = vec![vec!["A", "B", "C"]; 5];
        sequences.extend(vec![vec!["A", "C"]; 2]);
        EventLog::from_sequences(sequences)
    }

    #[test]
    fn test_dfg_construction() {
        let dfg = build_dfg(&create_test_log());

        assert_eq!(dfg.edge_count(), 3);
        assert_eq!(dfg.frequency("A", "B"), 5);
        assert_eq!(dfg.frequency("B", "C"), 5);
        assert_eq!(dfg.frequency("A", "C"), 2);
        assert_eq!(dfg.start_activities().get(&"A".to_string()), 7);
        assert_eq!(dfg.end_activities().get(&"C".to_string()), 7);
    }

    #[test]
    fn test_short_traces_contribute_no_edges() {
        let log = EventLog::from_sequences(vec![vec!["A"], vec![]]);
        let dfg = build_dfg(&log);
        assert!(dfg.is_empty());
        assert_eq!(dfg.start_activities().len(), 1);
    }

    #[test]
    fn test_merge_equals_single_pass() {
        let log = create_test_log();
        let whole = build_dfg(&log);

        let mut merged = Dfg::new();
        for chunk in log.chunks(3) {
            let mut builder = DfgBuilder::new();
            builder.add_traces(chunk);
            merged.merge(&builder.build());
        }
        assert_eq!(merged, whole);

        let mut reversed = DfgBuilder::new();
        reversed.add_traces(log.traces().iter().rev());
        assert_eq!(reversed.build(), whole);
    }
}
