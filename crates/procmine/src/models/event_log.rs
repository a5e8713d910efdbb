//! Event log container and builder.

use super::event::{Attribute, Event};
use super::trace::Trace;
use crate::error::{MiningError, Result};
use std::collections::HashMap;

/// An ordered, read-only collection of traces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventLog {
    traces: Vec<Trace>,
    attributes: Vec<Attribute>,
}

impl EventLog {
    /// Create a log from traces.
    pub fn new(traces: Vec<Trace>) -> Self {
        Self {
            traces,
            attributes: Vec::new(),
        }
    }

    /// Attach log-level attributes.
    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Build a log from activity sequences, one trace per sequence.
    ///
    /// Case ids are the sequence positions. Events carry no timestamps.
    pub fn from_sequences<I, S, A>(sequences: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = A>,
        A: Into<String>,
    {
        let traces = sequences
            .into_iter()
            .enumerate()
            .map(|(i, seq)| Trace::new(i.to_string(), seq.into_iter().map(Event::new).collect()))
            .collect();
        Self::new(traces)
    }

    /// All traces in log order.
    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    /// Log-level attributes.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Iterate over traces.
    pub fn iter(&self) -> std::slice::Iter<'_, Trace> {
        self.traces.iter()
    }

    /// Get trace by position.
    pub fn get(&self, index: usize) -> Option<&Trace> {
        self.traces.get(index)
    }

    /// Number of traces.
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Check if the log has no traces.
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Total number of events.
    pub fn event_count(&self) -> usize {
        self.traces.iter().map(Trace::len).sum()
    }

    /// Iterate over bounded batches of traces. A size of 0 is treated as 1.
    pub fn chunks(&self, chunk_size: usize) -> std::slice::Chunks<'_, Trace> {
        self.traces.chunks(chunk_size.max(1))
    }

    /// Create a new log holding the traces that satisfy `predicate`.
    pub fn filter(&self, mut predicate: impl FnMut(&Trace) -> bool) -> EventLog {
        EventLog {
            traces: self.traces.iter().filter(|t| predicate(t)).cloned().collect(),
            attributes: self.attributes.clone(),
        }
    }

    /// Create a new log holding the traces at the given positions.
    pub fn select(&self, indices: &[usize]) -> EventLog {
        EventLog {
            traces: indices
                .iter()
                .filter_map(|&i| self.traces.get(i))
                .cloned()
                .collect(),
            attributes: self.attributes.clone(),
        }
    }
}

impl<'a> IntoIterator for &'a EventLog {
    type Item = &'a Trace;
    type IntoIter = std::slice::Iter<'a, Trace>;

    fn into_iter(self) -> Self::IntoIter {
        self.traces.iter()
    }
}

/// Builder for constructing logs from individual events.
///
/// Events are grouped into traces by case id; traces appear in the order
/// their first event was pushed.
#[derive(Debug, Default)]
pub struct EventLogBuilder {
    traces: Vec<(String, Vec<Event>)>,
    case_index: HashMap<String, usize>,
    require_timestamps: bool,
}

impl EventLogBuilder {
    /// Create a new log builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject events without timestamps at build time.
    pub fn require_timestamps(mut self, require: bool) -> Self {
        self.require_timestamps = require;
        self
    }

    /// Append an event to the trace of `case_id`.
    pub fn push_event(&mut self, case_id: impl Into<String>, event: Event) -> &mut Self {
        let case_id = case_id.into();
        let idx = match self.case_index.get(&case_id) {
            Some(&idx) => idx,
            None => {
                let idx = self.traces.len();
                self.case_index.insert(case_id.clone(), idx);
                self.traces.push((case_id, Vec::new()));
                idx
            }
        };
        self.traces[idx].1.push(event);
        self
    }

    /// Append a whole trace for `case_id`.
    pub fn push_trace(
        &mut self,
        case_id: impl Into<String>,
        events: impl IntoIterator<Item = Event>,
    ) -> &mut Self {
        let case_id = case_id.into();
        for event in events {
            self.push_event(case_id.clone(), event);
        }
        self
    }

    /// Number of traces collected so far.
    pub fn len(&self) -> usize {
        self.traces.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }

    /// Validate required fields and build the log.
    pub fn build(self) -> Result<EventLog> {
        for (trace_idx, (_, events)) in self.traces.iter().enumerate() {
            for (event_idx, event) in events.iter().enumerate() {
                if event.activity().is_empty() {
                    return Err(MiningError::parse_at(
                        trace_idx,
                        Some(event_idx),
                        "empty activity name",
                    ));
                }
                if self.require_timestamps && event.timestamp().is_none() {
                    return Err(MiningError::parse_at(
                        trace_idx,
                        Some(event_idx),
                        "missing timestamp",
                    ));
                }
            }
        }

        let traces = self
            .traces
            .into_iter()
            .map(|(case_id, events)| Trace::new(case_id, events))
            .collect();
        Ok(EventLog::new(traces))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_builder_groups_by_case() {
        let mut builder = EventLogBuilder::new();
        builder
            .push_event("100", Event::new("A"))
            .push_event("200", Event::new("A"))
            .push_event("100", Event::new("B"));

        let log = builder.build().unwrap();
        assert_eq!(log.len(), 2);
        assert_eq!(log.traces()[0].case_id(), "100");
        assert_eq!(log.traces()[0].variant(), vec!["A", "B"]);
        assert_eq!(log.traces()[1].variant(), vec!["A"]);
    }

    #[test]
    fn test_log_builder_rejects_missing_fields() {
        let mut builder = EventLogBuilder::new();
        builder.push_event("1", Event::new(""));
        assert!(matches!(builder.build(), Err(MiningError::Parse(_))));

        let mut builder = EventLogBuilder::new().require_timestamps(true);
        builder.push_event("1", Event::new("A"));
        assert!(matches!(builder.build(), Err(MiningError::Parse(_))));
    }

    #[test]
    fn test_filter_returns_new_log() {
        let log = EventLog::from_sequences(vec![vec!["A", "B"], vec!["A"], vec!["B"]]);
        let filtered = log.filter(|t| t.contains_activity("A"));

        assert_eq!(filtered.len(), 2);
        assert_eq!(log.len(), 3);
        assert_eq!(log.select(&[2, 0]).traces()[0].variant(), vec!["B"]);
    }

    #[test]
    fn test_chunks_zero_size() {
        let log = EventLog::from_sequences(vec![vec!["A"], vec!["B"]]);
        assert_eq!(log.chunks(0).count(), 2);
        assert_eq!(log.event_count(), 2);
    }
}
