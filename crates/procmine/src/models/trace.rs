//! Process trace definitions.

use super::event::{find_attribute, Attribute, AttributeValue, Event, Timestamp};

/// Activity sequence shared by the traces of one variant.
pub type VariantKey = Vec<String>;

/// A process trace (case) containing a sequence of events.
///
/// Events keep the order they were given in; they are never re-sorted by
/// timestamp.
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    case_id: String,
    events: Vec<Event>,
    attributes: Vec<Attribute>,
}

impl Trace {
    /// Create a new trace.
    pub fn new(case_id: impl Into<String>, events: Vec<Event>) -> Self {
        Self {
            case_id: case_id.into(),
            events,
            attributes: Vec::new(),
        }
    }

    /// Attach trace-level attributes.
    pub fn with_attributes(mut self, attributes: Vec<Attribute>) -> Self {
        self.attributes = attributes;
        self
    }

    /// Case identifier.
    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    /// Events in execution order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Trace-level attributes.
    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    /// Get a trace-level attribute by key.
    pub fn attribute(&self, key: &str) -> Option<&AttributeValue> {
        find_attribute(&self.attributes, key)
    }

    /// Get trace length.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Check if trace is empty.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Activity names in execution order.
    pub fn activities(&self) -> impl Iterator<Item = &str> + '_ {
        self.events.iter().map(|e| e.activity())
    }

    /// Variant key of this trace.
    pub fn variant(&self) -> VariantKey {
        self.activities().map(str::to_string).collect()
    }

    /// Check whether the activity sequence equals `sequence`.
    pub fn has_sequence<S: AsRef<str>>(&self, sequence: &[S]) -> bool {
        self.events.len() == sequence.len()
            && self
                .activities()
                .zip(sequence)
                .all(|(a, b)| a == b.as_ref())
    }

    /// Check whether the trace contains an activity.
    pub fn contains_activity(&self, activity: &str) -> bool {
        self.activities().any(|a| a == activity)
    }

    /// Get edges (directly-follows pairs).
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.events
            .windows(2)
            .map(|w| (w[0].activity(), w[1].activity()))
    }

    /// First event timestamp.
    pub fn start_time(&self) -> Option<&Timestamp> {
        self.events.first().and_then(|e| e.timestamp())
    }

    /// Last event timestamp.
    pub fn end_time(&self) -> Option<&Timestamp> {
        self.events.last().and_then(|e| e.timestamp())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn trace(activities: &[&str]) -> Trace {
        Trace::new("c1", activities.iter().map(|a| Event::new(*a)).collect())
    }

    #[test]
    fn test_trace_edges() {
        let t = trace(&["A", "B", "C"]);
        let edges: Vec<_> = t.edges().collect();
        assert_eq!(edges, vec![("A", "B"), ("B", "C")]);

        assert_eq!(trace(&["A"]).edges().count(), 0);
        assert_eq!(trace(&[]).edges().count(), 0);
    }

    #[test]
    fn test_variant_and_sequence() {
        let t = trace(&["A", "B", "A"]);
        assert_eq!(t.variant(), vec!["A", "B", "A"]);
        assert!(t.has_sequence(&["A", "B", "A"]));
        assert!(!t.has_sequence(&["A", "B"]));
        assert!(t.contains_activity("B"));
        assert!(!t.contains_activity("C"));
    }
}
