//! Report records.

use crate::analytics::{Bottleneck, CycleTimeStats, ProcessAnalyzer, RankedVariant};
use serde::Serialize;

/// `{"variants": [...]}` wrapper around ranked variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct VariantsReport {
    /// Ranked variants, `Other` last when present.
    pub variants: Vec<RankedVariant>,
}

impl VariantsReport {
    /// Wrap a ranking.
    pub fn new(variants: Vec<RankedVariant>) -> Self {
        Self { variants }
    }
}

/// Overview of a log: the figures shown before any drill-down.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Number of traces.
    pub traces: usize,
    /// Number of events.
    pub events: usize,
    /// Sorted distinct activities.
    pub activities: Vec<String>,
    /// Mean cycle time in seconds.
    pub average_cycle_time: f64,
    /// Cycle time distribution.
    pub cycle_time: CycleTimeStats,
    /// Most frequent edges.
    pub bottlenecks: Vec<Bottleneck>,
    /// Most frequent variant.
    pub happy_path: Vec<String>,
    /// Share of traces on the happy path.
    pub happy_path_percentage: f64,
    /// Ranked variants.
    pub variants: Vec<RankedVariant>,
    /// `("Variant i", "A -> B")` pairs.
    pub variant_mapping: Vec<(String, String)>,
    /// Visible transitions of the discovered net.
    pub transitions: Vec<String>,
}

impl Summary {
    /// Collect the overview.
    ///
    /// A log the miner cannot handle (no events) still yields the metrics;
    /// only `transitions` is left empty.
    pub fn from_analyzer(analyzer: &ProcessAnalyzer) -> Self {
        let transitions = match analyzer.discover() {
            Ok(discovered) => discovered
                .net
                .labelled_transitions()
                .into_iter()
                .map(str::to_string)
                .collect(),
            Err(e) => {
                log::warn!("Summary without net transitions: {}", e);
                Vec::new()
            }
        };
        let cycle_time = analyzer.cycle_time_stats();
        Self {
            traces: analyzer.log().len(),
            events: analyzer.log().event_count(),
            activities: analyzer.activities().into_iter().collect(),
            average_cycle_time: cycle_time.mean,
            cycle_time,
            bottlenecks: analyzer.bottlenecks(),
            happy_path: analyzer.happy_path(),
            happy_path_percentage: analyzer.happy_path_percentage(),
            variants: analyzer.ranked_variants(),
            variant_mapping: analyzer.variant_mapping(),
            transitions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{rank_variants, variants};
    use crate::models::EventLog;

    fn create_test_log() -> EventLog {
        let mut sequences = vec![vec!["A", "B", "C"]; 5];
        sequences.extend(vec![vec!["A", "C"]; 2]);
        EventLog::from_sequences(sequences)
    }

    #[test]
    fn test_variants_report_json() {
        let report = VariantsReport::new(rank_variants(&variants(&create_test_log()), 1));
        let json = serde_json::to_value(&report).unwrap();

        let entries = json["variants"].as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0]["variant"], "A -> B -> C");
        assert_eq!(entries[0]["count"], 5);
        assert_eq!(entries[1]["variant"], "Other");
        assert!(entries[0].get("activities").is_none());
    }

    #[test]
    fn test_summary() {
        let summary = Summary::from_analyzer(&ProcessAnalyzer::new(create_test_log()));
        assert_eq!(summary.traces, 7);
        assert_eq!(summary.events, 19);
        assert_eq!(summary.activities, vec!["A", "B", "C"]);
        assert_eq!(summary.transitions, vec!["A", "B", "C"]);
        assert_eq!(summary.average_cycle_time, 0.0);
        assert_eq!(summary.variant_mapping[1].1, "A -> C");
    }

    #[test]
    fn test_summary_empty_log_is_zeroed() {
        let summary = Summary::from_analyzer(&ProcessAnalyzer::new(EventLog::default()));
        assert_eq!(summary.traces, 0);
        assert_eq!(summary.events, 0);
        assert!(summary.activities.is_empty());
        assert_eq!(summary.average_cycle_time, 0.0);
        assert!(summary.bottlenecks.is_empty());
        assert!(summary.happy_path.is_empty());
        assert_eq!(summary.happy_path_percentage, 0.0);
        assert!(summary.variants.is_empty());
        assert!(summary.transitions.is_empty());
    }

    #[test]
    fn test_summary_only_empty_traces() {
        let log = EventLog::from_sequences(vec![Vec::<&str>::new(); 3]);
        let summary = Summary::from_analyzer(&ProcessAnalyzer::new(log));
        assert_eq!(summary.traces, 3);
        assert_eq!(summary.events, 0);
        assert!(summary.transitions.is_empty());
        assert_eq!(summary.happy_path_percentage, 100.0);
    }
}
