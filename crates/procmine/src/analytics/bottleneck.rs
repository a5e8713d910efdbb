//! Bottleneck ranking.
//!
//! A bottleneck here is a directly-follows edge ranked by its share of all
//! observed successions.

use crate::discovery::build_dfg;
use crate::models::{Dfg, EventLog};
use serde::Serialize;

/// Edge with its relative frequency.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bottleneck {
    /// Source activity.
    pub source: String,
    /// Target activity.
    pub target: String,
    /// Absolute edge frequency.
    pub frequency: u64,
    /// `frequency / total edge frequency`, in `(0, 1]`.
    pub score: f64,
}

/// Top `k` edges of a log by relative frequency.
pub fn detect_bottlenecks(log: &EventLog, k: usize) -> Vec<Bottleneck> {
    rank_edges(&build_dfg(log), k)
}

/// Top `k` edges of a DFG by relative frequency.
///
/// Equal frequencies keep first-observed order. Empty for an empty DFG.
pub fn rank_edges(dfg: &Dfg, k: usize) -> Vec<Bottleneck> {
    let total = dfg.total_frequency();
    if total == 0 {
        return Vec::new();
    }
    dfg.edge_table()
        .sorted_desc()
        .into_iter()
        .take(k)
        .map(|((source, target), frequency)| Bottleneck {
            source: source.clone(),
            target: target.clone(),
            frequency,
            score: frequency as f64 / total as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bottleneck_ranking() {
        let mut sequences = vec![vec!["A", "B", "C"]; 5];
        sequences.extend(vec![vec!["A", "C"]; 2]);
        let top = detect_bottlenecks(&EventLog::from_sequences(sequences), 5);

        assert_eq!(top.len(), 3);
        // (A,B) and (B,C) tie; first observed wins.
        assert_eq!((top[0].source.as_str(), top[0].target.as_str()), ("A", "B"));
        assert_eq!((top[1].source.as_str(), top[1].target.as_str()), ("B", "C"));
        assert!((top[0].score - 5.0 / 12.0).abs() < 1e-9);
        assert_eq!(top[2].frequency, 2);

        let total: f64 = top.iter().map(|b| b.score).sum();
        assert!((total - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_top_k_truncates() {
        let log = EventLog::from_sequences(vec![vec!["A", "B", "C", "D", "E", "F", "G"]]);
        assert_eq!(detect_bottlenecks(&log, 5).len(), 5);
        assert!(detect_bottlenecks(&log, 0).is_empty());
    }

    #[test]
    fn test_no_edges() {
        let log = EventLog::from_sequences(vec![vec!["A"]]);
        assert!(detect_bottlenecks(&log, 5).is_empty());
    }
}
