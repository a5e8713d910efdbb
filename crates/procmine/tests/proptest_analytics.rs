//! Property-based tests for log analytics using proptest.

use proptest::prelude::*;

use procmine::analytics::{
    activities, average_cycle_time, happy_path_percentage, rank_variants, variants, OTHER_VARIANT,
};
use procmine::discovery::build_dfg;
use procmine::models::EventLog;

const ALPHABET: [&str; 5] = ["A", "B", "C", "D", "E"];

fn sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(ALPHABET.to_vec()), 0..max_len)
}

fn log_strategy() -> impl Strategy<Value = EventLog> {
    prop::collection::vec(sequence_strategy(8), 0..40).prop_map(EventLog::from_sequences)
}

// --- DFG properties ---

proptest! {
    #[test]
    fn dfg_total_matches_consecutive_pairs(log in log_strategy()) {
        let expected: u64 = log
            .iter()
            .filter(|trace| !trace.is_empty())
            .map(|trace| (trace.len() - 1) as u64)
            .sum();
        prop_assert_eq!(build_dfg(&log).total_frequency(), expected);
    }

    #[test]
    fn dfg_activities_are_log_activities(log in log_strategy()) {
        let dfg = build_dfg(&log);
        let all = activities(&log, 1000);
        for activity in dfg.activities() {
            prop_assert!(all.contains(&activity));
        }
    }
}

// --- Variant properties ---

proptest! {
    #[test]
    fn variant_map_partitions_log(log in log_strategy()) {
        let map = variants(&log);
        prop_assert_eq!(map.total_traces(), log.len());

        let mut indices = map.trace_indices();
        indices.sort_unstable();
        prop_assert_eq!(indices, (0..log.len()).collect::<Vec<_>>());

        for (key, traces) in map.iter() {
            for &idx in traces {
                prop_assert_eq!(&log.traces()[idx].variant(), key);
            }
        }
    }

    #[test]
    fn ranked_counts_sum_to_traces(log in log_strategy(), top_n in 0usize..6) {
        let ranked = rank_variants(&variants(&log), top_n);
        let total: usize = ranked.iter().map(|v| v.count).sum();
        prop_assert_eq!(total, log.len());
        prop_assert!(ranked.iter().filter(|v| !v.is_other()).count() <= top_n);
    }

    #[test]
    fn other_bucket_folds_the_tail(extra in 1usize..10) {
        // 10 + extra distinct variants with strictly decreasing counts
        let n = 10 + extra;
        let mut sequences = Vec::new();
        for i in 0..n {
            let name = format!("V{}", i);
            for _ in 0..(n - i) {
                sequences.push(vec![name.clone()]);
            }
        }
        let log = EventLog::from_sequences(sequences);

        let ranked = rank_variants(&variants(&log), 10);
        prop_assert_eq!(ranked.len(), 11);
        let other = &ranked[10];
        prop_assert_eq!(other.variant.as_str(), OTHER_VARIANT);
        let tail: usize = (10..n).map(|i| n - i).sum();
        prop_assert_eq!(other.count, tail);
    }
}

// --- Aggregation properties ---

proptest! {
    #[test]
    fn activities_independent_of_chunk_size(log in log_strategy()) {
        let whole = activities(&log, log.len().max(1));
        prop_assert_eq!(&activities(&log, 1), &whole);
        prop_assert_eq!(&activities(&log, 7), &whole);
    }

    #[test]
    fn identical_traces_are_all_happy(sequence in sequence_strategy(6), copies in 1usize..20) {
        let log = EventLog::from_sequences(vec![sequence; copies]);
        prop_assert!((happy_path_percentage(&log) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn untimed_logs_have_zero_cycle_time(log in log_strategy()) {
        prop_assert_eq!(average_cycle_time(&log), 0.0);
    }
}

#[test]
fn empty_log_has_zero_cycle_time() {
    assert_eq!(average_cycle_time(&EventLog::default()), 0.0);
}
