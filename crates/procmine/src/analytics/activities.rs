//! Activity aggregation.
//!
//! Aggregates are computed over bounded batches of traces and combined
//! with associative merges, so the batch size never changes a result.

use crate::models::{EventLog, FrequencyTable, Trace};
use std::collections::{BTreeMap, BTreeSet, HashSet};

/// Distinct activity names of a log, sorted.
///
/// A `chunk_size` of 0 is treated as 1.
pub fn activities(log: &EventLog, chunk_size: usize) -> BTreeSet<String> {
    log.chunks(chunk_size)
        .map(|chunk| {
            chunk
                .iter()
                .flat_map(|trace| trace.activities())
                .map(str::to_string)
                .collect::<BTreeSet<_>>()
        })
        .fold(BTreeSet::new(), |mut acc, batch| {
            acc.extend(batch);
            acc
        })
}

fn batch_case_counts(traces: &[Trace]) -> FrequencyTable<String> {
    let mut counts = FrequencyTable::new();
    for trace in traces {
        let mut seen = HashSet::new();
        for activity in trace.activities() {
            if seen.insert(activity) {
                counts.increment(activity.to_string());
            }
        }
    }
    counts
}

/// Number of traces containing each activity, sorted by activity name.
///
/// An activity repeated within one trace counts once for that trace.
pub fn activity_case_counts(log: &EventLog, chunk_size: usize) -> BTreeMap<String, usize> {
    let mut totals: FrequencyTable<String> = FrequencyTable::new();
    for chunk in log.chunks(chunk_size) {
        totals.merge(&batch_case_counts(chunk));
    }
    log::debug!("Counted cases for {} activities", totals.len());
    totals
        .iter()
        .map(|(activity, count)| (activity.clone(), count as usize))
        .collect()
}

/// Number of traces containing `activity`.
pub fn case_count(log: &EventLog, activity: &str) -> usize {
    log.iter().filter(|t| t.contains_activity(activity)).count()
}
