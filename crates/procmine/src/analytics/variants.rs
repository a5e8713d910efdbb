//! Variant extraction, ranking and filtering.

use crate::models::{variant_name, EventLog, VariantMap};
use serde::Serialize;

/// Display name of the bucket collecting variants beyond the top N.
pub const OTHER_VARIANT: &str = "Other";

/// Group the traces of a log by activity sequence.
pub fn variants(log: &EventLog) -> VariantMap {
    let mut map = VariantMap::new();
    for (idx, trace) in log.iter().enumerate() {
        map.insert(trace.variant(), idx);
    }
    log::debug!("Found {} variants in {} traces", map.len(), log.len());
    map
}

/// Ranked variant entry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedVariant {
    /// `"A -> B -> C"`, or `"Other"` for the folded remainder.
    pub variant: String,
    /// Number of traces.
    pub count: usize,
    /// Share of all traces, 0-100.
    pub percentage: f64,
    /// Activity sequence; empty for the `Other` bucket.
    #[serde(skip)]
    pub activities: Vec<String>,
}

impl RankedVariant {
    /// Check if this is the synthetic `Other` bucket.
    pub fn is_other(&self) -> bool {
        self.activities.is_empty() && self.variant == OTHER_VARIANT
    }
}

/// Rank variants by trace count.
///
/// Returns the `top_n` most frequent variants; equal counts keep
/// first-encountered order. If any traces remain, an `Other` entry with
/// their combined count is appended.
pub fn rank_variants(variants: &VariantMap, top_n: usize) -> Vec<RankedVariant> {
    let total = variants.total_traces();
    if total == 0 {
        return Vec::new();
    }
    let percentage = |count: usize| count as f64 / total as f64 * 100.0;

    let mut sorted: Vec<_> = variants.iter().collect();
    sorted.sort_by_key(|(_, traces)| std::cmp::Reverse(traces.len()));

    let mut ranked: Vec<RankedVariant> = sorted
        .iter()
        .take(top_n)
        .map(|(key, traces)| RankedVariant {
            variant: variant_name(key.as_slice()),
            count: traces.len(),
            percentage: percentage(traces.len()),
            activities: (*key).clone(),
        })
        .collect();

    let other: usize = sorted.iter().skip(top_n).map(|(_, traces)| traces.len()).sum();
    if other > 0 {
        ranked.push(RankedVariant {
            variant: OTHER_VARIANT.to_string(),
            count: other,
            percentage: percentage(other),
            activities: Vec::new(),
        });
    }
    ranked
}

/// Keep the variants that contain (`include == true`) or lack
/// (`include == false`) an activity.
pub fn filter_variants_by_activity(
    variants: &VariantMap,
    activity: &str,
    include: bool,
) -> VariantMap {
    variants.retain_variants(|key| key.iter().any(|a| a == activity) == include)
}

/// Number the variants: `("Variant 1", "A -> B")`, in first-encountered order.
pub fn variant_mapping(variants: &VariantMap) -> Vec<(String, String)> {
    variants
        .keys()
        .enumerate()
        .map(|(i, key)| (format!("Variant {}", i + 1), variant_name(key.as_slice())))
        .collect()
}
