//! Log filters.
//!
//! Every filter is pure: it returns a new log and leaves its input intact.

use crate::discovery::build_dfg;
use crate::models::{variant_name, Dfg, EventLog, Trace, VariantMap};

/// Separator between the original case id and the sub-case number.
pub const SUBCASE_SEPARATOR: &str = "##";

/// Traces belonging to any variant of `variants`.
///
/// `variants` must have been computed from `log` (or filtered from such a
/// map), since it refers to traces by position.
pub fn filter_by_variants(log: &EventLog, variants: &VariantMap) -> EventLog {
    log.select(&variants.trace_indices())
}

/// DFG of the traces following exactly `variant`.
///
/// Empty for a variant that does not occur.
pub fn dfg_for_variant<S: AsRef<str>>(log: &EventLog, variant: &[S]) -> Dfg {
    let filtered = log.filter(|trace| trace.has_sequence(variant));
    if filtered.is_empty() {
        log::warn!("Variant not found in log; returning an empty DFG");
    }
    build_dfg(&filtered)
}

/// [`dfg_for_variant`] with the variant given as `"A -> B -> C"`.
///
/// Matches against the joined display name, so activities whose names
/// contain the separator still resolve.
pub fn dfg_for_variant_name(log: &EventLog, name: &str) -> Dfg {
    let filtered = log.filter(|trace| variant_name(trace.variant().as_slice()) == name);
    if filtered.is_empty() {
        log::warn!("Variant '{}' not found in log; returning an empty DFG", name);
    }
    build_dfg(&filtered)
}

/// Traces in which `activity` occurs at least twice.
pub fn filter_rework(log: &EventLog, activity: &str) -> EventLog {
    log.filter(|trace| trace.activities().filter(|&a| a == activity).take(2).count() == 2)
}

fn subtraces_between(trace: &Trace, from: &str, to: &str) -> Vec<Trace> {
    let mut subtraces = Vec::new();
    let mut current: Option<(String, Vec<_>)> = None;
    let mut counter = 0usize;

    for event in trace.events() {
        if let Some((_, events)) = current.as_mut() {
            events.push(event.clone());
            if event.activity() == to {
                if let Some((case_id, events)) = current.take() {
                    let attributes = trace.attributes().to_vec();
                    subtraces.push(Trace::new(case_id, events).with_attributes(attributes));
                }
            }
        } else if event.activity() == from {
            let case_id = format!("{}{}{}", trace.case_id(), SUBCASE_SEPARATOR, counter);
            counter += 1;
            current = Some((case_id, vec![event.clone()]));
        }
    }
    subtraces
}

/// Sub-traces running from an occurrence of `from` to the next `to`.
///
/// Both endpoints are included. After a sub-trace closes, the next `from`
/// opens a new one; a `from` without a later `to` yields nothing. Sub-traces
/// get case ids `"<case>##<n>"`, numbered from 0 within each trace.
pub fn filter_between(log: &EventLog, from: &str, to: &str) -> EventLog {
    let traces: Vec<Trace> = log
        .iter()
        .flat_map(|trace| subtraces_between(trace, from, to))
        .collect();
    log::debug!("filter_between({}, {}): {} sub-traces", from, to, traces.len());
    EventLog::new(traces).with_attributes(log.attributes().to_vec())
}

/// Traces of the variants that ranking beyond `top_n` folds into `Other`.
pub fn other_variant_traces(log: &EventLog, variants: &VariantMap, top_n: usize) -> EventLog {
    let mut sorted: Vec<_> = variants.iter().collect();
    sorted.sort_by_key(|(_, traces)| std::cmp::Reverse(traces.len()));

    let mut indices: Vec<usize> = sorted
        .into_iter()
        .skip(top_n)
        .flat_map(|(_, traces)| traces.iter().copied())
        .collect();
    indices.sort_unstable();
    log.select(&indices)
}
