//! Transition queries.
//!
//! [`transition_context`] looks at the discovered net, [`transition_info`]
//! at the raw log.

use crate::error::{MiningError, Result};
use crate::models::{EventLog, FrequencyTable, PetriNet, TransitionId};
use serde::Serialize;

/// Labelled neighbours of a net transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransitionContext {
    /// The queried label.
    #[serde(rename = "selected_transition")]
    pub selected: String,
    /// Labels of transitions producing into the input places.
    #[serde(rename = "incoming_transitions")]
    pub incoming: Vec<String>,
    /// Labels of transitions consuming from the output places.
    #[serde(rename = "outgoing_transitions")]
    pub outgoing: Vec<String>,
}

fn push_labels(
    net: &PetriNet,
    selected: TransitionId,
    ids: Vec<TransitionId>,
    into: &mut Vec<String>,
) {
    for id in ids {
        if id == selected {
            continue;
        }
        if let Some(label) = net.transition(id).and_then(|t| t.label.as_deref()) {
            if !into.iter().any(|l| l == label) {
                into.push(label.to_string());
            }
        }
    }
}

/// Labelled transitions adjacent to the transition labelled `label`.
///
/// Neighbours are reached through one place. Silent transitions and the
/// selected transition itself are left out; duplicates are removed keeping
/// first-seen order. Fails with [`MiningError::NotFound`] if no transition
/// carries the label.
pub fn transition_context(net: &PetriNet, label: &str) -> Result<TransitionContext> {
    let selected = net
        .transitions_with_label(label)
        .next()
        .ok_or_else(|| MiningError::NotFound(format!("transition '{}'", label)))?
        .id;

    let mut incoming = Vec::new();
    for place in net.preset(selected) {
        push_labels(net, selected, net.producers(place), &mut incoming);
    }
    let mut outgoing = Vec::new();
    for place in net.postset(selected) {
        push_labels(net, selected, net.consumers(place), &mut outgoing);
    }

    Ok(TransitionContext {
        selected: label.to_string(),
        incoming,
        outgoing,
    })
}

/// A neighbouring activity with its share of all traces.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransitionShare {
    /// Activity name; empty when there is none.
    pub transition: String,
    /// Occurrences relative to the number of traces, 0-100.
    pub percentage: f64,
}

/// Log statistics for one activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TransitionInfo {
    /// Share of traces containing the activity, 0-100.
    pub percentage_cases: f64,
    /// Most frequent direct predecessor.
    pub most_common_incoming: TransitionShare,
    /// Most frequent direct successor.
    pub most_common_outgoing: TransitionShare,
    /// All observed direct predecessors, first-seen order.
    pub incoming_transitions: Vec<String>,
    /// All observed direct successors, first-seen order.
    pub outgoing_transitions: Vec<String>,
}

/// Predecessor and successor statistics of `activity`.
///
/// Every occurrence counts, so an activity repeated in a trace contributes
/// each of its neighbours. Percentages are relative to the total number of
/// traces. An absent activity or an empty log yields zeros and empty lists.
pub fn transition_info(log: &EventLog, activity: &str) -> TransitionInfo {
    let total = log.len();
    if total == 0 {
        return TransitionInfo::default();
    }

    let mut cases = 0usize;
    let mut incoming: FrequencyTable<String> = FrequencyTable::new();
    let mut outgoing: FrequencyTable<String> = FrequencyTable::new();

    for trace in log {
        let events = trace.events();
        let mut found = false;
        for (i, event) in events.iter().enumerate() {
            if event.activity() != activity {
                continue;
            }
            found = true;
            if i > 0 {
                incoming.increment(events[i - 1].activity().to_string());
            }
            if let Some(next) = events.get(i + 1) {
                outgoing.increment(next.activity().to_string());
            }
        }
        if found {
            cases += 1;
        }
    }

    let share = |table: &FrequencyTable<String>| {
        table
            .most_common()
            .map(|(name, count)| TransitionShare {
                transition: name.clone(),
                percentage: count as f64 / total as f64 * 100.0,
            })
            .unwrap_or_default()
    };

    TransitionInfo {
        percentage_cases: cases as f64 / total as f64 * 100.0,
        most_common_incoming: share(&incoming),
        most_common_outgoing: share(&outgoing),
        incoming_transitions: incoming.keys().cloned().collect(),
        outgoing_transitions: outgoing.keys().cloned().collect(),
    }
}
