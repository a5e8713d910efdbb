//! Alpha algorithm.
//!
//! Discovers a Petri net from the footprint of a log. Each maximal pair
//! `(A, B)` of activity sets, where every `a` in `A` causally precedes every
//! `b` in `B` and both sets are internally unrelated, becomes a place.
//!
//! Loops of length one or two and non-free-choice constructs are not
//! rediscovered correctly; self-looping activities never take part in a
//! pair.

use super::footprint::Footprint;
use crate::discovery::build_dfg;
use crate::error::{MiningError, Result};
use crate::models::{ActivityId, Arc, Dfg, EventLog, Marking, PetriNet, PlaceId, TransitionId};
use std::collections::BTreeSet;

/// Source place name.
pub const SOURCE_PLACE: &str = "start";

/// Sink place name.
pub const SINK_PLACE: &str = "end";

type ActivitySet = BTreeSet<ActivityId>;

/// Discovered net together with its markings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveredNet {
    /// The net.
    pub net: PetriNet,
    /// One token on the source place.
    pub initial_marking: Marking,
    /// One token on the sink place.
    pub final_marking: Marking,
}

/// Alpha miner.
#[derive(Debug, Clone)]
pub struct AlphaMiner {
    net_name: String,
}

impl Default for AlphaMiner {
    fn default() -> Self {
        Self {
            net_name: "alpha".to_string(),
        }
    }
}

impl AlphaMiner {
    /// Create a miner with the default net name.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the name given to discovered nets.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.net_name = name.into();
        self
    }

    /// Discover a net from a log.
    pub fn discover(&self, log: &EventLog) -> Result<DiscoveredNet> {
        if log.is_empty() {
            return Err(MiningError::Discovery("event log has no traces".into()));
        }
        self.discover_from_dfg(&build_dfg(log))
    }

    /// Discover a net from a prebuilt DFG.
    pub fn discover_from_dfg(&self, dfg: &Dfg) -> Result<DiscoveredNet> {
        if dfg.start_activities().is_empty() {
            return Err(MiningError::Discovery("event log contains no events".into()));
        }

        let footprint = Footprint::from_dfg(dfg);
        let pairs = maximal_pairs(&footprint);
        let registry = footprint.registry();

        let mut net = PetriNet::new(self.net_name.clone());
        let source = net.add_place(SOURCE_PLACE);

        // Transition ids coincide with activity ids.
        let transitions: Vec<TransitionId> = registry
            .names()
            .iter()
            .map(|name| net.add_transition(name.clone(), Some(name.clone())))
            .collect();

        for (inputs, outputs) in &pairs {
            let place = net.add_place(pair_name(&footprint, inputs, outputs));
            for &a in inputs {
                net.add_arc(Arc::TransitionToPlace(transitions[a as usize], place));
            }
            for &b in outputs {
                net.add_arc(Arc::PlaceToTransition(place, transitions[b as usize]));
            }
        }

        let sink: PlaceId = net.add_place(SINK_PLACE);
        for &a in footprint.start_activities() {
            net.add_arc(Arc::PlaceToTransition(source, transitions[a as usize]));
        }
        for &a in footprint.end_activities() {
            net.add_arc(Arc::TransitionToPlace(transitions[a as usize], sink));
        }

        log::debug!(
            "Alpha miner: {} activities, {} maximal pairs -> {}",
            footprint.activity_count(),
            pairs.len(),
            net
        );

        Ok(DiscoveredNet {
            net,
            initial_marking: Marking::single(source, 1),
            final_marking: Marking::single(sink, 1),
        })
    }
}

/// Discover a net from a log with the default miner.
pub fn discover(log: &EventLog) -> Result<DiscoveredNet> {
    AlphaMiner::new().discover(log)
}

fn is_unrelated_to_all(footprint: &Footprint, set: &ActivitySet, x: ActivityId) -> bool {
    set.iter().all(|&y| footprint.is_choice(y, x))
}

/// Enumerate all valid pairs by growing singleton pairs, then keep the
/// maximal ones.
fn maximal_pairs(footprint: &Footprint) -> Vec<(ActivitySet, ActivitySet)> {
    let n = footprint.activity_count() as ActivityId;
    let candidates: Vec<ActivityId> = (0..n).filter(|&a| footprint.is_choice(a, a)).collect();

    let mut queue: Vec<(ActivitySet, ActivitySet)> = Vec::new();
    for &a in &candidates {
        for &b in &candidates {
            if footprint.is_causal(a, b) {
                queue.push((BTreeSet::from([a]), BTreeSet::from([b])));
            }
        }
    }

    let mut valid: BTreeSet<(ActivitySet, ActivitySet)> = BTreeSet::new();
    while let Some(pair) = queue.pop() {
        if valid.contains(&pair) {
            continue;
        }
        let (inputs, outputs) = &pair;
        for &x in &candidates {
            if !inputs.contains(&x)
                && is_unrelated_to_all(footprint, inputs, x)
                && outputs.iter().all(|&b| footprint.is_causal(x, b))
            {
                let mut grown = inputs.clone();
                grown.insert(x);
                let next = (grown, outputs.clone());
                if !valid.contains(&next) {
                    queue.push(next);
                }
            }
            if !outputs.contains(&x)
                && is_unrelated_to_all(footprint, outputs, x)
                && inputs.iter().all(|&a| footprint.is_causal(a, x))
            {
                let mut grown = outputs.clone();
                grown.insert(x);
                let next = (inputs.clone(), grown);
                if !valid.contains(&next) {
                    queue.push(next);
                }
            }
        }
        valid.insert(pair);
    }

    valid
        .iter()
        .filter(|(a, b)| {
            !valid.iter().any(|(c, d)| {
                (c.len() + d.len() > a.len() + b.len()) && a.is_subset(c) && b.is_subset(d)
            })
        })
        .cloned()
        .collect()
}

fn pair_name(footprint: &Footprint, inputs: &ActivitySet, outputs: &ActivitySet) -> String {
    let names = |set: &ActivitySet| {
        set.iter()
            .filter_map(|&id| footprint.registry().name(id))
            .collect::<Vec<_>>()
            .join(",")
    };
    format!("({{{}}},{{{}}})", names(inputs), names(outputs))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place_names(discovered: &DiscoveredNet) -> Vec<&str> {
        discovered
            .net
            .places()
            .iter()
            .map(|p| p.name.as_str())
            .collect()
    }

    #[test]
    fn test_sequence_is_a_chain() {
        let log = EventLog::from_sequences(vec![vec!["A", "B", "C", "D"]; 3]);
        let discovered = discover(&log).unwrap();
        let net = &discovered.net;

        assert_eq!(net.transitions().len(), 4);
        assert_eq!(net.places().len(), 5);
        assert_eq!(
            place_names(&discovered),
            vec!["start", "({A},{B})", "({B},{C})", "({C},{D})", "end"]
        );
        assert!(net.is_well_formed());

        for place in net.places() {
            assert!(net.producers(place.id).len() <= 1);
            assert!(net.consumers(place.id).len() <= 1);
        }

        let start = net.place_by_name("start").unwrap().id;
        let end = net.place_by_name("end").unwrap().id;
        assert_eq!(discovered.initial_marking, Marking::single(start, 1));
        assert_eq!(discovered.final_marking, Marking::single(end, 1));
    }

    #[test]
    fn test_choice_merges_into_one_place() {
        let log = EventLog::from_sequences(vec![vec!["A", "B", "D"], vec!["A", "C", "D"]]);
        let discovered = discover(&log).unwrap();

        assert_eq!(
            place_names(&discovered),
            vec!["start", "({A},{B,C})", "({B,C},{D})", "end"]
        );
    }

    #[test]
    fn test_parallel_split() {
        let log = EventLog::from_sequences(vec![
            vec!["A", "B", "C", "D"],
            vec!["A", "C", "B", "D"],
        ]);
        let discovered = discover(&log).unwrap();
        let net = &discovered.net;

        // A || split: two places after A, two before D.
        assert_eq!(net.places().len(), 6);
        let a = net.transitions_with_label("A").next().unwrap().id;
        let d = net.transitions_with_label("D").next().unwrap().id;
        assert_eq!(net.postset(a).len(), 2);
        assert_eq!(net.preset(d).len(), 2);
    }

    #[test]
    fn test_self_loop_excluded_from_pairs() {
        let log = EventLog::from_sequences(vec![vec!["A", "B", "B", "C"], vec!["A", "B", "C"]]);
        let discovered = discover(&log).unwrap();
        let net = &discovered.net;

        // B loops on itself and A never directly precedes C: no pair places.
        assert_eq!(net.transitions().len(), 3);
        assert_eq!(place_names(&discovered), vec!["start", "end"]);
        let b = net.transitions_with_label("B").next().unwrap().id;
        assert!(net.preset(b).is_empty());
        assert!(!net.is_well_formed());
    }

    #[test]
    fn test_empty_log_rejected() {
        assert!(matches!(
            discover(&EventLog::default()),
            Err(MiningError::Discovery(_))
        ));
        let only_empty = EventLog::from_sequences(vec![Vec::<&str>::new()]);
        assert!(matches!(discover(&only_empty), Err(MiningError::Discovery(_))));
    }

    #[test]
    fn test_single_activity() {
        let log = EventLog::from_sequences(vec![vec!["A"]]);
        let discovered = discover(&log).unwrap();
        assert_eq!(discovered.net.transitions().len(), 1);
        assert_eq!(place_names(&discovered), vec!["start", "end"]);
        assert!(discovered.net.is_well_formed());
    }

    #[test]
    fn test_named_miner() {
        let log = EventLog::from_sequences(vec![vec!["A", "B"]]);
        let discovered = AlphaMiner::new().with_name("orders").discover(&log).unwrap();
        assert_eq!(discovered.net.name, "orders");
    }
}
