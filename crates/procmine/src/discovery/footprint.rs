//! Footprint relations between activities.
//!
//! Derives causality, parallelism and choice from observed direct
//! successions using a dense activity-by-activity matrix.

use crate::discovery::build_dfg;
use crate::models::{ActivityId, ActivityRegistry, Dfg, EventLog};

/// Ordering relation between two activities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    /// `a -> b`: `a` is directly followed by `b`, never the reverse.
    Causal,
    /// `b -> a`: the reverse of [`Relation::Causal`].
    ReverseCausal,
    /// `a || b`: both orders observed.
    Parallel,
    /// `a # b`: neither order observed.
    Choice,
}

impl Relation {
    /// Footprint symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Relation::Causal => "→",
            Relation::ReverseCausal => "←",
            Relation::Parallel => "‖",
            Relation::Choice => "#",
        }
    }
}

/// Footprint matrix of a log.
#[derive(Debug, Clone)]
pub struct Footprint {
    registry: ActivityRegistry,
    /// Row `a`, column `b` set when `a` is directly followed by `b`.
    follows: Vec<Vec<bool>>,
    start_activities: Vec<ActivityId>,
    end_activities: Vec<ActivityId>,
}

impl Footprint {
    /// Compute the footprint of a log.
    pub fn from_log(log: &EventLog) -> Self {
        Self::from_dfg(&build_dfg(log))
    }

    /// Compute the footprint from a DFG.
    ///
    /// Activity identifiers follow the order start activities, edge
    /// endpoints, end activities, each in first-observed order.
    pub fn from_dfg(dfg: &Dfg) -> Self {
        let mut registry = ActivityRegistry::new();
        for activity in dfg.start_activities().keys() {
            registry.get_or_create(activity);
        }
        for (source, target) in dfg.edge_table().keys() {
            registry.get_or_create(source);
            registry.get_or_create(target);
        }
        for activity in dfg.end_activities().keys() {
            registry.get_or_create(activity);
        }

        let n = registry.len();
        let mut follows = vec![vec![false; n]; n];
        for (source, target) in dfg.edge_table().keys() {
            if let (Some(s), Some(t)) = (registry.id_of(source), registry.id_of(target)) {
                follows[s as usize][t as usize] = true;
            }
        }

        let start_activities = dfg
            .start_activities()
            .keys()
            .filter_map(|a| registry.id_of(a))
            .collect();
        let end_activities = dfg
            .end_activities()
            .keys()
            .filter_map(|a| registry.id_of(a))
            .collect();

        Self {
            registry,
            follows,
            start_activities,
            end_activities,
        }
    }

    /// Activity registry backing the matrix.
    pub fn registry(&self) -> &ActivityRegistry {
        &self.registry
    }

    /// Number of activities.
    pub fn activity_count(&self) -> usize {
        self.registry.len()
    }

    /// Activities that start at least one trace.
    pub fn start_activities(&self) -> &[ActivityId] {
        &self.start_activities
    }

    /// Activities that end at least one trace.
    pub fn end_activities(&self) -> &[ActivityId] {
        &self.end_activities
    }

    /// Check whether `a` is ever directly followed by `b`.
    pub fn follows(&self, a: ActivityId, b: ActivityId) -> bool {
        self.follows
            .get(a as usize)
            .and_then(|row| row.get(b as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Relation between two activities.
    pub fn relation(&self, a: ActivityId, b: ActivityId) -> Relation {
        match (self.follows(a, b), self.follows(b, a)) {
            (true, false) => Relation::Causal,
            (false, true) => Relation::ReverseCausal,
            (true, true) => Relation::Parallel,
            (false, false) => Relation::Choice,
        }
    }

    /// Relation between two activities by name.
    pub fn relation_by_name(&self, a: &str, b: &str) -> Option<Relation> {
        Some(self.relation(self.registry.id_of(a)?, self.registry.id_of(b)?))
    }

    /// Check `a -> b`.
    pub fn is_causal(&self, a: ActivityId, b: ActivityId) -> bool {
        self.relation(a, b) == Relation::Causal
    }

    /// Check `a # b`.
    pub fn is_choice(&self, a: ActivityId, b: ActivityId) -> bool {
        self.relation(a, b) == Relation::Choice
    }

    /// Check `a || b`.
    pub fn is_parallel(&self, a: ActivityId, b: ActivityId) -> bool {
        self.relation(a, b) == Relation::Parallel
    }

    /// Check whether an activity directly follows itself.
    pub fn has_self_loop(&self, a: ActivityId) -> bool {
        self.follows(a, a)
    }
}
