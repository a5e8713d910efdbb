//! Petri net structures for discovered process models.

use std::collections::BTreeMap;
use std::fmt;

/// Place identifier type.
pub type PlaceId = u32;

/// Transition identifier type.
pub type TransitionId = u32;

/// Passive node of a net; holds tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Place {
    /// Place identifier.
    pub id: PlaceId,
    /// Place name.
    pub name: String,
}

/// Active node of a net.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Transition identifier.
    pub id: TransitionId,
    /// Unique transition name.
    pub name: String,
    /// Activity label; `None` for silent (routing-only) transitions.
    pub label: Option<String>,
}

impl Transition {
    /// Check if this is a silent transition.
    pub fn is_silent(&self) -> bool {
        self.label.is_none()
    }
}

/// Directed arc. Arcs always connect a place and a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arc {
    /// Place feeding a transition.
    PlaceToTransition(PlaceId, TransitionId),
    /// Transition producing into a place.
    TransitionToPlace(TransitionId, PlaceId),
}

impl Arc {
    /// Place end of the arc.
    pub fn place(&self) -> PlaceId {
        match *self {
            Arc::PlaceToTransition(p, _) | Arc::TransitionToPlace(_, p) => p,
        }
    }

    /// Transition end of the arc.
    pub fn transition(&self) -> TransitionId {
        match *self {
            Arc::PlaceToTransition(_, t) | Arc::TransitionToPlace(t, _) => t,
        }
    }
}

/// Token assignment to places.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Marking(BTreeMap<PlaceId, u32>);

impl Marking {
    /// Create an empty marking.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marking with `tokens` in a single place.
    pub fn single(place: PlaceId, tokens: u32) -> Self {
        let mut marking = Self::new();
        marking.set(place, tokens);
        marking
    }

    /// Set the token count of a place. Zero removes the place.
    pub fn set(&mut self, place: PlaceId, tokens: u32) {
        if tokens == 0 {
            self.0.remove(&place);
        } else {
            self.0.insert(place, tokens);
        }
    }

    /// Token count of a place.
    pub fn tokens(&self, place: PlaceId) -> u32 {
        self.0.get(&place).copied().unwrap_or(0)
    }

    /// Check whether a place carries tokens.
    pub fn contains(&self, place: PlaceId) -> bool {
        self.0.contains_key(&place)
    }

    /// Marked places with their token counts.
    pub fn iter(&self) -> impl Iterator<Item = (PlaceId, u32)> + '_ {
        self.0.iter().map(|(&p, &t)| (p, t))
    }

    /// Number of marked places.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if no place is marked.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Petri net: places, transitions and arcs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PetriNet {
    /// Net name.
    pub name: String,
    places: Vec<Place>,
    transitions: Vec<Transition>,
    arcs: Vec<Arc>,
}

impl PetriNet {
    /// Create an empty net.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Add a place and return its ID.
    pub fn add_place(&mut self, name: impl Into<String>) -> PlaceId {
        let id = self.places.len() as PlaceId;
        self.places.push(Place {
            id,
            name: name.into(),
        });
        id
    }

    /// Add a transition and return its ID.
    pub fn add_transition(
        &mut self,
        name: impl Into<String>,
        label: Option<String>,
    ) -> TransitionId {
        let id = self.transitions.len() as TransitionId;
        self.transitions.push(Transition {
            id,
            name: name.into(),
            label,
        });
        id
    }

    /// Add an arc. Duplicate arcs are ignored.
    pub fn add_arc(&mut self, arc: Arc) {
        if !self.arcs.contains(&arc) {
            self.arcs.push(arc);
        }
    }

    /// All places.
    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// All transitions.
    pub fn transitions(&self) -> &[Transition] {
        &self.transitions
    }

    /// All arcs.
    pub fn arcs(&self) -> &[Arc] {
        &self.arcs
    }

    /// Get place by ID.
    pub fn place(&self, id: PlaceId) -> Option<&Place> {
        self.places.get(id as usize)
    }

    /// Get place by name.
    pub fn place_by_name(&self, name: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.name == name)
    }

    /// Get transition by ID.
    pub fn transition(&self, id: TransitionId) -> Option<&Transition> {
        self.transitions.get(id as usize)
    }

    /// Transitions carrying `label`.
    pub fn transitions_with_label<'a>(
        &'a self,
        label: &'a str,
    ) -> impl Iterator<Item = &'a Transition> + 'a {
        self.transitions
            .iter()
            .filter(move |t| t.label.as_deref() == Some(label))
    }

    /// Labels of all visible transitions in transition order.
    pub fn labelled_transitions(&self) -> Vec<&str> {
        self.transitions
            .iter()
            .filter_map(|t| t.label.as_deref())
            .collect()
    }

    /// Input places of a transition.
    pub fn preset(&self, transition: TransitionId) -> Vec<PlaceId> {
        self.arcs
            .iter()
            .filter_map(|arc| match *arc {
                Arc::PlaceToTransition(p, t) if t == transition => Some(p),
                _ => None,
            })
            .collect()
    }

    /// Output places of a transition.
    pub fn postset(&self, transition: TransitionId) -> Vec<PlaceId> {
        self.arcs
            .iter()
            .filter_map(|arc| match *arc {
                Arc::TransitionToPlace(t, p) if t == transition => Some(p),
                _ => None,
            })
            .collect()
    }

    /// Transitions producing into a place.
    pub fn producers(&self, place: PlaceId) -> Vec<TransitionId> {
        self.arcs
            .iter()
            .filter_map(|arc| match *arc {
                Arc::TransitionToPlace(t, p) if p == place => Some(t),
                _ => None,
            })
            .collect()
    }

    /// Transitions consuming from a place.
    pub fn consumers(&self, place: PlaceId) -> Vec<TransitionId> {
        self.arcs
            .iter()
            .filter_map(|arc| match *arc {
                Arc::PlaceToTransition(p, t) if p == place => Some(t),
                _ => None,
            })
            .collect()
    }

    /// Check that every transition has at least one input and one output arc.
    pub fn is_well_formed(&self) -> bool {
        self.transitions
            .iter()
            .all(|t| !self.preset(t.id).is_empty() && !self.postset(t.id).is_empty())
    }
}

impl fmt::Display for PetriNet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} places, {} transitions, {} arcs)",
            self.name,
            self.places.len(),
            self.transitions.len(),
            self.arcs.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain() -> PetriNet {
        let mut net = PetriNet::new("chain");
        let start = net.add_place("start");
        let end = net.add_place("end");
        let a = net.add_transition("A", Some("A".into()));
        net.add_arc(Arc::PlaceToTransition(start, a));
        net.add_arc(Arc::TransitionToPlace(a, end));
        net.add_arc(Arc::TransitionToPlace(a, end));
        net
    }

    #[test]
    fn test_net_structure() {
        let net = chain();
        assert_eq!(net.arcs().len(), 2);
        assert_eq!(net.preset(0), vec![0]);
        assert_eq!(net.postset(0), vec![1]);
        assert_eq!(net.producers(1), vec![0]);
        assert_eq!(net.consumers(0), vec![0]);
        assert!(net.is_well_formed());
        assert_eq!(net.labelled_transitions(), vec!["A"]);
    }

    #[test]
    fn test_silent_transition_not_labelled() {
        let mut net = chain();
        let tau = net.add_transition("tau_1", None);
        assert!(net.transition(tau).unwrap().is_silent());
        assert_eq!(net.labelled_transitions(), vec!["A"]);
        assert!(!net.is_well_formed());
    }

    #[test]
    fn test_marking() {
        let mut marking = Marking::single(3, 1);
        assert_eq!(marking.tokens(3), 1);
        assert!(marking.contains(3));
        marking.set(3, 0);
        assert!(marking.is_empty());
    }
}
