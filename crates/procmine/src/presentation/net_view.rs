//! Petri net graph.

use super::color::{PLACE_BASE_COLOR, TRANSITION_BASE_COLOR};
use super::{Font, GraphData, GraphEdge, GraphNode, NodeColor, Shadow};
use crate::config::LayoutConfig;
use crate::discovery::DiscoveredNet;
use crate::models::Arc;

const TINT: f64 = 0.2;
const PLACE_SIZE: u32 = 15;
const TRANSITION_SIZE: u32 = 25;
const BORDER_WIDTH: u32 = 2;

/// Id prefix of place nodes.
pub const PLACE_ID_PREFIX: &str = "p:";
/// Id prefix of transition nodes.
pub const TRANSITION_ID_PREFIX: &str = "t:";

fn place_id(name: &str) -> String {
    format!("{}{}", PLACE_ID_PREFIX, name)
}

fn transition_id(name: &str) -> String {
    format!("{}{}", TRANSITION_ID_PREFIX, name)
}

fn shadow() -> Option<Shadow> {
    Some(Shadow {
        color: "#000".to_string(),
        size: 5,
    })
}

/// Nodes for places and transitions, edges for arcs.
///
/// Places come first, then transitions, laid out together on one grid.
/// Node ids carry a `p:` or `t:` prefix so a place and a transition with
/// the same name stay distinct.
/// Only marked places carry a label; places in the initial marking also
/// show their token count. Silent transitions are hidden.
pub fn net_graph(discovered: &DiscoveredNet, layout: &LayoutConfig) -> GraphData {
    let net = &discovered.net;
    let columns = layout.net_wrap_columns.max(1);
    let position = |index: usize| {
        (
            (index % columns) as f64 * layout.net_spacing,
            (index / columns) as f64 * layout.net_spacing,
        )
    };

    let mut nodes = Vec::with_capacity(net.places().len() + net.transitions().len());
    for (idx, place) in net.places().iter().enumerate() {
        let initial_tokens = discovered.initial_marking.tokens(place.id);
        let mut label = if initial_tokens > 0 || discovered.final_marking.contains(place.id) {
            place.name.clone()
        } else {
            String::new()
        };
        if initial_tokens > 0 {
            label.push_str(&format!("\n{} token(s)", initial_tokens));
        }

        let (x, y) = position(idx);
        nodes.push(GraphNode {
            id: place_id(&place.name),
            label,
            shape: Some("circle".to_string()),
            color: Some(NodeColor::Plain(PLACE_BASE_COLOR.tint(TINT).to_hex())),
            size: Some(PLACE_SIZE),
            shadow: shadow(),
            border_width: Some(BORDER_WIDTH),
            ..GraphNode::default().at(x, y)
        });
    }

    let offset = net.places().len();
    for (idx, transition) in net.transitions().iter().enumerate() {
        let (x, y) = position(idx + offset);
        let mut node = GraphNode {
            id: transition_id(&transition.name),
            label: transition.label.clone().unwrap_or_default(),
            shape: Some("box".to_string()),
            color: Some(NodeColor::Plain(TRANSITION_BASE_COLOR.tint(TINT).to_hex())),
            size: Some(TRANSITION_SIZE),
            shadow: shadow(),
            border_width: Some(BORDER_WIDTH),
            ..GraphNode::default().at(x, y)
        };
        if transition.is_silent() {
            node.hidden = Some(true);
        } else {
            node.font = Some(Font {
                color: "#FFFFFF".to_string(),
            });
        }
        nodes.push(node);
    }

    let place_name = |id| net.place(id).map(|p| place_id(&p.name)).unwrap_or_default();
    let transition_name = |id| {
        net.transition(id)
            .map(|t| transition_id(&t.name))
            .unwrap_or_default()
    };
    let edges = net
        .arcs()
        .iter()
        .map(|arc| match *arc {
            Arc::PlaceToTransition(p, t) => GraphEdge::new(place_name(p), transition_name(t)),
            Arc::TransitionToPlace(t, p) => GraphEdge::new(transition_name(t), place_name(p)),
        })
        .collect();

    GraphData { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::discover;
    use crate::models::EventLog;

    fn create_test_graph() -> GraphData {
        let log = EventLog::from_sequences(vec![vec!["A", "B"]; 2]);
        net_graph(&discover(&log).unwrap(), &LayoutConfig::default())
    }

    #[test]
    fn test_place_nodes() {
        let graph = create_test_graph();

        let start = graph.node("p:start").unwrap();
        assert_eq!(start.label, "start\n1 token(s)");
        assert_eq!(start.shape.as_deref(), Some("circle"));
        assert_eq!(start.color, Some(NodeColor::Plain("#FFB700".into())));
        assert_eq!((start.x, start.y), (Some(0.0), Some(0.0)));

        assert_eq!(graph.node("p:({A},{B})").unwrap().label, "");
        assert_eq!(graph.node("p:end").unwrap().label, "end");
    }

    #[test]
    fn test_transition_nodes() {
        let graph = create_test_graph();

        // Three places precede the transitions on the grid.
        let a = graph.node("t:A").unwrap();
        assert_eq!(a.shape.as_deref(), Some("box"));
        assert_eq!(a.label, "A");
        assert_eq!((a.x, a.y), (Some(450.0), Some(0.0)));
        assert!(a.hidden.is_none());
        assert_eq!(a.font.as_ref().map(|f| f.color.as_str()), Some("#FFFFFF"));
    }

    #[test]
    fn test_silent_transition_hidden() {
        let log = EventLog::from_sequences(vec![vec!["A", "B"]]);
        let mut discovered = discover(&log).unwrap();
        discovered.net.add_transition("tau_0", None);
        let graph = net_graph(&discovered, &LayoutConfig::default());

        let tau = graph.node("t:tau_0").unwrap();
        assert_eq!(tau.hidden, Some(true));
        assert_eq!(tau.label, "");
    }

    #[test]
    fn test_arc_edges() {
        let graph = create_test_graph();
        assert_eq!(graph.edges.len(), 4);
        assert!(graph.edge("p:start", "t:A").is_some());
        assert!(graph.edge("t:A", "p:({A},{B})").is_some());
        assert!(graph.edge("p:({A},{B})", "t:B").is_some());
        assert!(graph.edge("t:B", "p:end").is_some());
    }

    #[test]
    fn test_activities_named_like_places() {
        let log = EventLog::from_sequences(vec![vec!["start", "work", "end"]; 2]);
        let graph = net_graph(&discover(&log).unwrap(), &LayoutConfig::default());

        let mut ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);

        assert_eq!(graph.node("p:start").unwrap().label, "start\n1 token(s)");
        assert_eq!(graph.node("t:start").unwrap().label, "start");
        assert!(graph.edge("p:start", "t:start").is_some());
        assert!(graph.edge("t:end", "p:end").is_some());
    }

    #[test]
    fn test_grid_wraps() {
        let log = EventLog::from_sequences(vec![vec!["A", "B", "C", "D", "E", "F"]]);
        let graph = net_graph(&discover(&log).unwrap(), &LayoutConfig::default());
        // 7 places + 6 transitions; the 11th node starts the second row.
        let eleventh = &graph.nodes[10];
        assert_eq!((eleventh.x, eleventh.y), (Some(0.0), Some(150.0)));
    }
}
