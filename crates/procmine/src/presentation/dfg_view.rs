//! DFG and happy-path graphs.

use super::{EdgeColor, GraphData, GraphEdge, GraphNode, NodeColor};
use crate::config::LayoutConfig;
use crate::models::Dfg;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// Id of the synthetic start node, unless an activity already uses it.
pub const START_NODE: &str = "start";

/// Id of the synthetic end node, unless an activity already uses it.
pub const END_NODE: &str = "end";

const START_POSITION: (f64, f64) = (-200.0, 0.0);
const END_POSITION: (f64, f64) = (2000.0, 0.0);
const TERMINAL_NODE_SIZE: u32 = 30;

/// Grid position of the `index`-th node.
fn grid_position(index: usize, layout: &LayoutConfig) -> (f64, f64) {
    let columns = layout.wrap_columns.max(1);
    let col = index % columns;
    let row = index / columns;
    (col as f64 * layout.x_spacing, row as f64 * layout.y_spacing)
}

/// Activity nodes on a grid and one labelled edge per DFG edge.
///
/// Activities are placed in sorted order. Edge length is the distance
/// between the endpoints plus padding, capped at the configured maximum.
pub fn dfg_graph(dfg: &Dfg, layout: &LayoutConfig) -> GraphData {
    let mut positions: HashMap<String, (f64, f64)> = HashMap::new();
    let nodes: Vec<GraphNode> = dfg
        .activities()
        .into_iter()
        .enumerate()
        .map(|(i, activity)| {
            let (x, y) = grid_position(i, layout);
            positions.insert(activity.clone(), (x, y));
            GraphNode::labelled(activity).at(x, y)
        })
        .collect();

    let edges = dfg
        .edges()
        .map(|edge| {
            let (sx, sy) = positions.get(&edge.source).copied().unwrap_or_default();
            let (tx, ty) = positions.get(&edge.target).copied().unwrap_or_default();
            let distance = ((tx - sx).powi(2) + (ty - sy).powi(2)).sqrt();
            GraphEdge {
                label: Some(edge.frequency.to_string()),
                length: Some((distance + layout.edge_length_padding).min(layout.max_edge_length)),
                ..GraphEdge::new(edge.source, edge.target)
            }
        })
        .collect();

    GraphData { nodes, edges }
}

/// DFG graph pair: the happy path only, and everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DfgView {
    /// All nodes; only the edges along the happy path.
    pub initial_data: GraphData,
    /// All nodes and edges.
    pub all_data: GraphData,
}

fn terminal_node(id: &str, label: &str, color: &str, (x, y): (f64, f64)) -> GraphNode {
    GraphNode {
        label: label.to_string(),
        shape: Some("ellipse".to_string()),
        color: Some(NodeColor::Background {
            background: color.to_string(),
        }),
        size: Some(TERMINAL_NODE_SIZE),
        ..GraphNode::labelled(id).at(x, y)
    }
}

/// `base`, extended with underscores until no activity node has that id.
fn terminal_id(base: &str, activities: &BTreeSet<String>) -> String {
    let mut id = base.to_string();
    while activities.contains(&id) {
        id.push('_');
    }
    id
}

fn terminal_edge(from: &str, to: &str, color: &str) -> GraphEdge {
    GraphEdge {
        label: Some(String::new()),
        arrows: Some("to".to_string()),
        color: Some(EdgeColor::uniform(color)),
        ..GraphEdge::new(from, to)
    }
}

/// [`dfg_graph`] plus `start`/`end` nodes wired to the start and end
/// activities, and a reduced view holding only the happy-path edges.
///
/// The terminal node ids get a `_` suffix when an activity is named
/// `start` or `end`.
pub fn dfg_view(dfg: &Dfg, happy_path: &[String], layout: &LayoutConfig) -> DfgView {
    let activities = dfg.activities();
    let start_id = terminal_id(START_NODE, &activities);
    let end_id = terminal_id(END_NODE, &activities);

    let mut all = dfg_graph(dfg, layout);
    all.nodes
        .push(terminal_node(&start_id, "Start", "green", START_POSITION));
    all.nodes
        .push(terminal_node(&end_id, "End", "red", END_POSITION));
    for activity in dfg.start_activities().keys() {
        all.edges.push(terminal_edge(&start_id, activity, "green"));
    }
    for activity in dfg.end_activities().keys() {
        all.edges.push(terminal_edge(activity, &end_id, "red"));
    }

    let initial_edges = happy_path
        .windows(2)
        .filter_map(|pair| all.edge(&pair[0], &pair[1]).cloned())
        .collect();

    DfgView {
        initial_data: GraphData {
            nodes: all.nodes.clone(),
            edges: initial_edges,
        },
        all_data: all,
    }
}

/// Unpositioned chain graph of a happy path.
pub fn happy_path_graph(path: &[String]) -> GraphData {
    let mut nodes: Vec<GraphNode> = Vec::new();
    for activity in path {
        if !nodes.iter().any(|n| &n.id == activity) {
            nodes.push(GraphNode::labelled(activity.clone()));
        }
    }
    let edges = path
        .windows(2)
        .map(|pair| GraphEdge::new(pair[0].clone(), pair[1].clone()))
        .collect();
    GraphData { nodes, edges }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::discovery::build_dfg;
    use crate::models::EventLog;

    fn create_test_dfg() -> Dfg {
        let mut sequences = vec![vec!["A", "B", "C", "D"]; 5];
        sequences.extend(vec![vec!["A", "D"]; 2]);
        build_dfg(&EventLog::from_sequences(sequences))
    }

    #[test]
    fn test_grid_layout() {
        let graph = dfg_graph(&create_test_dfg(), &LayoutConfig::default());
        let positions: Vec<_> = graph
            .nodes
            .iter()
            .map(|n| (n.id.as_str(), n.x.unwrap(), n.y.unwrap()))
            .collect();
        assert_eq!(
            positions,
            vec![
                ("A", 0.0, 0.0),
                ("B", 150.0, 0.0),
                ("C", 300.0, 0.0),
                ("D", 0.0, 100.0),
            ]
        );
    }

    #[test]
    fn test_edge_length_and_label() {
        let graph = dfg_graph(&create_test_dfg(), &LayoutConfig::default());

        let ab = graph.edge("A", "B").unwrap();
        assert_eq!(ab.label.as_deref(), Some("5"));
        assert_eq!(ab.length, Some(200.0));

        // A(0,0) -> D(0,100): 100 + 50.
        let ad = graph.edge("A", "D").unwrap();
        assert_eq!(ad.label.as_deref(), Some("2"));
        assert_eq!(ad.length, Some(150.0));
    }

    #[test]
    fn test_dfg_view() {
        let path: Vec<String> = ["A", "B", "C", "D"].iter().map(|s| s.to_string()).collect();
        let view = dfg_view(&create_test_dfg(), &path, &LayoutConfig::default());

        assert_eq!(view.all_data.nodes.len(), 6);
        let start = view.all_data.node(START_NODE).unwrap();
        assert_eq!((start.x, start.y), (Some(-200.0), Some(0.0)));
        assert!(view.all_data.edge(START_NODE, "A").is_some());
        assert!(view.all_data.edge("D", END_NODE).is_some());
        assert_eq!(view.all_data.edges.len(), 6);

        let initial: Vec<_> = view
            .initial_data
            .edges
            .iter()
            .map(|e| (e.from.as_str(), e.to.as_str()))
            .collect();
        assert_eq!(initial, vec![("A", "B"), ("B", "C"), ("C", "D")]);
        assert_eq!(view.initial_data.nodes, view.all_data.nodes);
    }

    #[test]
    fn test_terminal_ids_avoid_activity_names() {
        let dfg = build_dfg(&EventLog::from_sequences(vec![vec!["start", "work", "end"]; 2]));
        let view = dfg_view(&dfg, &[], &LayoutConfig::default());

        let mut ids: Vec<&str> = view.all_data.nodes.iter().map(|n| n.id.as_str()).collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);

        assert_eq!(view.all_data.node("start_").unwrap().label, "Start");
        assert_eq!(view.all_data.node("start").unwrap().label, "start");
        assert!(view.all_data.edge("start_", "start").is_some());
        assert!(view.all_data.edge("end", "end_").is_some());
        assert!(view.initial_data.edges.is_empty());
    }

    #[test]
    fn test_happy_path_graph() {
        let path: Vec<String> = ["A", "B", "A"].iter().map(|s| s.to_string()).collect();
        let graph = happy_path_graph(&path);
        assert_eq!(graph.nodes.len(), 2);
        assert_eq!(graph.edges.len(), 2);
        assert!(happy_path_graph(&[]).nodes.is_empty());
    }
}
