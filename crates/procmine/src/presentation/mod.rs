//! Presentation adapter.
//!
//! Pure mappings from analysis results to serializable node/edge records
//! and tables. Nothing here computes metrics; every function is total.
//!
//! Field names follow the graph-description format consumed by network
//! visualisation front ends (`from`/`to` edges, `borderWidth`, `arrows`).

mod color;
mod dfg_view;
mod net_view;
mod reports;
mod table;

pub use color::{gradient_color, Rgb, PLACE_BASE_COLOR, TRANSITION_BASE_COLOR};
pub use dfg_view::{dfg_graph, dfg_view, happy_path_graph, DfgView, END_NODE, START_NODE};
pub use net_view::{net_graph, PLACE_ID_PREFIX, TRANSITION_ID_PREFIX};
pub use reports::{Summary, VariantsReport};
pub use table::{variant_cases_table, LogTable, ACTIVITY_COLUMN, CASE_COLUMN, TIMESTAMP_COLUMN};

use serde::Serialize;

/// Node color: a plain color string or a background-only color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NodeColor {
    /// `"#RRGGBB"` or a color name.
    Plain(String),
    /// `{"background": ...}`.
    Background {
        /// Background color.
        background: String,
    },
}

/// Edge color for the normal, highlighted and hovered states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeColor {
    /// Normal state.
    pub color: String,
    /// Selected state.
    pub highlight: String,
    /// Hover state.
    pub hover: String,
}

impl EdgeColor {
    /// Same color in every state.
    pub fn uniform(color: impl Into<String>) -> Self {
        let color = color.into();
        Self {
            highlight: color.clone(),
            hover: color.clone(),
            color,
        }
    }
}

/// Drop shadow hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shadow {
    /// Shadow color.
    pub color: String,
    /// Shadow size.
    pub size: u32,
}

/// Font hint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Font {
    /// Font color.
    pub color: String,
}

/// Positioned graph node with optional visual hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphNode {
    /// Unique node id.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Horizontal position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    /// Vertical position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    /// Shape name (`circle`, `box`, `ellipse`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<String>,
    /// Fill color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<NodeColor>,
    /// Size hint.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    /// Drop shadow.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shadow: Option<Shadow>,
    /// Border width.
    #[serde(rename = "borderWidth", skip_serializing_if = "Option::is_none")]
    pub border_width: Option<u32>,
    /// Label font.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
    /// Hidden nodes keep their edges but are not drawn.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hidden: Option<bool>,
}

impl GraphNode {
    /// Node with the same id and label and no hints.
    pub fn labelled(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            id: name,
            ..Default::default()
        }
    }

    /// Set the position.
    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }
}

/// Directed graph edge with optional visual hints.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphEdge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Display label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Preferred rendered length.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Arrow placement (`to`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrows: Option<String>,
    /// Line color.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<EdgeColor>,
}

impl GraphEdge {
    /// Edge without hints.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            ..Default::default()
        }
    }
}

/// Nodes and edges of one graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphData {
    /// Nodes.
    pub nodes: Vec<GraphNode>,
    /// Edges.
    pub edges: Vec<GraphEdge>,
}

impl GraphData {
    /// Look up a node by id.
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Look up the first edge between two nodes.
    pub fn edge(&self, from: &str, to: &str) -> Option<&GraphEdge> {
        self.edges.iter().find(|e| e.from == from && e.to == to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_hints_omitted() {
        let node = GraphNode::labelled("A").at(0.0, 100.0);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json, serde_json::json!({"id": "A", "label": "A", "x": 0.0, "y": 100.0}));

        let edge = GraphEdge::new("A", "B");
        assert_eq!(
            serde_json::to_value(&edge).unwrap(),
            serde_json::json!({"from": "A", "to": "B"})
        );
    }

    #[test]
    fn test_color_forms() {
        let plain = serde_json::to_value(NodeColor::Plain("#FFB733".into())).unwrap();
        assert_eq!(plain, serde_json::json!("#FFB733"));
        let background = serde_json::to_value(NodeColor::Background {
            background: "green".into(),
        })
        .unwrap();
        assert_eq!(background, serde_json::json!({"background": "green"}));
    }
}
