//! Graph read model for rendering
//!
//! Owned, serializable snapshot of a projected AI-BOM graph. Renderers
//! consume this instead of the borrowed domain graph.

use super::node_view::NodeView;
use crate::bom_graph::domain::NodeType;
use serde::Serialize;

/// Main read model handed to graph renderers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphReadModel {
    pub document: DocumentView,
    pub legend: Vec<LegendEntryView>,
    pub nodes: Vec<NodeView>,
    pub edges: Vec<EdgeView>,
    pub stats: GraphStatsView,
}

impl GraphReadModel {
    pub fn resolved_edges(&self) -> impl Iterator<Item = &EdgeView> {
        self.edges.iter().filter(|edge| edge.resolved)
    }

    pub fn unresolved_edges(&self) -> impl Iterator<Item = &EdgeView> {
        self.edges.iter().filter(|edge| !edge.resolved)
    }

    pub fn nodes_of_type(&self, node_type: NodeType) -> impl Iterator<Item = &NodeView> {
        self.nodes
            .iter()
            .filter(move |node| node.node_type == node_type)
    }
}

/// Provenance of the visualized document and of this rendering
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentView {
    pub title: String,
    pub bom_format: Option<String>,
    pub spec_version: Option<String>,
    pub version: Option<String>,
    /// Manufacturer of the scanning tool, from BOM metadata
    pub scanner: Option<String>,
    /// RFC 3339 timestamp of rendering
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
}

/// One legend row: a node type present in the graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendEntryView {
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub label: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
    pub background: &'static str,
    pub border: &'static str,
    pub count: usize,
}

/// View representation of a dependency edge
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EdgeView {
    pub from: String,
    pub to: String,
    /// false when either end names no node
    pub resolved: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphStatsView {
    pub node_count: usize,
    pub edge_count: usize,
    pub unresolved_edge_count: usize,
    pub duplicate_ids: Vec<String>,
}
