use super::bom::{BomComponent, BomService};
use super::node_type::NodeType;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Back-reference from a graph node to the BOM entity it was projected from
///
/// Nodes never copy fields out of the entity; callers needing detail
/// navigate through this reference.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "entity", rename_all = "lowercase")]
pub enum NodeSource<'a> {
    Component(&'a BomComponent),
    Service(&'a BomService),
}

impl<'a> NodeSource<'a> {
    pub fn bom_ref(&self) -> &'a str {
        match *self {
            NodeSource::Component(component) => &component.bom_ref,
            NodeSource::Service(service) => &service.bom_ref,
        }
    }

    pub fn as_component(&self) -> Option<&'a BomComponent> {
        match *self {
            NodeSource::Component(component) => Some(component),
            NodeSource::Service(_) => None,
        }
    }

    pub fn as_service(&self) -> Option<&'a BomService> {
        match *self {
            NodeSource::Service(service) => Some(service),
            NodeSource::Component(_) => None,
        }
    }
}

/// A node of the AI-BOM graph, borrowing from the parsed document
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode<'a> {
    pub id: &'a str,
    pub label: &'a str,
    pub full_name: &'a str,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    pub raw: NodeSource<'a>,
}

/// Directed dependency edge between two `bom-ref`s
///
/// Either end may name an identifier that has no node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct GraphEdge<'a> {
    pub from: &'a str,
    pub to: &'a str,
}

/// GraphData aggregate: projected nodes and edges of one BOM document
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GraphData<'a> {
    nodes: Vec<GraphNode<'a>>,
    edges: Vec<GraphEdge<'a>>,
}

impl<'a> GraphData<'a> {
    pub fn new(nodes: Vec<GraphNode<'a>>, edges: Vec<GraphEdge<'a>>) -> Self {
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[GraphNode<'a>] {
        &self.nodes
    }

    pub fn edges(&self) -> &[GraphEdge<'a>] {
        &self.edges
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty()
    }

    /// First node carrying `id`, if any
    pub fn node(&self, id: &str) -> Option<&GraphNode<'a>> {
        self.nodes.iter().find(|node| node.id == id)
    }

    fn node_ids(&self) -> HashSet<&'a str> {
        self.nodes.iter().map(|node| node.id).collect()
    }

    /// Edges with at least one end that names no node
    pub fn dangling_edges(&self) -> Vec<&GraphEdge<'a>> {
        let ids = self.node_ids();
        self.edges
            .iter()
            .filter(|edge| !ids.contains(edge.from) || !ids.contains(edge.to))
            .collect()
    }

    pub fn is_dangling(&self, edge: &GraphEdge<'_>) -> bool {
        self.node(edge.from).is_none() || self.node(edge.to).is_none()
    }

    /// Ids that were produced by more than one node, in first-seen order
    pub fn duplicate_ids(&self) -> Vec<&'a str> {
        let mut seen = HashSet::new();
        let mut duplicates = Vec::new();
        for node in &self.nodes {
            if !seen.insert(node.id) && !duplicates.contains(&node.id) {
                duplicates.push(node.id);
            }
        }
        duplicates
    }

    /// Node counts per type, in `NodeType::ALL` order, skipping zero counts
    pub fn count_by_type(&self) -> Vec<(NodeType, usize)> {
        let mut counts: HashMap<NodeType, usize> = HashMap::new();
        for node in &self.nodes {
            *counts.entry(node.node_type).or_insert(0) += 1;
        }
        NodeType::ALL
            .iter()
            .filter_map(|node_type| counts.get(node_type).map(|count| (*node_type, *count)))
            .collect()
    }

    pub fn outgoing(&self, id: &str) -> Vec<&GraphEdge<'a>> {
        self.edges.iter().filter(|edge| edge.from == id).collect()
    }

    pub fn incoming(&self, id: &str) -> Vec<&GraphEdge<'a>> {
        self.edges.iter().filter(|edge| edge.to == id).collect()
    }
}
