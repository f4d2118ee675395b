//! Node view structs for the graph read model
//!
//! These structs flatten the detail a viewer shows for a selected node.
//! They are filled by navigating the node's back-reference, so the graph
//! itself never carries copies of entity fields.

use crate::bom_graph::domain::NodeType;
use serde::Serialize;

/// View representation of a graph node
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeView {
    /// `bom-ref` of the source entity
    pub id: String,
    /// Short display label
    pub label: String,
    pub full_name: String,
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// "component" or "service"
    pub kind: &'static str,
    pub details: NodeDetailsView,
}

/// A piece of text that may link somewhere
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkView {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

impl LinkView {
    pub fn new(text: impl Into<String>, url: Option<&str>) -> Self {
        Self {
            text: text.into(),
            url: url.map(str::to_string),
        }
    }
}

/// Detail fields shown in the node detail panel
///
/// Component-only fields stay empty for services and vice versa.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeDetailsView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer: Option<LinkView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<LinkView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub endpoints: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<(String, String)>,
    /// "location, line N, column M"
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub external_references: Vec<LinkView>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub licenses: Vec<LinkView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<ModelParametersView>,
}

impl NodeDetailsView {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelParametersView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub architecture: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approach: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub inputs: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub outputs: Vec<String>,
}
