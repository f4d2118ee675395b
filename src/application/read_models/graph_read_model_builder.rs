//! Builder for constructing GraphReadModel from the projected graph
//!
//! Transforms the borrowed domain graph into the owned, render-ready read
//! model, resolving node details through each node's back-reference.

use super::graph_read_model::{
    DocumentView, EdgeView, GraphReadModel, GraphStatsView, LegendEntryView,
};
use super::node_view::{LinkView, ModelParametersView, NodeDetailsView, NodeView};
use crate::bom_graph::domain::{
    BomAuthor, BomComponent, BomService, CycloneDxBom, GraphData, GraphNode, ModelParameters,
    NodeSource, OrganizationalEntity,
};
use chrono::Utc;
use std::collections::HashSet;

pub const TOOL_NAME: &str = "ai-bom-visualizer";

/// Builder for constructing GraphReadModel from domain objects
pub struct GraphReadModelBuilder;

impl GraphReadModelBuilder {
    /// Builds a GraphReadModel
    ///
    /// # Arguments
    /// * `graph` - Projected graph, borrowing from `bom`
    /// * `bom` - The parsed document, for provenance fields
    /// * `title` - Page title for the rendered viewer
    pub fn build(graph: &GraphData<'_>, bom: &CycloneDxBom, title: &str) -> GraphReadModel {
        let node_ids: HashSet<&str> = graph.nodes().iter().map(|node| node.id).collect();

        let edges: Vec<EdgeView> = graph
            .edges()
            .iter()
            .map(|edge| EdgeView {
                from: edge.from.to_string(),
                to: edge.to.to_string(),
                resolved: node_ids.contains(edge.from) && node_ids.contains(edge.to),
            })
            .collect();

        let stats = GraphStatsView {
            node_count: graph.node_count(),
            edge_count: graph.edge_count(),
            unresolved_edge_count: edges.iter().filter(|edge| !edge.resolved).count(),
            duplicate_ids: graph
                .duplicate_ids()
                .into_iter()
                .map(str::to_string)
                .collect(),
        };

        GraphReadModel {
            document: Self::build_document(bom, title),
            legend: Self::build_legend(graph),
            nodes: graph.nodes().iter().map(Self::build_node).collect(),
            edges,
            stats,
        }
    }

    fn build_document(bom: &CycloneDxBom, title: &str) -> DocumentView {
        DocumentView {
            title: title.to_string(),
            bom_format: bom.bom_format.as_ref().and_then(scalar_text),
            spec_version: bom.spec_version.as_ref().and_then(scalar_text),
            version: bom.version.as_ref().and_then(scalar_text),
            scanner: bom
                .metadata
                .as_ref()
                .and_then(|metadata| metadata.manufacturer.as_ref())
                .and_then(OrganizationalEntity::display_name)
                .map(str::to_string),
            generated_at: Utc::now().to_rfc3339(),
            tool_name: TOOL_NAME.to_string(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    fn build_legend(graph: &GraphData<'_>) -> Vec<LegendEntryView> {
        graph
            .count_by_type()
            .into_iter()
            .map(|(node_type, count)| {
                let style = node_type.style();
                LegendEntryView {
                    node_type,
                    label: style.label,
                    icon: style.icon,
                    color: style.color,
                    background: style.background,
                    border: style.border,
                    count,
                }
            })
            .collect()
    }

    fn build_node(node: &GraphNode<'_>) -> NodeView {
        let (kind, details) = match node.raw {
            NodeSource::Component(component) => ("component", Self::component_details(component)),
            NodeSource::Service(service) => ("service", Self::service_details(service)),
        };

        NodeView {
            id: node.id.to_string(),
            label: node.label.to_string(),
            full_name: node.full_name.to_string(),
            node_type: node.node_type,
            kind,
            details,
        }
    }

    fn component_details(component: &BomComponent) -> NodeDetailsView {
        let occurrences = component
            .evidence
            .iter()
            .flat_map(|evidence| evidence.occurrences.iter())
            .map(|occurrence| {
                let mut text = occurrence.location.clone();
                if let Some(line) = occurrence.line {
                    text.push_str(&format!(", line {}", line));
                }
                if let Some(offset) = occurrence.offset {
                    text.push_str(&format!(", column {}", offset));
                }
                text
            })
            .collect();

        NodeDetailsView {
            publisher: component.publisher.clone(),
            manufacturer: component.manufacturer.as_ref().and_then(entity_link),
            authors: component
                .authors
                .iter()
                .filter_map(BomAuthor::display_name)
                .map(str::to_string)
                .collect(),
            occurrences,
            external_references: component
                .external_references
                .iter()
                .filter(|reference| !reference.url.is_empty())
                .map(|reference| LinkView::new(&reference.url, Some(&reference.url)))
                .collect(),
            licenses: component
                .licenses
                .iter()
                .filter_map(|choice| match (&choice.license, &choice.expression) {
                    (Some(license), _) => license
                        .display_name()
                        .map(|name| LinkView::new(name, license.url.as_deref())),
                    (None, Some(expression)) => Some(LinkView::new(expression, None)),
                    (None, None) => None,
                })
                .collect(),
            model: component
                .model_card
                .as_ref()
                .and_then(|card| card.model_parameters.as_ref())
                .map(Self::model_parameters),
            ..Default::default()
        }
    }

    fn service_details(service: &BomService) -> NodeDetailsView {
        NodeDetailsView {
            provider: service.provider.as_ref().and_then(entity_link),
            endpoints: service.endpoints.clone(),
            properties: service
                .properties
                .iter()
                .map(|property| (property.name.clone(), property.value.clone()))
                .collect(),
            ..Default::default()
        }
    }

    fn model_parameters(params: &ModelParameters) -> ModelParametersView {
        ModelParametersView {
            task: params.task.clone(),
            architecture: params.model_architecture.clone(),
            family: params.architecture_family.clone(),
            approach: params
                .approach
                .as_ref()
                .map(|approach| approach.approach_type.clone())
                .filter(|approach| !approach.is_empty()),
            inputs: params.inputs.iter().map(|f| f.format.clone()).collect(),
            outputs: params.outputs.iter().map(|f| f.format.clone()).collect(),
        }
    }
}

/// Display text of a pass-through header value; null and structured values
/// show nothing, scalars show as written
fn scalar_text(value: &serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(text) => Some(text.clone()),
        serde_json::Value::Number(number) => Some(number.to_string()),
        serde_json::Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    }
}

fn entity_link(entity: &OrganizationalEntity) -> Option<LinkView> {
    entity
        .display_name()
        .map(|name| LinkView::new(name, entity.primary_url()))
}
