use crate::bom_graph::domain::{
    BomComponent, BomService, CycloneDxBom, GraphData, GraphEdge, GraphNode, NodeSource, NodeType,
};

/// GraphProjector service for turning a parsed AI-BOM into graph data
///
/// Pure business logic: the projection only borrows from the document and
/// performs no I/O.
pub struct GraphProjector;

impl GraphProjector {
    /// Projects a BOM document into nodes and edges
    ///
    /// Components are projected before services, each in source order.
    /// Edges follow dependency record order, then target order. Dangling
    /// targets and duplicate `bom-ref`s are kept as they are.
    ///
    /// # Arguments
    /// * `bom` - The parsed document; the returned graph borrows from it
    ///
    /// # Returns
    /// GraphData with one node per component and service
    pub fn project(bom: &CycloneDxBom) -> GraphData<'_> {
        let services = bom.services.as_deref().unwrap_or_default();

        let nodes = bom
            .components
            .iter()
            .map(Self::component_node)
            .chain(services.iter().map(Self::service_node))
            .collect();

        let edges = bom
            .dependencies
            .iter()
            .flat_map(|dependency| {
                dependency
                    .depends_on
                    .iter()
                    .flatten()
                    .map(move |target| GraphEdge {
                        from: &dependency.dependency_ref,
                        to: target,
                    })
            })
            .collect();

        GraphData::new(nodes, edges)
    }

    fn component_node(component: &BomComponent) -> GraphNode<'_> {
        GraphNode {
            id: &component.bom_ref,
            label: Self::label_for(&component.name),
            full_name: &component.name,
            node_type: NodeType::classify(&component.bom_ref),
            raw: NodeSource::Component(component),
        }
    }

    /// Services are always `Service` and keep their name unsegmented
    fn service_node(service: &BomService) -> GraphNode<'_> {
        GraphNode {
            id: &service.bom_ref,
            label: &service.name,
            full_name: &service.name,
            node_type: NodeType::Service,
            raw: NodeSource::Service(service),
        }
    }

    /// Last `/`-delimited segment of a name, or the name itself when that
    /// segment is empty
    pub fn label_for(name: &str) -> &str {
        match name.rsplit('/').next() {
            Some(segment) if !segment.is_empty() => segment,
            _ => name,
        }
    }
}
