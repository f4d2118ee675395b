pub mod bom;
pub mod graph;
pub mod node_type;

pub use bom::{
    BomAuthor, BomComponent, BomDependency, BomEvidence, BomMetadata, BomProperty, BomService,
    CycloneDxBom, EvidenceOccurrence, ExternalReference, License, LicenseChoice, ModelCard,
    ModelParameters, OrganizationalEntity,
};
pub use graph::{GraphData, GraphEdge, GraphNode, NodeSource};
pub use node_type::{NodeStyle, NodeType};
