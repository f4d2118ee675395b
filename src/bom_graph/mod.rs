/// Domain layer: AI-BOM document model, graph model and the pure services
/// that recover, parse and project a document into a graph.
pub mod domain;
pub mod services;
