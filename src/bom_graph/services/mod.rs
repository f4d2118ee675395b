mod bom_parser;
mod graph_projector;
mod json_extractor;

pub use bom_parser::{BomParser, ParsedBom};
pub use graph_projector::GraphProjector;
pub use json_extractor::extract_json;
