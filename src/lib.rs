//! ai-bom-visualizer - interactive viewer for CycloneDX AI-BOM documents
//!
//! This library turns the output of an AI-BOM producer (for example
//! `snyk aibom --json`) into a self-contained HTML graph viewer, following
//! hexagonal architecture and Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`bom_graph`): the AI-BOM model, JSON extraction and
//!   graph projection
//! - **Application Layer** (`application`): Use cases, DTOs and read models
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use ai_bom_visualizer::prelude::*;
//! use std::path::PathBuf;
//!
//! # async fn run() -> Result<()> {
//! // Create adapters
//! let use_case = VisualizeBomUseCase::new(
//!     FileInputSource::new(PathBuf::from("aibom.json")),
//!     HtmlViewerRenderer::new(),
//!     FileSystemWriter::new(PathBuf::from("aibom.html")),
//!     SystemBrowserLauncher::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! // Execute
//! let response = use_case.execute(VisualizeRequest::default()).await?;
//! println!("{}", response.output_path.display());
//! # Ok(())
//! # }
//! ```
//!
//! The core can also be used on its own:
//!
//! ```
//! use ai_bom_visualizer::prelude::*;
//!
//! let raw = "- Analyzing\n{\"components\":[{\"bom-ref\":\"model:openai/gpt-4o\",\"name\":\"openai/gpt-4o\"}]}";
//! let parsed = BomParser::parse(raw).unwrap();
//! let graph = GraphProjector::project(&parsed.bom);
//! assert_eq!(graph.nodes()[0].label, "gpt-4o");
//! assert_eq!(graph.nodes()[0].node_type, NodeType::Model);
//! ```

pub mod adapters;
pub mod application;
pub mod bom_graph;
pub mod cli;
pub mod config;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::browser::SystemBrowserLauncher;
    pub use crate::adapters::outbound::console::{StderrProgressReporter, StdinInputSource};
    pub use crate::adapters::outbound::filesystem::{FileInputSource, FileSystemWriter};
    pub use crate::adapters::outbound::renderers::HtmlViewerRenderer;
    pub use crate::application::dto::{VisualizeRequest, VisualizeResponse};
    pub use crate::application::read_models::{GraphReadModel, GraphReadModelBuilder};
    pub use crate::application::use_cases::VisualizeBomUseCase;
    pub use crate::bom_graph::domain::{
        CycloneDxBom, GraphData, GraphEdge, GraphNode, NodeSource, NodeType,
    };
    pub use crate::bom_graph::services::{extract_json, BomParser, GraphProjector, ParsedBom};
    pub use crate::ports::inbound::BomVisualizationPort;
    pub use crate::ports::outbound::{
        BrowserLauncher, GraphRenderer, InputSource, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::Result;
}
