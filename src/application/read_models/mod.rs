//! Read models for rendering
//!
//! This module contains owned, view-optimized structs built from the
//! borrowed domain graph, so renderers never touch domain lifetimes.

pub mod graph_read_model;
pub mod graph_read_model_builder;
pub mod node_view;

pub use graph_read_model::{
    DocumentView, EdgeView, GraphReadModel, GraphStatsView, LegendEntryView,
};
pub use graph_read_model_builder::{GraphReadModelBuilder, TOOL_NAME};
pub use node_view::{LinkView, ModelParametersView, NodeDetailsView, NodeView};
