use crate::application::read_models::GraphReadModel;
use crate::shared::Result;

/// GraphRenderer port for turning the graph read model into a document
///
/// Implementations decide how dangling edges and duplicate nodes are
/// shown; the read model carries them unchanged.
pub trait GraphRenderer: Send + Sync {
    /// Renders a viewer document
    ///
    /// # Arguments
    /// * `model` - The graph read model
    /// * `bom_json` - The extracted source JSON, embedded verbatim
    ///
    /// # Errors
    /// Returns an error if rendering or serialization fails
    fn render(&self, model: &GraphReadModel, bom_json: &str) -> Result<String>;
}
