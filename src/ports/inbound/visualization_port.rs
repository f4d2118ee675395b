use crate::application::dto::{VisualizeRequest, VisualizeResponse};
use crate::shared::Result;
use async_trait::async_trait;

/// BomVisualizationPort - Inbound port for the visualization use case
///
/// This port defines the interface that external adapters (CLI, tests)
/// use to turn an AI-BOM into a viewer. It represents the application's
/// public API.
#[async_trait]
pub trait BomVisualizationPort {
    /// Collects, parses and projects an AI-BOM, then writes the viewer
    ///
    /// # Arguments
    /// * `request` - Run options (title, whether to open a browser)
    ///
    /// # Returns
    /// Where the viewer was written, with graph statistics
    ///
    /// # Errors
    /// Returns an error if:
    /// - The input cannot be read, or is empty
    /// - The input holds no valid AI-BOM JSON document
    /// - Rendering or writing the viewer fails
    ///
    /// Failing to open the browser is not an error; it is reported as a
    /// warning and `opened_in_browser` is false.
    async fn visualize(&self, request: VisualizeRequest) -> Result<VisualizeResponse>;
}
