use crate::shared::error::VisualizerError;
use crate::shared::Result;

pub const DEFAULT_TITLE: &str = "AI-BOM Visualizer";

/// VisualizeRequest - Internal request DTO for the visualization use case
///
/// Where the input comes from and where the output goes are decided by
/// the injected adapters; the request only carries run options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizeRequest {
    /// Title of the rendered viewer page
    pub title: String,
    /// Open the written viewer in the default browser
    pub open_in_browser: bool,
}

impl VisualizeRequest {
    pub fn new(title: String, open_in_browser: bool) -> Self {
        Self {
            title,
            open_in_browser,
        }
    }

    pub fn builder() -> VisualizeRequestBuilder {
        VisualizeRequestBuilder::default()
    }
}

impl Default for VisualizeRequest {
    fn default() -> Self {
        Self::new(DEFAULT_TITLE.to_string(), false)
    }
}

/// Builder for VisualizeRequest with validation
#[derive(Debug, Default)]
pub struct VisualizeRequestBuilder {
    title: Option<String>,
    open_in_browser: bool,
}

impl VisualizeRequestBuilder {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn open_in_browser(mut self, open: bool) -> Self {
        self.open_in_browser = open;
        self
    }

    /// Builds the request
    ///
    /// # Errors
    /// Returns `VisualizerError::Validation` if the title is blank
    pub fn build(self) -> Result<VisualizeRequest> {
        let title = match self.title {
            Some(title) if title.trim().is_empty() => {
                return Err(VisualizerError::Validation {
                    message: "title must not be empty".to_string(),
                }
                .into());
            }
            Some(title) => title.trim().to_string(),
            None => DEFAULT_TITLE.to_string(),
        };

        Ok(VisualizeRequest {
            title,
            open_in_browser: self.open_in_browser,
        })
    }
}
