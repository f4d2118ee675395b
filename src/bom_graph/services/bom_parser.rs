use super::json_extractor::extract_json;
use crate::bom_graph::domain::CycloneDxBom;
use crate::shared::error::VisualizerError;
use crate::shared::Result;

/// The outcome of parsing a raw buffer: the typed document plus the exact
/// JSON text it was parsed from, kept for embedding in the viewer.
#[derive(Debug, Clone)]
pub struct ParsedBom {
    pub bom: CycloneDxBom,
    pub json: String,
}

/// BomParser service: raw producer output → typed AI-BOM document
pub struct BomParser;

impl BomParser {
    /// Extracts the JSON document from `raw` and deserializes it
    ///
    /// # Errors
    /// Returns `VisualizerError::EmptyInput` when the buffer holds only
    /// whitespace, and `VisualizerError::InvalidJson` when the extracted
    /// text is not a valid AI-BOM document. No partial recovery is tried.
    pub fn parse(raw: &str) -> Result<ParsedBom> {
        let json = extract_json(raw);
        if json.is_empty() {
            return Err(VisualizerError::EmptyInput.into());
        }

        let bom: CycloneDxBom =
            serde_json::from_str(json).map_err(|e| VisualizerError::InvalidJson {
                details: e.to_string(),
            })?;

        Ok(ParsedBom {
            bom,
            json: json.to_string(),
        })
    }
}
