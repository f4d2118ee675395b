use std::path::PathBuf;

/// VisualizeResponse - Result of one visualization run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizeResponse {
    /// Where the viewer document was written
    pub output_path: PathBuf,
    pub node_count: usize,
    pub edge_count: usize,
    /// Edges with an end that names no node
    pub unresolved_edge_count: usize,
    /// `bom-ref`s shared by more than one node
    pub duplicate_ids: Vec<String>,
    /// Whether the browser launcher was invoked successfully
    pub opened_in_browser: bool,
}
