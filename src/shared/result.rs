/// Crate-wide result type; adapters attach context with `anyhow::Context`
/// and typed failures travel as `VisualizerError`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
