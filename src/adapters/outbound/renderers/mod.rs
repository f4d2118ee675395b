/// Renderer adapters turning the graph read model into viewer documents
pub mod escape;
mod html_renderer;

pub use html_renderer::HtmlViewerRenderer;
