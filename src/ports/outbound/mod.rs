/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (stdin, file system, console, browser).
pub mod browser_launcher;
pub mod graph_renderer;
pub mod input_source;
pub mod output_presenter;
pub mod progress_reporter;

pub use browser_launcher::BrowserLauncher;
pub use graph_renderer::GraphRenderer;
pub use input_source::InputSource;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
