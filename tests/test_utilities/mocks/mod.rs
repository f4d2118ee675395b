/// Mock implementations for testing
mod mock_browser_launcher;
mod mock_input_source;
mod mock_presenter;
mod mock_progress_reporter;

pub use mock_browser_launcher::MockBrowserLauncher;
pub use mock_input_source::MockInputSource;
pub use mock_presenter::MockPresenter;
pub use mock_progress_reporter::MockProgressReporter;
