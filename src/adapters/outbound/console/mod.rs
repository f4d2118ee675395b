/// Console adapters: stdin collection and stderr progress output
mod progress_reporter;
mod stdin_collector;

pub use progress_reporter::StderrProgressReporter;
pub use stdin_collector::StdinInputSource;
