use crate::adapters::outbound::filesystem::{default_output_path, FileSystemWriter};
use crate::ports::outbound::OutputPresenter;
use std::path::PathBuf;

/// Presenter type enumeration for factory pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterType {
    /// A fresh `ai-bom-<uuid>.html` in the system temp directory
    TempFile,
    File(PathBuf),
}

impl PresenterType {
    /// `File` when a path was given, `TempFile` otherwise
    pub fn from_output(output: Option<PathBuf>) -> Self {
        output.map_or(Self::TempFile, Self::File)
    }
}

/// Factory for creating output presenters
///
/// This factory encapsulates the creation logic for different presenter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct PresenterFactory;

impl PresenterFactory {
    /// Creates a presenter instance for the specified type
    ///
    /// # Examples
    /// ```
    /// use ai_bom_visualizer::application::factories::{PresenterFactory, PresenterType};
    ///
    /// let presenter = PresenterFactory::create(PresenterType::TempFile);
    /// ```
    pub fn create(presenter_type: PresenterType) -> Box<dyn OutputPresenter> {
        match presenter_type {
            PresenterType::TempFile => Box::new(FileSystemWriter::new(default_output_path())),
            PresenterType::File(path) => Box::new(FileSystemWriter::new(path)),
        }
    }
}
