use crate::shared::Result;
use std::path::PathBuf;

/// OutputPresenter port for persisting the rendered viewer
///
/// This port abstracts the output destination where the rendered
/// document is written.
pub trait OutputPresenter: Send + Sync {
    /// Writes the rendered content to the output destination
    ///
    /// # Arguments
    /// * `content` - The rendered document
    ///
    /// # Returns
    /// The path the content was written to
    ///
    /// # Errors
    /// Returns an error if:
    /// - The parent directory does not exist
    /// - The destination is a symbolic link
    /// - Writing fails (permissions, disk space)
    fn present(&self, content: &str) -> Result<PathBuf>;
}

impl<T: OutputPresenter + ?Sized> OutputPresenter for Box<T> {
    fn present(&self, content: &str) -> Result<PathBuf> {
        (**self).present(content)
    }
}
