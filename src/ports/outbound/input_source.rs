use crate::shared::Result;
use async_trait::async_trait;

/// InputSource port for collecting the raw AI-BOM text
///
/// Implementations read their source to completion before returning.
/// The returned buffer is never a partial read: chunks are accumulated
/// until the source signals end-of-input.
#[async_trait]
pub trait InputSource: Send + Sync {
    /// Reads the entire input
    ///
    /// # Returns
    /// The raw text, possibly surrounded by non-JSON noise
    ///
    /// # Errors
    /// Returns an error if:
    /// - The source cannot be opened or read
    /// - The source is not valid UTF-8
    /// - The source does not finish within the configured timeout
    async fn read_to_end(&self) -> Result<String>;

    /// Human-readable description of the source, for progress messages
    fn describe(&self) -> String;
}

#[async_trait]
impl<T: InputSource + ?Sized> InputSource for Box<T> {
    async fn read_to_end(&self) -> Result<String> {
        (**self).read_to_end().await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
