use crate::shared::Result;
use std::path::Path;

/// BrowserLauncher port for opening the written viewer
pub trait BrowserLauncher: Send + Sync {
    /// Opens `path` with the platform's default handler
    ///
    /// # Errors
    /// Returns an error if the opener cannot be spawned
    fn open(&self, path: &Path) -> Result<()>;
}
