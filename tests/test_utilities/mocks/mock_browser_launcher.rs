use ai_bom_visualizer::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Mock BrowserLauncher recording opened paths
#[derive(Default, Clone)]
pub struct MockBrowserLauncher {
    pub opened: Arc<Mutex<Vec<PathBuf>>>,
    pub fail: bool,
}

impl MockBrowserLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }
}

impl BrowserLauncher for MockBrowserLauncher {
    fn open(&self, path: &Path) -> Result<()> {
        if self.fail {
            anyhow::bail!("no browser available");
        }
        self.opened.lock().unwrap().push(path.to_path_buf());
        Ok(())
    }
}
