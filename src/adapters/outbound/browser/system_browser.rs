use crate::ports::outbound::BrowserLauncher;
use crate::shared::error::VisualizerError;
use crate::shared::Result;
use std::path::Path;
use std::process::{Command, Stdio};

/// Platform opener, or `None` where no opener is known
pub fn opener_command() -> Option<&'static str> {
    if cfg!(target_os = "macos") {
        Some("open")
    } else if cfg!(target_os = "windows") {
        // explorer takes the path as a plain argument, no shell involved
        Some("explorer")
    } else if cfg!(unix) {
        Some("xdg-open")
    } else {
        None
    }
}

/// SystemBrowserLauncher adapter handing the viewer to the OS opener
///
/// The opener is spawned and not waited on. Its stdout and stderr are
/// discarded so they cannot mix with the output path on stdout.
pub struct SystemBrowserLauncher {
    program: Option<String>,
}

impl SystemBrowserLauncher {
    pub fn new() -> Self {
        Self {
            program: opener_command().map(str::to_string),
        }
    }

    /// Launcher using an explicit opener program
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: Some(program.into()),
        }
    }
}

impl Default for SystemBrowserLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserLauncher for SystemBrowserLauncher {
    fn open(&self, path: &Path) -> Result<()> {
        let program = self
            .program
            .as_deref()
            .ok_or_else(|| VisualizerError::BrowserLaunchError {
                details: "no opener is known for this platform".to_string(),
            })?;

        Command::new(program)
            .arg(path)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| VisualizerError::BrowserLaunchError {
                details: format!("failed to run {}: {}", program, e),
            })?;

        Ok(())
    }
}
