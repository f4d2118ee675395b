use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let wrapper scripts tell a bad document apart from an
/// environment or I/O failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - viewer written (and opened, if requested)
    Success = 0,
    /// The input did not contain a usable AI-BOM document
    InvalidDocument = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O, configuration, timeout, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error chain
    ///
    /// Any `VisualizerError` describing unusable input maps to
    /// `InvalidDocument`; everything else is an application error.
    pub fn for_error(error: &anyhow::Error) -> Self {
        let invalid_input = error.chain().any(|cause| {
            matches!(
                cause.downcast_ref::<VisualizerError>(),
                Some(VisualizerError::InvalidJson { .. }) | Some(VisualizerError::EmptyInput)
            )
        });

        if invalid_input {
            ExitCode::InvalidDocument
        } else {
            ExitCode::ApplicationError
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::InvalidDocument => write!(f, "Invalid Document (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for AI-BOM visualization.
///
/// Uses thiserror to derive Display and Error traits automatically,
/// keeping the user-facing hint text next to each variant.
#[derive(Debug, Error)]
pub enum VisualizerError {
    #[error("Invalid AI-BOM JSON: {details}\n\n💡 Hint: Make sure the input contains a single CycloneDX JSON document (e.g. the output of `snyk aibom --json`)")]
    InvalidJson { details: String },

    #[error("No input received\n\n💡 Hint: Pipe an AI-BOM into stdin or pass it with --file <PATH>")]
    EmptyInput,

    #[error("Timed out after {seconds}s waiting for input on stdin\n\n💡 Hint: Check that the producing command finishes, or raise --timeout")]
    InputTimeout { seconds: u64 },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Failed to open the viewer in a browser: {details}")]
    BrowserLaunchError { details: String },

    /// Validation error for configuration values
    #[error("Validation error: {message}")]
    Validation { message: String },
}
