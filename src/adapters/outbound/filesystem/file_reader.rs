use crate::ports::outbound::InputSource;
use crate::shared::error::VisualizerError;
use crate::shared::security::{validate_input_file, MAX_FILE_SIZE};
use crate::shared::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// FileInputSource adapter reading an AI-BOM from a file
///
/// The file is validated before it is opened:
/// - Reject symbolic links
/// - Validate it is a regular file
/// - Check the size limit
pub struct FileInputSource {
    path: PathBuf,
    max_size: u64,
}

impl FileInputSource {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            max_size: MAX_FILE_SIZE,
        }
    }

    pub fn with_max_size(mut self, max_size: u64) -> Self {
        self.max_size = max_size;
        self
    }
}

#[async_trait]
impl InputSource for FileInputSource {
    async fn read_to_end(&self) -> Result<String> {
        validate_input_file(&self.path, self.max_size)?;

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|e| VisualizerError::FileReadError {
                path: self.path.clone(),
                details: e.to_string(),
            })?;

        String::from_utf8(bytes).map_err(|e| {
            VisualizerError::InvalidJson {
                details: format!("{} is not valid UTF-8: {}", self.path.display(), e),
            }
            .into()
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}
