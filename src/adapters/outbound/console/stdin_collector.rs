use crate::ports::outbound::InputSource;
use crate::shared::error::VisualizerError;
use crate::shared::Result;
use async_trait::async_trait;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};

/// StdinInputSource adapter collecting the AI-BOM from standard input
///
/// Chunks are accumulated until the producer closes its end of the pipe.
/// The buffer is only decoded once end-of-input is reached, so a
/// multi-byte character split across chunks is never a problem.
pub struct StdinInputSource {
    timeout: Option<Duration>,
}

impl StdinInputSource {
    /// Creates a collector; `None` waits for the producer indefinitely
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// Builds a collector from a timeout in seconds, where 0 means none
    pub fn with_timeout_secs(seconds: u64) -> Self {
        Self::new((seconds > 0).then(|| Duration::from_secs(seconds)))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl Default for StdinInputSource {
    fn default() -> Self {
        Self::new(None)
    }
}

#[async_trait]
impl InputSource for StdinInputSource {
    async fn read_to_end(&self) -> Result<String> {
        collect(tokio::io::stdin(), self.timeout).await
    }

    fn describe(&self) -> String {
        "stdin".to_string()
    }
}

/// Reads `reader` to completion, honouring an optional deadline
pub(crate) async fn collect<R>(mut reader: R, timeout: Option<Duration>) -> Result<String>
where
    R: AsyncRead + Unpin + Send,
{
    let mut buffer = Vec::new();
    let read = reader.read_to_end(&mut buffer);

    let outcome = match timeout {
        Some(limit) => tokio::time::timeout(limit, read).await.map_err(|_| {
            VisualizerError::InputTimeout {
                seconds: limit.as_secs(),
            }
        })?,
        None => read.await,
    };
    outcome.map_err(|e| anyhow::anyhow!("Failed to read from stdin: {}", e))?;

    String::from_utf8(buffer).map_err(|e| {
        VisualizerError::InvalidJson {
            details: format!("input is not valid UTF-8: {}", e),
        }
        .into()
    })
}
