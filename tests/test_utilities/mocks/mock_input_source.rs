use ai_bom_visualizer::prelude::*;
use async_trait::async_trait;
use std::time::Duration;

/// Mock InputSource serving canned text, optionally in delayed chunks
pub struct MockInputSource {
    chunks: Vec<String>,
    delay: Duration,
}

impl MockInputSource {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            chunks: vec![content.into()],
            delay: Duration::ZERO,
        }
    }

    /// Serves `chunks` one after another, sleeping `delay` before each
    pub fn slow(chunks: &[&str], delay: Duration) -> Self {
        Self {
            chunks: chunks.iter().map(|chunk| chunk.to_string()).collect(),
            delay,
        }
    }

    pub fn from_fixture(name: &str) -> Self {
        let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures")
            .join(name);
        Self::new(std::fs::read_to_string(path).unwrap())
    }
}

#[async_trait]
impl InputSource for MockInputSource {
    async fn read_to_end(&self) -> Result<String> {
        let mut buffer = String::new();
        for chunk in &self.chunks {
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            buffer.push_str(chunk);
        }
        Ok(buffer)
    }

    fn describe(&self) -> String {
        "mock".to_string()
    }
}
