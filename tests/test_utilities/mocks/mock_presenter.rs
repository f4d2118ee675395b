use ai_bom_visualizer::prelude::*;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock OutputPresenter keeping the rendered document in memory
#[derive(Default, Clone)]
pub struct MockPresenter {
    pub content: Arc<Mutex<Option<String>>>,
}

impl MockPresenter {
    pub const PATH: &'static str = "/virtual/ai-bom.html";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn content(&self) -> String {
        self.content.lock().unwrap().clone().unwrap_or_default()
    }
}

impl OutputPresenter for MockPresenter {
    fn present(&self, content: &str) -> Result<PathBuf> {
        *self.content.lock().unwrap() = Some(content.to_string());
        Ok(PathBuf::from(Self::PATH))
    }
}
