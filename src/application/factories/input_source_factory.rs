use crate::adapters::outbound::console::StdinInputSource;
use crate::adapters::outbound::filesystem::FileInputSource;
use crate::ports::outbound::InputSource;
use std::path::PathBuf;

/// Where the AI-BOM is read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputType {
    /// Standard input; a timeout of 0 waits forever
    Stdin { timeout_secs: u64 },
    File(PathBuf),
}

/// Factory for creating input sources
pub struct InputSourceFactory;

impl InputSourceFactory {
    /// Creates an input source for the specified type
    ///
    /// # Examples
    /// ```
    /// use ai_bom_visualizer::application::factories::{InputSourceFactory, InputType};
    ///
    /// let source = InputSourceFactory::create(InputType::Stdin { timeout_secs: 0 });
    /// assert_eq!(source.describe(), "stdin");
    /// ```
    pub fn create(input_type: InputType) -> Box<dyn InputSource> {
        match input_type {
            InputType::Stdin { timeout_secs } => {
                Box::new(StdinInputSource::with_timeout_secs(timeout_secs))
            }
            InputType::File(path) => Box::new(FileInputSource::new(path)),
        }
    }
}
