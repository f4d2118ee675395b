mod input_source_factory;
mod presenter_factory;

pub use input_source_factory::{InputSourceFactory, InputType};
pub use presenter_factory::{PresenterFactory, PresenterType};
