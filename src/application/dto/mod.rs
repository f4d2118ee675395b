/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod visualize_request;
mod visualize_response;

pub use visualize_request::{VisualizeRequest, VisualizeRequestBuilder, DEFAULT_TITLE};
pub use visualize_response::VisualizeResponse;
