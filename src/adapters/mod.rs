/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with stdin, the file system,
/// the console and the desktop browser.
pub mod outbound;
