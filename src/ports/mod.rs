/// Ports of the visualizer core
///
/// Inbound ports are what the CLI drives; outbound ports are the stdin,
/// filesystem, console and browser seams the use case depends on.
pub mod inbound;
pub mod outbound;
