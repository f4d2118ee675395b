/// Use cases module containing application business logic orchestration
mod visualize_bom;

pub use visualize_bom::VisualizeBomUseCase;
