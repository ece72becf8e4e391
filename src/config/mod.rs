pub mod components;
pub mod evolution;
pub mod manager;
pub mod penalties;
pub mod specification;
pub mod traits;

pub use components::ComponentTable;
pub use evolution::EvolutionConfig;
pub use manager::{AppConfig, ConfigManager};
pub use penalties::PenaltyWeights;
pub use specification::Specification;
