pub mod blend;
pub mod evolution_engine;
pub mod operators;
pub mod progress;

pub use blend::Blend;
pub use evolution_engine::{EvolutionEngine, ProgressCallback};
pub use progress::{ChannelProgressCallback, ConsoleProgressCallback, ProgressMessage};
