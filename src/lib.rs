pub mod crossover;
pub mod error;
pub mod evolution;
pub mod genome;
pub mod rng;
pub mod sampling;
pub mod selection;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{run, EvolutionLauncher, EvolutionResult, GaSettings, Selection};
pub use genome::Genome;
pub use rng::RandomNumberGenerator;
