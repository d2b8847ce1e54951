pub mod launcher;
pub mod population;
pub mod settings;

pub use launcher::{run, EvolutionLauncher, EvolutionResult, GenerationSnapshot};
pub use population::{Candidate, Population};
pub use settings::{GaSettings, GaSettingsBuilder};

pub use crate::selection::Selection;
