//! Error types for the simulation driver.

use thiserror::Error;

/// Error type for simulation runs.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Too many consecutive interactions asked for more molecules than exist.
    #[error(
        "Simulation stalled: {attempts} consecutive interactions lacked reactants (population size {population})"
    )]
    Stalled { attempts: u64, population: usize },
}

/// Result type for simulation runs.
pub type Result<T> = std::result::Result<T, SimError>;
