//! Stoch Sim - random-interaction simulation of molecule populations
//!
//! A population of molecules evolves by repeatedly sampling a few molecules
//! at random and letting an interaction turn them into products. There is no
//! kinetic clock: the order of events comes from sampling alone. A detector
//! decides when to stop.
//!
//! # Quick Start
//!
//! ```rust
//! use stoch_sim::prelude::*;
//!
//! // Equal molecules merge into one of double the value.
//! let double = Interaction::binary(|a: u64, b: u64| (a == b).then(|| vec![2 * a]));
//!
//! let config = SimulationConfigBuilder::new().seed(2048).build();
//! let mut system = StochasticSystem::with_config(vec![1, 2, 2, 4, 8, 8, 16], config);
//! system
//!     .simulate(Behavior::fixed(double), Detector::when_stable(200))
//!     .unwrap();
//!
//! let mut result = system.molecules().to_vec();
//! result.sort();
//! assert_eq!(result, vec![1, 8, 32]);
//! ```
//!
//! # Architecture
//!
//! - [`population`] - The sampling contract and the lazy-shuffle container
//! - [`behavior`] - Which interaction to attempt each step
//! - [`system`] - The simulation driver
//! - [`config`] - Seeding and stall limits
//! - [`error`] - Error types
//!
//! Interactions and records come from `stoch-core`; detectors from
//! `stoch-detect`. Both are re-exported here.

pub mod behavior;
pub mod config;
pub mod error;
pub mod population;
pub mod system;

// Re-exports for convenience
pub use behavior::Behavior;
pub use config::{SimulationConfig, SimulationConfigBuilder};
pub use error::{Result, SimError};
pub use population::{Population, ShufflePopulation};
pub use system::{SimulationReport, StochasticSystem};

pub use stoch_core::{DeltaMap, HashableMolecule, Interaction, InteractionRecord, Molecule};
pub use stoch_detect::{DeltaWindow, Detector, DetectorError};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::behavior::Behavior;
    pub use crate::config::{SimulationConfig, SimulationConfigBuilder};
    pub use crate::error::SimError;
    pub use crate::population::{Population, ShufflePopulation};
    pub use crate::system::{SimulationReport, StochasticSystem};
    pub use stoch_core::{Interaction, InteractionRecord};
    pub use stoch_detect::Detector;
}
