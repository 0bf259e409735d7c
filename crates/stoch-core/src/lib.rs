// File: `crates/stoch-core/src/lib.rs`
pub mod delta;
pub mod interaction;
pub mod molecule;
pub mod record;

pub use delta::DeltaMap;
pub use interaction::{Formula, Interaction};
pub use molecule::{HashableMolecule, Molecule};
pub use record::InteractionRecord;
