//! Delta map - signed per-molecule count changes
//!
//! A delta map records, for each molecule, how many copies an interaction
//! (or a window of interactions) added or removed:
//!
//! ```text
//! delta[m] = occurrences(m, products) - occurrences(m, reactants)
//! ```
//!
//! Entries may be zero. `get` treats a missing key as zero, so callers never
//! need to distinguish the two unless they call `normalized`.

use crate::molecule::HashableMolecule;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Signed count change per molecule
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "M: HashableMolecule + Serialize",
    deserialize = "M: HashableMolecule + Deserialize<'de>"
))]
pub struct DeltaMap<M: HashableMolecule> {
    changes: HashMap<M, i64>,
}

impl<M: HashableMolecule> DeltaMap<M> {
    /// Create an empty delta map
    pub fn new() -> Self {
        Self {
            changes: HashMap::new(),
        }
    }

    /// Add `amount` (possibly negative) to the entry for `molecule`
    pub fn record(&mut self, molecule: M, amount: i64) {
        *self.changes.entry(molecule).or_insert(0) += amount;
    }

    /// Change for a molecule, zero when absent
    pub fn get(&self, molecule: &M) -> i64 {
        self.changes.get(molecule).copied().unwrap_or(0)
    }

    /// Add every entry of `other` into this map
    pub fn merge(&mut self, other: &Self) {
        for (molecule, amount) in &other.changes {
            self.record(molecule.clone(), *amount);
        }
    }

    /// Subtract every entry of `other` from this map, undoing a previous `merge`
    pub fn unmerge(&mut self, other: &Self) {
        for (molecule, amount) in &other.changes {
            self.record(molecule.clone(), -amount);
        }
    }

    /// Sum of absolute values of all entries
    pub fn deviation(&self) -> u64 {
        self.changes.values().map(|v| v.unsigned_abs()).sum()
    }

    /// Sum of all entries: the net change in molecule count
    pub fn net_change(&self) -> i64 {
        self.changes.values().sum()
    }

    /// Copy of this map with zero entries removed
    pub fn normalized(&self) -> Self {
        Self {
            changes: self
                .changes
                .iter()
                .filter(|(_, v)| **v != 0)
                .map(|(k, v)| (k.clone(), *v))
                .collect(),
        }
    }

    /// Iterate over the raw entries, zeros included
    pub fn iter(&self) -> impl Iterator<Item = (&M, &i64)> {
        self.changes.iter()
    }

    /// Number of raw entries
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }
}

impl<M: HashableMolecule> Default for DeltaMap<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: HashableMolecule> FromIterator<(M, i64)> for DeltaMap<M> {
    fn from_iter<I: IntoIterator<Item = (M, i64)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (molecule, amount) in iter {
            map.record(molecule, amount);
        }
        map
    }
}
