//! Interaction records - the outcome of running an interaction
//!
//! A record keeps the exact reactants and whatever the formula produced.
//! When the formula declined (`None`), the record is stable and its
//! products are the reactants themselves.

use crate::delta::DeltaMap;
use crate::molecule::{HashableMolecule, Molecule};
use serde::{Deserialize, Serialize};

/// Reactants and products of a single interaction run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractionRecord<M: Molecule> {
    /// The sampled reactants, in sampling order
    reactants: Vec<M>,
    /// `None` when no reaction took place
    products: Option<Vec<M>>,
}

impl<M: Molecule> InteractionRecord<M> {
    pub(crate) fn new(reactants: Vec<M>, products: Option<Vec<M>>) -> Self {
        Self {
            reactants,
            products,
        }
    }

    /// The reactants
    pub fn reactants(&self) -> &[M] {
        &self.reactants
    }

    /// The products, or the reactants when nothing reacted
    pub fn products(&self) -> &[M] {
        self.products.as_deref().unwrap_or(&self.reactants)
    }

    /// Consume the record, returning its products
    pub fn into_products(self) -> Vec<M> {
        self.products.unwrap_or(self.reactants)
    }

    /// Returns `true` if no interaction occurred
    pub fn is_stable(&self) -> bool {
        self.products.is_none()
    }

    /// Change in population size caused by this record
    pub fn size_change(&self) -> i64 {
        self.products().len() as i64 - self.reactants.len() as i64
    }
}

impl<M: HashableMolecule> InteractionRecord<M> {
    /// Per-molecule count changes: products minus reactants
    pub fn deltas(&self) -> DeltaMap<M> {
        let mut result = DeltaMap::new();
        for molecule in &self.reactants {
            result.record(molecule.clone(), -1);
        }
        for molecule in self.products() {
            result.record(molecule.clone(), 1);
        }
        result
    }
}
