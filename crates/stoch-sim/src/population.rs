//! Population storage and random sampling.
//!
//! The simulator only needs four things from a population: its size, a
//! fresh uniform permutation, the first `k` molecules of that permutation,
//! and a way to replace those `k` molecules with the interaction's products.
//!
//! [`ShufflePopulation`] shuffles lazily. `shuffle` only resets a watermark;
//! `prefix(k)` then runs the first `k` steps of a Fisher–Yates shuffle. The
//! prefix it returns is distributed exactly like the prefix of a full
//! uniform permutation, at O(k) cost instead of O(n).

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use stoch_core::Molecule;

/// The contract the simulation driver needs from a molecule container.
pub trait Population<M: Molecule> {
    /// Current number of molecules.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Start a new uniformly random permutation.
    fn shuffle(&mut self);

    /// The first `k` molecules of the current permutation.
    ///
    /// Panics if `k` exceeds `len()`.
    fn prefix(&mut self, k: usize) -> &[M];

    /// Remove the first `k` molecules and splice `contents` in their place,
    /// keeping the rest in order. The length may change.
    ///
    /// Panics if `k` exceeds `len()`.
    fn replace_prefix(&mut self, k: usize, contents: Vec<M>);

    /// Full current contents.
    fn molecules(&self) -> &[M];
}

/// Vector-backed population with a lazy Fisher–Yates shuffle.
#[derive(Debug, Clone)]
pub struct ShufflePopulation<M: Molecule> {
    molecules: Vec<M>,
    /// Positions `..settled` have been drawn from the current permutation.
    settled: usize,
    rng: StdRng,
}

impl<M: Molecule> ShufflePopulation<M> {
    /// Create a population seeded from system entropy.
    pub fn new(molecules: impl IntoIterator<Item = M>) -> Self {
        Self::with_rng(molecules, StdRng::from_entropy())
    }

    /// Create a population with a deterministic seed.
    pub fn seeded(molecules: impl IntoIterator<Item = M>, seed: u64) -> Self {
        Self::with_rng(molecules, StdRng::seed_from_u64(seed))
    }

    /// Create a population drawing from `rng`.
    pub fn with_rng(molecules: impl IntoIterator<Item = M>, rng: StdRng) -> Self {
        Self {
            molecules: molecules.into_iter().collect(),
            settled: 0,
            rng,
        }
    }

    /// Consume the population, returning its molecules.
    pub fn into_molecules(self) -> Vec<M> {
        self.molecules
    }
}

impl<M: Molecule> Population<M> for ShufflePopulation<M> {
    fn len(&self) -> usize {
        self.molecules.len()
    }

    fn shuffle(&mut self) {
        self.settled = 0;
    }

    fn prefix(&mut self, k: usize) -> &[M] {
        let len = self.molecules.len();
        assert!(k <= len, "Cannot draw {} molecules from {}", k, len);

        for i in self.settled..k {
            let j = self.rng.gen_range(i..len);
            self.molecules.swap(i, j);
        }
        self.settled = self.settled.max(k);
        &self.molecules[..k]
    }

    fn replace_prefix(&mut self, k: usize, contents: Vec<M>) {
        let len = self.molecules.len();
        assert!(k <= len, "Cannot replace {} molecules out of {}", k, len);

        if contents.len() == k {
            for (slot, molecule) in self.molecules.iter_mut().zip(contents) {
                *slot = molecule;
            }
        } else {
            self.molecules.splice(..k, contents);
        }
        // Replaced slots are no longer random draws
        self.settled = 0;
    }

    fn molecules(&self) -> &[M] {
        &self.molecules
    }
}
