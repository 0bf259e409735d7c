//! Behaviors choose which interaction to attempt each step.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};
use std::fmt;
use stoch_core::{Interaction, Molecule};

/// Interaction-selection policy, queried once per simulation step.
pub struct Behavior<M: Molecule> {
    backing: Box<dyn FnMut() -> Interaction<M>>,
}

impl<M: Molecule> Behavior<M> {
    /// Always attempt the same interaction.
    pub fn fixed(interaction: Interaction<M>) -> Self {
        Self {
            backing: Box::new(move || interaction.clone()),
        }
    }

    /// Pick uniformly at random among `interactions` on every call, using an
    /// entropy-seeded generator.
    ///
    /// # Panics
    ///
    /// Panics if `interactions` is empty.
    pub fn uniform(interactions: Vec<Interaction<M>>) -> Self {
        Self::uniform_with_rng(interactions, StdRng::from_entropy())
    }

    /// Like [`Behavior::uniform`] with a deterministic seed.
    pub fn uniform_seeded(interactions: Vec<Interaction<M>>, seed: u64) -> Self {
        Self::uniform_with_rng(interactions, StdRng::seed_from_u64(seed))
    }

    /// Like [`Behavior::uniform`], drawing from `rng`.
    ///
    /// Every call is an independent draw, so runs of the same interaction
    /// are as likely as with any other uniform source.
    pub fn uniform_with_rng<R>(interactions: Vec<Interaction<M>>, mut rng: R) -> Self
    where
        R: RngCore + 'static,
    {
        assert!(
            !interactions.is_empty(),
            "Must supply at least one interaction"
        );
        Self {
            backing: Box::new(move || {
                let index = rng.gen_range(0..interactions.len());
                interactions[index].clone()
            }),
        }
    }

    /// Cycle through `interactions` in order, wrapping around.
    ///
    /// # Panics
    ///
    /// Panics if `interactions` is empty.
    pub fn round_robin(interactions: Vec<Interaction<M>>) -> Self {
        assert!(
            !interactions.is_empty(),
            "Must supply at least one interaction"
        );
        let mut next = 0;
        Self {
            backing: Box::new(move || {
                let interaction = interactions[next].clone();
                next = (next + 1) % interactions.len();
                interaction
            }),
        }
    }

    /// Delegate to an arbitrary generator.
    pub fn from_fn<F>(generator: F) -> Self
    where
        F: FnMut() -> Interaction<M> + 'static,
    {
        Self {
            backing: Box::new(generator),
        }
    }

    /// The next interaction to attempt.
    pub fn interaction(&mut self) -> Interaction<M> {
        (self.backing)()
    }
}

impl<M: Molecule> From<Interaction<M>> for Behavior<M> {
    fn from(interaction: Interaction<M>) -> Self {
        Self::fixed(interaction)
    }
}

impl<M: Molecule> fmt::Debug for Behavior<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Behavior").finish_non_exhaustive()
    }
}
