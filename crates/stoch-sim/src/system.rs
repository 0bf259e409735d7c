//! The simulation driver.

use crate::behavior::Behavior;
use crate::config::SimulationConfig;
use crate::error::{Result, SimError};
use crate::population::{Population, ShufflePopulation};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;
use stoch_core::{Interaction, InteractionRecord, Molecule};
use stoch_detect::Detector;
use tracing::{debug, trace, warn};

/// Summary of a finished simulation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Records fed to the detector.
    pub accounted: u64,
    /// Attempts skipped for lack of reactants.
    pub skipped: u64,
    /// Accounted records in which nothing reacted.
    pub stable: u64,
    /// Population size when the detector was satisfied.
    pub final_size: usize,
}

/// A system of molecules evolving through random interactions.
pub struct StochasticSystem<M: Molecule, P: Population<M> = ShufflePopulation<M>> {
    population: P,
    config: SimulationConfig,
    _molecule: PhantomData<M>,
}

impl<M: Molecule> StochasticSystem<M> {
    /// Create a system containing `molecules`, sampled with entropy.
    pub fn new(molecules: impl IntoIterator<Item = M>) -> Self {
        Self::with_config(molecules, SimulationConfig::default())
    }

    /// Create a system containing `molecules`, seeded from `config` when set.
    pub fn with_config(molecules: impl IntoIterator<Item = M>, config: SimulationConfig) -> Self {
        let population = match config.seed {
            Some(seed) => ShufflePopulation::seeded(molecules, seed),
            None => ShufflePopulation::new(molecules),
        };
        Self::from_population(population, config)
    }
}

impl<M: Molecule, P: Population<M>> StochasticSystem<M, P> {
    /// Create a system over any population implementation.
    pub fn from_population(population: P, config: SimulationConfig) -> Self {
        Self {
            population,
            config,
            _molecule: PhantomData,
        }
    }

    /// Current molecules.
    pub fn molecules(&self) -> &[M] {
        self.population.molecules()
    }

    /// Current number of molecules.
    pub fn len(&self) -> usize {
        self.population.len()
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    pub fn population(&self) -> &P {
        &self.population
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Consume the system, returning its population.
    pub fn into_population(self) -> P {
        self.population
    }

    /// Perform `interaction` on a random sample of the population.
    ///
    /// Returns `None` when the population holds fewer molecules than the
    /// interaction consumes; the population is left untouched in that case.
    pub fn perform_interaction(
        &mut self,
        interaction: &Interaction<M>,
    ) -> Option<InteractionRecord<M>> {
        let count = interaction.molecule_count();
        if self.population.len() < count {
            return None;
        }

        // Obtain random sample
        self.population.shuffle();
        let reactants = self.population.prefix(count).to_vec();

        let record = interaction.run(reactants);
        self.population
            .replace_prefix(count, record.products().to_vec());

        Some(record)
    }

    /// Run interactions chosen by `behavior` until `detector` is satisfied.
    ///
    /// Attempts that find too few molecules are skipped without telling the
    /// detector. Without `max_stalled_attempts` a behavior that can never be
    /// satisfied by the population loops forever.
    ///
    /// # Panics
    ///
    /// Panics if `detector` was already initialized.
    pub fn simulate(
        &mut self,
        mut behavior: Behavior<M>,
        mut detector: Detector<M>,
    ) -> Result<SimulationReport> {
        detector.initialize(self.population.molecules());
        debug!(population = self.population.len(), "simulation started");

        let mut accounted = 0u64;
        let mut skipped = 0u64;
        let mut stable = 0u64;
        let mut stalled = 0u64;

        while !detector.satisfied() {
            let interaction = behavior.interaction();
            let Some(record) = self.perform_interaction(&interaction) else {
                skipped += 1;
                stalled += 1;
                if let Some(limit) = self.config.max_stalled_attempts {
                    if stalled >= limit {
                        warn!(
                            attempts = stalled,
                            population = self.population.len(),
                            "simulation stalled"
                        );
                        return Err(SimError::Stalled {
                            attempts: stalled,
                            population: self.population.len(),
                        });
                    }
                }
                continue;
            };

            stalled = 0;
            accounted += 1;
            if record.is_stable() {
                stable += 1;
            }
            detector.account(&record);
            trace!(
                step = accounted,
                stable = record.is_stable(),
                population = self.population.len(),
                "interaction accounted"
            );
        }

        let report = SimulationReport {
            accounted,
            skipped,
            stable,
            final_size: self.population.len(),
        };
        debug!(
            accounted = report.accounted,
            skipped = report.skipped,
            final_size = report.final_size,
            "simulation finished"
        );
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SimulationConfigBuilder;

    fn merge_equal() -> Interaction<u32> {
        Interaction::binary(|a: u32, b: u32| (a == b).then(|| vec![a]))
    }

    #[test]
    fn test_perform_interaction_insufficient_population() {
        let mut system = StochasticSystem::new(vec![1u32]);
        assert!(system.perform_interaction(&merge_equal()).is_none());
        assert_eq!(system.molecules(), &[1]);
    }

    #[test]
    fn test_perform_interaction_replaces_reactants() {
        let mut system = StochasticSystem::with_config(
            vec![5u32, 5],
            SimulationConfigBuilder::new().seed(1).build(),
        );
        let record = system.perform_interaction(&merge_equal()).unwrap();

        assert!(!record.is_stable());
        assert_eq!(record.reactants(), &[5, 5]);
        assert_eq!(system.molecules(), &[5]);
    }

    #[test]
    fn test_stable_interaction_keeps_contents() {
        let mut system = StochasticSystem::with_config(
            vec![1u32, 2, 3],
            SimulationConfigBuilder::new().seed(2).build(),
        );
        let record = system.perform_interaction(&merge_equal()).unwrap();
        assert!(record.is_stable());

        let mut contents = system.molecules().to_vec();
        contents.sort();
        assert_eq!(contents, vec![1, 2, 3]);
    }

    #[test]
    fn test_simulate_immediately_accounts_once() {
        let mut system = StochasticSystem::new(vec![1u32, 1, 1]);
        let report = system
            .simulate(Behavior::fixed(merge_equal()), Detector::immediately())
            .unwrap();

        assert_eq!(report.accounted, 1);
        assert_eq!(report.skipped, 0);
        assert_eq!(report.final_size, 2);
    }

    #[test]
    fn test_skipped_attempts_are_invisible_to_detector() {
        let big = Interaction::new(10, |_: &[u32]| None);
        let small = Interaction::unary(|_: u32| None);
        let mut system = StochasticSystem::new(vec![1u32, 2]);

        let report = system
            .simulate(Behavior::round_robin(vec![big, small]), Detector::after(3))
            .unwrap();

        assert_eq!(report.accounted, 3);
        assert_eq!(report.stable, 3);
        assert_eq!(report.skipped, 3);
    }

    #[test]
    fn test_stall_limit() {
        let config = SimulationConfigBuilder::new()
            .seed(0)
            .max_stalled_attempts(25)
            .build();
        let mut system = StochasticSystem::with_config(vec![1u32], config);

        let result = system.simulate(Behavior::fixed(merge_equal()), Detector::never());
        assert_eq!(
            result,
            Err(SimError::Stalled {
                attempts: 25,
                population: 1
            })
        );
    }

    #[test]
    #[should_panic(expected = "initialized once")]
    fn test_reused_detector_panics() {
        let mut detector = Detector::never();
        detector.initialize(&[]);
        let mut system = StochasticSystem::new(vec![1u32, 1]);
        let _ = system.simulate(Behavior::fixed(merge_equal()), detector);
    }
}
