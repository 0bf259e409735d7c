//! Detector - the stopping condition of a simulation.
//!
//! A detector is a two-phase state machine:
//!
//! ```text
//!   Setup(factory) --initialize(initial)--> Detect(predicate)
//! ```
//!
//! The factory sees the initial population once and builds the per-record
//! predicate, which owns whatever counters or windows it needs. Every
//! accounted record overwrites `satisfied` with the predicate's answer.
//!
//! Calling `initialize` twice, or `account` before `initialize`, is a bug in
//! the caller and panics. The `try_*` variants report the same conditions as
//! [`DetectorError`] values.

use crate::error::{DetectorError, Result};
use crate::window::DeltaWindow;
use std::fmt;
use stoch_core::{HashableMolecule, InteractionRecord, Molecule};
use tracing::{debug, trace};

/// Per-record stopping test, with its state captured inside
type Predicate<M> = Box<dyn FnMut(&InteractionRecord<M>) -> bool>;

/// Builds a predicate from the initial population
type Factory<M> = Box<dyn Fn(&[M]) -> Predicate<M>>;

enum Phase<M: Molecule> {
    /// Not yet initialized, factory pending
    Setup(Factory<M>),
    /// Initialized, predicate live
    Detect(Predicate<M>),
}

/// Stopping condition fed one record per successful simulation step
pub struct Detector<M: Molecule> {
    phase: Phase<M>,
    satisfied: bool,
    accounted: u64,
}

impl<M: Molecule> Detector<M> {
    /// Create a custom detector from a predicate factory.
    ///
    /// The predicate's answer replaces `satisfied` on every record, so a
    /// non-monotonic predicate can become unsatisfied again. Keeping it
    /// monotonic, if that matters, is up to the caller.
    pub fn new<F, P>(factory: F) -> Self
    where
        F: Fn(&[M]) -> P + 'static,
        P: FnMut(&InteractionRecord<M>) -> bool + 'static,
    {
        Self {
            phase: Phase::Setup(Box::new(move |initial: &[M]| -> Predicate<M> {
                Box::new(factory(initial))
            })),
            satisfied: false,
            accounted: 0,
        }
    }

    /// Bind the detector to the initial population.
    ///
    /// # Panics
    ///
    /// Panics if the detector was already initialized.
    pub fn initialize(&mut self, initial: &[M]) {
        if let Err(err) = self.try_initialize(initial) {
            panic!("{}", err);
        }
    }

    /// Bind the detector to the initial population, reporting misuse as an error
    pub fn try_initialize(&mut self, initial: &[M]) -> Result<()> {
        let predicate = match &self.phase {
            Phase::Setup(factory) => factory(initial),
            Phase::Detect(_) => return Err(DetectorError::AlreadyInitialized),
        };
        self.phase = Phase::Detect(predicate);
        debug!(population = initial.len(), "detector initialized");
        Ok(())
    }

    /// Feed a record to the detector, updating `satisfied`.
    ///
    /// # Panics
    ///
    /// Panics if the detector has not been initialized.
    pub fn account(&mut self, record: &InteractionRecord<M>) {
        if let Err(err) = self.try_account(record) {
            panic!("{}", err);
        }
    }

    /// Feed a record to the detector, returning the new `satisfied` value
    pub fn try_account(&mut self, record: &InteractionRecord<M>) -> Result<bool> {
        match &mut self.phase {
            Phase::Detect(predicate) => {
                self.satisfied = predicate(record);
                self.accounted += 1;
                trace!(
                    accounted = self.accounted,
                    satisfied = self.satisfied,
                    "record accounted"
                );
                Ok(self.satisfied)
            }
            Phase::Setup(_) => Err(DetectorError::NotInitialized),
        }
    }

    /// Whether the stopping condition currently holds
    pub fn satisfied(&self) -> bool {
        self.satisfied
    }

    /// Whether `initialize` has been called
    pub fn is_initialized(&self) -> bool {
        matches!(self.phase, Phase::Detect(_))
    }

    /// Number of records accounted so far
    pub fn accounted(&self) -> u64 {
        self.accounted
    }

    /// Satisfied after the first record, whatever it is.
    pub fn immediately() -> Self {
        Self::new(|_| |_: &InteractionRecord<M>| true)
    }

    /// Never satisfied.
    pub fn never() -> Self {
        Self::new(|_| |_: &InteractionRecord<M>| false)
    }

    /// Satisfied from the `target_count`-th record on.
    pub fn after(target_count: u64) -> Self {
        Self::new(move |_| {
            let mut count = 0u64;
            move |_: &InteractionRecord<M>| {
                count += 1;
                count >= target_count
            }
        })
    }

    /// Satisfied once `streak_length` consecutive records were stable.
    ///
    /// Any reacting record resets the streak.
    pub fn when_stable(streak_length: usize) -> Self {
        Self::new(move |_| {
            let mut streak = 0usize;
            move |record: &InteractionRecord<M>| {
                if record.is_stable() {
                    streak += 1;
                } else {
                    streak = 0;
                }
                streak >= streak_length
            }
        })
    }
}

impl<M: HashableMolecule> Detector<M> {
    /// Satisfied when the summed deltas of the last `streak_length` records
    /// deviate from zero by at most `absolute_tolerance` molecules.
    ///
    /// # Panics
    ///
    /// Panics if `streak_length` is zero.
    pub fn when_stable_within(streak_length: usize, absolute_tolerance: u64) -> Self {
        Self::windowed(streak_length, move |window| {
            window.deviation() <= absolute_tolerance
        })
    }

    /// Satisfied when the summed deltas of the last `streak_length` records,
    /// relative to the running molecule count, are at most `percent_tolerance`.
    ///
    /// `percent_tolerance` is a fraction: `0.05` means five percent. An empty
    /// population only passes with zero deviation.
    ///
    /// # Panics
    ///
    /// Panics if `streak_length` is zero.
    pub fn when_stable_within_percent(streak_length: usize, percent_tolerance: f64) -> Self {
        Self::windowed(streak_length, move |window| {
            let deviation = window.deviation();
            match window.molecule_count() {
                count if count > 0 => deviation as f64 / count as f64 <= percent_tolerance,
                _ => deviation == 0,
            }
        })
    }

    /// Queue, evaluate over the full window, then age.
    fn windowed<T>(streak_length: usize, test: T) -> Self
    where
        T: Fn(&DeltaWindow<M>) -> bool + Copy + 'static,
    {
        assert!(
            streak_length >= 1,
            "A windowed detector needs a streak length of at least one"
        );
        Self::new(move |initial: &[M]| {
            let mut window = DeltaWindow::new(streak_length, initial.len() as i64);
            move |record: &InteractionRecord<M>| {
                window.push(record.deltas());
                if !window.is_full() {
                    return false;
                }
                let satisfied = test(&window);
                window.age();
                satisfied
            }
        })
    }
}

impl<M: Molecule> fmt::Debug for Detector<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phase = match self.phase {
            Phase::Setup(_) => "Setup",
            Phase::Detect(_) => "Detect",
        };
        f.debug_struct("Detector")
            .field("phase", &phase)
            .field("satisfied", &self.satisfied)
            .field("accounted", &self.accounted)
            .finish()
    }
}
