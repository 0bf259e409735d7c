//! Interactions - how reactants turn into products
//!
//! An interaction consumes a fixed number of reactants (its arity) and
//! either produces a new list of molecules or declines to react by
//! returning `None`. A declined interaction is *stable*: the reactants are
//! returned to the population untouched.
//!
//! The general constructor takes a slice of exactly `molecule_count`
//! reactants. For small arities there are constructors taking the reactants
//! as separate owned arguments:
//!
//! ```rust
//! use stoch_core::Interaction;
//!
//! // Two equal molecules merge into one of double the value.
//! let double = Interaction::binary(|a: u32, b: u32| {
//!     if a == b { Some(vec![2 * a]) } else { None }
//! });
//!
//! assert_eq!(double.molecule_count(), 2);
//! assert_eq!(double.run(vec![4, 4]).products(), &[8]);
//! assert!(double.run(vec![4, 2]).is_stable());
//! ```

use crate::molecule::Molecule;
use crate::record::InteractionRecord;
use std::fmt;
use std::rc::Rc;

/// Transformation from exactly `molecule_count` reactants to optional products
pub type Formula<M> = dyn Fn(&[M]) -> Option<Vec<M>>;

/// A reaction rule with a fixed number of reactants
pub struct Interaction<M: Molecule> {
    /// Number of reactants consumed per run
    molecule_count: usize,
    /// Shared so behaviors can hand out clones cheaply
    formula: Rc<Formula<M>>,
}

impl<M: Molecule> Interaction<M> {
    /// Create an interaction over `molecule_count` reactants.
    ///
    /// `formula` must return `None` when the reactants should be considered
    /// stable (no reaction).
    ///
    /// # Panics
    ///
    /// Panics if `molecule_count` is zero.
    pub fn new<F>(molecule_count: usize, formula: F) -> Self
    where
        F: Fn(&[M]) -> Option<Vec<M>> + 'static,
    {
        assert!(
            molecule_count >= 1,
            "An interaction needs at least one reactant"
        );
        Self {
            molecule_count,
            formula: Rc::new(formula),
        }
    }

    /// Interaction with 1 reactant
    pub fn unary<F>(formula: F) -> Self
    where
        F: Fn(M) -> Option<Vec<M>> + 'static,
    {
        Self::new(1, move |m: &[M]| formula(m[0].clone()))
    }

    /// Interaction with 2 reactants
    pub fn binary<F>(formula: F) -> Self
    where
        F: Fn(M, M) -> Option<Vec<M>> + 'static,
    {
        Self::new(2, move |m: &[M]| formula(m[0].clone(), m[1].clone()))
    }

    /// Interaction with 3 reactants
    pub fn ternary<F>(formula: F) -> Self
    where
        F: Fn(M, M, M) -> Option<Vec<M>> + 'static,
    {
        Self::new(3, move |m: &[M]| {
            formula(m[0].clone(), m[1].clone(), m[2].clone())
        })
    }

    /// Interaction with 4 reactants
    pub fn quaternary<F>(formula: F) -> Self
    where
        F: Fn(M, M, M, M) -> Option<Vec<M>> + 'static,
    {
        Self::new(4, move |m: &[M]| {
            formula(m[0].clone(), m[1].clone(), m[2].clone(), m[3].clone())
        })
    }

    /// Interaction with 5 reactants
    pub fn quinary<F>(formula: F) -> Self
    where
        F: Fn(M, M, M, M, M) -> Option<Vec<M>> + 'static,
    {
        Self::new(5, move |m: &[M]| {
            formula(
                m[0].clone(),
                m[1].clone(),
                m[2].clone(),
                m[3].clone(),
                m[4].clone(),
            )
        })
    }

    /// Interaction with 6 reactants
    pub fn senary<F>(formula: F) -> Self
    where
        F: Fn(M, M, M, M, M, M) -> Option<Vec<M>> + 'static,
    {
        Self::new(6, move |m: &[M]| {
            formula(
                m[0].clone(),
                m[1].clone(),
                m[2].clone(),
                m[3].clone(),
                m[4].clone(),
                m[5].clone(),
            )
        })
    }

    /// Number of reactants this interaction consumes
    pub fn molecule_count(&self) -> usize {
        self.molecule_count
    }

    /// Run the interaction on `reactants`, evaluating the formula once.
    ///
    /// # Panics
    ///
    /// Panics if `reactants.len()` differs from `molecule_count`. Sampling the
    /// right number of reactants is the caller's job.
    pub fn run(&self, reactants: Vec<M>) -> InteractionRecord<M> {
        assert_eq!(
            reactants.len(),
            self.molecule_count,
            "Interaction expects exactly {} reactants",
            self.molecule_count
        );
        let products = (self.formula)(&reactants);
        InteractionRecord::new(reactants, products)
    }
}

impl<M: Molecule> Clone for Interaction<M> {
    fn clone(&self) -> Self {
        Self {
            molecule_count: self.molecule_count,
            formula: Rc::clone(&self.formula),
        }
    }
}

impl<M: Molecule> fmt::Debug for Interaction<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Interaction")
            .field("molecule_count", &self.molecule_count)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_arity_constructors() {
        assert_eq!(Interaction::unary(|a: i32| Some(vec![a])).molecule_count(), 1);
        assert_eq!(Interaction::binary(|a: i32, _| Some(vec![a])).molecule_count(), 2);
        assert_eq!(
            Interaction::ternary(|a: i32, _, _| Some(vec![a])).molecule_count(),
            3
        );
        assert_eq!(
            Interaction::quaternary(|a: i32, _, _, _| Some(vec![a])).molecule_count(),
            4
        );
        assert_eq!(
            Interaction::quinary(|a: i32, _, _, _, _| Some(vec![a])).molecule_count(),
            5
        );
        assert_eq!(
            Interaction::senary(|a: i32, _, _, _, _, _| Some(vec![a])).molecule_count(),
            6
        );
    }

    #[test]
    fn test_arguments_passed_in_order() {
        let concat = Interaction::ternary(|a: i32, b: i32, c: i32| Some(vec![a * 100 + b * 10 + c]));
        assert_eq!(concat.run(vec![1, 2, 3]).products(), &[123]);
    }

    #[test]
    fn test_run_wraps_products() {
        let split = Interaction::unary(|a: u32| Some(vec![a / 2, a - a / 2]));
        let record = split.run(vec![5]);

        assert!(!record.is_stable());
        assert_eq!(record.reactants(), &[5]);
        assert_eq!(record.products(), &[2, 3]);
    }

    #[test]
    fn test_declined_run_is_stable() {
        let never = Interaction::binary(|_: u8, _: u8| None);
        let record = never.run(vec![1, 2]);

        assert!(record.is_stable());
        assert_eq!(record.products(), &[1, 2]);
    }

    #[test]
    fn test_formula_evaluated_once_per_run() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let interaction = Interaction::new(1, move |m: &[i32]| {
            counter.set(counter.get() + 1);
            Some(m.to_vec())
        });

        interaction.run(vec![7]);
        interaction.clone().run(vec![8]);
        assert_eq!(calls.get(), 2);
    }

    #[test]
    #[should_panic(expected = "exactly 2 reactants")]
    fn test_wrong_reactant_count_panics() {
        let merge = Interaction::binary(|a: i32, _| Some(vec![a]));
        merge.run(vec![1, 2, 3]);
    }

    #[test]
    #[should_panic(expected = "at least one reactant")]
    fn test_zero_arity_panics() {
        let _ = Interaction::new(0, |_: &[i32]| None);
    }
}
