//! Molecule traits - the values a population is made of
//!
//! A molecule is any cloneable, comparable value. Nothing about its
//! structure is known to the simulator; interactions alone give it meaning.
//!
//! Some stopping conditions count molecules by identity (delta maps), which
//! additionally needs `Eq + Hash`.

use std::hash::Hash;

/// A value that can live in a population.
pub trait Molecule: Clone + PartialEq + 'static {}

impl<T: Clone + PartialEq + 'static> Molecule for T {}

/// A molecule usable as a map key, needed for delta accounting.
pub trait HashableMolecule: Molecule + Eq + Hash {}

impl<T: Molecule + Eq + Hash> HashableMolecule for T {}
