/*!
A database of evidence --- a partial function from ground atoms to truth values.

Evidence is built from parsed literal assertions (see [builder::literal](crate::builder::literal)) and consulted by:
- the pruned grounding path, which enumerates the *true* atoms of a closed-world predicate;
- search initialization, which seeds the working state from evidence where given.

Within a mutual-exclusion block, evidence assigns true to at most one member; the context enforces this when applying assertions.
*/

use std::collections::HashMap;

use crate::{
    structures::atom::AtomIndex,
    types::err::{self, ErrorKind},
};

/// The evidence database.
#[derive(Debug, Default)]
pub struct EvidenceDB {
    values: HashMap<AtomIndex, bool>,
}

impl EvidenceDB {
    /// Records a truth value for an atom.
    ///
    /// Recording the value an atom already has is a no-op; recording the opposite value is a conflict.
    pub fn set(&mut self, atom: AtomIndex, value: bool) -> Result<(), ErrorKind> {
        match self.values.get(&atom) {
            Some(existing) if *existing != value => {
                Err(err::EvidenceError::ValuationConflict(atom).into())
            }
            _ => {
                self.values.insert(atom, value);
                Ok(())
            }
        }
    }

    /// The recorded value of an atom, if any.
    pub fn value_of(&self, atom: AtomIndex) -> Option<bool> {
        self.values.get(&atom).copied()
    }

    /// Whether the atom is recorded as true.
    pub fn is_true(&self, atom: AtomIndex) -> bool {
        matches!(self.values.get(&atom), Some(true))
    }

    /// A count of recorded values.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// An iterator over (atom, value) pairs, in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (AtomIndex, bool)> + '_ {
        self.values.iter().map(|(atom, value)| (*atom, *value))
    }

    /// The atoms recorded as true, sorted by index for deterministic traversal.
    pub fn true_atoms(&self) -> Vec<AtomIndex> {
        let mut atoms: Vec<AtomIndex> = self
            .values
            .iter()
            .filter(|(_, value)| **value)
            .map(|(atom, _)| *atom)
            .collect();
        atoms.sort_unstable();
        atoms
    }
}
