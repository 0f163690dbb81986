/*!
A database of ground atoms.

Atoms are held in a dense vector and indexed by a hash map from the atom to its position, so:
- Indices are dense, zero-based, and stable for the lifetime of the database.
- Adding an atom which structurally equals an existing atom returns the existing index, in amortized constant time.
*/

use std::collections::HashMap;

use crate::structures::atom::{AtomIndex, GroundAtom};

/// The atom database.
#[derive(Debug, Default)]
pub struct AtomDB {
    /// Atoms, indexed by their [AtomIndex].
    atoms: Vec<GroundAtom>,

    /// Atom → index, for dedup by structural equality.
    ids: HashMap<GroundAtom, AtomIndex>,
}

impl AtomDB {
    /// The index of the atom, appending the atom to the database if it is not already present.
    pub fn add(&mut self, atom: GroundAtom) -> AtomIndex {
        match self.ids.get(&atom) {
            Some(index) => *index,
            None => {
                let index = self.atoms.len() as AtomIndex;
                self.ids.insert(atom.clone(), index);
                self.atoms.push(atom);
                index
            }
        }
    }

    /// The index of the atom, if present.
    pub fn index_of(&self, atom: &GroundAtom) -> Option<AtomIndex> {
        self.ids.get(atom).copied()
    }

    /// The atom at the given index.
    ///
    /// # Panics
    /// If the index was not issued by this database.
    pub fn atom(&self, index: AtomIndex) -> &GroundAtom {
        &self.atoms[index as usize]
    }

    /// A count of atoms in the database.
    pub fn count(&self) -> usize {
        self.atoms.len()
    }

    /// An iterator over (index, atom) pairs, in index order.
    pub fn atoms(&self) -> impl Iterator<Item = (AtomIndex, &GroundAtom)> {
        self.atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| (i as AtomIndex, atom))
    }
}
