/*!
A total function from ground atoms to truth values.

The canonical representation of an interpretation is a vector of booleans whose length is the number of ground atoms in the model, where the value of atom *a* is the contents of index *a*.

The trait is implemented for anything which can be dereferenced to a slice of booleans.

```rust
# use marmot::structures::interpretation::Interpretation;
let state = vec![true, false, true];

assert_eq!(state.value_of(1), Some(false));
assert_eq!(state.atom_count(), 3);
```

On the hot path of search the unchecked accessor is preferred over the safe accessor.
The implementation on slices 'only' guarantees *memory* safety, while use requires the stronger guarantee that the value of the atom of interest is stored at the index of the atom, and with this an additional bounds check is redundant.
*/

use crate::structures::atom::AtomIndex;

/// The canonical representation of an interpretation.
pub type CInterpretation = Vec<bool>;

/// Something which stores a truth value for every ground atom of a model.
pub trait Interpretation {
    /// Some value of an atom under the interpretation, if the atom is part of the interpretation.
    fn value_of(&self, atom: AtomIndex) -> Option<bool>;

    /// The value of an atom under the interpretation.
    ///
    /// # Safety
    /// Implementations are not required to check the atom is part of the interpretation.
    unsafe fn value_of_unchecked(&self, atom: AtomIndex) -> bool;

    /// The number of atoms valued by the interpretation.
    fn atom_count(&self) -> usize;
}

impl<S: std::ops::Deref<Target = [bool]>> Interpretation for S {
    fn value_of(&self, atom: AtomIndex) -> Option<bool> {
        self.get(atom as usize).copied()
    }

    unsafe fn value_of_unchecked(&self, atom: AtomIndex) -> bool {
        *self.get_unchecked(atom as usize)
    }

    fn atom_count(&self) -> usize {
        self.len()
    }
}
