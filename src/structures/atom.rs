/*!
(The representation of) a ground atom --- a fully instantiated predicate application.

A ground atom pairs a predicate name with an ordered list of bound constants, e.g. `smokes(anna)` or `friends(anna, bob)`.
Identity is structural: the same predicate and arguments is the same atom.

The atom database assigns each distinct ground atom a dense, zero-based [AtomIndex] on first creation, and the index is the sole handle used elsewhere in the library.
This allows atoms to be used as the indices of a structure, e.g. `state[a]`, without taking too much space.

# Notes
- Indices are stable for the lifetime of the ground model which issued them.
- In the SAT literature ground atoms are often called 'variables', while in the logic literature these are often called 'atoms'.
*/

/// The index of a ground atom in an atom database.
pub type AtomIndex = u32;

/// The maximum instance of an atom index.
pub const ATOM_MAX: AtomIndex = AtomIndex::MAX;

/// A fully instantiated predicate application.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GroundAtom {
    /// The name of the predicate applied.
    pub predicate: String,

    /// The constants the predicate is applied to, in signature order.
    pub args: Vec<String>,
}

impl GroundAtom {
    /// A fresh ground atom over the given predicate and constants.
    pub fn new(predicate: impl Into<String>, args: Vec<String>) -> Self {
        GroundAtom {
            predicate: predicate.into(),
            args,
        }
    }
}

impl std::fmt::Display for GroundAtom {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}({})", self.predicate, self.args.join(","))
    }
}
