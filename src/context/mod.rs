/*!
The context --- to which a model is added and within which grounding, search, and learning take place.

Strictly, a [GenericContext] and a [Context].

The generic context is designed to be generic over various parameters, though for the moment this is limited to the source of randomness.
Still, this helps distinguish generic context methods against those intended for external use or a particular application.
In particular, [from_config](Context::from_config) is implemented for a context rather than a generic context to avoid requiring a source of randomness to be supplied alongside a config.

# Example
```rust
# use marmot::context::Context;
# use marmot::config::Config;
# use marmot::structures::formula::{Formula, Literal, Term};
let mut the_context = Context::from_config(Config::default());

the_context.add_domain("person", ["anna", "bob"]).unwrap();
the_context.add_predicate("friends", &["person", "person"], false).unwrap();

the_context.ground_atoms().unwrap();

// Two persons, so two-by-two friendship atoms.
assert_eq!(the_context.atom_db.count(), 4);
```
*/

mod counters;
pub use counters::Counters;
mod generic;
pub use generic::GenericContext;
mod specific;
pub use specific::Context;

/// The state of a context.
///
/// The model is revisable in [Input](ContextState::Input), frozen once atoms exist, and procedures require a fully grounded model.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContextState {
    /// The context allows input: domains, predicates, and formulas may be added.
    Input,

    /// Ground atoms and blocks exist; evidence may be asserted, formulas are not yet grounded.
    Atoms,

    /// The ground model is complete and procedures may run.
    Grounded,
}

impl std::fmt::Display for ContextState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Input => write!(f, "Input"),
            Self::Atoms => write!(f, "Atoms"),
            Self::Grounded => write!(f, "Grounded"),
        }
    }
}
