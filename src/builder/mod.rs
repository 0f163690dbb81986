/*!
Programmatic construction of a model within a context.

Methods to add domains, predicates, and weighted formulas while the context is in its input state, and to assert evidence once ground atoms exist.

Evidence is asserted as text in one of two forms (see [literal] for the grammar):
- `pred(a,…)` or `!pred(a,…)` --- the literal form, setting the atom's truth directly.
- `pred(a,…)=value` --- the assignment form, where `True`/`False` set the atom's truth and any other value is appended as a final argument, asserting a multi-valued selection.

Asserting a true atom of a multi-member block selects it: the siblings are recorded false and the block is fixed against search.
*/

pub mod literal;

use crate::{
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    structures::{atom::GroundAtom, formula::Formula},
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Adds a domain with the given constants, extending the domain if it already exists.
    pub fn add_domain(
        &mut self,
        name: &str,
        constants: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<(), ErrorKind> {
        self.require_input()?;
        self.catalog.add_domain(name, constants);
        Ok(())
    }

    /// Adds a predicate with the given argument signature.
    ///
    /// A `functional` predicate is multi-valued: its last argument is a value position, and grounding groups its atoms into mutual-exclusion blocks over that position.
    pub fn add_predicate(
        &mut self,
        name: &str,
        signature: &[&str],
        functional: bool,
    ) -> Result<(), ErrorKind> {
        self.require_input()?;
        self.catalog.add_predicate(name, signature, functional)
    }

    /// Marks a predicate as closed-world, enabling the pruned grounding path for conjunctions over it.
    pub fn set_closed_world(&mut self, predicate: &str) -> Result<(), ErrorKind> {
        self.require_input()?;
        self.catalog.set_closed_world(predicate);
        Ok(())
    }

    /// Adds a weighted formula, returning its index.
    ///
    /// `hard` marks the formula as a hard constraint; its weight then (only) biases the termination threshold of MAP search.
    pub fn add_formula(
        &mut self,
        formula: Formula,
        weight: f64,
        hard: bool,
    ) -> Result<usize, ErrorKind> {
        self.require_input()?;
        Ok(self.formula_db.add_source(formula, weight, hard))
    }

    /// Asserts an evidence literal, given as text.
    ///
    /// Requires ground atoms, and so must be called after [ground_atoms](GenericContext::ground_atoms).
    /// To inform the pruned grounding path, assert evidence before [ground_formulas](GenericContext::ground_formulas).
    pub fn assert_evidence(&mut self, text: &str) -> Result<(), ErrorKind> {
        if self.state == ContextState::Input {
            return Err(err::StateError::AtomsRequired.into());
        }

        let (predicate, args, truth) = literal::parse_literal(text)?;

        let arity = match self.catalog.predicate(&predicate) {
            Some(p) => p.arity(),
            None => return Err(err::EvidenceError::UnknownPredicate(predicate).into()),
        };

        if args.len() != arity {
            return Err(err::EvidenceError::ArityMismatch {
                predicate,
                expected: arity,
                found: args.len(),
            }
            .into());
        }

        let atom = GroundAtom::new(predicate, args);
        let index = match self.atom_db.index_of(&atom) {
            Some(index) => index,
            None => return Err(err::GroundingError::UnknownAtom(atom.to_string()).into()),
        };

        log::trace!(target: targets::EVIDENCE, "assert {atom} = {truth}");

        self.evidence.set(index, truth)?;

        let block_index = self.block_db.block_of(index);
        let block = self.block_db.block(block_index);

        if block.is_singleton() {
            self.block_db.fix(block_index);
        } else if truth {
            // A true selection excludes the siblings and settles the block.
            let siblings: Vec<_> = block
                .members
                .iter()
                .copied()
                .filter(|m| *m != index)
                .collect();

            for sibling in siblings {
                self.evidence.set(sibling, false)?;
            }
            self.block_db.fix(block_index);
        }

        Ok(())
    }

    fn require_input(&self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Input => Ok(()),
            _ => Err(err::StateError::InputClosed.into()),
        }
    }
}
