/*!
The grounding engine --- expansion of the first-order model into a propositional ground model.

Grounding is atom-first:
- [ground_atoms](crate::context::GenericContext::ground_atoms) enumerates, for every predicate, the Cartesian product of its argument domains in domain-insertion order, appending one ground atom per tuple to the atom database.
  Atoms of a functional predicate are grouped into mutual-exclusion blocks over the value position as they are created; every other atom sits in a singleton block.
- [ground_formulas](crate::context::GenericContext::ground_formulas) then binds the free variables of each source formula to domain constants, one ground formula per total assignment.
  Instances which fold to a constant truth value are dropped.
  Pure conjunctions over a closed-world predicate take the [pruned path](pruned), which enumerates only assignments consistent with the true evidence atoms of that predicate.

A formula with *k* free variables over domains of size *d* admits *d^k* assignments, which is the reason formula grounding is a [pull-based lazy sequence](instances::FormulaGroundings) and the reason the pruned path exists.
*/

pub mod instances;
pub mod pruned;

use self::instances::FormulaGroundings;
use crate::{
    context::{ContextState, GenericContext},
    db::BlockIndex,
    misc::log::targets::{self},
    structures::atom::GroundAtom,
    types::err::{self, ErrorKind},
};

pub use instances::GroundInstance;

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Grounds every predicate of the catalog, populating the atom and block databases.
    ///
    /// For each predicate the Cartesian product of its argument domains is enumerated in domain-insertion order, rightmost argument fastest, so indices are deterministic for a given catalog.
    /// Fails with [EmptyDomain](err::GroundingError::EmptyDomain) if any referenced domain is undefined or empty.
    pub fn ground_atoms(&mut self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Input => {}
            _ => return Err(err::StateError::InputClosed.into()),
        };

        for predicate in self.catalog.predicates() {
            let columns: Vec<&[String]> = predicate
                .signature
                .iter()
                .map(|domain| self.catalog.constants(domain))
                .collect::<Result<_, _>>()?;

            if predicate.functional {
                // One block per prefix tuple, over the value position.
                let (prefix, value) = columns.split_at(columns.len() - 1);
                let value_column = value[0];

                let mut odometer = vec![0_usize; prefix.len()];
                loop {
                    let mut members = Vec::with_capacity(value_column.len());

                    for constant in value_column {
                        let mut args: Vec<String> = odometer
                            .iter()
                            .enumerate()
                            .map(|(position, choice)| prefix[position][*choice].clone())
                            .collect();
                        args.push(constant.clone());

                        let atom = GroundAtom::new(predicate.name.clone(), args);
                        members.push(self.atom_db.add(atom));
                    }

                    self.block_db.add_block(members);

                    if !advance(&mut odometer, prefix) {
                        break;
                    }
                }
            } else {
                let mut odometer = vec![0_usize; columns.len()];
                loop {
                    let args: Vec<String> = odometer
                        .iter()
                        .enumerate()
                        .map(|(position, choice)| columns[position][*choice].clone())
                        .collect();

                    let atom = GroundAtom::new(predicate.name.clone(), args);
                    let index = self.atom_db.add(atom);
                    self.block_db.add_block(vec![index]);

                    if !advance(&mut odometer, &columns) {
                        break;
                    }
                }
            }
        }

        log::info!(target: targets::GROUNDING,
            "grounded {} atoms in {} blocks",
            self.atom_db.count(),
            self.block_db.count());

        self.state = ContextState::Atoms;
        Ok(())
    }

    /// Grounds every source formula, populating the ground-formula database and the block → relevant-formula lists.
    ///
    /// Must be called after [ground_atoms](GenericContext::ground_atoms); evidence asserted beforehand informs the pruned path.
    pub fn ground_formulas(&mut self) -> Result<(), ErrorKind> {
        match self.state {
            ContextState::Atoms => {}
            ContextState::Input => return Err(err::StateError::AtomsRequired.into()),
            ContextState::Grounded => return Err(err::StateError::InputClosed.into()),
        };

        for source_index in 0..self.formula_db.source_count() {
            let source = self.formula_db.source(source_index).clone();

            let pruned = pruned::ground_pruned(
                &source.formula,
                source_index,
                source.hard,
                &self.catalog,
                &self.atom_db,
                &self.evidence,
            );

            match pruned {
                Some(instances) => {
                    self.counters.pruned_sources += 1;
                    log::trace!(target: targets::GROUNDING,
                        "formula {source_index} grounded via the closed-world path");

                    for instance in instances? {
                        let ground_index = self.formula_db.add_ground(instance.formula);

                        let mut noted: Vec<BlockIndex> = Vec::new();
                        for atom in &instance.atoms {
                            let block = self.block_db.block_of(*atom);
                            if !noted.contains(&block) {
                                noted.push(block);
                                self.block_db.note_relevant(block, ground_index);
                            }
                        }

                        self.counters.ground_instances += 1;
                    }
                }

                None => {
                    let grounder = FormulaGroundings::new(
                        &source.formula,
                        source_index,
                        source.hard,
                        &self.catalog,
                        &self.atom_db,
                    )?;

                    for instance in grounder {
                        let instance = instance?;
                        let ground_index = self.formula_db.add_ground(instance.formula);

                        let mut noted: Vec<BlockIndex> = Vec::new();
                        for atom in &instance.atoms {
                            let block = self.block_db.block_of(*atom);
                            if !noted.contains(&block) {
                                noted.push(block);
                                self.block_db.note_relevant(block, ground_index);
                            }
                        }

                        self.counters.ground_instances += 1;
                    }
                }
            }
        }

        log::info!(target: targets::GROUNDING,
            "grounded {} formula instances from {} sources",
            self.formula_db.ground_count(),
            self.formula_db.source_count());

        self.state = ContextState::Grounded;
        Ok(())
    }
}

/// Advances an odometer over the given columns, rightmost position fastest.
/// Returns false when every tuple has been visited.
fn advance(odometer: &mut [usize], columns: &[&[String]]) -> bool {
    let mut position = odometer.len();
    loop {
        if position == 0 {
            return false;
        }
        position -= 1;

        odometer[position] += 1;
        if odometer[position] < columns[position].len() {
            return true;
        }
        odometer[position] = 0;
    }
}
