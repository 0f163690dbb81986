/*!
A lazy sequence of the ground instances of a formula.

[FormulaGroundings] binds the free variables of a formula to the constants of their domains, one total assignment at a time, in nested-loop order --- the first variable to occur in the formula varies slowest.
Each assignment is substituted into the formula and the result simplified; instances folding to a constant truth value are skipped, and every other instance is interned against the atom database and yielded.

The sequence is pull-based: nothing is buffered, so grounding a formula with a large Cartesian product of assignments costs memory proportional to one instance.
*/

use std::collections::HashMap;

use crate::{
    catalog::Catalog,
    db::atom::AtomDB,
    structures::{
        atom::{AtomIndex, GroundAtom},
        formula::{Formula, Term},
        ground::{GroundExpr, GroundFormula},
    },
    types::err::{self, ErrorKind},
};

/// A ground formula together with the distinct atom indices it references.
#[derive(Clone, Debug)]
pub struct GroundInstance {
    /// The ground formula.
    pub formula: GroundFormula,

    /// The distinct atom indices referenced, sorted.
    pub atoms: Vec<AtomIndex>,
}

/// A lazy sequence over the ground instances of a formula.
pub struct FormulaGroundings<'g> {
    formula: &'g Formula,

    /// The index of the source formula, inherited by every instance.
    source: usize,

    /// Whether the source formula is hard, inherited by every instance.
    hard: bool,

    atom_db: &'g AtomDB,

    /// Variables bound in advance, e.g. by the pruned grounding path. Not enumerated.
    fixed: HashMap<String, String>,

    /// The free variables in first-occurrence order, each with the constants of its domain.
    variables: Vec<(String, &'g [String])>,

    /// The current assignment, as a choice of constant per free variable.
    odometer: Vec<usize>,

    exhausted: bool,
}

impl<'g> FormulaGroundings<'g> {
    /// A sequence over every ground instance of the formula.
    pub fn new(
        formula: &'g Formula,
        source: usize,
        hard: bool,
        catalog: &'g Catalog,
        atom_db: &'g AtomDB,
    ) -> Result<Self, ErrorKind> {
        Self::with_binding(formula, source, hard, catalog, atom_db, HashMap::default())
    }

    /// A sequence over the ground instances consistent with a partial binding.
    ///
    /// Variables bound by `fixed` are substituted as given and not enumerated.
    pub fn with_binding(
        formula: &'g Formula,
        source: usize,
        hard: bool,
        catalog: &'g Catalog,
        atom_db: &'g AtomDB,
        fixed: HashMap<String, String>,
    ) -> Result<Self, ErrorKind> {
        let mut order: Vec<(String, String)> = Vec::default();
        let mut fault: Option<ErrorKind> = None;

        formula.for_each_literal(&mut |literal| {
            if fault.is_some() {
                return;
            }

            let Some(predicate) = catalog.predicate(&literal.predicate) else {
                fault = Some(err::GroundingError::UnknownPredicate(literal.predicate.clone()).into());
                return;
            };

            if literal.args.len() != predicate.arity() {
                fault = Some(
                    err::GroundingError::ArityMismatch {
                        predicate: literal.predicate.clone(),
                        expected: predicate.arity(),
                        found: literal.args.len(),
                    }
                    .into(),
                );
                return;
            }

            for (position, term) in literal.args.iter().enumerate() {
                if let Term::Variable(variable) = term {
                    if fixed.contains_key(variable) {
                        continue;
                    }

                    let domain = &predicate.signature[position];
                    match order.iter().position(|(known, _)| known == variable) {
                        None => order.push((variable.clone(), domain.clone())),

                        // The domain of a variable is set by its first occurrence.
                        Some(known) if &order[known].1 != domain => {
                            fault = Some(
                                err::GroundingError::DomainMismatch(variable.clone()).into(),
                            );
                        }

                        Some(_) => {}
                    }
                }
            }
        });

        if let Some(fault) = fault {
            return Err(fault);
        }

        let mut variables = Vec::with_capacity(order.len());
        for (variable, domain) in order {
            variables.push((variable, catalog.constants(&domain)?));
        }

        Ok(FormulaGroundings {
            formula,
            source,
            hard,
            atom_db,
            fixed,
            odometer: vec![0; variables.len()],
            variables,
            exhausted: false,
        })
    }

    /// Advances the odometer, last variable fastest. Sets `exhausted` after the final assignment.
    fn advance(&mut self) {
        let mut position = self.odometer.len();
        loop {
            if position == 0 {
                self.exhausted = true;
                return;
            }
            position -= 1;

            self.odometer[position] += 1;
            if self.odometer[position] < self.variables[position].1.len() {
                return;
            }
            self.odometer[position] = 0;
        }
    }
}

impl Iterator for FormulaGroundings<'_> {
    type Item = Result<GroundInstance, ErrorKind>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.exhausted {
                return None;
            }

            let mut binding = self.fixed.clone();
            for (position, (variable, constants)) in self.variables.iter().enumerate() {
                binding.insert(
                    variable.clone(),
                    constants[self.odometer[position]].clone(),
                );
            }
            self.advance();

            match self.formula.substitute(&binding).simplified() {
                // Constant instances contribute nothing to the objective.
                Formula::Value(_) => continue,

                bound => {
                    let mut atoms = Vec::default();
                    let expr = match intern(&bound, self.atom_db, &mut atoms) {
                        Ok(expr) => expr,
                        Err(e) => return Some(Err(e)),
                    };
                    atoms.sort_unstable();
                    atoms.dedup();

                    return Some(Ok(GroundInstance {
                        formula: GroundFormula {
                            expr,
                            source: self.source,
                            hard: self.hard,
                        },
                        atoms,
                    }));
                }
            }
        }
    }
}

/// Maps a fully bound formula to an expression over atom indices, recording each referenced atom.
fn intern(
    formula: &Formula,
    atom_db: &AtomDB,
    atoms: &mut Vec<AtomIndex>,
) -> Result<GroundExpr, ErrorKind> {
    match formula {
        Formula::Literal(literal) => {
            let mut args = Vec::with_capacity(literal.args.len());
            for term in &literal.args {
                match term {
                    Term::Constant(constant) => args.push(constant.clone()),

                    Term::Variable(variable) => {
                        return Err(err::GroundingError::UnboundVariable(variable.clone()).into())
                    }
                }
            }

            let atom = GroundAtom::new(literal.predicate.clone(), args);
            let Some(index) = atom_db.index_of(&atom) else {
                return Err(err::GroundingError::UnknownAtom(atom.to_string()).into());
            };
            atoms.push(index);

            let expr = GroundExpr::Atom(index);
            match literal.polarity {
                true => Ok(expr),
                false => Ok(GroundExpr::Not(Box::new(expr))),
            }
        }

        Formula::Not(subformula) => Ok(GroundExpr::Not(Box::new(intern(
            subformula, atom_db, atoms,
        )?))),

        Formula::And(parts) => parts
            .iter()
            .map(|part| intern(part, atom_db, atoms))
            .collect::<Result<Vec<_>, _>>()
            .map(GroundExpr::And),

        Formula::Or(parts) => parts
            .iter()
            .map(|part| intern(part, atom_db, atoms))
            .collect::<Result<Vec<_>, _>>()
            .map(GroundExpr::Or),

        Formula::Value(_) => Err(err::GroundingError::ResidualConstant.into()),
    }
}
