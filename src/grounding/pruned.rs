/*!
Pruned grounding of pure conjunctions over a closed-world predicate.

Unrestricted grounding of a conjunction with *k* free variables over domains of size *d* enumerates *d^k* assignments.
When the conjunction contains a positive literal on a closed-world predicate, only assignments consistent with the *true* evidence atoms of that predicate can ever be satisfied: every other assignment falsifies the closed-world literal.
The pruned path therefore unifies each true evidence atom positionally against that literal and enumerates only the remaining free variables, for a cost of |true atoms| × d^(k − bound).

Applicability is deliberately narrow --- correctness over speed:
- The formula must be a pure conjunction of literals (a single literal counts as a conjunction of one).
- Some literal must be positive and on a closed-world predicate.

Anything else returns `None`, and the caller falls back to unrestricted grounding.
The surviving output is identical to unrestricted grounding minus the instances whose closed-world literal is false under evidence.
*/

use std::collections::{HashMap, HashSet};

use crate::{
    catalog::Catalog,
    db::{atom::AtomDB, evidence::EvidenceDB},
    grounding::instances::{FormulaGroundings, GroundInstance},
    structures::formula::{Formula, Literal, Term},
    types::err::ErrorKind,
};

/// The literals of a pure conjunction, or `None` for any other formula shape.
pub fn conjunctive_literals(formula: &Formula) -> Option<Vec<&Literal>> {
    match formula {
        Formula::Literal(literal) => Some(vec![literal]),

        Formula::And(parts) => {
            let mut literals = Vec::with_capacity(parts.len());
            for part in parts {
                match part {
                    Formula::Literal(literal) => literals.push(literal),
                    _ => return None,
                }
            }
            Some(literals)
        }

        _ => None,
    }
}

/// Grounds a pure conjunction through its closed-world literal, or `None` if the pruning is not applicable.
pub fn ground_pruned(
    formula: &Formula,
    source: usize,
    hard: bool,
    catalog: &Catalog,
    atom_db: &AtomDB,
    evidence: &EvidenceDB,
) -> Option<Result<Vec<GroundInstance>, ErrorKind>> {
    let literals = conjunctive_literals(formula)?;

    let pivot = literals
        .iter()
        .find(|literal| literal.polarity && catalog.is_closed_world(&literal.predicate))?;

    Some(ground_through_pivot(
        formula, pivot, source, hard, catalog, atom_db, evidence,
    ))
}

/// Enumerates the bindings of the pivot literal against the true evidence atoms of its predicate, grounding the residual variables of each.
fn ground_through_pivot(
    formula: &Formula,
    pivot: &Literal,
    source: usize,
    hard: bool,
    catalog: &Catalog,
    atom_db: &AtomDB,
    evidence: &EvidenceDB,
) -> Result<Vec<GroundInstance>, ErrorKind> {
    let mut bindings: Vec<HashMap<String, String>> = Vec::default();
    let mut seen: HashSet<Vec<(String, String)>> = HashSet::default();

    // true_atoms is sorted by index, so binding order (and with it instance order) is deterministic.
    for atom_index in evidence.true_atoms() {
        let atom = atom_db.atom(atom_index);
        if atom.predicate != pivot.predicate || atom.args.len() != pivot.args.len() {
            continue;
        }

        let mut binding: HashMap<String, String> = HashMap::default();
        let mut consistent = true;

        for (term, constant) in pivot.args.iter().zip(&atom.args) {
            match term {
                Term::Constant(c) => {
                    if c != constant {
                        consistent = false;
                        break;
                    }
                }

                Term::Variable(variable) => match binding.get(variable) {
                    Some(existing) if existing != constant => {
                        consistent = false;
                        break;
                    }
                    _ => {
                        binding.insert(variable.clone(), constant.clone());
                    }
                },
            }
        }

        if !consistent {
            continue;
        }

        // Each assignment grounds its residual product once, whatever bound it.
        let mut key: Vec<(String, String)> = binding
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect();
        key.sort();

        if seen.insert(key) {
            bindings.push(binding);
        }
    }

    let mut instances = Vec::default();
    for binding in bindings {
        let grounder =
            FormulaGroundings::with_binding(formula, source, hard, catalog, atom_db, binding)?;
        for instance in grounder {
            instances.push(instance?);
        }
    }
    Ok(instances)
}
