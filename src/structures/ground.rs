/*!
Ground formulas --- predicate-free realizations of a source formula under one total variable substitution.

A ground formula stores an expression tree over [atom indices](AtomIndex), the index of the formula it was grounded from (for weight lookup during search and learning), and whether the source was a hard constraint.
Constant truth values never appear in the tree: instances which fold to a constant are dropped during grounding, as they contribute nothing to the objective.
*/

use crate::structures::{atom::AtomIndex, interpretation::Interpretation};

/// A propositional expression over ground atom indices.
#[derive(Clone, Debug, PartialEq)]
pub enum GroundExpr {
    /// A ground atom, by index.
    Atom(AtomIndex),

    /// The negation of a subexpression.
    Not(Box<GroundExpr>),

    /// The conjunction of a vector of subexpressions.
    And(Vec<GroundExpr>),

    /// The disjunction of a vector of subexpressions.
    Or(Vec<GroundExpr>),
}

impl GroundExpr {
    /// Whether the expression is true under the given interpretation.
    ///
    /// # Safety
    /// Every atom index of the expression must be valued by the interpretation.
    pub unsafe fn is_true_unchecked(&self, state: &impl Interpretation) -> bool {
        match self {
            GroundExpr::Atom(atom) => state.value_of_unchecked(*atom),

            GroundExpr::Not(subexpr) => !subexpr.is_true_unchecked(state),

            GroundExpr::And(parts) => parts.iter().all(|p| p.is_true_unchecked(state)),

            GroundExpr::Or(parts) => parts.iter().any(|p| p.is_true_unchecked(state)),
        }
    }

    /// Appends every atom index referenced by the expression to `out`, with repetition.
    pub fn collect_atoms(&self, out: &mut Vec<AtomIndex>) {
        match self {
            GroundExpr::Atom(atom) => out.push(*atom),

            GroundExpr::Not(subexpr) => subexpr.collect_atoms(out),

            GroundExpr::And(parts) | GroundExpr::Or(parts) => {
                for part in parts {
                    part.collect_atoms(out);
                }
            }
        }
    }
}

/// A ground formula.
#[derive(Clone, Debug)]
pub struct GroundFormula {
    /// The expression tree of the ground formula.
    pub expr: GroundExpr,

    /// The index of the source formula, for weight lookup.
    pub source: usize,

    /// Whether the source formula is a hard constraint.
    pub hard: bool,
}

impl GroundFormula {
    /// Whether the ground formula is true under the given interpretation.
    ///
    /// Atoms missing from the interpretation falsify the formula, though by the grounding precondition every referenced atom exists in the model.
    pub fn is_true(&self, state: &impl Interpretation) -> bool {
        let mut atoms = Vec::new();
        self.expr.collect_atoms(&mut atoms);
        if atoms.iter().any(|a| state.value_of(*a).is_none()) {
            return false;
        }
        // Checked above.
        unsafe { self.expr.is_true_unchecked(state) }
    }

    /// The distinct atom indices referenced by the formula, sorted.
    pub fn atoms(&self) -> Vec<AtomIndex> {
        let mut atoms = Vec::new();
        self.expr.collect_atoms(&mut atoms);
        atoms.sort_unstable();
        atoms.dedup();
        atoms
    }
}
