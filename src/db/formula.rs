/*!
A database of formulas: the weighted source formulas of the model, and the ground formulas produced from them.

Source formulas are immutable apart from their weights, which learning revises in place.
Ground formulas are append-only, and each records the index of its source for weight lookup.
*/

use crate::{
    structures::{formula::Formula, ground::GroundFormula, interpretation::Interpretation},
    types::err::ErrorKind,
};

/// A source formula together with its weight and hardness.
#[derive(Clone, Debug)]
pub struct SourceFormula {
    /// The first-order formula.
    pub formula: Formula,

    /// The weight of the formula.
    pub weight: f64,

    /// Whether the formula is a hard (infinite-weight) constraint.
    pub hard: bool,
}

/// The formula database.
#[derive(Debug, Default)]
pub struct FormulaDB {
    /// The source formulas, in insertion order.
    sources: Vec<SourceFormula>,

    /// The ground formulas, in insertion order.
    ground: Vec<GroundFormula>,
}

impl FormulaDB {
    /// Appends a source formula, returning its index.
    pub fn add_source(&mut self, formula: Formula, weight: f64, hard: bool) -> usize {
        let index = self.sources.len();
        self.sources.push(SourceFormula {
            formula,
            weight,
            hard,
        });
        index
    }

    /// The source formula at the given index.
    pub fn source(&self, index: usize) -> &SourceFormula {
        &self.sources[index]
    }

    /// A count of source formulas.
    pub fn source_count(&self) -> usize {
        self.sources.len()
    }

    /// The current weight vector, in source-formula order.
    pub fn weights(&self) -> Vec<f64> {
        self.sources.iter().map(|s| s.weight).collect()
    }

    /// Replaces the weights of the source formulas, e.g. with a fitted weight vector.
    pub fn set_weights(&mut self, weights: &[f64]) -> Result<(), ErrorKind> {
        if weights.len() != self.sources.len() {
            return Err(ErrorKind::WeightCount {
                expected: self.sources.len(),
                found: weights.len(),
            });
        }

        for (source, weight) in self.sources.iter_mut().zip(weights) {
            source.weight = *weight;
        }
        Ok(())
    }

    /// Appends a ground formula, returning its index.
    pub fn add_ground(&mut self, ground: GroundFormula) -> usize {
        let index = self.ground.len();
        self.ground.push(ground);
        index
    }

    /// The ground formula at the given index.
    pub fn ground(&self, index: usize) -> &GroundFormula {
        &self.ground[index]
    }

    /// The ground formulas of the database.
    pub fn ground_formulas(&self) -> &[GroundFormula] {
        &self.ground
    }

    /// A count of ground formulas.
    pub fn ground_count(&self) -> usize {
        self.ground.len()
    }

    /// The weight of a ground formula --- the weight of its source.
    pub fn weight_of(&self, ground_index: usize) -> f64 {
        self.sources[self.ground[ground_index].source].weight
    }

    /// The total weight of ground formulas true under the given interpretation.
    ///
    /// A whole-model evaluation for diagnostics; search rescores only the formulas relevant to a mutated block.
    pub fn satisfied_weight(&self, state: &impl Interpretation) -> f64 {
        self.ground
            .iter()
            .enumerate()
            .filter(|(_, gf)| gf.is_true(state))
            .map(|(i, _)| self.weight_of(i))
            .sum()
    }
}
