/*!
Approximate MAP inference by stochastic local search over the ground model.

# Overview

The search maintains one working truth-value state over the ground atoms, initialized from evidence where given and an otherwise-arbitrary consistent default (the first open member of a multi-member block, false for a singleton).
A multi-member block whose every member is recorded false by evidence is left unselected rather than overridden.
Each iteration picks a block uniformly at random among the blocks not fixed by evidence and mutates its selection:
- A multi-member block selects a member uniformly at random --- that member becomes true, its siblings false.
- A singleton negates its atom.

Scoring is incremental: a flip rescores only the ground formulas recorded as relevant to the mutated block, never the whole model, which is the reason the block database carries those lists.
The search terminates when the satisfied-weight sum exceeds a threshold --- supplied by the caller, or derived as a constant bias plus the weights of hard formulas true under the initial state --- or when the flip cap is reached.
Non-convergence is not an error: the outcome reports the final state, sum, and flip count either way.

# Two preserved oddities

Behavior observed in the lineage of this implementation is kept as-is rather than silently repaired, and both points deserve attention before any hardening:

- A weight-losing flip computes a simulated-annealing acceptance probability from the relative loss and the fraction of iterations remaining, and then accepts the flip regardless.
  Annealing is, in effect, disabled; the probability is logged at trace level and nothing more.
- Hard constraints are not enforced during search.
  Their weights (only) bias the termination threshold, so a run which satisfies its hard formulas early terminates sooner, but a flip violating one is not rejected.
*/

use std::time::Instant;

use crate::{
    config::AnnealingAcceptance,
    context::{ContextState, GenericContext},
    misc::log::targets::{self},
    reports::MapOutcome,
    structures::interpretation::CInterpretation,
    types::err::{self, ErrorKind},
};

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// Searches for a high-weight truth-value state of the ground model.
    pub fn map_search(&mut self) -> Result<MapOutcome, ErrorKind> {
        match self.state {
            ContextState::Grounded => {}
            _ => return Err(err::StateError::GroundingRequired.into()),
        };

        let search_time = Instant::now();

        let mut state = self.initial_state();
        let mut sum = self.formula_db.satisfied_weight(&state);

        let threshold = match self.config.map.threshold {
            Some(threshold) => threshold,
            None => {
                // Bias the target by the hard formulas already satisfied.
                let hard_true: f64 = self
                    .formula_db
                    .ground_formulas()
                    .iter()
                    .enumerate()
                    .filter(|(_, gf)| gf.hard && gf.is_true(&state))
                    .map(|(index, _)| self.formula_db.weight_of(index))
                    .sum();
                self.config.map.threshold_bias + hard_true
            }
        };

        let free_blocks = self.block_db.free_blocks();
        let flip_cap = self.config.map.flip_cap;
        let mut iterations = 0;

        log::info!(target: targets::MAP,
            "search over {} free blocks, initial weight {sum:.4}, threshold {threshold:.4}",
            free_blocks.len());

        while !free_blocks.is_empty() && iterations < flip_cap && sum <= threshold {
            iterations += 1;
            self.counters.total_flips += 1;

            let block_index = free_blocks[self.rng.gen_range(0..free_blocks.len())];
            let member_count = self.block_db.block(block_index).members.len();

            let selection = match member_count {
                1 => None,
                _ => Some(self.rng.gen_range(0..member_count)),
            };

            let sum_before = self.relevant_weight(block_index, &state);

            {
                let block = self.block_db.block(block_index);
                match selection {
                    Some(choice) => {
                        let chosen = block.members[choice];
                        for member in &block.members {
                            state[*member as usize] = *member == chosen;
                        }
                    }

                    None => {
                        let atom = block.members[0] as usize;
                        state[atom] = !state[atom];
                    }
                }
            }

            let sum_after = self.relevant_weight(block_index, &state);
            let delta = sum_after - sum_before;

            if delta < 0.0 {
                // Computed, logged, and ignored --- see the module docs.
                let remaining = 1.0 - iterations as f64 / flip_cap as f64;
                let acceptance: AnnealingAcceptance =
                    (delta / sum_before.abs().max(1.0) / remaining.max(f64::EPSILON)).exp();

                log::trace!(target: targets::MAP,
                    "flip {iterations}: Δ {delta:.4}, annealing acceptance {acceptance:.4}");
            }

            sum += delta;
        }

        self.counters.time += search_time.elapsed();

        let converged = sum > threshold;
        log::info!(target: targets::MAP,
            "search ended after {iterations} flips with weight {sum:.4} (converged: {converged})");

        Ok(MapOutcome {
            state,
            satisfied_weight: sum,
            iterations,
            converged,
        })
    }

    /// A consistent initial state: evidence where given, the first open member of a multi-member block, false otherwise.
    /// A block whose every member is recorded false is left without a selection.
    fn initial_state(&self) -> CInterpretation {
        let mut state = vec![false; self.atom_db.count()];

        for (atom, value) in self.evidence.iter() {
            state[atom as usize] = value;
        }

        for block in self.block_db.blocks() {
            if block.is_singleton() {
                continue;
            }

            let selected = block
                .members
                .iter()
                .any(|member| state[*member as usize]);

            if !selected {
                let open = block
                    .members
                    .iter()
                    .find(|member| self.evidence.value_of(**member).is_none());

                // A block with every member recorded false stays as evidence gave it.
                if let Some(member) = open {
                    state[*member as usize] = true;
                }
            }
        }

        state
    }

    /// The total weight of the ground formulas relevant to the block which are true under the state.
    fn relevant_weight(&self, block: crate::db::BlockIndex, state: &CInterpretation) -> f64 {
        self.block_db
            .relevant(block)
            .iter()
            .filter(|index| {
                // Every atom of a grounded formula is within the state by construction.
                unsafe {
                    self.formula_db
                        .ground(**index)
                        .expr
                        .is_true_unchecked(state)
                }
            })
            .map(|index| self.formula_db.weight_of(*index))
            .sum()
    }
}
