/*!
Reports returned by the procedures of the library.

Neither procedure signals non-convergence as an error.
An outcome always carries the final iterate together with diagnostics, and accept/reject policy rests with the caller.
*/

use crate::structures::interpretation::CInterpretation;

/// The outcome of a MAP search.
#[derive(Clone, Debug)]
pub struct MapOutcome {
    /// The final truth-value state, indexed by atom.
    pub state: CInterpretation,

    /// The total weight of ground formulas satisfied by the final state.
    pub satisfied_weight: f64,

    /// The number of flips made.
    pub iterations: usize,

    /// Whether the satisfied weight exceeded the termination threshold, as opposed to the flip cap being reached.
    pub converged: bool,
}

impl std::fmt::Display for MapOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "MAP: weight {:.4} after {} flips ({})",
            self.satisfied_weight,
            self.iterations,
            if self.converged {
                "converged"
            } else {
                "flip cap reached"
            }
        )
    }
}

/// The outcome of a weight fit.
#[derive(Clone, Debug)]
pub struct FitOutcome {
    /// The final weight vector, in source-formula order.
    pub weights: Vec<f64>,

    /// The number of Newton steps taken.
    pub iterations: usize,

    /// The norm of the gradient at the final weights.
    pub gradient_norm: f64,

    /// Whether the gradient norm fell within tolerance, as opposed to the step cap being reached.
    pub converged: bool,
}

impl std::fmt::Display for FitOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Fit: ‖∇‖ {:.2e} after {} steps ({})",
            self.gradient_norm,
            self.iterations,
            if self.converged {
                "converged"
            } else {
                "step cap reached"
            }
        )
    }
}
