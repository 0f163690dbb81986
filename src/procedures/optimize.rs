/*!
Weight fitting by damped diagonal-Newton iteration.

The optimizer treats the training objective as opaque: anything supplying a gradient and a diagonal Hessian over a weight vector can be fitted.
For Markov logic weight learning the objective is typically a pseudo-log-likelihood, computed by a caller over the ground model; nothing here is specific to that choice.

Each step scales the gradient by the reciprocal of the diagonal Hessian and moves against the scaled gradient, toward a stationary point of the objective.
Dimensions whose Hessian entry is exactly zero are degenerate --- the local model offers no information --- and both the gradient and the scaled gradient are zeroed there, locally and without error: zero entries are an expected edge case of sparse objectives.

A damping scalar λ (initially 0.5) sets the step fraction α = 1/(1 + λ) and drives a backtracking loop:
- A step which does not increase the gradient norm is accepted; λ is halved when the actual improvement exceeds 0.75 of the prediction (the local model earns trust) and quadrupled when it falls below 0.25.
- A step which increases the gradient norm is rejected, the weights restored, and the step retried with λ quadrupled.

Convergence is a gradient norm within tolerance; exhausting the step cap returns the last iterate with diagnostics, not an error.
*/

use crate::{config::NewtonConfig, misc::log::targets::{self}, reports::FitOutcome};

/// A differentiable training objective over a weight vector.
///
/// Supplying the capability is the whole contract: the optimizer never evaluates the objective itself, only its derivatives.
pub trait Objective {
    /// The gradient of the objective at the given weights.
    fn gradient(&self, weights: &[f64]) -> Vec<f64>;

    /// The diagonal of the Hessian of the objective at the given weights.
    fn hessian_diagonal(&self, weights: &[f64]) -> Vec<f64>;
}

/// Fits a weight vector to the objective by damped diagonal-Newton iteration.
pub fn fit(objective: &impl Objective, initial: Vec<f64>, config: &NewtonConfig) -> FitOutcome {
    let mut weights = initial;
    let mut lambda = config.lambda;

    let mut gradient = objective.gradient(&weights);
    let mut iterations = 0;
    let mut converged = false;
    let mut stalled = false;

    loop {
        let norm = euclidean_norm(&gradient);

        if norm <= config.tolerance {
            converged = true;
            break;
        }
        if iterations >= config.step_cap || stalled {
            break;
        }
        iterations += 1;

        let hessian = objective.hessian_diagonal(&weights);

        let mut masked = gradient.clone();
        let mut scaled = vec![0.0; masked.len()];
        for (dimension, entry) in hessian.iter().enumerate() {
            if *entry == 0.0 {
                // Degenerate direction: nothing to learn from it this step.
                masked[dimension] = 0.0;
            } else {
                scaled[dimension] = masked[dimension] / entry;
            }
        }
        let masked_norm = euclidean_norm(&masked);

        // Backtracking on λ: retry the step until it does not worsen the gradient.
        loop {
            let alpha = 1.0 / (1.0 + lambda);

            let predicted = 0.5
                * alpha
                * masked
                    .iter()
                    .zip(&hessian)
                    .map(|(g, h)| g.signum() * (g + h * g))
                    .sum::<f64>();

            let trial: Vec<f64> = weights
                .iter()
                .zip(&scaled)
                .map(|(w, s)| w - alpha * s)
                .collect();

            let trial_gradient = objective.gradient(&trial);
            let actual = masked_norm - euclidean_norm(&trial_gradient);

            if actual >= 0.0 {
                weights = trial;
                gradient = trial_gradient;

                let ratio = match predicted.abs() > f64::EPSILON {
                    true => actual / predicted,
                    false => 1.0,
                };

                if ratio > 0.75 {
                    lambda /= 2.0;
                } else if ratio < 0.25 {
                    lambda *= 4.0;
                }

                log::trace!(target: targets::NEWTON,
                    "step {iterations}: ‖∇‖ {:.4e}, ratio {ratio:.3}, λ {lambda:.4}",
                    euclidean_norm(&gradient));
                break;
            }

            lambda *= 4.0;

            if lambda > 1e12 {
                // No usable step at any damping; report the current iterate.
                log::trace!(target: targets::NEWTON, "step {iterations}: damping exhausted");
                stalled = true;
                break;
            }
        }
    }

    FitOutcome {
        gradient_norm: euclidean_norm(&gradient),
        weights,
        iterations,
        converged,
    }
}

fn euclidean_norm(vector: &[f64]) -> f64 {
    vector.iter().map(|v| v * v).sum::<f64>().sqrt()
}

#[cfg(test)]
mod newton_tests {
    use super::*;

    /// Gradient 2(w − c) with constant Hessian 2, stationary at c.
    struct Bowl {
        center: f64,
    }

    impl Objective for Bowl {
        fn gradient(&self, weights: &[f64]) -> Vec<f64> {
            weights.iter().map(|w| 2.0 * (w - self.center)).collect()
        }

        fn hessian_diagonal(&self, weights: &[f64]) -> Vec<f64> {
            vec![2.0; weights.len()]
        }
    }

    #[test]
    fn bowl_centre_found() {
        let outcome = fit(&Bowl { center: 3.0 }, vec![0.0], &NewtonConfig::default());

        assert!(outcome.converged);
        assert!(outcome.iterations < 50);
        assert!((outcome.weights[0] - 3.0).abs() < 1e-5);
    }

    #[test]
    fn degenerate_dimension_untouched() {
        /// A bowl over the first dimension only; the second has no curvature.
        struct HalfFlat {}

        impl Objective for HalfFlat {
            fn gradient(&self, weights: &[f64]) -> Vec<f64> {
                vec![2.0 * (weights[0] - 1.0), 0.0]
            }

            fn hessian_diagonal(&self, _weights: &[f64]) -> Vec<f64> {
                vec![2.0, 0.0]
            }
        }

        let outcome = fit(&HalfFlat {}, vec![5.0, 7.0], &NewtonConfig::default());

        assert!(outcome.converged);
        assert!((outcome.weights[0] - 1.0).abs() < 1e-5);
        assert_eq!(outcome.weights[1], 7.0);
    }
}
