/*!
Configuration of a context.

All configuration for a context is contained within the context.
Procedures clone or read parts of the configuration, and no tunable lives in a global: the closed-world predicate set belongs to the [catalog](crate::catalog), and everything else is here.
*/

/// The probability of accepting a weight-losing flip, were annealing in effect.
pub type AnnealingAcceptance = f64;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The seed of the context's source of rng. Runs are deterministic given a seed.
    pub seed: u64,

    /// Configuration of MAP search.
    pub map: MapConfig,

    /// Configuration of the diagonal-Newton weight optimizer.
    pub newton: NewtonConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            seed: 0,
            map: MapConfig::default(),
            newton: NewtonConfig::default(),
        }
    }
}

/// Configuration of MAP search.
#[derive(Clone, Debug)]
pub struct MapConfig {
    /// The cap on flips made during a search.
    pub flip_cap: usize,

    /// The satisfied-weight threshold above which search terminates, if supplied.
    /// Otherwise the threshold is derived: `threshold_bias` plus the weights of hard formulas true under the initial state.
    pub threshold: Option<f64>,

    /// The constant part of the derived termination threshold.
    pub threshold_bias: f64,
}

impl Default for MapConfig {
    fn default() -> Self {
        MapConfig {
            flip_cap: 1000,
            threshold: None,
            threshold_bias: -5.0,
        }
    }
}

/// Configuration of the diagonal-Newton weight optimizer.
#[derive(Clone, Debug)]
pub struct NewtonConfig {
    /// The gradient-norm tolerance below which the iteration has converged.
    pub tolerance: f64,

    /// The cap on Newton steps.
    pub step_cap: usize,

    /// The initial damping scalar λ driving the backtracking accept/reject loop.
    pub lambda: f64,
}

impl Default for NewtonConfig {
    fn default() -> Self {
        NewtonConfig {
            tolerance: 1e-6,
            step_cap: 100,
            lambda: 0.5,
        }
    }
}
