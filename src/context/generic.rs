use crate::{
    catalog::Catalog,
    config::Config,
    context::{ContextState, Counters},
    db::{atom::AtomDB, block::BlockDB, evidence::EvidenceDB, formula::FormulaDB},
    structures::interpretation::Interpretation,
};

/// A generic context, parameterised to a source of randomness.
///
/// Requires a source of [rng](rand::Rng) which (also) implements [Default].
///
/// # Example
///
/// ```rust
/// # use marmot::context::GenericContext;
/// # use marmot::generic::random::MinimalPCG32;
/// # use marmot::config::Config;
/// # use rand::SeedableRng;
/// let context = GenericContext::<MinimalPCG32>::with_rng(
///     Config::default(),
///     MinimalPCG32::from_seed(7_u64.to_le_bytes()),
/// );
/// ```
pub struct GenericContext<R: rand::Rng + std::default::Default> {
    /// The configuration of the context.
    pub config: Config,

    /// Counters related to a context/run.
    pub counters: Counters,

    /// The domain & predicate catalog.
    pub catalog: Catalog,

    /// The atom database.
    /// See [db::atom](crate::db::atom) for details.
    pub atom_db: AtomDB,

    /// The formula database: weighted source formulas and their ground instances.
    /// See [db::formula](crate::db::formula) for details.
    pub formula_db: FormulaDB,

    /// The block database, including block → relevant-formula lists.
    /// See [db::block](crate::db::block) for details.
    pub block_db: BlockDB,

    /// The evidence database.
    pub evidence: EvidenceDB,

    /// The state of the context.
    pub state: ContextState,

    /// The source of rng.
    pub rng: R,
}

impl<R: rand::Rng + std::default::Default> GenericContext<R> {
    /// A context over the given source of randomness.
    pub fn with_rng(config: Config, rng: R) -> Self {
        Self {
            config,

            counters: Counters::default(),
            catalog: Catalog::default(),

            atom_db: AtomDB::default(),
            formula_db: FormulaDB::default(),
            block_db: BlockDB::default(),
            evidence: EvidenceDB::default(),

            state: ContextState::Input,
            rng,
        }
    }

    /// The total weight of ground formulas true under the given interpretation.
    ///
    /// A whole-model evaluation for diagnostics; search rescores incrementally.
    pub fn satisfied_weight(&self, state: &impl Interpretation) -> f64 {
        self.formula_db.satisfied_weight(state)
    }

    /// Whether every multi-member block has exactly one true member under the given state.
    pub fn blocks_exclusive(&self, state: &impl Interpretation) -> bool {
        self.block_db.blocks().iter().all(|block| {
            block.is_singleton()
                || block
                    .members
                    .iter()
                    .filter(|m| state.value_of(**m) == Some(true))
                    .count()
                    == 1
        })
    }
}
