//! A library for grounding Markov logic networks and computing approximate MAP assignments and fitted formula weights.
//!
//! marmot takes a compact first-order probabilistic model --- typed predicates, domains, and weighted logical formulas --- together with an evidence set, expands it into a fully propositionalized ground Markov random field, and operates over that ground model with stochastic local search (for most-probable assignments) and second-order numeric optimization (for formula weights).
//!
//! marmot is developed to help researchers, developers, or anyone curious, to investigate statistical-relational inference, whether as a novice or through implementing novel ideas.
//!
//! # Orientation
//!
//! The library is designed around the core structure of a [context](crate::context).
//!
//! Contexts are built with a configuration, and a model is added programmatically: domains and predicates through the [catalog entry points](crate::context::GenericContext::add_domain), formulas through [add_formula](crate::context::GenericContext::add_formula), and evidence through [assert_evidence](crate::context::GenericContext::assert_evidence).
//!
//! Internally, and at a high level, a run is viewed in terms of a handful of databases which instantiate core theoretical objects.
//! Notably:
//! - Ground atoms are stored in an atom database, with each distinct atom assigned a dense index on first creation.
//! - Ground formulas are stored in a formula database, alongside the weights of their source formulas.
//! - Mutual-exclusion structure is stored in a block database, which also records which ground formulas are relevant to each block.
//! - Evidence is stored as a partial map from atom indices to truth values.
//!
//! Grounding reads the catalog and formulas to populate the databases, and inference and learning read (and in the case of a working truth-value state, revise) what grounding produced.
//!
//! Useful starting points, then, may be:
//! - The [grounding module](crate::grounding) to inspect how first-order formulas become propositional.
//! - The [procedures](crate::procedures) for the MAP search loop and the diagonal-Newton weight optimizer.
//! - The [structures] to familiarise yourself with the abstract elements of a run and their representation (formulas, ground atoms, interpretations, etc.)
//! - The [configuration](crate::config) to see which parameters are exposed.
//!
//! # Example
//!
//! ```rust
//! # use marmot::config::Config;
//! # use marmot::context::Context;
//! # use marmot::structures::formula::{Formula, Literal, Term};
//! let mut the_context = Context::from_config(Config::default());
//!
//! the_context.add_domain("person", ["anna", "bob"]).unwrap();
//! the_context.add_predicate("smokes", &["person"], false).unwrap();
//!
//! let smokes_x = Formula::Literal(Literal {
//!     predicate: "smokes".to_string(),
//!     args: vec![Term::Variable("x".to_string())],
//!     polarity: true,
//! });
//! the_context.add_formula(smokes_x, 1.5, false).unwrap();
//!
//! the_context.ground_atoms().unwrap();
//! the_context.ground_formulas().unwrap();
//!
//! let outcome = the_context.map_search().unwrap();
//! assert_eq!(outcome.state.len(), 2);
//! ```
//!
//! # Determinism
//!
//! Procedures which require randomness are implemented on a context generic over a source of rng, fixed by default to a seeded [PCG32](crate::generic::random::MinimalPCG32).
//! A run is deterministic given its seed; restarts with different seeds are an external policy.
//!
//! # Literature
//!
//! The grounding and search design follows the standard presentation of Markov logic networks given in [Richardson and Domingos, *Markov logic networks*](https://doi.org/10.1007/s10994-006-5833-1), with pseudo-log-likelihood weight learning as surveyed in the same paper.

pub mod builder;
pub mod catalog;
pub mod config;
pub mod context;
pub mod db;
pub mod generic;
pub mod grounding;
pub mod misc;
pub mod procedures;
pub mod reports;
pub mod structures;
pub mod types;
