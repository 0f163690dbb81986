//! Procedures over a ground model: MAP stochastic local search and diagonal-Newton weight fitting.

pub mod map_search;
pub mod optimize;
