//! Structures, abstracted from their use in grounding, search, or learning.

pub mod atom;
pub mod formula;
pub mod ground;
pub mod interpretation;
