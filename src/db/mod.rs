//! Databases owned by a context, populated during grounding and read during search and learning.

pub mod atom;
pub mod block;
pub mod evidence;
pub mod formula;

/// The index of a block in the block database.
pub type BlockIndex = usize;

/// The index of a ground formula in the formula database.
pub type GroundFormulaIndex = usize;
