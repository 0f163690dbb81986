/*!
A database of mutual-exclusion blocks.

A block is a group of ground atoms of which exactly one is true at a time.
Blocks arise from functional (multi-valued) predicates; atoms of ordinary predicates sit in singleton blocks and toggle independently.

For search efficiency the database also records, per block, which ground formulas can change truth value when the block's selection changes.
These lists drive the incremental rescoring of the search loop: only the formulas relevant to a mutated block are ever re-evaluated.
*/

use crate::{
    db::{BlockIndex, GroundFormulaIndex},
    structures::atom::AtomIndex,
};

/// A group of mutually exclusive, jointly exhaustive ground atoms.
#[derive(Clone, Debug)]
pub struct Block {
    /// The member atoms of the block.
    pub members: Vec<AtomIndex>,

    /// Whether the block's selection is fixed by evidence, and so excluded from search.
    pub fixed: bool,
}

impl Block {
    /// Whether the block holds a single independently toggled atom.
    pub fn is_singleton(&self) -> bool {
        self.members.len() == 1
    }
}

/// The block database.
#[derive(Debug, Default)]
pub struct BlockDB {
    /// Blocks, indexed by [BlockIndex].
    blocks: Vec<Block>,

    /// Atom index → containing block. Every atom belongs to exactly one block.
    block_of: Vec<BlockIndex>,

    /// Block → indices of the ground formulas whose truth value can change with the block's selection.
    relevant: Vec<Vec<GroundFormulaIndex>>,
}

impl BlockDB {
    /// Appends a block over the given member atoms, returning its index.
    ///
    /// Members are expected to be fresh: an atom may belong to at most one block.
    pub fn add_block(&mut self, members: Vec<AtomIndex>) -> BlockIndex {
        let index = self.blocks.len();

        for member in &members {
            let member = *member as usize;
            if self.block_of.len() <= member {
                self.block_of.resize(member + 1, 0);
            }
            self.block_of[member] = index;
        }

        self.blocks.push(Block {
            members,
            fixed: false,
        });
        self.relevant.push(Vec::default());
        index
    }

    /// The block containing the given atom.
    pub fn block_of(&self, atom: AtomIndex) -> BlockIndex {
        self.block_of[atom as usize]
    }

    /// The block at the given index.
    pub fn block(&self, index: BlockIndex) -> &Block {
        &self.blocks[index]
    }

    /// The blocks of the database.
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// A count of blocks in the database.
    pub fn count(&self) -> usize {
        self.blocks.len()
    }

    /// Fixes the block's selection, excluding it from search.
    pub fn fix(&mut self, index: BlockIndex) {
        self.blocks[index].fixed = true;
    }

    /// Notes a ground formula as relevant to the block.
    ///
    /// Grounding calls this once per (formula, block) pair, so the lists are duplicate-free.
    pub fn note_relevant(&mut self, block: BlockIndex, formula: GroundFormulaIndex) {
        self.relevant[block].push(formula);
    }

    /// The ground formulas relevant to the block.
    pub fn relevant(&self, block: BlockIndex) -> &[GroundFormulaIndex] {
        &self.relevant[block]
    }

    /// The indices of blocks not fixed by evidence, in index order.
    pub fn free_blocks(&self) -> Vec<BlockIndex> {
        self.blocks
            .iter()
            .enumerate()
            .filter(|(_, block)| !block.fixed)
            .map(|(index, _)| index)
            .collect()
    }
}
