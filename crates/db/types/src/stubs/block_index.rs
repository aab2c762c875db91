use std::collections::HashSet;

use synchk_primitives::BlockHash;

use crate::traits::BlockIndex;

/// Block index that only knows a fixed set of hashes.
#[derive(Clone, Debug, Default)]
pub struct StubBlockIndex {
    blocks: HashSet<BlockHash>,
}

impl StubBlockIndex {
    pub fn new(blocks: impl IntoIterator<Item = BlockHash>) -> Self {
        Self {
            blocks: blocks.into_iter().collect(),
        }
    }
}

impl BlockIndex for StubBlockIndex {
    fn contains_block(&self, hash: &BlockHash) -> bool {
        self.blocks.contains(hash)
    }
}
