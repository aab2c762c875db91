//! Module for database local types

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use synchk_primitives::BlockHash;

/// The synchronized checkpoint the node currently accepts as its trust anchor.
#[derive(
    Copy, Clone, Debug, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize, Deserialize, Serialize,
)]
pub struct SyncCheckpoint {
    block_hash: BlockHash,
}

impl SyncCheckpoint {
    pub fn new(block_hash: BlockHash) -> Self {
        Self { block_hash }
    }

    /// Checkpoint a fresh node starts from, pointing at the chain's genesis block.
    pub fn genesis(genesis_hash: BlockHash) -> Self {
        Self::new(genesis_hash)
    }

    pub fn block_hash(&self) -> &BlockHash {
        &self.block_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checkpoint_borsh_layout() {
        let cp = SyncCheckpoint::new(BlockHash::new([3; 32]));
        let encoded = borsh::to_vec(&cp).unwrap();
        assert_eq!(encoded.len(), 32);
        assert_eq!(SyncCheckpoint::try_from_slice(&encoded).unwrap(), cp);
    }
}
