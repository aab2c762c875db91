//! Trait definitions for low level database interfaces.

use synchk_primitives::BlockHash;

use crate::{DbResult, types::SyncCheckpoint};

/// Persistent sync checkpoint state: the accepted checkpoint and the public
/// key it was validated under.
///
/// Every write is atomic, a failed write leaves the previous value in place.
pub trait SyncCheckpointDatabase: Send + Sync + 'static {
    /// Gets the persisted checkpoint, `None` if none was ever written.
    fn get_sync_checkpoint(&self) -> DbResult<Option<SyncCheckpoint>>;

    /// Replaces the persisted checkpoint.
    fn put_sync_checkpoint(&self, checkpoint: SyncCheckpoint) -> DbResult<()>;

    /// Gets the hex public key of record.
    fn get_checkpoint_pubkey(&self) -> DbResult<Option<String>>;

    /// Replaces the hex public key of record.
    fn put_checkpoint_pubkey(&self, pubkey: &str) -> DbResult<()>;

    /// Drops whatever checkpoint was accepted and falls back to trusting only
    /// the genesis block.
    fn reset_sync_checkpoint(&self, genesis_hash: BlockHash) -> DbResult<()>;
}

/// Read access to the in-memory block index.
pub trait BlockIndex: Send + Sync {
    fn contains_block(&self, hash: &BlockHash) -> bool;
}
