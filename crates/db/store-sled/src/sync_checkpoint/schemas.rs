/// Tree holding everything the sync checkpoint subsystem persists.
pub(super) const SYNC_CHECKPOINT_TREE: &str = "SyncCheckpointSchema";

/// Borsh encoded [`synchk_db_types::types::SyncCheckpoint`].
pub(super) const CHECKPOINT_KEY: &[u8] = b"sync_checkpoint";

/// UTF-8 hex public key of record.
pub(super) const PUBKEY_KEY: &[u8] = b"checkpoint_pubkey";
