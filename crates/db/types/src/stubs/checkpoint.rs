use parking_lot::Mutex;
use synchk_primitives::BlockHash;

use crate::{DbResult, traits::SyncCheckpointDatabase, types::SyncCheckpoint};

#[derive(Debug, Default)]
struct Inner {
    checkpoint: Option<SyncCheckpoint>,
    pubkey: Option<String>,
}

/// Keeps the sync checkpoint state in memory. Writes never fail.
#[derive(Debug, Default)]
pub struct StubSyncCheckpointDb {
    inner: Mutex<Inner>,
}

impl StubSyncCheckpointDb {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SyncCheckpointDatabase for StubSyncCheckpointDb {
    fn get_sync_checkpoint(&self) -> DbResult<Option<SyncCheckpoint>> {
        Ok(self.inner.lock().checkpoint)
    }

    fn put_sync_checkpoint(&self, checkpoint: SyncCheckpoint) -> DbResult<()> {
        self.inner.lock().checkpoint = Some(checkpoint);
        Ok(())
    }

    fn get_checkpoint_pubkey(&self) -> DbResult<Option<String>> {
        Ok(self.inner.lock().pubkey.clone())
    }

    fn put_checkpoint_pubkey(&self, pubkey: &str) -> DbResult<()> {
        self.inner.lock().pubkey = Some(pubkey.to_owned());
        Ok(())
    }

    fn reset_sync_checkpoint(&self, genesis_hash: BlockHash) -> DbResult<()> {
        self.inner.lock().checkpoint = Some(SyncCheckpoint::genesis(genesis_hash));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stub_db() {
        let db = StubSyncCheckpointDb::new();
        assert_eq!(db.get_sync_checkpoint().unwrap(), None);
        assert_eq!(db.get_checkpoint_pubkey().unwrap(), None);

        let cp = SyncCheckpoint::new(BlockHash::new([9; 32]));
        db.put_sync_checkpoint(cp).unwrap();
        db.put_checkpoint_pubkey("02ab").unwrap();
        assert_eq!(db.get_sync_checkpoint().unwrap(), Some(cp));
        assert_eq!(db.get_checkpoint_pubkey().unwrap().as_deref(), Some("02ab"));

        let genesis = BlockHash::new([1; 32]);
        db.reset_sync_checkpoint(genesis).unwrap();
        assert_eq!(
            db.get_sync_checkpoint().unwrap(),
            Some(SyncCheckpoint::genesis(genesis))
        );
        // reset leaves the key of record alone
        assert_eq!(db.get_checkpoint_pubkey().unwrap().as_deref(), Some("02ab"));
    }
}
