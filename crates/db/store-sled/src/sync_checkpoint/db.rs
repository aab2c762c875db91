use borsh::BorshDeserialize;
use synchk_db_types::{
    DbError, DbResult, traits::SyncCheckpointDatabase, types::SyncCheckpoint,
};
use synchk_primitives::BlockHash;
use tracing::debug;

use super::schemas::*;
use crate::utils::to_db_error;

/// Sync checkpoint state in a single sled tree. Writes are flushed before
/// returning.
#[derive(Debug, Clone)]
pub struct SyncCheckpointDBSled {
    tree: sled::Tree,
}

impl SyncCheckpointDBSled {
    pub fn new(db: &sled::Db) -> DbResult<Self> {
        let tree = db.open_tree(SYNC_CHECKPOINT_TREE).map_err(to_db_error)?;
        Ok(Self { tree })
    }

    fn put_raw(&self, key: &[u8], value: Vec<u8>) -> DbResult<()> {
        self.tree.insert(key, value).map_err(to_db_error)?;
        self.tree.flush().map_err(to_db_error)?;
        Ok(())
    }
}

impl SyncCheckpointDatabase for SyncCheckpointDBSled {
    fn get_sync_checkpoint(&self) -> DbResult<Option<SyncCheckpoint>> {
        let Some(raw) = self.tree.get(CHECKPOINT_KEY).map_err(to_db_error)? else {
            return Ok(None);
        };
        let checkpoint = SyncCheckpoint::try_from_slice(&raw)
            .map_err(|e| DbError::CodecError(e.to_string()))?;
        Ok(Some(checkpoint))
    }

    fn put_sync_checkpoint(&self, checkpoint: SyncCheckpoint) -> DbResult<()> {
        let raw = borsh::to_vec(&checkpoint).map_err(|e| DbError::CodecError(e.to_string()))?;
        self.put_raw(CHECKPOINT_KEY, raw)
    }

    fn get_checkpoint_pubkey(&self) -> DbResult<Option<String>> {
        let Some(raw) = self.tree.get(PUBKEY_KEY).map_err(to_db_error)? else {
            return Ok(None);
        };
        let pubkey =
            String::from_utf8(raw.to_vec()).map_err(|e| DbError::CodecError(e.to_string()))?;
        Ok(Some(pubkey))
    }

    fn put_checkpoint_pubkey(&self, pubkey: &str) -> DbResult<()> {
        self.put_raw(PUBKEY_KEY, pubkey.as_bytes().to_vec())
    }

    fn reset_sync_checkpoint(&self, genesis_hash: BlockHash) -> DbResult<()> {
        debug!(%genesis_hash, "resetting sync checkpoint to genesis");
        self.put_sync_checkpoint(SyncCheckpoint::genesis(genesis_hash))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{SLED_NAME, open_sled_database};

    fn temp_db() -> SyncCheckpointDBSled {
        let db = sled::Config::new().temporary(true).open().unwrap();
        SyncCheckpointDBSled::new(&db).unwrap()
    }

    #[test]
    fn test_empty_db() {
        let db = temp_db();
        assert_eq!(db.get_sync_checkpoint().unwrap(), None);
        assert_eq!(db.get_checkpoint_pubkey().unwrap(), None);
    }

    #[test]
    fn test_put_and_get() {
        let db = temp_db();
        let cp = SyncCheckpoint::new(BlockHash::new([5; 32]));
        db.put_sync_checkpoint(cp).unwrap();
        db.put_checkpoint_pubkey("03abcd").unwrap();

        assert_eq!(db.get_sync_checkpoint().unwrap(), Some(cp));
        assert_eq!(db.get_checkpoint_pubkey().unwrap().as_deref(), Some("03abcd"));

        db.put_checkpoint_pubkey("02ffff").unwrap();
        assert_eq!(db.get_checkpoint_pubkey().unwrap().as_deref(), Some("02ffff"));
    }

    #[test]
    fn test_reset_points_at_genesis() {
        let db = temp_db();
        let genesis = BlockHash::new([1; 32]);
        db.put_sync_checkpoint(SyncCheckpoint::new(BlockHash::new([2; 32])))
            .unwrap();
        db.put_checkpoint_pubkey("03abcd").unwrap();

        db.reset_sync_checkpoint(genesis).unwrap();
        assert_eq!(
            db.get_sync_checkpoint().unwrap(),
            Some(SyncCheckpoint::genesis(genesis))
        );
        assert_eq!(db.get_checkpoint_pubkey().unwrap().as_deref(), Some("03abcd"));
    }

    #[test]
    fn test_corrupt_record_is_codec_error() {
        let db = temp_db();
        db.put_raw(CHECKPOINT_KEY, vec![1, 2, 3]).unwrap();
        assert!(matches!(
            db.get_sync_checkpoint(),
            Err(DbError::CodecError(_))
        ));
    }

    #[test]
    fn test_state_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let cp = SyncCheckpoint::new(BlockHash::new([8; 32]));

        {
            let sled_db = open_sled_database(dir.path(), SLED_NAME).unwrap();
            let db = SyncCheckpointDBSled::new(&sled_db).unwrap();
            db.put_sync_checkpoint(cp).unwrap();
            db.put_checkpoint_pubkey("03abcd").unwrap();
        }

        let sled_db = open_sled_database(dir.path(), SLED_NAME).unwrap();
        let db = SyncCheckpointDBSled::new(&sled_db).unwrap();
        assert_eq!(db.get_sync_checkpoint().unwrap(), Some(cp));
        assert_eq!(db.get_checkpoint_pubkey().unwrap().as_deref(), Some("03abcd"));
        assert!(dir.path().join("sled").join(SLED_NAME).exists());
    }
}
