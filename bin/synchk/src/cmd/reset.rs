use synchk_config::Config;
use synchk_db_types::traits::SyncCheckpointDatabase;
use tracing::info;

use crate::{context::open_store, errors::InitError};

/// Points the persisted checkpoint at genesis. The public key of record is kept.
pub(crate) fn reset(config: &Config) -> Result<(), InitError> {
    let db = open_store(config)?;
    db.reset_sync_checkpoint(config.node.genesis_hash)?;
    info!(genesis = %config.node.genesis_hash, "sync checkpoint reset to genesis");
    Ok(())
}
