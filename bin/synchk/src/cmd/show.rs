use serde::Serialize;
use synchk_config::Config;
use synchk_db_types::traits::SyncCheckpointDatabase;
use synchk_primitives::BlockHash;

use crate::{context::open_store, errors::InitError};

#[derive(Debug, Serialize)]
pub(crate) struct ShowReport {
    pub checkpoint: Option<BlockHash>,
    pub master_pubkey: Option<String>,
}

pub(crate) fn show(config: &Config) -> Result<ShowReport, InitError> {
    let db = open_store(config)?;
    let checkpoint = db.get_sync_checkpoint()?.map(|cp| *cp.block_hash());
    let master_pubkey = db.get_checkpoint_pubkey()?;

    Ok(ShowReport {
        checkpoint,
        master_pubkey,
    })
}
