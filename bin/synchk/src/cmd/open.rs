use std::sync::Arc;

use serde::Serialize;
use synchk_config::Config;
use synchk_db_store_sled::SyncCheckpointDBSled;
use synchk_params::ActivationParams;
use synchk_primitives::BlockHash;
use synchk_sync_checkpoint::{MasterKeySlot, NoWallet, SyncCheckpointState, Wallet};
use tracing::info;

use crate::{
    args::OpenArgs,
    context::{KnownBlocks, build_resolver, load_wallet, open_store},
    errors::InitError,
};

#[derive(Debug, Serialize)]
pub(crate) struct OpenReport {
    /// False when the chain has no sync checkpoint params and nothing was done.
    pub enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checkpoint: Option<BlockHash>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub master_pubkey: Option<String>,
    pub master_key_registered: bool,
    pub tried_init: bool,
}

/// Runs the startup path of a node: open the persisted checkpoint, then the
/// one-time init with whatever wallet is available.
pub(crate) fn open(config: &Config, args: &OpenArgs) -> Result<OpenReport, InitError> {
    let resolver = build_resolver(config)?;

    let params = match resolver.resolve_current() {
        Ok(params) => params,
        Err(err) => {
            info!(%err, "sync checkpoints not enabled on this chain");
            return Ok(OpenReport {
                enabled: false,
                checkpoint: None,
                master_pubkey: None,
                master_key_registered: false,
                tried_init: false,
            });
        }
    };

    let db = open_store(config)?;
    let state = SyncCheckpointState::new(resolver, db, Arc::new(MasterKeySlot::new()));

    let index = KnownBlocks::new(config.node.genesis_hash, &args.known_block);
    state.open_sync_checkpoint_at_startup(&params, &index)?;

    match &args.wallet {
        Some(path) => {
            let wallet = load_wallet(path)?;
            info!(keys = wallet.len(), "loaded wallet");
            init_with(&state, &params, &wallet)
        }
        None => init_with(&state, &params, &NoWallet),
    }
}

fn init_with<W: Wallet>(
    state: &SyncCheckpointState<SyncCheckpointDBSled>,
    params: &ActivationParams,
    wallet: &W,
) -> Result<OpenReport, InitError> {
    state.try_init_sync_checkpoint(params, wallet)?;

    Ok(OpenReport {
        enabled: true,
        checkpoint: state.current_checkpoint().map(|cp| *cp.block_hash()),
        master_pubkey: Some(params.master_pubkey.clone()),
        master_key_registered: state.master_key().is_set(),
        tried_init: state.tried_init(),
    })
}
