//! Builds the node side collaborators from the loaded config.

use std::{collections::HashSet, fs, iter, path::Path, sync::Arc};

use synchk_config::Config;
use synchk_db_store_sled::{SLED_NAME, SyncCheckpointDBSled, open_sled_database};
use synchk_db_types::traits::BlockIndex;
use synchk_params::ActivationRegistry;
use synchk_primitives::BlockHash;
use synchk_sync_checkpoint::{ActivationResolver, ChainContext, MemoryWallet};
use tracing::{info, warn};

use crate::errors::InitError;

/// Blocks the operator told us about, plus genesis.
#[derive(Debug, Default)]
pub(crate) struct KnownBlocks(HashSet<BlockHash>);

impl KnownBlocks {
    pub(crate) fn new(genesis: BlockHash, known: &[BlockHash]) -> Self {
        Self(iter::once(genesis).chain(known.iter().copied()).collect())
    }
}

impl BlockIndex for KnownBlocks {
    fn contains_block(&self, hash: &BlockHash) -> bool {
        self.0.contains(hash)
    }
}

pub(crate) fn load_registry(config: &Config) -> Result<ActivationRegistry, InitError> {
    let registry = match &config.node.activation_params {
        Some(path) => {
            info!(path = %path.display(), "loading activation params");
            ActivationRegistry::from_json_file(path)?
        }
        None => ActivationRegistry::default_table(),
    };

    for (name, params) in registry.suspicious_entries() {
        warn!(
            %name,
            active_at = params.active_at,
            "activation point reads as a timestamp before any chain existed, was a height meant?"
        );
    }

    Ok(registry)
}

pub(crate) fn build_resolver(config: &Config) -> Result<ActivationResolver, InitError> {
    let registry = load_registry(config)?;
    let chain = ChainContext::from_chain_name(
        &config.node.chain,
        config.node.testnet,
        config.node.genesis_hash,
    );
    Ok(ActivationResolver::new(Arc::new(registry), chain))
}

pub(crate) fn open_store(config: &Config) -> Result<Arc<SyncCheckpointDBSled>, InitError> {
    let db = open_sled_database(&config.node.datadir, SLED_NAME)?;
    Ok(Arc::new(SyncCheckpointDBSled::new(&db)?))
}

/// Reads hex secret keys, one per line. Blank lines and `#` comments are skipped.
pub(crate) fn load_wallet(path: &Path) -> Result<MemoryWallet, InitError> {
    let raw = fs::read_to_string(path)?;
    let keys = raw
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'));

    MemoryWallet::from_hex_keys(keys).map_err(|err| InitError::InvalidWalletKey {
        path: path.to_path_buf(),
        reason: err.to_string(),
    })
}
