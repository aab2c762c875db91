//! Sync checkpoint state guarded by one coarse lock, and its startup
//! initialisation.

use std::sync::Arc;

use parking_lot::Mutex;
use synchk_db_types::{
    DbError,
    traits::{BlockIndex, SyncCheckpointDatabase},
    types::SyncCheckpoint,
};
use synchk_params::ActivationParams;
use tracing::{info, instrument, warn};

use crate::{
    bootstrap, errors::InitError, resolver::ActivationResolver, signer::MasterKeySlot,
    wallet::Wallet,
};

/// Tracks whether the one-time init has run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BootstrapState {
    tried_init: bool,
}

impl BootstrapState {
    pub fn tried_init(&self) -> bool {
        self.tried_init
    }
}

#[derive(Debug, Default)]
struct Inner {
    bootstrap: BootstrapState,
    checkpoint: Option<SyncCheckpoint>,
}

/// Owns the mutable sync checkpoint state of the process.
///
/// Every mutating operation holds the state lock for its whole duration. The
/// wallet lock, when needed, is only ever taken while holding the state lock.
#[derive(Debug)]
pub struct SyncCheckpointState<D> {
    resolver: ActivationResolver,
    db: Arc<D>,
    master_key: Arc<MasterKeySlot>,
    inner: Mutex<Inner>,
}

impl<D: SyncCheckpointDatabase> SyncCheckpointState<D> {
    pub fn new(resolver: ActivationResolver, db: Arc<D>, master_key: Arc<MasterKeySlot>) -> Self {
        Self {
            resolver,
            db,
            master_key,
            inner: Mutex::new(Inner::default()),
        }
    }

    pub fn resolver(&self) -> &ActivationResolver {
        &self.resolver
    }

    pub fn db(&self) -> &Arc<D> {
        &self.db
    }

    pub fn master_key(&self) -> &Arc<MasterKeySlot> {
        &self.master_key
    }

    pub fn bootstrap_state(&self) -> BootstrapState {
        self.inner.lock().bootstrap
    }

    pub fn tried_init(&self) -> bool {
        self.bootstrap_state().tried_init()
    }

    /// The checkpoint accepted at startup, `None` before startup ran.
    pub fn current_checkpoint(&self) -> Option<SyncCheckpoint> {
        self.inner.lock().checkpoint
    }

    /// Looks for the master signing key in `wallet` if none is registered yet.
    pub fn try_register_master_key<W: Wallet>(&self, wallet: &W) {
        let _inner = self.inner.lock();
        bootstrap::try_register_master_key(&self.resolver, &self.master_key, wallet);
    }

    /// Records `params`' master pubkey and looks for its key in `wallet`, once.
    ///
    /// Calls after the first successful one do nothing. A failed write leaves
    /// the state untouched so the next call tries again. Not finding the key
    /// does not count as a failure.
    #[instrument(skip_all, fields(component = "sync_checkpoint"))]
    pub fn try_init_sync_checkpoint<W: Wallet>(
        &self,
        params: &ActivationParams,
        wallet: &W,
    ) -> Result<(), InitError> {
        let mut inner = self.inner.lock();
        if inner.bootstrap.tried_init {
            return Ok(());
        }

        self.db
            .put_checkpoint_pubkey(&params.master_pubkey)
            .map_err(InitError::persist("write checkpoint master pubkey"))?;
        info!("sync checkpoint try init done");

        bootstrap::try_register_master_key(&self.resolver, &self.master_key, wallet);
        inner.bootstrap.tried_init = true;
        Ok(())
    }

    /// Loads the persisted checkpoint on node startup, creating it at genesis
    /// on first run, and resets it if the master pubkey changed.
    ///
    /// The wallet is not available this early, the master key is picked up
    /// later through [`Self::try_init_sync_checkpoint`].
    #[instrument(skip_all, fields(component = "sync_checkpoint"))]
    pub fn open_sync_checkpoint_at_startup<B: BlockIndex + ?Sized>(
        &self,
        params: &ActivationParams,
        block_index: &B,
    ) -> Result<(), InitError> {
        let mut inner = self.inner.lock();
        let genesis_hash = self.resolver.chain().genesis_hash();

        let checkpoint = match self.read_checkpoint() {
            Some(checkpoint) => checkpoint,
            None => self.init_genesis_checkpoint()?,
        };

        if !block_index.contains_block(checkpoint.block_hash()) {
            return Err(InitError::CorruptState(*checkpoint.block_hash()));
        }
        info!(checkpoint = %checkpoint.block_hash(), "using synchronized checkpoint");
        inner.checkpoint = Some(checkpoint);

        // Any difference counts as a key change, including no key on record.
        let stored_pubkey = self.read_pubkey();
        if stored_pubkey.as_deref() != Some(params.master_pubkey.as_str()) {
            info!(
                stored_pubkey = stored_pubkey.as_deref().unwrap_or("<none>"),
                master_pubkey = %params.master_pubkey,
                "sync checkpoint master pubkey changed, resetting to genesis"
            );

            self.db
                .put_checkpoint_pubkey(&params.master_pubkey)
                .map_err(InitError::persist("write checkpoint master pubkey"))?;
            self.db
                .reset_sync_checkpoint(genesis_hash)
                .map_err(InitError::ResetFailure)?;
            inner.checkpoint = Some(SyncCheckpoint::genesis(genesis_hash));
        }

        Ok(())
    }

    /// Unreadable counts as absent, the record is then rewritten at genesis.
    fn read_checkpoint(&self) -> Option<SyncCheckpoint> {
        self.db.get_sync_checkpoint().unwrap_or_else(|err| {
            warn!(%err, "failed to read sync checkpoint");
            None
        })
    }

    fn read_pubkey(&self) -> Option<String> {
        self.db.get_checkpoint_pubkey().unwrap_or_else(|err| {
            warn!(%err, "failed to read checkpoint master pubkey");
            None
        })
    }

    fn init_genesis_checkpoint(&self) -> Result<SyncCheckpoint, InitError> {
        let genesis = SyncCheckpoint::genesis(self.resolver.chain().genesis_hash());
        self.db
            .put_sync_checkpoint(genesis)
            .map_err(InitError::genesis_init("write sync checkpoint"))?;

        self.db
            .get_sync_checkpoint()
            .map_err(InitError::genesis_init("read back sync checkpoint"))?
            .ok_or_else(|| InitError::GenesisInitFailure {
                action: "read back sync checkpoint",
                source: DbError::Other("sync checkpoint missing after write".to_owned()),
            })
    }
}
