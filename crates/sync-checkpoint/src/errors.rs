use synchk_db_types::DbError;
use synchk_params::Network;
use synchk_primitives::BlockHash;
use thiserror::Error;

/// Why no activation parameters apply to the running chain.
///
/// All of these mean checkpoint enforcement is inactive, none is fatal.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("chain name not initialised yet")]
    ChainNotInitialized,

    #[error("no sync checkpoint params for asset chain {0}")]
    UnknownAssetChain(String),

    #[error("no sync checkpoint params for {0}")]
    NoParamsForNetwork(Network),
}

/// Sync checkpoint startup failures. Fatal to node startup.
#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to {action}: {source}")]
    PersistFailure {
        action: &'static str,
        #[source]
        source: DbError,
    },

    #[error(
        "failed to {action} at genesis: {source}. \
         Remove the sync checkpoint data directory and restart"
    )]
    GenesisInitFailure {
        action: &'static str,
        #[source]
        source: DbError,
    },

    #[error(
        "sync checkpoint {0} not found in block index, checkpoint state is corrupted. \
         Remove the sync checkpoint data directory and restart"
    )]
    CorruptState(BlockHash),

    #[error("failed to reset sync checkpoint: {0}")]
    ResetFailure(#[source] DbError),
}

impl InitError {
    pub(crate) fn persist(action: &'static str) -> impl FnOnce(DbError) -> Self {
        move |source| Self::PersistFailure { action, source }
    }

    pub(crate) fn genesis_init(action: &'static str) -> impl FnOnce(DbError) -> Self {
        move |source| Self::GenesisInitFailure { action, source }
    }
}
