//! Error types for initialization and configuration.

use std::{io, path::PathBuf};

use synchk_db_types::DbError;
use synchk_params::ParamsError;
use synchk_sync_checkpoint::InitError as CheckpointInitError;
use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum InitError {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("config: {0}")]
    MalformedConfig(#[from] ConfigError),

    #[error("toml: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("params: {0}")]
    MalformedParams(#[from] ParamsError),

    #[error("db: {0}")]
    Db(#[from] DbError),

    #[error("invalid wallet key in {}: {reason}", path.display())]
    InvalidWalletKey { path: PathBuf, reason: String },

    #[error("sync checkpoint: {0}")]
    SyncCheckpoint(#[from] CheckpointInitError),

    #[error("{0}")]
    Anyhow(#[from] anyhow::Error),
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    /// Tried to traverse into a primitive.
    #[error("can't traverse into non-table key: {key} (in {path})")]
    TraverseNonTableAt { key: String, path: String },

    /// Invalid override string.
    #[error("invalid override: '{0}'")]
    InvalidOverride(String),
}
