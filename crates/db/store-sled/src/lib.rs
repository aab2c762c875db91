//! Sled store for the sync checkpoint state.

mod init;
pub mod sync_checkpoint;
mod utils;

pub use init::open_sled_database;
pub use sync_checkpoint::SyncCheckpointDBSled;

pub const SLED_NAME: &str = "synchk";
