//! Sync checkpoint activation and startup bootstrap.
//!
//! Decides which activation parameters apply to the running chain, whether
//! checkpoint enforcement is active at a given height or time, and brings the
//! persisted checkpoint state and the master signing key in line with the
//! parameters on startup.

mod bootstrap;
mod chain;
mod errors;
mod gate;
mod resolver;
mod signer;
mod state;
mod wallet;

pub use chain::ChainContext;
pub use errors::{InitError, ResolveError};
pub use gate::is_active;
pub use resolver::{ActivationResolver, resolve};
pub use signer::MasterKeySlot;
pub use state::{BootstrapState, SyncCheckpointState};
pub use wallet::{KeyLookup, MemoryWallet, MemoryWalletKeys, NoWallet, Wallet};
