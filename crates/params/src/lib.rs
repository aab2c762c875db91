//! Sync checkpoint activation parameters shared by every chain the node can run.

mod activation;
mod chain;
mod errors;
mod registry;
pub mod serde_helpers;

pub use activation::{ActivationParams, ActivationPoint, LOCKTIME_THRESHOLD};
pub use chain::{ChainIdentity, MAIN_NETWORK_NAME, Network};
pub use errors::ParamsError;
pub use registry::{
    ASSET_CHAIN_ACTIVATION_TIMESTAMP, ActivationRegistry, ActivationRegistryBuilder,
    MAINNET_ACTIVATION_HEIGHT, MIN_PLAUSIBLE_TIMESTAMP,
};
