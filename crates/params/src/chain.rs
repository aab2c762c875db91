use std::fmt;

use serde::{Deserialize, Serialize};

/// Chain name the main and test networks run under. Which of the two it is
/// depends on the testnet flag, not on the name.
pub const MAIN_NETWORK_NAME: &str = "KMD";

/// Identity of the chain this node process is running.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum ChainIdentity {
    MainNetwork,
    TestNetwork,
    /// Asset chain identified by its ticker. Case sensitive.
    AssetChain(String),
}

impl ChainIdentity {
    /// Maps a configured chain name to an identity.
    ///
    /// An empty name means the chain configuration has not been loaded yet and
    /// yields `None`. The main network name maps to [`ChainIdentity::MainNetwork`]
    /// even when the node runs in testnet mode, the resolver applies the flag.
    pub fn from_chain_name(name: &str) -> Option<Self> {
        match name {
            "" => None,
            MAIN_NETWORK_NAME => Some(Self::MainNetwork),
            ticker => Some(Self::AssetChain(ticker.to_owned())),
        }
    }

    pub fn asset_chain(ticker: impl Into<String>) -> Self {
        Self::AssetChain(ticker.into())
    }
}

impl fmt::Display for ChainIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MainNetwork => f.write_str("mainnet"),
            Self::TestNetwork => f.write_str("testnet"),
            Self::AssetChain(ticker) => f.write_str(ticker),
        }
    }
}

/// The two networks the base chain can run as.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Network {
    Main,
    Test,
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Main => f.write_str("mainnet"),
            Self::Test => f.write_str("testnet"),
        }
    }
}
