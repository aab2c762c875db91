use synchk_params::ChainIdentity;
use synchk_primitives::BlockHash;

/// What the node knows about the chain it runs, fixed once the chain
/// configuration has been loaded.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainContext {
    identity: Option<ChainIdentity>,
    testnet: bool,
    genesis_hash: BlockHash,
}

impl ChainContext {
    pub fn new(identity: Option<ChainIdentity>, testnet: bool, genesis_hash: BlockHash) -> Self {
        Self {
            identity,
            testnet,
            genesis_hash,
        }
    }

    /// Builds the context from a configured chain name, see
    /// [`ChainIdentity::from_chain_name`].
    pub fn from_chain_name(name: &str, testnet: bool, genesis_hash: BlockHash) -> Self {
        Self::new(ChainIdentity::from_chain_name(name), testnet, genesis_hash)
    }

    /// `None` until the chain configuration is loaded.
    pub fn identity(&self) -> Option<&ChainIdentity> {
        self.identity.as_ref()
    }

    pub fn is_testnet(&self) -> bool {
        self.testnet
    }

    pub fn genesis_hash(&self) -> BlockHash {
        self.genesis_hash
    }
}
