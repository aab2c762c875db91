//! Picks the activation parameters of the running chain out of the registry.

use std::sync::Arc;

use synchk_params::{ActivationParams, ActivationRegistry, ChainIdentity, Network};
use tracing::{debug, warn};

use crate::{chain::ChainContext, errors::ResolveError};

/// Looks up the parameters for `identity`.
///
/// The base network runs as either main or test network depending on
/// `is_testnet`, so [`ChainIdentity::MainNetwork`] resolves to the testnet entry
/// when the flag is set. Asset chains ignore the flag.
pub fn resolve(
    registry: &ActivationRegistry,
    identity: Option<&ChainIdentity>,
    is_testnet: bool,
) -> Result<ActivationParams, ResolveError> {
    let identity = identity.ok_or(ResolveError::ChainNotInitialized)?;

    let network = match identity {
        ChainIdentity::MainNetwork if is_testnet => Network::Test,
        ChainIdentity::MainNetwork => Network::Main,
        ChainIdentity::TestNetwork => Network::Test,
        ChainIdentity::AssetChain(ticker) => {
            return registry
                .asset_chain(ticker)
                .cloned()
                .ok_or_else(|| ResolveError::UnknownAssetChain(ticker.clone()));
        }
    };

    let params = match network {
        Network::Main => registry.mainnet(),
        Network::Test => registry.testnet(),
    };
    params
        .cloned()
        .ok_or(ResolveError::NoParamsForNetwork(network))
}

/// Resolves activation parameters for the chain this process runs.
#[derive(Clone, Debug)]
pub struct ActivationResolver {
    registry: Arc<ActivationRegistry>,
    chain: ChainContext,
}

impl ActivationResolver {
    pub fn new(registry: Arc<ActivationRegistry>, chain: ChainContext) -> Self {
        Self { registry, chain }
    }

    pub fn registry(&self) -> &ActivationRegistry {
        &self.registry
    }

    pub fn chain(&self) -> &ChainContext {
        &self.chain
    }

    pub fn resolve_current(&self) -> Result<ActivationParams, ResolveError> {
        let res = resolve(
            &self.registry,
            self.chain.identity(),
            self.chain.is_testnet(),
        );

        match &res {
            Err(ResolveError::ChainNotInitialized) => {
                warn!("sync checkpoint params requested before chain name was initialised");
            }
            Err(err) => debug!(%err, "no sync checkpoint params for running chain"),
            Ok(_) => {}
        }

        res
    }
}

#[cfg(test)]
mod tests {
    use synchk_primitives::BlockHash;

    use super::*;

    const KEY: &str = "039a01cd626d5efbe7fd05a59d8e5fced53bacac589192278f9b00ad31654b6956";

    fn registry() -> ActivationRegistry {
        ActivationRegistry::builder()
            .mainnet(ActivationParams::new(1000, KEY))
            .asset_chain("CCL", ActivationParams::new(1_700_000_000, KEY))
            .build()
            .unwrap()
    }

    #[test]
    fn test_resolve_mainnet() {
        let params = resolve(&registry(), Some(&ChainIdentity::MainNetwork), false).unwrap();
        assert_eq!(params.active_at, 1000);
    }

    #[test]
    fn test_resolve_testnet_via_flag() {
        let res = resolve(&registry(), Some(&ChainIdentity::MainNetwork), true);
        assert_eq!(res, Err(ResolveError::NoParamsForNetwork(Network::Test)));

        let with_testnet = ActivationRegistry::builder()
            .testnet(ActivationParams::new(5, KEY))
            .build()
            .unwrap();
        let params = resolve(&with_testnet, Some(&ChainIdentity::MainNetwork), true).unwrap();
        assert_eq!(params.active_at, 5);
        let params = resolve(&with_testnet, Some(&ChainIdentity::TestNetwork), false).unwrap();
        assert_eq!(params.active_at, 5);

        let res = resolve(&with_testnet, Some(&ChainIdentity::MainNetwork), false);
        assert_eq!(res, Err(ResolveError::NoParamsForNetwork(Network::Main)));
    }

    #[test]
    fn test_resolve_asset_chain() {
        let ccl = ChainIdentity::asset_chain("CCL");
        let params = resolve(&registry(), Some(&ccl), false).unwrap();
        assert_eq!(params.active_at, 1_700_000_000);

        // the testnet flag only applies to the base network
        let params = resolve(&registry(), Some(&ccl), true).unwrap();
        assert_eq!(params.active_at, 1_700_000_000);
    }

    #[test]
    fn test_resolve_unknown_asset_chain() {
        for ticker in ["UNKNOWN", "ZZZ", "ccl"] {
            let res = resolve(&registry(), Some(&ChainIdentity::asset_chain(ticker)), false);
            assert_eq!(res, Err(ResolveError::UnknownAssetChain(ticker.to_owned())));
        }
    }

    #[test]
    fn test_resolve_uninitialized() {
        assert_eq!(
            resolve(&registry(), None, false),
            Err(ResolveError::ChainNotInitialized)
        );
        assert_eq!(
            resolve(&ActivationRegistry::default_table(), None, true),
            Err(ResolveError::ChainNotInitialized)
        );
        assert_eq!(
            resolve(&ActivationRegistry::default(), None, false),
            Err(ResolveError::ChainNotInitialized)
        );
    }

    #[test]
    fn test_resolver_uses_chain_context() {
        let chain = ChainContext::from_chain_name("CCL", false, BlockHash::zero());
        let resolver = ActivationResolver::new(Arc::new(registry()), chain);
        assert_eq!(resolver.resolve_current().unwrap().active_at, 1_700_000_000);

        let chain = ChainContext::from_chain_name("", false, BlockHash::zero());
        let resolver = ActivationResolver::new(Arc::new(registry()), chain);
        assert_eq!(
            resolver.resolve_current(),
            Err(ResolveError::ChainNotInitialized)
        );
    }
}
