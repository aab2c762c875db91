//! Process wide table of sync checkpoint activation parameters.

use std::{collections::BTreeMap, fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{
    activation::{ActivationParams, ActivationPoint},
    errors::ParamsError,
    serde_helpers::serde_unique_map,
};

/// Block height after which the main network enforces sync checkpoints.
pub const MAINNET_ACTIVATION_HEIGHT: i64 = 4_900_000;

/// Time after which the listed asset chains enforce sync checkpoints
/// (2026-01-01T00:00:00Z).
pub const ASSET_CHAIN_ACTIVATION_TIMESTAMP: i64 = 1_767_225_600;

/// Timestamp of the first block of the original Bitcoin chain. A timestamp
/// activation point earlier than this was most likely meant as a height.
pub const MIN_PLAUSIBLE_TIMESTAMP: i64 = 1_231_006_505;

const DEFAULT_MASTER_PUBKEY: &str =
    "039a01cd626d5efbe7fd05a59d8e5fced53bacac589192278f9b00ad31654b6956";

const GULDEN_MASTER_PUBKEY: &str =
    "02f9dc5271cc789aab77fb27e8007e681f93135cfcf92d4a514a4649c0e36f14ad";

/// Asset chains sharing the default master key and activation time.
const DEFAULT_ASSET_CHAINS: &[&str] = &[
    "CCL", "CLC", "GLEEC", "ILN", "KOIN", "PIRATE", "THC", "BCZERO", "RAPH", "MDX",
    // test chains
    "DOC", "MARTY",
];

/// Activation parameters for the main network, the test network and every
/// known asset chain.
///
/// Built once at startup and shared behind an `Arc`. There is no way to change
/// a registry after it has been built, lookups just report absence.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct ActivationRegistry {
    #[serde(default)]
    mainnet: Option<ActivationParams>,

    #[serde(default)]
    testnet: Option<ActivationParams>,

    #[serde(default, with = "serde_unique_map")]
    asset_chains: BTreeMap<String, ActivationParams>,
}

impl ActivationRegistry {
    pub fn builder() -> ActivationRegistryBuilder {
        ActivationRegistryBuilder::default()
    }

    /// The table shipped with the node.
    pub fn default_table() -> Self {
        let mut asset_chains: BTreeMap<String, ActivationParams> = DEFAULT_ASSET_CHAINS
            .iter()
            .map(|ticker| {
                (
                    (*ticker).to_owned(),
                    ActivationParams::new(ASSET_CHAIN_ACTIVATION_TIMESTAMP, DEFAULT_MASTER_PUBKEY),
                )
            })
            .collect();

        // test chain with its own signer
        asset_chains.insert(
            "GULDEN".to_owned(),
            ActivationParams::new(ASSET_CHAIN_ACTIVATION_TIMESTAMP, GULDEN_MASTER_PUBKEY),
        );

        Self {
            mainnet: Some(ActivationParams::new(
                MAINNET_ACTIVATION_HEIGHT,
                DEFAULT_MASTER_PUBKEY,
            )),
            testnet: None,
            asset_chains,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ParamsError> {
        let raw = fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    pub fn mainnet(&self) -> Option<&ActivationParams> {
        self.mainnet.as_ref()
    }

    pub fn testnet(&self) -> Option<&ActivationParams> {
        self.testnet.as_ref()
    }

    /// Looks up an asset chain by its exact ticker.
    pub fn asset_chain(&self, ticker: &str) -> Option<&ActivationParams> {
        self.asset_chains.get(ticker)
    }

    pub fn asset_chain_names(&self) -> impl Iterator<Item = &str> {
        self.asset_chains.keys().map(String::as_str)
    }

    /// Entries whose `active_at` classifies as a timestamp that predates any
    /// real chain. Such a value was probably entered as a block height above the
    /// lock time threshold, and will be treated as a timestamp regardless.
    pub fn suspicious_entries(&self) -> Vec<(String, ActivationParams)> {
        let named = self
            .mainnet
            .iter()
            .map(|p| ("mainnet", p))
            .chain(self.testnet.iter().map(|p| ("testnet", p)))
            .chain(self.asset_chains.iter().map(|(k, p)| (k.as_str(), p)));

        named
            .filter(|(_, p)| {
                matches!(p.activation_point(), ActivationPoint::Timestamp(ts) if ts < MIN_PLAUSIBLE_TIMESTAMP)
            })
            .map(|(name, p)| (name.to_owned(), p.clone()))
            .collect()
    }
}

/// Collects registry entries, checking tickers are unique on [`Self::build`].
#[derive(Clone, Debug, Default)]
pub struct ActivationRegistryBuilder {
    mainnet: Option<ActivationParams>,
    testnet: Option<ActivationParams>,
    asset_chains: Vec<(String, ActivationParams)>,
}

impl ActivationRegistryBuilder {
    pub fn mainnet(mut self, params: ActivationParams) -> Self {
        self.mainnet = Some(params);
        self
    }

    pub fn testnet(mut self, params: ActivationParams) -> Self {
        self.testnet = Some(params);
        self
    }

    pub fn asset_chain(mut self, ticker: impl Into<String>, params: ActivationParams) -> Self {
        self.asset_chains.push((ticker.into(), params));
        self
    }

    pub fn build(self) -> Result<ActivationRegistry, ParamsError> {
        let mut asset_chains = BTreeMap::new();
        for (ticker, params) in self.asset_chains {
            if asset_chains.contains_key(&ticker) {
                return Err(ParamsError::DuplicateAssetChain(ticker));
            }
            asset_chains.insert(ticker, params);
        }

        Ok(ActivationRegistry {
            mainnet: self.mainnet,
            testnet: self.testnet,
            asset_chains,
        })
    }
}
