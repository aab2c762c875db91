use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use synchk_primitives::BlockHash;

/// Default value for `datadir` in [`NodeConfig`].
const DEFAULT_DATADIR: &str = "synchk-data";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Name of the running chain. Empty means not initialised, `KMD` is the
    /// main network and anything else is an asset chain ticker.
    #[serde(default)]
    pub chain: String,

    /// Run the main network as its test network.
    #[serde(default)]
    pub testnet: bool,

    /// The data directory where database contents reside.
    #[serde(default = "default_datadir")]
    pub datadir: PathBuf,

    /// Hash of the chain's genesis block, where a fresh or reset checkpoint points.
    pub genesis_hash: BlockHash,

    /// JSON file replacing the built in activation table.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub activation_params: Option<PathBuf>,
}

fn default_datadir() -> PathBuf {
    DEFAULT_DATADIR.into()
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    /// Service label to append to the service name (e.g., "prod", "dev").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_label: Option<String>,

    /// Directory path for file-based logging.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_dir: Option<PathBuf>,

    /// Prefix for log file names.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file_prefix: Option<String>,

    /// Use JSON format for logs instead of compact format.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub json_format: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    pub node: NodeConfig,

    /// Logging configuration (optional section in TOML).
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod test {
    use super::*;

    const GENESIS: &str = "027e3758c3a65b12aa1046462b486d0a63bfa1beae327897f56c5cfb7daaae71";

    #[test]
    fn test_config_load() {
        let config_string = format!(
            r#"
            [node]
            chain = "CCL"
            datadir = "/path/to/data/directory"
            genesis_hash = "{GENESIS}"
            activation_params = "/etc/synchk/params.json"

            [logging]
            service_label = "prod"
            log_dir = "/var/log/synchk"
            json_format = true
        "#
        );

        let config = toml::from_str::<Config>(&config_string);
        assert!(
            config.is_ok(),
            "should be able to load TOML config but got: {:?}",
            config.err()
        );
        let config = config.unwrap();
        assert_eq!(config.node.chain, "CCL");
        assert!(!config.node.testnet);
        assert_eq!(config.node.genesis_hash.to_string(), GENESIS);
        assert_eq!(
            config.node.activation_params,
            Some(PathBuf::from("/etc/synchk/params.json"))
        );
        assert_eq!(config.logging.service_label.as_deref(), Some("prod"));
        assert_eq!(config.logging.json_format, Some(true));
        assert!(config.logging.log_file_prefix.is_none());
    }

    #[test]
    fn test_config_defaults() {
        let config_string = format!(
            r#"
            [node]
            genesis_hash = "{GENESIS}"
        "#
        );

        let config = toml::from_str::<Config>(&config_string).unwrap();
        assert_eq!(config.node.chain, "");
        assert_eq!(config.node.datadir, PathBuf::from(DEFAULT_DATADIR));
        assert!(config.node.activation_params.is_none());
        assert_eq!(config.logging, LoggingConfig::default());
    }

    #[test]
    fn test_config_rejects_bad_genesis() {
        let res = toml::from_str::<Config>(
            r#"
            [node]
            genesis_hash = "abcd"
        "#,
        );
        assert!(res.is_err());
    }

    #[test]
    fn test_config_round_trip() {
        let config_string = format!(
            r#"
            [node]
            chain = "KMD"
            testnet = true
            genesis_hash = "{GENESIS}"
        "#
        );
        let config = toml::from_str::<Config>(&config_string).unwrap();
        let serialized = toml::to_string(&config).unwrap();
        assert_eq!(toml::from_str::<Config>(&serialized).unwrap(), config);
    }
}
