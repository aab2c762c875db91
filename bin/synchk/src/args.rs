//! CLI argument parsing.

use std::path::PathBuf;

use argh::FromArgs;
use synchk_primitives::BlockHash;

#[derive(Debug, FromArgs)]
#[argh(description = "Sync checkpoint operator tool")]
pub(crate) struct Args {
    // Config non-overriding args
    #[argh(option, short = 'c', description = "path to configuration")]
    pub config: PathBuf,

    // Config overriding args
    /// Data directory path that will override the path in the config toml.
    #[argh(
        option,
        short = 'd',
        description = "datadir path used for the sync checkpoint store"
    )]
    pub datadir: Option<PathBuf>,

    #[argh(option, description = "chain name, KMD or an asset chain ticker")]
    pub chain: Option<String>,

    #[argh(switch, description = "run the main network as testnet")]
    pub testnet: bool,

    /// Other generic overrides to the config toml.
    /// Will be used, for example, as `-o logging.json_format=true -o node.chain=CCL`
    #[argh(option, short = 'o', description = "generic config overrides")]
    pub overrides: Vec<String>,

    #[argh(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, FromArgs)]
#[argh(subcommand)]
pub(crate) enum Command {
    Status(StatusArgs),
    Open(OpenArgs),
    Show(ShowArgs),
    Reset(ResetArgs),
}

#[derive(Debug, FromArgs)]
#[argh(
    subcommand,
    name = "status",
    description = "show activation params and whether enforcement is active"
)]
pub(crate) struct StatusArgs {
    #[argh(option, description = "block height")]
    pub height: i64,

    #[argh(option, description = "block time, unix seconds")]
    pub timestamp: i64,
}

#[derive(Debug, FromArgs)]
#[argh(
    subcommand,
    name = "open",
    description = "run the startup checks and init on the checkpoint store"
)]
pub(crate) struct OpenArgs {
    /// Blocks the node has besides genesis. Repeatable.
    #[argh(option, description = "hash of a block present in the block index")]
    pub known_block: Vec<BlockHash>,

    #[argh(option, description = "file with hex secret keys, one per line")]
    pub wallet: Option<PathBuf>,
}

#[derive(Debug, FromArgs)]
#[argh(
    subcommand,
    name = "show",
    description = "print the persisted checkpoint state"
)]
pub(crate) struct ShowArgs {}

#[derive(Debug, FromArgs)]
#[argh(
    subcommand,
    name = "reset",
    description = "point the persisted checkpoint back at genesis"
)]
pub(crate) struct ResetArgs {}
