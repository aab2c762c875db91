use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("unparsable activation params: {0}")]
    Json(#[from] serde_json::Error),

    #[error("asset chain {0} listed more than once")]
    DuplicateAssetChain(String),
}
