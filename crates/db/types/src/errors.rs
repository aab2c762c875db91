use thiserror::Error;

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug, Error, Clone)]
pub enum DbError {
    #[error("IO Error: {0}")]
    IoError(String),

    #[error("codec error {0}")]
    CodecError(String),

    #[error("{0}")]
    Other(String),
}
