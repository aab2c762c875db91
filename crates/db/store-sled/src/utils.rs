use synchk_db_types::DbError;

pub(crate) fn to_db_error(e: sled::Error) -> DbError {
    match e {
        sled::Error::Io(err) => DbError::IoError(err.to_string()),
        other => DbError::Other(format!("sled error: {other:?}")),
    }
}
