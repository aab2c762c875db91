use std::{fs, path::Path};

use anyhow::Context;
use tracing::debug;

// Opens sled database instance from datadir
pub fn open_sled_database(datadir: &Path, dbname: &'static str) -> anyhow::Result<sled::Db> {
    let mut database_dir = datadir.to_path_buf();
    database_dir.push("sled");
    database_dir.push(dbname);

    if !database_dir.exists() {
        fs::create_dir_all(&database_dir)?;
    }

    debug!(path = %database_dir.display(), "opening sled database");
    let db = sled::open(&database_dir).context("opening sled database")?;
    Ok(db)
}
