//! Config loading with command line overrides.

use std::{fs, path::Path};

use synchk_config::Config;
use toml::value::{Table, Value};

use crate::{
    args::Args,
    errors::{ConfigError, InitError},
};

pub(crate) fn load_config(args: &Args) -> Result<Config, InitError> {
    let mut config_toml = load_config_from_path(&args.config)?;

    let overrides = args
        .overrides
        .iter()
        .map(|o| parse_override(o))
        .collect::<Result<Vec<_>, ConfigError>>()?;

    let table = config_toml
        .as_table_mut()
        .ok_or(ConfigError::TraverseNonTableAt {
            key: "<root>".to_owned(),
            path: String::new(),
        })?;

    for (path, val) in overrides {
        apply_override(&path, val, table)?;
    }

    let mut config = config_toml.try_into::<Config>()?;
    apply_args(&mut config, args);
    Ok(config)
}

/// Dedicated flags win over both the file and `-o` overrides.
fn apply_args(config: &mut Config, args: &Args) {
    if let Some(datadir) = &args.datadir {
        config.node.datadir = datadir.clone();
    }
    if let Some(chain) = &args.chain {
        config.node.chain = chain.clone();
    }
    if args.testnet {
        config.node.testnet = true;
    }
}

fn load_config_from_path(path: &Path) -> Result<Value, InitError> {
    let config_str = fs::read_to_string(path)?;
    Ok(toml::from_str(&config_str)?)
}

/// Splits `a.b.c=value` into its key path and value.
///
/// The value is read as a TOML scalar when it parses as one, otherwise it is
/// taken as a plain string.
fn parse_override(raw: &str) -> Result<(Vec<String>, Value), ConfigError> {
    let (path, val) = raw
        .split_once('=')
        .ok_or_else(|| ConfigError::InvalidOverride(raw.to_owned()))?;

    let path: Vec<String> = path.trim().split('.').map(str::to_owned).collect();
    if path.iter().any(String::is_empty) {
        return Err(ConfigError::InvalidOverride(raw.to_owned()));
    }

    let val = val.trim();
    let value = toml::from_str::<Table>(&format!("v = {val}"))
        .ok()
        .and_then(|mut t| t.remove("v"))
        .unwrap_or_else(|| Value::String(val.to_owned()));

    Ok((path, value))
}

fn apply_override(path: &[String], val: Value, table: &mut Table) -> Result<(), ConfigError> {
    let Some((last, parents)) = path.split_last() else {
        return Err(ConfigError::InvalidOverride(String::new()));
    };

    let mut cur = table;
    for (i, key) in parents.iter().enumerate() {
        let entry = cur
            .entry(key.clone())
            .or_insert_with(|| Value::Table(Table::new()));
        cur = entry
            .as_table_mut()
            .ok_or_else(|| ConfigError::TraverseNonTableAt {
                key: key.clone(),
                path: path[..=i].join("."),
            })?;
    }

    cur.insert(last.clone(), val);
    Ok(())
}
