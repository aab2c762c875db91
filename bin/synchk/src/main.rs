//! Sync checkpoint operator tool.

use anyhow::{Context, Result, anyhow};
use argh::from_env;
use serde::Serialize;
use synchk_common::logging;
use synchk_config::Config;
use tracing::info;

use crate::args::{Args, Command};

mod args;
mod cmd;
mod config;
mod context;
mod errors;

fn main() -> Result<()> {
    let args: Args = from_env();

    let config =
        config::load_config(&args).map_err(|e| anyhow!("Failed to load configuration: {e}"))?;

    init_logging(&config)?;

    match &args.cmd {
        Command::Status(status_args) => print_json(&cmd::status(&config, status_args)?)?,
        Command::Open(open_args) => print_json(&cmd::open(&config, open_args)?)?,
        Command::Show(_) => print_json(&cmd::show(&config)?)?,
        Command::Reset(_) => cmd::reset(&config)?,
    }

    info!("Exiting synchk");
    Ok(())
}

fn print_json<T: Serialize>(report: &T) -> Result<()> {
    let out = serde_json::to_string_pretty(report).context("serializing report")?;
    println!("{out}");
    Ok(())
}

fn init_logging(config: &Config) -> Result<()> {
    logging::init_logging_from_config(logging::LoggingInitConfig {
        service_base_name: "synchk",
        service_label: config.logging.service_label.as_deref(),
        log_dir: config.logging.log_dir.as_deref(),
        log_file_prefix: config.logging.log_file_prefix.as_deref(),
        json_format: config.logging.json_format,
        default_log_prefix: "synchk",
    })
    .context("initializing logging")
}
