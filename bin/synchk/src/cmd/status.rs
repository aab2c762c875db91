use serde::Serialize;
use synchk_config::Config;
use synchk_params::ActivationPoint;

use crate::{args::StatusArgs, context::build_resolver, errors::InitError};

#[derive(Debug, Serialize)]
pub(crate) struct StatusReport {
    pub chain: String,
    pub testnet: bool,
    pub height: i64,
    pub timestamp: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<ParamsReport>,
    /// Why the chain has no params, if it has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unavailable: Option<String>,
    pub active: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct ParamsReport {
    pub active_at: i64,
    /// `height` or `timestamp`
    pub activation_kind: &'static str,
    pub master_pubkey: String,
}

pub(crate) fn status(config: &Config, args: &StatusArgs) -> Result<StatusReport, InitError> {
    let resolver = build_resolver(config)?;

    let (params, unavailable) = match resolver.resolve_current() {
        Ok(params) => {
            let activation_kind = match params.activation_point() {
                ActivationPoint::Height(_) => "height",
                ActivationPoint::Timestamp(_) => "timestamp",
            };
            let report = ParamsReport {
                active_at: params.active_at,
                activation_kind,
                master_pubkey: params.master_pubkey,
            };
            (Some(report), None)
        }
        Err(err) => (None, Some(err.to_string())),
    };

    Ok(StatusReport {
        chain: config.node.chain.clone(),
        testnet: config.node.testnet,
        height: args.height,
        timestamp: args.timestamp,
        params,
        unavailable,
        active: resolver.is_active(args.height, args.timestamp),
    })
}
