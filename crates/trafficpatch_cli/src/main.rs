//! trafficpatch - Traffic Server container entrypoint.
//!
//! Resolves `*.tpl` configuration templates from the environment, flattens
//! `records.config.yaml` into `records.config`, then replaces itself with
//! traffic_server, forwarding every argument.
//!
//! Exit codes:
//! - 1: Preparation failed, interrupted, or traffic_server could not be executed
//!
//! On success the process becomes traffic_server and its exit code applies.

use std::process::ExitCode;

use tracing::{debug, info};

use trafficpatch_templates::ProcessEnv;

mod config;
mod handoff;
mod logging;
mod prepare;
mod signals;

use config::WrapperConfig;
use signals::{Interruption, Signals};

/// CI-friendly exit codes
pub struct ExitCodes;

impl ExitCodes {
    pub const FAILURE: u8 = 1;
}

#[tokio::main]
async fn main() -> ExitCode {
    let mut signals = match Signals::install() {
        Ok(signals) => signals,
        Err(e) => {
            eprintln!("Error: cannot install signal handlers: {}", e);
            return ExitCode::from(ExitCodes::FAILURE);
        }
    };

    logging::init();

    let config = match WrapperConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::from(ExitCodes::FAILURE);
        }
    };
    debug!("Configuration: {:?}", config);

    let pass_config = config.clone();
    let passes = tokio::task::spawn_blocking(move || prepare::prepare(&pass_config, &ProcessEnv));

    tokio::select! {
        joined = passes => match joined {
            Ok(Ok(report)) => {
                info!(
                    "Configuration ready: {} template(s) resolved, records {}",
                    report.resolved.len(),
                    report
                        .records
                        .map_or_else(|| "skipped".to_string(), |n| format!("{n} line(s)")),
                );
            }
            Ok(Err(e)) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(ExitCodes::FAILURE);
            }
            Err(e) => {
                eprintln!("Error: preparation aborted: {}", e);
                return ExitCode::from(ExitCodes::FAILURE);
            }
        },
        interruption = signals.recv() => {
            if interruption == Interruption::Interrupt {
                eprintln!("ok, bye");
            }
            // The blocking pass cannot be cancelled; leave without waiting for it.
            std::process::exit(ExitCodes::FAILURE.into());
        }
    }

    let err = handoff::exec(&config, std::env::args_os().skip(1));
    eprintln!("Error: {}", err);
    ExitCode::from(ExitCodes::FAILURE)
}
