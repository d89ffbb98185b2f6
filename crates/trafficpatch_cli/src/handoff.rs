//! Replacing the wrapper with traffic_server.

use std::ffi::OsString;
use std::os::unix::process::CommandExt;
use std::path::PathBuf;
use std::process::Command;

use thiserror::Error;
use tracing::info;

use crate::config::WrapperConfig;

#[derive(Error, Debug)]
#[error("Failed to execute {path:?}: {source}")]
pub struct HandoffError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// The command that will replace this process, with `args` forwarded as is.
pub fn command<I>(config: &WrapperConfig, args: I) -> Command
where
    I: IntoIterator<Item = OsString>,
{
    let mut command = Command::new(&config.traffic_server);
    command.arg0(&config.argv0).args(args);
    command
}

/// Replace the current process image. Only returns if the exec itself failed.
pub fn exec<I>(config: &WrapperConfig, args: I) -> HandoffError
where
    I: IntoIterator<Item = OsString>,
{
    info!("Handing off to {:?}", config.traffic_server);

    let source = command(config, args).exec();
    HandoffError {
        path: config.traffic_server.clone(),
        source,
    }
}
