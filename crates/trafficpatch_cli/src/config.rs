//! Wrapper configuration.
//!
//! Every command-line argument belongs to `traffic_server`, so the wrapper is
//! configured through environment variables only.

use std::path::PathBuf;

use clap::Parser;

pub const DEFAULT_ETC_DIR: &str = "/etc/trafficserver";
pub const DEFAULT_TRAFFIC_SERVER: &str = "/usr/bin/traffic_server";
pub const DEFAULT_ARGV0: &str = "traffic_server";

/// trafficpatch - Traffic Server startup wrapper
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "trafficpatch")]
#[command(version, about = "Resolves configuration templates, flattens records.config.yaml, then execs traffic_server")]
pub struct WrapperConfig {
    /// Configuration root scanned for templates and holding records.config(.yaml)
    #[arg(long, env = "TRAFFICPATCH_ETC_DIR", default_value = DEFAULT_ETC_DIR)]
    pub etc_dir: PathBuf,

    /// Executable that replaces the wrapper once configuration is ready
    #[arg(long, env = "TRAFFICPATCH_TRAFFIC_SERVER", default_value = DEFAULT_TRAFFIC_SERVER)]
    pub traffic_server: PathBuf,

    /// argv[0] given to the executable
    #[arg(long, env = "TRAFFICPATCH_ARGV0", default_value = DEFAULT_ARGV0)]
    pub argv0: String,
}

impl WrapperConfig {
    /// Read the configuration from the process environment, ignoring argv.
    pub fn from_env() -> Result<Self, clap::Error> {
        Self::try_parse_from(["trafficpatch"])
    }
}
